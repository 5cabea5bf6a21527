use crate::render::PageRenderer;
use axum::extract::FromRef;
use ocean_domain::config::SiteConfig;
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[ocean_derive::ocean_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub struct SiteStateInner {
    pub config: SiteConfig,
    pub pages: Arc<dyn PageRenderer>,
}

impl fmt::Debug for SiteStateInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteStateInner")
            .field("config", &self.config)
            .field("pages", &"dyn PageRenderer")
            .finish()
    }
}

/// Shared axum state: configuration plus the page renderer.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<SiteState> for SiteConfig {
    fn from_ref(state: &SiteState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    pages: Option<Arc<dyn PageRenderer>>,
}

impl fmt::Debug for SiteStateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteStateBuilder")
            .field("config", &self.config)
            .field("pages", &self.pages.is_some())
            .finish()
    }
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn pages(mut self, pages: impl PageRenderer) -> Self {
        self.pages = Some(Arc::new(pages));
        self
    }

    /// # Errors
    /// Returns [`SiteStateError::Validation`] when no page renderer was provided.
    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let pages = self.pages.ok_or_else(|| SiteStateError::Validation {
            message: "page renderer not provided".into(),
            context: None,
        })?;
        let config = self.config.unwrap_or_default();

        Ok(SiteState { inner: Arc::new(SiteStateInner { config, pages }) })
    }
}
