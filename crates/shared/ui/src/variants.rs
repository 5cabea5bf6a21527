use dioxus::prelude::{EventHandler, MouseEvent};
use ocean_domain::content::is_external_url;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Outline => "btn-outline",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

/// The `type` attribute of a rendered `<button>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeroVariant {
    Default,
    #[default]
    Centered,
    /// Image beside the text. Falls back to the centered layout without an image.
    Split,
}

impl HeroVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Default => "hero-default",
            Self::Centered => "hero-centered",
            Self::Split => "hero-split",
        }
    }
}

/// Vertical size of a hero banner, also used for decorative image boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HeroSize {
    Sm,
    Md,
    #[default]
    Lg,
}

impl HeroSize {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Column count of a card grid on wide screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GridColumns {
    Two,
    #[default]
    Three,
    Four,
}

impl GridColumns {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Two => "grid-cols-2",
            Self::Three => "grid-cols-3",
            Self::Four => "grid-cols-4",
        }
    }
}

/// What a [`Button`](crate::components::Button) does when activated.
///
/// The variant alone decides the rendered element: a `Link` always becomes an
/// anchor and a `Press` always becomes a `<button>`.
#[derive(Clone, PartialEq)]
pub enum ButtonAction {
    Link { href: String, external: bool },
    Press { on_click: Option<EventHandler<MouseEvent>>, kind: ButtonType, disabled: bool },
}

impl ButtonAction {
    /// A link that stays on the site.
    #[must_use]
    pub fn link(href: impl Into<String>) -> Self {
        Self::Link { href: href.into(), external: false }
    }

    /// A link opened in a new tab.
    #[must_use]
    pub fn external(href: impl Into<String>) -> Self {
        Self::Link { href: href.into(), external: true }
    }

    /// A link classified by its URL: anything not starting with `/` is external.
    #[must_use]
    pub fn for_url(url: impl Into<String>) -> Self {
        let href = url.into();
        let external = is_external_url(&href);
        Self::Link { href, external }
    }

    #[must_use]
    pub const fn press(kind: ButtonType) -> Self {
        Self::Press { on_click: None, kind, disabled: false }
    }

    /// Attaches a click handler. No effect on links.
    #[must_use]
    pub fn on_click(self, handler: EventHandler<MouseEvent>) -> Self {
        match self {
            Self::Press { kind, disabled, .. } => Self::Press { on_click: Some(handler), kind, disabled },
            link @ Self::Link { .. } => link,
        }
    }

    /// Marks a press action disabled. No effect on links.
    #[must_use]
    pub fn disabled(self) -> Self {
        match self {
            Self::Press { on_click, kind, .. } => Self::Press { on_click, kind, disabled: true },
            link @ Self::Link { .. } => link,
        }
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Press { disabled: true, .. })
    }
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link { href, external } => {
                f.debug_struct("Link").field("href", href).field("external", external).finish()
            },
            Self::Press { on_click, kind, disabled } => f
                .debug_struct("Press")
                .field("on_click", &on_click.is_some())
                .field("kind", kind)
                .field("disabled", disabled)
                .finish(),
        }
    }
}

/// Mobile navigation panel state. The only mutable UI state on the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub const fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub const fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Value of the navbar `data-menu` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::Open;
        menu.close();
        menu.close();
        assert_eq!(menu.as_str(), "closed");
    }

    #[test]
    fn url_classification_follows_leading_slash() {
        assert_eq!(ButtonAction::for_url("/#download"), ButtonAction::link("/#download"));
        assert_eq!(
            ButtonAction::for_url("https://www.spaceappschallenge.org"),
            ButtonAction::external("https://www.spaceappschallenge.org")
        );
    }

    #[test]
    fn disabling_only_applies_to_press_actions() {
        assert!(ButtonAction::press(ButtonType::Submit).disabled().is_disabled());
        assert!(!ButtonAction::link("/world").disabled().is_disabled());
    }
}
