//! Literal content records.
//!
//! Pages declare their copy as `const` arrays of these records. Everything is
//! `'static` and `Copy`, and the array order is the display order.

/// A member of the project team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub icon: &'static str,
    pub responsibilities: &'static [&'static str],
}

/// A headline figure such as `71%` "Of Earth's Surface".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub sublabel: Option<&'static str>,
    pub icon: Option<&'static str>,
}

impl Stat {
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label, sublabel: None, icon: None }
    }

    #[must_use]
    pub const fn with_sublabel(mut self, sublabel: &'static str) -> Self {
        self.sublabel = Some(sublabel);
        self
    }

    #[must_use]
    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A downloadable build for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOption {
    pub platform: &'static str,
    pub icon: &'static str,
    pub version: Option<&'static str>,
    pub size: Option<&'static str>,
    pub url: Option<&'static str>,
    pub coming_soon: bool,
}

impl DownloadOption {
    /// A platform announced without a build yet.
    #[must_use]
    pub const fn coming_soon(platform: &'static str, icon: &'static str) -> Self {
        Self { platform, icon, version: None, size: None, url: None, coming_soon: true }
    }

    /// The link target when the build can actually be downloaded.
    #[must_use]
    pub const fn available_url(&self) -> Option<&'static str> {
        if self.coming_soon { None } else { self.url }
    }
}

/// What a resource link points at; decides the fallback icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Github,
    External,
    Document,
    Video,
    #[default]
    Other,
}

impl ResourceKind {
    #[must_use]
    pub const fn default_icon(self) -> &'static str {
        match self {
            Self::Github | Self::Other => "🔗",
            Self::External => "🌐",
            Self::Document => "📄",
            Self::Video => "🎥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: Option<&'static str>,
    pub kind: ResourceKind,
}

impl ResourceLink {
    /// Site-relative URLs start with `/`; everything else leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        is_external_url(self.url)
    }

    #[must_use]
    pub const fn display_icon(&self) -> &'static str {
        match self.icon {
            Some(icon) => icon,
            None => self.kind.default_icon(),
        }
    }
}

/// A compact link in a quick-links row or the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

/// A feature card: an image when present, the icon otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<Image>,
}

/// A long-form block on the seas and climate pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub icon: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub impact: Option<&'static str>,
}

/// A checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// In-game model next to the real photograph it recreates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub model_image: &'static str,
    pub real_image: &'static str,
    pub title: &'static str,
    pub common_name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: MediaKind,
}

/// `true` for any URL that does not start with `/`.
#[must_use]
pub fn is_external_url(url: &str) -> bool {
    !url.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_detection_uses_leading_slash() {
        assert!(!is_external_url("/world"));
        assert!(!is_external_url("/#download"));
        assert!(is_external_url("https://github.com/chifrijo-cosmico"));
        assert!(is_external_url("mailto:team@example.org"));
    }

    #[test]
    fn resource_icon_falls_back_to_kind() {
        let link = ResourceLink {
            title: "Docs",
            description: "",
            url: "/docs",
            icon: None,
            kind: ResourceKind::Document,
        };
        assert_eq!(link.display_icon(), "📄");
        assert_eq!(ResourceLink { icon: Some("⭐"), ..link }.display_icon(), "⭐");
        assert_eq!(ResourceKind::default().default_icon(), "🔗");
    }

    #[test]
    fn coming_soon_builds_have_no_download_url() {
        let quest = DownloadOption::coming_soon("Meta Quest 2/3", "🥽");
        assert_eq!(quest.available_url(), None);

        let windows = DownloadOption { url: Some("/builds/ocean.zip"), coming_soon: false, ..quest };
        assert_eq!(windows.available_url(), Some("/builds/ocean.zip"));

        let stale = DownloadOption { url: Some("/builds/ocean.zip"), ..quest };
        assert_eq!(stale.available_url(), None);
    }

    #[test]
    fn stat_builders_are_const() {
        const STAT: Stat = Stat::new("+1.1°C", "Ocean Temperature Rise").with_sublabel("Since pre-industrial times");
        assert_eq!(STAT.sublabel, Some("Since pre-industrial times"));
        assert_eq!(STAT.icon, None);
    }
}
