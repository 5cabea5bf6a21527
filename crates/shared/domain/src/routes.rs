//! Site routes and in-page anchors.

use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// Every page of the site, declared in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    World,
    Seas,
    Climate,
    Team,
    Gallery,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::World => "/world",
            Self::Seas => "/seas",
            Self::Climate => "/climate",
            Self::Team => "/team",
            Self::Gallery => "/gallery",
        }
    }

    /// Label used by the navbar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::World => "World",
            Self::Seas => "Seas",
            Self::Climate => "Climate",
            Self::Team => "Team",
            Self::Gallery => "Gallery",
        }
    }

    /// Page headline, also used for the document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Deep Ocean",
            Self::World => "Explore Our Virtual World",
            Self::Seas => "The Vital Importance of Our Seas",
            Self::Climate => "Climate Change & Ocean Impact",
            Self::Team => "Meet Our Team",
            Self::Gallery => "Deep Ocean VR Gallery",
        }
    }

    /// One-sentence summary, rendered as the meta description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => {
                "Exploring the depths of our oceans using cutting-edge VR technology and NASA data"
            },
            Self::World => {
                "Immerse yourself in a meticulously crafted virtual ocean environment built using real NASA data and cutting-edge 3D technology."
            },
            Self::Seas => {
                "Our oceans cover more than 70% of Earth's surface and are the foundation of life on our planet."
            },
            Self::Climate => {
                "Climate change is dramatically altering our oceans, with consequences that ripple through every ecosystem on Earth."
            },
            Self::Team => {
                "A passionate group of developers, engineers, and innovators working together to bring ocean exploration to virtual reality"
            },
            Self::Gallery => {
                "Compare our virtual recreations with real-world photographs of the Pacific coast of Costa Rica"
            },
        }
    }

    /// Directory name used by the static export (`world/index.html`); empty for the root.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            other => other.into(),
        }
    }

    /// Resolves a request path. A single trailing slash is tolerated, the query
    /// string and fragment are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match trimmed {
            "/" | "" => Some(Self::Home),
            "/world" => Some(Self::World),
            "/seas" => Some(Self::Seas),
            "/climate" => Some(Self::Climate),
            "/team" => Some(Self::Team),
            "/gallery" => Some(Self::Gallery),
            _ => None,
        }
    }
}

/// Fragment targets on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Anchor {
    Download,
    Team,
    Explore,
    VirtualSpaces,
}

impl Anchor {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Team => "team",
            Self::Explore => "explore",
            Self::VirtualSpaces => "virtual-spaces",
        }
    }

    /// Absolute link to the anchor on the home page, usable from any route.
    #[must_use]
    pub const fn href(self) -> &'static str {
        match self {
            Self::Download => "/#download",
            Self::Team => "/#team",
            Self::Explore => "/#explore",
            Self::VirtualSpaces => "/#virtual-spaces",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn routes_iterate_in_navigation_order() {
        let labels: Vec<_> = Route::iter().map(Route::nav_label).collect();
        assert_eq!(labels, ["Home", "World", "Seas", "Climate", "Team", "Gallery"]);
        assert_eq!(Route::COUNT, 6);
    }

    #[test]
    fn every_path_resolves_back_to_its_route() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_tolerated() {
        assert_eq!(Route::from_path("/seas/"), Some(Route::Seas));
        assert_eq!(Route::from_path("/climate?ref=nav"), Some(Route::Climate));
        assert_eq!(Route::from_path("/#download"), Some(Route::Home));
        assert_eq!(Route::from_path("/seas//"), None);
        assert_eq!(Route::from_path("/oceans"), None);
        assert_eq!(Route::from_path("/World"), None);
    }

    #[test]
    fn slugs_map_to_export_directories() {
        assert_eq!(Route::Home.slug(), "");
        assert_eq!(Route::Gallery.slug(), "gallery");
        assert_eq!(Route::World.slug(), "world");
    }

    #[test]
    fn anchors_link_to_home_fragments() {
        for anchor in Anchor::iter() {
            assert_eq!(anchor.href(), format!("/#{}", anchor.id()));
        }
    }
}
