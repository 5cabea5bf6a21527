mod button;
mod card;
mod download;
mod footer;
mod hero;
mod navbar;
mod resources;
mod section;
mod stat;
mod team;
mod video;

pub use button::Button;
pub use card::{Card, FeatureCard};
pub use download::{DEFAULT_DOWNLOADS, DownloadCard, DownloadSection, QuickDownload};
pub use footer::Footer;
pub use hero::{Hero, HeroAction, HeroImageBox, PageHeader};
pub use navbar::Navbar;
pub use resources::{QuickLinks, ResourceCard, Resources};
pub use section::{Section, SectionContainer};
pub use stat::{StatCard, StatsGrid};
pub use team::{TeamCard, TeamGrid};
pub use video::{VideoHero, VideoShowcase};
