//! One component per route, each owning its copy as `const` content arrays.

mod common;
pub mod climate;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod seas;
pub mod team;
pub mod world;

pub use climate::ClimatePage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use seas::SeasPage;
pub use team::TeamPage;
pub use world::WorldPage;
