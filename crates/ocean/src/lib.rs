//! Facade crate for the Deep Ocean site.
//! Re-exports the domain, kernel, UI and page crates so the apps depend on one name.
//! Keep this crate thin: it composes other crates and implements nothing itself.
//!
//! ## Usage
//! - Add `ocean`, with the `server` feature when serving over HTTP.
//! - Build a [`Site`] from the loaded configuration and hand it to the server
//!   state or the exporter.

pub use ocean_domain as domain;
pub use ocean_kernel as kernel;
pub use ocean_pages as pages;
pub use ocean_pages::Site;
pub use ocean_ui as ui;

#[cfg(feature = "server")]
pub mod server {
    pub use ocean_kernel::server::health;
    pub use ocean_kernel::server::router::system_router;
    pub use ocean_kernel::server::state::{SiteState, SiteStateBuilder};
}
