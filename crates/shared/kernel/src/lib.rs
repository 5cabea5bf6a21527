//! Kernel utilities shared by the server and the exporter.
//! Keep this crate lightweight: configuration, logging bootstrap, the page-rendering
//! seam and (behind `server`) the shared axum state and system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use ocean_kernel::config::load_site_config;
//!
//! let cfg = load_site_config(None::<&str>).unwrap();
//! assert_eq!(cfg.server.port, 4583);
//! ```
pub mod config;
pub mod logging;
pub mod render;
#[cfg(feature = "server")]
pub mod server;

pub use ocean_domain as domain;
