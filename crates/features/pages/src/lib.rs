//! Deep Ocean pages.
//!
//! Each route is a Dioxus component composed from `ocean-ui` parts, with its
//! copy declared as `const` content arrays. [`Site`] wraps them in the shared
//! document shell and implements the kernel's [`PageRenderer`] so the server
//! and the exporter can serve or write them.
//!
//! [`PageRenderer`]: ocean_kernel::render::PageRenderer
#![allow(missing_debug_implementations)]

pub mod pages;
mod site;

pub use site::{FOOTER_LINKS, Site};
