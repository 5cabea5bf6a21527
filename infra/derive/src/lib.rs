#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Deep Ocean workspace.
//!
//! * `#[ocean_error]` turns a plain enum into a `thiserror` error with context support.
//! * `#[main]` (re-exported as `#[ocean_runtime::main]`) bootstraps the tuned Tokio runtime.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ocean-derive.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime from a named profile.
///
/// Turns an `async fn main` returning a `Result` into a plain `fn main` that builds
/// the runtime and blocks on the body.
///
/// # Arguments
///
/// * `server` - Tuned for the HTTP server (more blocking threads, larger queues).
/// * `lean` - Small footprint for short-lived tools such as the static exporter.
/// * `default` - Worker threads detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[ocean_runtime::main(server)]
/// async fn main() -> anyhow::Result<()> {
/// # Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Defines an error enum wired for the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant wrapping a source.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. `context` fields are typed `Option<Cow<'static, str>>`.
/// 3. A variant wrapping a source error also carries a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use ocean_derive::ocean_error;
/// use std::borrow::Cow;
///
/// #[ocean_error]
/// pub enum ExportError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn write(path: &Path) -> Result<(), ExportError> {
///     std::fs::write(path, "").context("Writing index.html")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn ocean_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
