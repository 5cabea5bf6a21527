//! Deep Ocean presentational layer.
//!
//! Components are Dioxus functions rendered to HTML on the server with
//! `dioxus-ssr`. They never carry colors: every class they emit is styled by
//! [`style::SITE_CSS`], whose rules only read the theme's CSS variables.
// Props structs generated by `#[component]` do not derive Debug.
#![allow(missing_debug_implementations)]

pub mod components;
mod document;
mod render;
pub mod style;
mod variants;

pub use document::{Document, DocumentMeta, MENU_SCRIPT};
pub use render::{render, render_document};
pub use variants::{
    ButtonAction, ButtonSize, ButtonType, ButtonVariant, GridColumns, HeroSize, HeroVariant,
    MenuState,
};

/// Joins the non-empty class names with single spaces.
pub(crate) fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::class_list;

    #[test]
    fn class_list_skips_empty_parts() {
        assert_eq!(class_list(["btn", "", "btn-lg", ""]), "btn btn-lg");
        assert_eq!(class_list([]), "");
    }
}
