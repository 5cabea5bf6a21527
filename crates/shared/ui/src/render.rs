use dioxus::prelude::Element;

/// Renders a fragment to an HTML string.
#[must_use]
pub fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

/// Renders a full page, normally a [`Document`](crate::Document), inside the
/// doctype and the `<html lang>` root.
#[must_use]
pub fn render_document(lang: &str, document: Element) -> String {
    let body = render(document);
    let mut html = String::with_capacity(body.len() + lang.len() + 48);
    html.push_str("<!DOCTYPE html><html lang=\"");
    push_attr(&mut html, lang);
    html.push_str("\">");
    html.push_str(&body);
    html.push_str("</html>");
    html
}

fn push_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
