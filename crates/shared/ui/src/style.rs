//! Theme delivery.
//!
//! The theme becomes a `:root` block of CSS custom properties. The static
//! component stylesheet only ever reads those properties through `var(--…)`,
//! so overriding one token restyles every class that references it.

use ocean_domain::theme::Theme;

/// Component rules. Contains no color literals.
pub const SITE_CSS: &str = include_str!("../assets/site.css");

/// The theme tokens as a `:root { --name: value; }` block.
#[must_use]
pub fn theme_css(theme: &Theme) -> String {
    let declarations: String =
        theme.tokens().into_iter().map(|(name, value)| format!("  {name}: {value};\n")).collect();
    format!(":root {{\n{declarations}}}\n")
}

/// Token block followed by the component rules; inlined into every page.
#[must_use]
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = theme_css(theme);
    css.push_str(SITE_CSS);
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn referenced_vars(css: &str) -> Vec<&str> {
        css.match_indices("var(")
            .filter_map(|(at, _)| {
                let rest = &css[at + 4..];
                rest.find(')').map(|end| rest[..end].trim())
            })
            .collect()
    }

    #[test]
    fn token_block_lists_every_token() {
        let theme = Theme::default();
        let css = theme_css(&theme);

        assert!(css.starts_with(":root {"));
        for (name, value) in theme.tokens() {
            assert!(css.contains(&format!("{name}: {value};")), "{name} missing");
        }
    }

    #[test]
    fn changing_a_palette_token_changes_only_its_declaration() {
        let mut theme = Theme::default();
        let before = theme_css(&theme);
        theme.palette.non_photo_blue = "#7fd1dc".to_owned();
        let after = theme_css(&theme);

        assert!(after.contains("--non-photo-blue: #7fd1dc;"));
        assert!(!after.contains("#85c6cf;"));
        // Semantic tokens keep pointing at the palette variable.
        assert!(after.contains("--text-accent: var(--non-photo-blue);"));
        assert_eq!(before.lines().count(), after.lines().count());
    }

    #[test]
    fn component_rules_only_read_known_tokens() {
        let theme = Theme::default();
        let vars = referenced_vars(SITE_CSS);

        assert!(!vars.is_empty());
        for var in vars {
            assert!(theme.token(var).is_some(), "site.css reads unknown token {var}");
        }
    }

    #[test]
    fn component_rules_hold_no_color_literals() {
        assert!(!SITE_CSS.contains('#'), "hex color in site.css");
        assert!(!SITE_CSS.contains("rgb"), "rgb color in site.css");
        assert!(!SITE_CSS.contains("hsl"), "hsl color in site.css");
    }

    #[test]
    fn accent_classes_follow_the_accent_token() {
        assert!(SITE_CSS.contains(".text-accent {\n  color: var(--text-accent);"));
        assert!(SITE_CSS.contains("background: var(--btn-primary-bg);"));
    }
}
