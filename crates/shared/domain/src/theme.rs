//! Design tokens for the ocean palette.
//!
//! Every value ends up as a CSS custom property (see [`Theme::tokens`]). Semantic
//! tokens default to `var(--palette-entry)` so overriding one palette color
//! re-colors everything built on it.

use serde::{Deserialize, Serialize};

/// Characters that would let a token value escape its declaration in a stylesheet.
const FORBIDDEN: [char; 5] = [';', '{', '}', '<', '>'];

/// The full token dictionary. Every field has a default, so a partial `[theme]`
/// table in the site configuration only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub palette: Palette,
    pub background: Backgrounds,
    pub text: TextColors,
    pub border: Borders,
    pub button: Buttons,
    pub gradients: Gradients,
    pub effects: Effects,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub rich_black: String,
    pub platinum: String,
    pub non_photo_blue: String,
    pub gunmetal: String,
    pub battleship_gray: String,
    pub non_photo_blue_hover: String,
    pub battleship_gray_hover: String,
    pub gunmetal_hover: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backgrounds {
    pub primary: String,
    pub secondary: String,
    pub card: String,
    pub elevated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    pub default: String,
    pub subtle: String,
    pub medium: String,
    pub strong: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buttons {
    pub primary: SolidButton,
    pub secondary: SolidButton,
    pub outline: OutlineButton,
}

/// Colors of a filled button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolidButton {
    pub background: String,
    pub hover: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineButton {
    pub border: String,
    pub hover_border: String,
    pub hover_background: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradients {
    pub background: String,
    pub text: String,
    pub card: String,
    pub hero: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effects {
    pub shadow: Shadows,
    pub glow: Glows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glows {
    pub blue: String,
    pub subtle: String,
}

impl Theme {
    /// Flattens the dictionary into `(css variable, value)` pairs.
    ///
    /// Palette entries come first so that semantic tokens referencing them
    /// read naturally in the generated stylesheet.
    #[must_use]
    pub fn tokens(&self) -> Vec<(&'static str, &str)> {
        let p = &self.palette;
        let b = &self.button;
        vec![
            ("--rich-black", p.rich_black.as_str()),
            ("--platinum", &p.platinum),
            ("--non-photo-blue", &p.non_photo_blue),
            ("--gunmetal", &p.gunmetal),
            ("--battleship-gray", &p.battleship_gray),
            ("--non-photo-blue-hover", &p.non_photo_blue_hover),
            ("--battleship-gray-hover", &p.battleship_gray_hover),
            ("--gunmetal-hover", &p.gunmetal_hover),
            ("--bg-primary", &self.background.primary),
            ("--bg-secondary", &self.background.secondary),
            ("--bg-card", &self.background.card),
            ("--bg-elevated", &self.background.elevated),
            ("--text-primary", &self.text.primary),
            ("--text-secondary", &self.text.secondary),
            ("--text-accent", &self.text.accent),
            ("--text-muted", &self.text.muted),
            ("--border-default", &self.border.default),
            ("--border-subtle", &self.border.subtle),
            ("--border-medium", &self.border.medium),
            ("--border-strong", &self.border.strong),
            ("--btn-primary-bg", &b.primary.background),
            ("--btn-primary-hover", &b.primary.hover),
            ("--btn-primary-text", &b.primary.text),
            ("--btn-secondary-bg", &b.secondary.background),
            ("--btn-secondary-hover", &b.secondary.hover),
            ("--btn-secondary-text", &b.secondary.text),
            ("--btn-outline-border", &b.outline.border),
            ("--btn-outline-hover-border", &b.outline.hover_border),
            ("--btn-outline-hover-bg", &b.outline.hover_background),
            ("--gradient-background", &self.gradients.background),
            ("--gradient-text", &self.gradients.text),
            ("--gradient-card", &self.gradients.card),
            ("--gradient-hero", &self.gradients.hero),
            ("--shadow-sm", &self.effects.shadow.sm),
            ("--shadow-md", &self.effects.shadow.md),
            ("--shadow-lg", &self.effects.shadow.lg),
            ("--shadow-xl", &self.effects.shadow.xl),
            ("--glow-blue", &self.effects.glow.blue),
            ("--glow-subtle", &self.effects.glow.subtle),
        ]
    }

    /// Looks a single token up by its CSS variable name.
    #[must_use]
    pub fn token(&self, name: &str) -> Option<&str> {
        self.tokens().into_iter().find_map(|(n, v)| (n == name).then_some(v))
    }

    /// First token whose value is empty or could break out of a CSS declaration.
    #[must_use]
    pub fn find_invalid_token(&self) -> Option<&'static str> {
        self.tokens()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty() || value.contains(FORBIDDEN))
            .map(|(name, _)| name)
    }
}

fn css_var(name: &str) -> String {
    format!("var(--{name})")
}

/// A palette entry at `percent` opacity.
fn tint(name: &str, percent: u8) -> String {
    format!("color-mix(in srgb, var(--{name}) {percent}%, transparent)")
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            rich_black: "#001117".to_owned(),
            platinum: "#e8f3f2".to_owned(),
            non_photo_blue: "#85c6cf".to_owned(),
            gunmetal: "#012d3a".to_owned(),
            battleship_gray: "#c5d0cd".to_owned(),
            non_photo_blue_hover: "#6ab3be".to_owned(),
            battleship_gray_hover: "#b0bfbb".to_owned(),
            gunmetal_hover: "#01374a".to_owned(),
        }
    }
}

impl Default for Backgrounds {
    fn default() -> Self {
        Self {
            primary: css_var("rich-black"),
            secondary: css_var("gunmetal"),
            card: css_var("gunmetal"),
            elevated: css_var("gunmetal-hover"),
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: css_var("platinum"),
            secondary: css_var("battleship-gray"),
            accent: css_var("non-photo-blue"),
            muted: "#939c96".to_owned(),
        }
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            default: css_var("non-photo-blue"),
            subtle: tint("non-photo-blue", 20),
            medium: tint("non-photo-blue", 30),
            strong: tint("non-photo-blue", 50),
        }
    }
}

impl Default for SolidButton {
    fn default() -> Self {
        Self {
            background: css_var("non-photo-blue"),
            hover: css_var("non-photo-blue-hover"),
            text: css_var("rich-black"),
        }
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self {
            primary: SolidButton::default(),
            secondary: SolidButton::secondary(),
            outline: OutlineButton::default(),
        }
    }
}

impl SolidButton {
    fn secondary() -> Self {
        Self {
            background: css_var("battleship-gray"),
            hover: css_var("battleship-gray-hover"),
            text: css_var("rich-black"),
        }
    }
}

impl Default for OutlineButton {
    fn default() -> Self {
        Self {
            border: css_var("non-photo-blue"),
            hover_border: css_var("platinum"),
            hover_background: css_var("gunmetal"),
        }
    }
}

impl Default for Gradients {
    fn default() -> Self {
        Self {
            background: "linear-gradient(180deg, var(--rich-black) 0%, var(--gunmetal) 50%, var(--rich-black) 100%)"
                .to_owned(),
            text: "linear-gradient(90deg, var(--non-photo-blue) 0%, var(--platinum) 100%)".to_owned(),
            card: "linear-gradient(135deg, var(--gunmetal) 0%, var(--rich-black) 50%, var(--gunmetal) 100%)"
                .to_owned(),
            hero: "linear-gradient(135deg, var(--gunmetal) 0%, var(--rich-black) 100%)".to_owned(),
        }
    }
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".to_owned(),
            md: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".to_owned(),
            lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1)".to_owned(),
            xl: "0 20px 25px -5px rgba(0, 0, 0, 0.1)".to_owned(),
        }
    }
}

impl Default for Glows {
    fn default() -> Self {
        Self {
            blue: format!("0 0 20px {}", tint("non-photo-blue", 30)),
            subtle: format!("0 0 10px {}", tint("non-photo-blue", 20)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_names_are_unique_css_variables() {
        let theme = Theme::default();
        let tokens = theme.tokens();
        let mut names: Vec<_> = tokens.iter().map(|(n, _)| *n).collect();
        assert!(names.iter().all(|n| n.starts_with("--")));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tokens.len());
    }

    #[test]
    fn semantic_tokens_follow_the_palette() {
        let theme = Theme::default();
        assert_eq!(theme.token("--bg-card"), Some("var(--gunmetal)"));
        assert_eq!(theme.token("--text-accent"), Some("var(--non-photo-blue)"));
        assert_eq!(theme.token("--btn-secondary-bg"), Some("var(--battleship-gray)"));
        assert_eq!(theme.token("--rich-black"), Some("#001117"));
        assert_eq!(theme.token("--nope"), None);
    }

    #[test]
    fn translucent_tokens_mix_the_palette_variable() {
        let theme = Theme::default();
        assert_eq!(
            theme.token("--border-subtle"),
            Some("color-mix(in srgb, var(--non-photo-blue) 20%, transparent)")
        );
        assert_eq!(
            theme.token("--glow-blue"),
            Some("0 0 20px color-mix(in srgb, var(--non-photo-blue) 30%, transparent)")
        );
        for (name, value) in theme.tokens() {
            assert!(!value.contains("133, 198, 207"), "{name} hard-codes the accent blue");
        }
    }

    #[test]
    fn secondary_button_uses_gray_tones() {
        let buttons = Buttons::default();
        assert_ne!(buttons.primary, buttons.secondary);
        assert_eq!(buttons.secondary.hover, "var(--battleship-gray-hover)");
    }

    #[test]
    fn default_theme_is_valid() {
        assert_eq!(Theme::default().find_invalid_token(), None);
    }

    #[test]
    fn injection_attempts_are_flagged() {
        let mut theme = Theme::default();
        theme.text.muted = "red; } body { display: none".to_owned();
        assert_eq!(theme.find_invalid_token(), Some("--text-muted"));

        let mut theme = Theme::default();
        theme.palette.gunmetal = "   ".to_owned();
        assert_eq!(theme.find_invalid_token(), Some("--gunmetal"));
    }
}
