//! Theme catalog — six fixed visual variants applied at render time.
//!
//! Themes are purely cosmetic: each variant carries style tokens and an icon
//! glyph, nothing else. Selection is session state, independent of the
//! generated portfolio.

use serde::{Deserialize, Serialize};

/// One of the six fixed visual styles. Defaults to [`Theme::Neon`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neon,
    Glass,
    Cyber,
    Hologram,
    Quantum,
    Stellar,
}

/// Style tokens and display metadata for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub id: &'static str,
    pub name: &'static str,
    /// Body background classes.
    pub background: &'static str,
    /// Accent text classes, applied to the profession line and date spans.
    pub accent: &'static str,
    /// Button background classes. The exported document renders no buttons;
    /// this token is for surfaces that do.
    #[allow(dead_code)]
    pub button: &'static str,
    pub icon: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Neon,
        Theme::Glass,
        Theme::Cyber,
        Theme::Hologram,
        Theme::Quantum,
        Theme::Stellar,
    ];

    /// Looks a theme up by its stable id, e.g. from a CLI flag.
    pub fn from_id(id: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.tokens().id == id)
    }

    pub fn tokens(&self) -> ThemeTokens {
        match self {
            Theme::Neon => ThemeTokens {
                id: "neon",
                name: "Neon Pulse",
                background: "bg-gradient-to-br from-purple-900 via-blue-900 to-indigo-900",
                accent: "text-cyan-400",
                button: "bg-gradient-to-r from-cyan-500 to-purple-500",
                icon: "⚡",
            },
            Theme::Glass => ThemeTokens {
                id: "glass",
                name: "Glass Morphism",
                background: "bg-gradient-to-br from-slate-800 via-purple-800 to-slate-900",
                accent: "text-pink-400",
                button: "bg-gradient-to-r from-pink-500 to-violet-500",
                icon: "🫧",
            },
            Theme::Cyber => ThemeTokens {
                id: "cyber",
                name: "Cyber Grid",
                background: "bg-gradient-to-br from-green-900 via-black to-gray-900",
                accent: "text-green-400",
                button: "bg-gradient-to-r from-green-500 to-emerald-500",
                icon: "🌐",
            },
            Theme::Hologram => ThemeTokens {
                id: "hologram",
                name: "Holographic",
                background: "bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900",
                accent: "text-yellow-400",
                button: "bg-gradient-to-r from-yellow-500 to-orange-500",
                icon: "🌈",
            },
            Theme::Quantum => ThemeTokens {
                id: "quantum",
                name: "Quantum Flux",
                background: "bg-gradient-to-br from-slate-900 via-purple-900 to-blue-900",
                accent: "text-blue-400",
                button: "bg-gradient-to-r from-blue-500 to-cyan-500",
                icon: "🌀",
            },
            Theme::Stellar => ThemeTokens {
                id: "stellar",
                name: "Stellar",
                background: "bg-gradient-to-br from-gray-900 via-purple-900 to-black",
                accent: "text-purple-400",
                button: "bg-gradient-to-r from-purple-500 to-pink-500",
                icon: "⭐",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_theme_is_neon() {
        assert_eq!(Theme::default(), Theme::Neon);
        assert_eq!(Theme::ALL[0], Theme::Neon);
    }

    #[test]
    fn test_all_six_variants_have_distinct_tokens() {
        let ids: HashSet<&str> = Theme::ALL.iter().map(|t| t.tokens().id).collect();
        assert_eq!(ids.len(), 6);
        let backgrounds: HashSet<&str> =
            Theme::ALL.iter().map(|t| t.tokens().background).collect();
        assert_eq!(backgrounds.len(), 6);
        let buttons: HashSet<&str> = Theme::ALL.iter().map(|t| t.tokens().button).collect();
        assert_eq!(buttons.len(), 6);
    }

    #[test]
    fn test_from_id_roundtrip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.tokens().id), Some(theme));
        }
        assert_eq!(Theme::from_id("vaporwave"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Theme::Glass).unwrap();
        assert_eq!(json, r#""glass""#);
        let recovered: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, Theme::Glass);
    }
}
