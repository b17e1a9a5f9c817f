//! UI locale preference.

use serde::{Deserialize, Serialize};

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English. The default for every locale tag that is not Japanese.
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Locale {
    /// Lowercase identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Parse a saved preference string. Unknown values are `None` so a
    /// corrupted preference falls back to tag derivation.
    pub fn parse(s: &str) -> Option<Locale> {
        match s {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    /// Derive the default locale from a runtime locale tag.
    ///
    /// Any tag beginning with the two-letter code for Japanese (`ja-JP`,
    /// `ja_JP.UTF-8`, plain `ja`) maps to Japanese; everything else,
    /// including the absent case, maps to English.
    pub fn from_tag(tag: Option<&str>) -> Locale {
        match tag {
            Some(t) if is_japanese_tag(t) => Locale::Ja,
            _ => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `ja` followed by nothing or a subtag separator (`ja-JP`, `ja_JP.UTF-8`).
fn is_japanese_tag(tag: &str) -> bool {
    let rest = match tag.strip_prefix("ja") {
        Some(rest) => rest,
        None => return false,
    };
    rest.is_empty() || rest.starts_with('-') || rest.starts_with('_')
}
