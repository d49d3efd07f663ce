//! Lightweight JSON-backed translations with per-locale bundles.

use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Turkish.
    Tr,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in selector order.
    pub const fn all() -> [Self; 2] {
        [Self::Tr, Self::En]
    }

    /// Two-letter code; also the `Accept-Language` and `app-lang` value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }

    /// Human-friendly label for the selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tr => "Türkçe",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Missing keys degrade to the English string, then to the key itself.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| path.to_string())
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Tr => include_str!("../../i18n/tr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_path() {
        let bundle = TranslationBundle::new(LocaleCode::Tr);
        assert_eq!(bundle.text("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn generic_error_matches_expected_copy() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            bundle.text("genericError"),
            "Unexpected error occurred, please try again"
        );
        assert_eq!(bundle.text("signUp.passwordMismatch"), "Password mismatch");
    }

    #[test]
    fn bundles_share_key_set() {
        fn leaves(prefix: &str, value: &Value, out: &mut Vec<String>) {
            if let Some(map) = value.as_object() {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    leaves(&path, child, out);
                }
            } else {
                out.push(prefix.to_string());
            }
        }
        let mut en = Vec::new();
        leaves("", &TranslationBundle::new(LocaleCode::En).tree, &mut en);
        let mut tr = Vec::new();
        leaves("", &TranslationBundle::new(LocaleCode::Tr).tree, &mut tr);
        en.sort();
        tr.sort();
        assert!(!en.is_empty());
        assert_eq!(en, tr);
    }

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("tr-TR"), Some(LocaleCode::Tr));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de"), None);
    }
}
