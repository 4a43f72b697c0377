//! # Design
//!
//! - Centralize the widget-facing text strings behind a per-locale JSON
//!   bundle loaded once at startup.
//! - Unsupported locales fall back to the default locale with identity
//!   translations.
//! - Translation parse failures degrade to empty bundles and log once at
//!   load time.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::error;

/// Locale codes with a shipped bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
}

impl LocaleCode {
    /// Lowercase language tag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }
}

/// Locale used when the host does not select one.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

#[derive(Debug, Default)]
struct TranslationBundle {
    messages: HashMap<String, String>,
}

impl TranslationBundle {
    fn lookup(&self, message: &str) -> Option<&str> {
        self.messages.get(message).map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct TranslationFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Translate `message` for `locale`, falling back to the message itself.
#[must_use]
pub fn localize(locale: LocaleCode, message: &str) -> String {
    translations_for(locale)
        .lookup(message)
        .map_or_else(|| message.to_string(), ToString::to_string)
}

/// Force the bundle for `locale` to load, reporting its size.
///
/// Hosts call this once at startup so parse failures surface immediately
/// instead of on the first render.
#[must_use]
pub fn preload(locale: LocaleCode) -> usize {
    translations_for(locale).messages.len()
}

fn translations_for(locale: LocaleCode) -> &'static TranslationBundle {
    static EN_TRANSLATIONS: OnceLock<TranslationBundle> = OnceLock::new();
    match locale {
        LocaleCode::En => EN_TRANSLATIONS.get_or_init(|| load_translations(LocaleCode::En)),
    }
}

fn load_translations(locale: LocaleCode) -> TranslationBundle {
    let raw = match locale {
        LocaleCode::En => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/en.json")),
    };
    serde_json::from_str::<TranslationFile>(raw)
        .map(|file| TranslationBundle {
            messages: file.messages,
        })
        .unwrap_or_else(|err| {
            error!(
                error = %err,
                locale = locale.as_str(),
                "failed to parse widget i18n bundle"
            );
            TranslationBundle::default()
        })
}
