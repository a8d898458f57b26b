use serde_json::Value;
use std::collections::BTreeMap;

use crate::storage::DEFAULT_LOCALE;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "cn",
        name: "中文",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("cn", include_str!("../i18n/cn.json")),
];

/// Locale whose bundle backs up missing keys in the active one.
const FALLBACK_LOCALE: &str = "en";

/// Supported locales with their native display names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

/// Whether `locale` has a bundled dictionary.
#[must_use]
pub fn is_supported(locale: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == locale)
}

fn load_messages(locale: &str) -> Value {
    LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == locale).then_some(*data))
        .and_then(|data| serde_json::from_str(data).ok())
        .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// Translation table for one resolved locale.
///
/// Built once at startup (or on a language switch) and handed to the
/// component tree through the app context; there is no ambient singleton.
#[derive(Debug)]
pub struct I18n {
    locale: String,
    messages: Value,
    fallback: Value,
}

impl I18n {
    /// Build the table for `locale`. An unsupported identifier falls back to
    /// [`DEFAULT_LOCALE`]; whatever was persisted stays untouched.
    #[must_use]
    pub fn new(locale: &str) -> Self {
        let locale = if is_supported(locale) {
            locale
        } else {
            DEFAULT_LOCALE
        };
        Self {
            locale: locale.to_string(),
            messages: load_messages(locale),
            fallback: load_messages(FALLBACK_LOCALE),
        }
    }

    /// Active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate a dot-separated key, without variable substitution.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, None)
    }

    /// Translate a key with `{var}` / `{{var}}` substitution.
    ///
    /// Keys missing from the active bundle fall back to English; keys missing
    /// everywhere echo the key itself.
    #[must_use]
    pub fn tr(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
        get_nested_value(&self.messages, key)
            .and_then(|value| render_value(value, args))
            .or_else(|| {
                get_nested_value(&self.fallback, key).and_then(|value| render_value(value, args))
            })
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
impl I18n {
    /// Table built from arbitrary dictionaries, for exercising the fallback
    /// chain with keys the bundled locales keep in parity.
    fn with_tables(locale: &str, messages: Value, fallback: Value) -> Self {
        Self {
            locale: locale.to_string(),
            messages,
            fallback,
        }
    }
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let Value::String(template) = value else {
        return None;
    };
    let mut text = template.clone();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}"); // {{var}}
            let ph2 = format!("{{{k}}}"); // {var}
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

/// Mirror the locale onto `<html lang>` so assistive tech sees it.
pub fn set_document_lang(locale: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document()
            .ok()
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
    }
}
