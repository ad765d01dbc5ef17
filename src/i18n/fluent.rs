// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::I18nError;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded bundle and picks the current locale.
    ///
    /// Broken resources are skipped and logged; see [`I18n::load_bundles`].
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let (bundles, errors) = Self::load_bundles();
        for err in &errors {
            tracing::warn!(%err, "skipping translation resource");
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    /// Parses all embedded `.ftl` files.
    ///
    /// Returns the bundles that loaded and the errors for those that did not.
    pub fn load_bundles() -> (
        HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
        Vec<I18nError>,
    ) {
        let mut bundles = HashMap::new();
        let mut errors = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                errors.push(I18nError::InvalidLocale(filename.to_string()));
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, parse_errors)) => {
                    errors.push(I18nError::Parse {
                        locale: locale_str.to_string(),
                        detail: format!("{parse_errors:?}"),
                    });
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(conflicts) = bundle.add_resource(resource) {
                errors.push(I18nError::Conflict {
                    locale: locale_str.to_string(),
                    detail: format!("{conflicts:?}"),
                });
                continue;
            }
            bundles.insert(locale, bundle);
        }

        (bundles, errors)
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Looks up `key` in the current locale, then in the default locale.
    #[must_use]
    pub fn try_tr(&self, key: &str) -> Option<String> {
        self.format_in(&self.current_locale, key)
            .or_else(|| self.format_in(&self.default_locale, key))
    }

    /// Like [`I18n::try_tr`], but renders a `MISSING:` marker instead of `None`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.try_tr(key)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format_in(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // CLI, then config file, then OS locale
    cli_lang
        .as_deref()
        .and_then(pick)
        .or_else(|| config.general.language.as_deref().and_then(pick))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(pick))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn embedded_bundles_load_without_errors() {
        let (bundles, errors) = I18n::load_bundles();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert!(bundles.contains_key(&"en-US".parse().unwrap()));
        assert!(bundles.contains_key(&"fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_cli_language() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("de".to_string()), &config, &locales());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn tr_uses_current_locale() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.tr("label-cancel"), "Annuler");
    }

    #[test]
    fn tr_marks_missing_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
        assert!(i18n.try_tr("no-such-key").is_none());
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }
}
