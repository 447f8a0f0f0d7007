// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Localized string lookup over the embedded Fluent bundles.
///
/// The locale is resolved once at construction (CLI > config > OS) and
/// can be switched afterwards to any available locale.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let (bundles, available_locales) = load_embedded_bundles();

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Resolves a message key in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves a message key with interpolation arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| bundle.get_message(key))
            .and_then(|message| message.value());

        if let (Some(bundle), Some(pattern)) = (self.bundles.get(&self.current_locale), pattern) {
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }

        // An unresolvable key is a bug in the bundle; make it loud
        // rather than rendering an empty widget.
        format!("MISSING: {}", key)
    }
}

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

/// Parses every embedded `<locale>.ftl` into a bundle. Unparseable
/// locale names are skipped; unparseable FTL is a build defect.
fn load_embedded_bundles() -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut available = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        let resource = FluentResource::try_new(source).expect("Failed to parse FTL file.");
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.add_resource(resource).expect("Failed to add resource.");

        bundles.insert(locale.clone(), bundle);
        available.push(locale);
    }

    (bundles, available)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let parse_known = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    cli_lang
        .as_deref()
        .and_then(parse_known)
        .or_else(|| config.general.language.as_deref().and_then(parse_known))
        .or_else(|| sys_locale::get_locale().as_deref().and_then(parse_known))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn resolve_locale_prefers_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unavailable_locale_is_ignored() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> = vec!["en-US".parse().unwrap()];
        let lang = resolve_locale(Some("de".to_string()), &config, &available);
        assert!(lang.is_none() || lang == Some("en-US".parse().unwrap()));
    }

    #[test]
    fn tr_resolves_known_key() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("window-title"), "EventHub");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("toast-new-notifications", &[("count", "3")]);
        assert!(text.contains('3'), "got: {text}");
    }

    #[test]
    fn tr_flags_missing_key() {
        let i18n = I18n::default();
        assert!(i18n.tr("definitely-not-a-key").starts_with("MISSING:"));
    }
}
