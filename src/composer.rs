// SPDX-License-Identifier: MPL-2.0
//! Locale registry and translator construction.
//!
//! The [`Composer`] loads `.ftl` resources (embedded under `assets/i18n/` or
//! supplied by the host), negotiates the process-wide default locale, and
//! builds [`Translator`] instances: one shared default plus a fresh instance
//! per component that carries its own [`TranslatorOptions`].

use crate::config::{Config, DEFAULT_LOCALE};
use crate::error::{Error, Result};
use crate::translator::Translator;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Component-local i18n configuration.
///
/// A node that carries options gets a brand-new translator built from them
/// instead of inheriting an ancestor's instance. Inline resources are
/// overlaid on the composer's shared resources, so a component can override
/// individual messages without redeclaring a whole locale.
#[derive(Debug, Clone, Default)]
pub struct TranslatorOptions {
    /// Locale for the new translator; the composer's negotiated default when
    /// absent.
    pub locale: Option<String>,
    /// Fallback locale; the composer's fallback when absent.
    pub fallback_language: Option<String>,
    /// Inline `(locale tag, FTL source)` pairs, applied after the shared
    /// resources so they win on duplicate message ids.
    pub resources: Vec<(String, String)>,
}

pub struct Composer {
    resources: HashMap<LanguageIdentifier, Vec<Rc<FluentResource>>>,
    available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Composer {
    /// Builds a composer from the locale files embedded under `assets/i18n/`.
    ///
    /// `lang_override` is the host's explicit choice (e.g. a `--lang` flag)
    /// and takes priority over the config file and the OS locale.
    pub fn from_embedded(lang_override: Option<String>, config: &Config) -> Result<Self> {
        let mut sources = Vec::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Some(content) = Asset::get(filename) {
                    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                    sources.push((locale_str.to_string(), source));
                }
            }
        }
        Self::from_sources(&sources, lang_override, config)
    }

    /// Builds a composer from explicit `(locale tag, FTL source)` pairs.
    pub fn from_sources(
        sources: &[(String, String)],
        lang_override: Option<String>,
        config: &Config,
    ) -> Result<Self> {
        let mut resources: HashMap<LanguageIdentifier, Vec<Rc<FluentResource>>> = HashMap::new();
        for (locale_str, source) in sources {
            let locale: LanguageIdentifier = locale_str.parse()?;
            let resource = parse_resource(source.clone(), locale_str)?;
            resources.entry(locale).or_default().push(resource);
        }

        let mut available_locales: Vec<LanguageIdentifier> = resources.keys().cloned().collect();
        available_locales.sort();

        let fallback_locale = resolve_fallback(config, &available_locales);
        let default_locale = resolve_locale(lang_override, config, &available_locales)
            .unwrap_or_else(|| fallback_locale.clone());
        debug!(
            %default_locale,
            %fallback_locale,
            locales = available_locales.len(),
            "composer ready"
        );

        Ok(Self {
            resources,
            available_locales,
            default_locale,
            fallback_locale,
        })
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    /// Builds the process-wide default translator.
    pub fn default_translator(&self) -> Translator {
        Translator::from_resources(
            &self.resources,
            self.default_locale.clone(),
            self.fallback_locale.clone(),
        )
    }

    /// Constructs a brand-new translator from component-local options.
    ///
    /// Malformed locale tags and malformed FTL sources error out; a
    /// well-formed locale without any resources is accepted, and lookups on
    /// it walk the fallback chain.
    pub fn create_translator(&self, options: &TranslatorOptions) -> Result<Translator> {
        let mut resources = self.resources.clone();
        for (locale_str, source) in &options.resources {
            let locale: LanguageIdentifier = locale_str.parse()?;
            let resource = parse_resource(source.clone(), locale_str)?;
            resources.entry(locale).or_default().push(resource);
        }

        let current = match &options.locale {
            Some(tag) => tag.parse()?,
            None => self.default_locale.clone(),
        };
        let fallback = match &options.fallback_language {
            Some(tag) => tag.parse()?,
            None => self.fallback_locale.clone(),
        };
        debug!(locale = %current, "constructed scoped translator");

        Ok(Translator::from_resources(&resources, current, fallback))
    }
}

pub(crate) fn parse_resource(source: String, origin: &str) -> Result<Rc<FluentResource>> {
    FluentResource::try_new(source).map(Rc::new).map_err(|(_, errors)| {
        Error::Resource(format!("failed to parse FTL for '{}': {:?}", origin, errors))
    })
}

fn resolve_fallback(config: &Config, available: &[LanguageIdentifier]) -> LanguageIdentifier {
    if let Some(lang_str) = &config.fallback_language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return lang;
            }
        }
    }
    DEFAULT_LOCALE.parse().unwrap()
}

fn resolve_locale(
    lang_override: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check the host's explicit override
    if let Some(lang_str) = lang_override {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
