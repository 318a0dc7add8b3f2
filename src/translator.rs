// SPDX-License-Identifier: MPL-2.0
//! Message lookup and formatting for one locale context.
//!
//! A [`Translator`] owns one Fluent bundle per locale, built over resources
//! shared with the [`Composer`](crate::composer::Composer) that created it.
//! Lookups consult the current locale first and the fallback locale second;
//! a message missing from both renders as `MISSING: <key>`.

use chrono::{DateTime, Utc};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::collections::HashMap;
use std::rc::Rc;
use unic_langid::LanguageIdentifier;

/// Named date rendering styles.
///
/// The actual strftime pattern for each style is itself a localized message
/// (`date-format-short` / `date-format-long`), so translations control the
/// field order. When a locale ships no pattern, an English-ISO default is
/// used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Long,
}

impl DateStyle {
    fn message_key(self) -> &'static str {
        match self {
            DateStyle::Short => "date-format-short",
            DateStyle::Long => "date-format-long",
        }
    }

    fn default_pattern(self) -> &'static str {
        match self {
            DateStyle::Short => "%Y-%m-%d",
            DateStyle::Long => "%A, %B %d, %Y",
        }
    }
}

pub struct Translator {
    bundles: HashMap<LanguageIdentifier, FluentBundle<Rc<FluentResource>>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Translator {
    /// Builds one bundle per locale from resources shared with the composer.
    pub(crate) fn from_resources(
        resources: &HashMap<LanguageIdentifier, Vec<Rc<FluentResource>>>,
        current_locale: LanguageIdentifier,
        fallback_locale: LanguageIdentifier,
    ) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (locale, sources) in resources {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Output is rendered as plain strings; skip bidi isolation marks.
            bundle.set_use_isolating(false);
            for source in sources {
                bundle.add_resource_overriding(Rc::clone(source));
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale.clone());
        }
        available_locales.sort();

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches the current locale. Locales without a bundle are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Looks up and formats a message without arguments.
    pub fn translate(&self, key: &str) -> String {
        self.format_in(&self.current_locale, key, None)
            .or_else(|| self.format_in(&self.fallback_locale, key, None))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Looks up and formats a message with the given Fluent arguments.
    pub fn translate_with(&self, key: &str, args: &FluentArgs<'_>) -> String {
        self.format_in(&self.current_locale, key, Some(args))
            .or_else(|| self.format_in(&self.fallback_locale, key, Some(args)))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Plural-aware lookup: exposes `count` to the message as `$count` and
    /// lets the Fluent plural selector pick the variant.
    pub fn translate_choice(&self, key: &str, count: f64) -> String {
        let mut args = FluentArgs::new();
        args.set("count", count);
        self.translate_with(key, &args)
    }

    /// Plural-aware lookup with additional arguments. A `count` entry in
    /// `extra` is overwritten by the explicit count.
    pub fn translate_choice_with(&self, key: &str, count: f64, extra: &FluentArgs<'_>) -> String {
        let mut args = FluentArgs::new();
        for (name, value) in extra.iter() {
            args.set(name.to_owned(), value.clone());
        }
        args.set("count", count);
        self.translate_with(key, &args)
    }

    /// Returns whether a message exists in the given locale's bundle, or the
    /// current locale's when none is given. Unknown locales report `false`.
    pub fn translate_exists(&self, key: &str, locale: Option<&LanguageIdentifier>) -> bool {
        let locale = locale.unwrap_or(&self.current_locale);
        self.bundles
            .get(locale)
            .map(|bundle| bundle.has_message(key))
            .unwrap_or(false)
    }

    /// Formats a timestamp using the locale's pattern for the given style.
    pub fn format_date(&self, value: &DateTime<Utc>, style: DateStyle) -> String {
        let pattern = self
            .format_in(&self.current_locale, style.message_key(), None)
            .or_else(|| self.format_in(&self.fallback_locale, style.message_key(), None))
            .unwrap_or_else(|| style.default_pattern().to_string());
        value.format(&pattern).to_string()
    }

    /// Formats a number with the current locale's decimal and grouping
    /// separators, keeping at most three fraction digits.
    pub fn format_number(&self, value: f64) -> String {
        let (decimal, grouping) = separators(self.current_locale.language.as_str());

        let rounded = format!("{:.3}", value.abs());
        let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
        let frac = frac_part.trim_end_matches('0');

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(grouping);
            }
            out.push(digit);
        }
        if !frac.is_empty() {
            out.push(decimal);
            out.push_str(frac);
        }
        out
    }

    fn format_in(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let msg = bundle.get_message(key)?;
        let pattern = msg.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

/// Decimal and grouping separators by language subtag.
fn separators(language: &str) -> (char, char) {
    match language {
        "de" | "es" | "it" | "nl" | "pt" | "tr" | "id" => (',', '.'),
        "fr" | "ru" | "pl" | "cs" | "sv" | "fi" | "uk" => (',', '\u{a0}'),
        _ => ('.', ','),
    }
}
