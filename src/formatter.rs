use anyhow::Result;
use chrono::NaiveDateTime;
use serde_json::Value;

use crate::config::{Config, LocaleConfig};
use crate::i18n::dates::ChronoDateFormatter;
use crate::i18n::labels::IsogeoTranslator;
use crate::i18n::{DateFormatter, Translator};
use crate::models::{FormattedMetadata, NormalizedCondition, NormalizedSpecification};
use crate::normalize::{
    value_kind, ConditionNormalizer, LimitationNormalizer, Normalizer, SpecificationNormalizer,
};
use crate::sanitize::{self, SanitizeMode};

/// Metadata formatter for one language.
///
/// Owns its collaborators and locale for its whole lifetime; build one per
/// language instead of switching locale on a shared instance.
pub struct Formatter {
    lang: String,
    locale: LocaleConfig,
    mode: SanitizeMode,
    translator: Box<dyn Translator>,
    dates: Box<dyn DateFormatter>,
}

impl Formatter {
    /// Formatter using the built-in label tables and chrono date rendering.
    pub fn new(lang: &str, config: &Config) -> Result<Self> {
        let lang = lang.to_lowercase();
        let translator = IsogeoTranslator::new(&lang).with_overrides(config.labels.clone());
        let locale = config.locale(&lang);
        let dates = ChronoDateFormatter::new(&locale.locale);
        Ok(Self::with_collaborators(
            &lang,
            locale,
            config.sanitizer.to_mode()?,
            Box::new(translator),
            Box::new(dates),
        ))
    }

    pub fn with_collaborators(
        lang: &str,
        locale: LocaleConfig,
        mode: SanitizeMode,
        translator: Box<dyn Translator>,
        dates: Box<dyn DateFormatter>,
    ) -> Self {
        Self {
            lang: lang.to_string(),
            locale,
            mode,
            translator,
            dates,
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn mode(&self) -> SanitizeMode {
        self.mode
    }

    pub fn conditions(&self, raw: &[Value]) -> Vec<NormalizedCondition> {
        ConditionNormalizer::new(self.translator.as_ref()).normalize(raw)
    }

    pub fn limitations(&self, raw: &[Value]) -> Vec<String> {
        LimitationNormalizer::new(self.translator.as_ref()).normalize(raw)
    }

    pub fn specifications(&self, raw: &[Value]) -> Vec<NormalizedSpecification> {
        SpecificationNormalizer::new(
            self.translator.as_ref(),
            self.dates.as_ref(),
            &self.locale.dates,
        )
        .normalize(raw)
    }

    /// Sanitize free text with the configured mode.
    pub fn clean(&self, text: Option<&str>) -> String {
        sanitize::clean(text, self.mode)
    }

    /// Render a full timestamp with the locale's datetime pattern.
    pub fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
        self.dates.format(datetime, &self.locale.datetimes)
    }

    /// Normalize every section of one Isogeo metadata object.
    pub fn format_metadata(&self, metadata: &Value) -> FormattedMetadata {
        if !metadata.is_object() {
            tracing::warn!(found = value_kind(metadata), "metadata expects a mapping, skipping");
            return FormattedMetadata {
                skipped: 1,
                ..FormattedMetadata::default()
            };
        }

        let mut skipped = 0;
        let raw_conditions = section(metadata, "conditions", &mut skipped);
        let raw_limitations = section(metadata, "limitations", &mut skipped);
        let raw_specifications = section(metadata, "specifications", &mut skipped);

        let conditions = self.conditions(raw_conditions);
        let limitations = self.limitations(raw_limitations);
        let specifications = self.specifications(raw_specifications);
        skipped += raw_conditions.len() - conditions.len()
            + raw_limitations.len() - limitations.len()
            + raw_specifications.len() - specifications.len();

        let title = ["title", "name"]
            .iter()
            .filter_map(|key| metadata.get(*key).and_then(Value::as_str))
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();

        FormattedMetadata {
            title,
            abstract_text: metadata
                .get("abstract")
                .and_then(Value::as_str)
                .map(str::to_string),
            conditions,
            limitations,
            specifications,
            skipped,
        }
    }
}

/// The list stored under `key`. Absent or null sections are empty; any other
/// non-list value is counted as skipped.
fn section<'v>(metadata: &'v Value, key: &str, skipped: &mut usize) -> &'v [Value] {
    match metadata.get(key) {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!(
                section = key,
                found = value_kind(other),
                "section expects a list, skipping"
            );
            *skipped += 1;
            &[]
        }
    }
}
