use serde_json::Value;

use super::{non_empty, records, Normalizer};
use crate::i18n::dates::parse_iso_datetime;
use crate::i18n::{DateFormatter, Translator};
use crate::models::{Conformity, NormalizedSpecification};

/// Normalizes conformity statements (conformity flag + specification).
pub struct SpecificationNormalizer<'a> {
    translator: &'a dyn Translator,
    dates: &'a dyn DateFormatter,
    /// Locale date pattern, e.g. `%d/%m/%Y`.
    pattern: &'a str,
}

impl<'a> SpecificationNormalizer<'a> {
    pub fn new(translator: &'a dyn Translator, dates: &'a dyn DateFormatter, pattern: &'a str) -> Self {
        Self {
            translator,
            dates,
            pattern,
        }
    }

    pub fn conformity(&self, conformity: Conformity) -> NormalizedSpecification {
        let conformant = if conformity.conformant.unwrap_or(false) {
            self.translator.tr("quality", "isConform")
        } else {
            self.translator.tr("quality", "isNotConform")
        };
        let spec = conformity.specification;

        NormalizedSpecification {
            conformant,
            published: self.published(non_empty(spec.published)),
            name: spec.name.unwrap_or_default(),
            link: spec.link.unwrap_or_default(),
        }
    }

    fn published(&self, raw: Option<String>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };
        match parse_iso_datetime(&raw) {
            Some(dt) => self.dates.format(&dt, self.pattern),
            None => {
                tracing::warn!(published = %raw, "unparseable publication date, leaving it empty");
                String::new()
            }
        }
    }
}

impl Normalizer for SpecificationNormalizer<'_> {
    type Output = NormalizedSpecification;

    fn normalize(&self, raw: &[Value]) -> Vec<NormalizedSpecification> {
        let out: Vec<_> = records::<Conformity>(raw, "specification")
            .into_iter()
            .map(|c| self.conformity(c))
            .collect();
        tracing::debug!(input = raw.len(), output = out.len(), "specifications normalized");
        out
    }
}
