use serde_json::Value;

use super::{non_empty, records, Normalizer};
use crate::i18n::Translator;
use crate::models::{Condition, NormalizedCondition};

/// Normalizes usage conditions (CGUs).
///
/// The description is never empty: a missing one becomes the "no applicable
/// license" label. License content, when present, is appended on a new line.
pub struct ConditionNormalizer<'a> {
    translator: &'a dyn Translator,
}

impl<'a> ConditionNormalizer<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    pub fn condition(&self, condition: Condition) -> NormalizedCondition {
        let mut description = non_empty(condition.description)
            .unwrap_or_else(|| self.translator.tr("conditions", "noLicense"));

        let (name, link) = match condition.license {
            Some(license) => {
                if let Some(content) = non_empty(license.content) {
                    description.push('\n');
                    description.push_str(&content);
                }
                (
                    Some(license.name.unwrap_or_default()),
                    Some(license.link.unwrap_or_default()),
                )
            }
            None => (None, None),
        };

        NormalizedCondition {
            description,
            name,
            link,
        }
    }
}

impl Normalizer for ConditionNormalizer<'_> {
    type Output = NormalizedCondition;

    fn normalize(&self, raw: &[Value]) -> Vec<NormalizedCondition> {
        let out: Vec<_> = records::<Condition>(raw, "condition")
            .into_iter()
            .map(|c| self.condition(c))
            .collect();
        tracing::debug!(input = raw.len(), output = out.len(), "conditions normalized");
        out
    }
}
