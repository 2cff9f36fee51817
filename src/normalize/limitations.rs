use serde_json::Value;

use super::{records, Normalizer};
use crate::i18n::Translator;
use crate::models::Limitation;

/// Composes each limitation into a single display string:
///
/// ```text
/// {type} {description}. {restriction} {directive description} {directive name}
/// ```
///
/// The restriction is only translated for `legal` limitations; absent parts
/// render as empty strings.
pub struct LimitationNormalizer<'a> {
    translator: &'a dyn Translator,
}

impl<'a> LimitationNormalizer<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    pub fn limitation(&self, limitation: Limitation) -> String {
        let kind = limitation.kind.unwrap_or_default();
        let type_label = self.translator.tr("limitations", &kind);
        let description = limitation.description.unwrap_or_default();

        let restriction = match limitation.restriction.as_deref() {
            Some(r) if kind == "legal" && !r.is_empty() => self.translator.tr("restrictions", r),
            _ => String::new(),
        };

        // INSPIRE citation
        let (content, inspire) = limitation
            .directive
            .map(|d| (d.description.unwrap_or_default(), d.name.unwrap_or_default()))
            .unwrap_or_default();

        format!(
            "{} {}. {} {} {}",
            type_label, description, restriction, content, inspire
        )
    }
}

impl Normalizer for LimitationNormalizer<'_> {
    type Output = String;

    fn normalize(&self, raw: &[Value]) -> Vec<String> {
        let out: Vec<_> = records::<Limitation>(raw, "limitation")
            .into_iter()
            .map(|l| self.limitation(l))
            .collect();
        tracing::debug!(input = raw.len(), output = out.len(), "limitations normalized");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::fixtures::{self, MockTranslator};
    use crate::i18n::labels::IsogeoTranslator;

    #[test]
    fn test_fixture_limitations() {
        let raw = fixtures::limitations();
        let out = LimitationNormalizer::new(&MockTranslator).normalize(&raw);
        assert_eq!(out.len(), 10);
        for (line, item) in out.iter().zip(&raw) {
            let label = format!("limitations:{}", item["type"].as_str().unwrap());
            assert!(line.contains(&label), "{line}");
        }
    }

    #[test]
    fn test_legal_with_directive() {
        let out = LimitationNormalizer::new(&MockTranslator).normalize(&fixtures::limitations());
        assert!(out[9].starts_with("limitations:legal Description complémentaire. restrictions:other La bonne marche"));
        assert!(out[9].ends_with("Article 13.1.c)"));
    }

    #[test]
    fn test_security_has_no_restriction() {
        let raw = vec![json!({"type": "security", "description": "Diffusion restreinte", "restriction": "copyright"})];
        let out = LimitationNormalizer::new(&MockTranslator).normalize(&raw);
        assert_eq!(out[0], "limitations:security Diffusion restreinte.   ");
    }

    #[test]
    fn test_absent_parts_render_empty() {
        let raw = vec![json!({"type": "legal", "restriction": "patent"})];
        let out = LimitationNormalizer::new(&IsogeoTranslator::new("en")).normalize(&raw);
        assert_eq!(out[0], "Legal . Patent  ");
        assert!(!out[0].contains("None"));
        assert!(!out[0].contains("null"));
    }

    #[test]
    fn test_french_restriction_labels() {
        let tr = IsogeoTranslator::new("fr");
        let out = LimitationNormalizer::new(&tr).normalize(&fixtures::limitations());
        assert!(out[4].starts_with("Légale Ceci est un **copyright**. Droit d'auteur"));
        assert!(out[5].contains("Marque de commerce"));
    }

    #[test]
    fn test_null_directive_is_absent() {
        let raw = vec![json!({"type": "legal", "description": "x", "directive": null})];
        let out = LimitationNormalizer::new(&MockTranslator).normalize(&raw);
        assert_eq!(out[0], "limitations:legal x.   ");
    }
}
