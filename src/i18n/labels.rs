use std::collections::HashMap;

use super::Translator;

/// Label overrides keyed by domain, then by key.
pub type LabelOverrides = HashMap<String, HashMap<String, String>>;

/// Translator backed by the built-in Isogeo label tables.
///
/// French is used for `fr`; every other language code gets English. Overrides
/// from the configuration are consulted first, and keys found nowhere are
/// returned as-is.
#[derive(Debug, Clone, Default)]
pub struct IsogeoTranslator {
    french: bool,
    overrides: LabelOverrides,
}

impl IsogeoTranslator {
    pub fn new(lang: &str) -> Self {
        Self {
            french: lang.eq_ignore_ascii_case("fr"),
            overrides: HashMap::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: LabelOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl Translator for IsogeoTranslator {
    fn tr(&self, domain: &str, key: &str) -> String {
        if let Some(label) = self.overrides.get(domain).and_then(|d| d.get(key)) {
            return label.clone();
        }
        let builtin = if self.french {
            label_fr(domain, key)
        } else {
            label_en(domain, key)
        };
        builtin.unwrap_or(key).to_string()
    }
}

fn label_fr(domain: &str, key: &str) -> Option<&'static str> {
    let label = match (domain, key) {
        ("conditions", "noLicense") => "Pas de licence applicable",

        ("limitations", "legal") => "Légale",
        ("limitations", "security") => "Sécurité",

        ("restrictions", "copyright") => "Droit d'auteur / Droit moral (copyright)",
        ("restrictions", "patent") => "Brevet",
        ("restrictions", "patentPending") => "Brevet en instance",
        ("restrictions", "trademark") => "Marque de commerce",
        ("restrictions", "license") => "Licence",
        ("restrictions", "intellectualPropertyRights") => {
            "Droits de propriété intellectuelle / Droits patrimoniaux"
        }
        ("restrictions", "restricted") => "Restreint",
        ("restrictions", "other") => "Autres restrictions",

        ("quality", "isConform") => "Conforme",
        ("quality", "isNotConform") => "Non conforme",

        _ => return None,
    };
    Some(label)
}

fn label_en(domain: &str, key: &str) -> Option<&'static str> {
    let label = match (domain, key) {
        ("conditions", "noLicense") => "No applicable license",

        ("limitations", "legal") => "Legal",
        ("limitations", "security") => "Security",

        ("restrictions", "copyright") => "Copyright",
        ("restrictions", "patent") => "Patent",
        ("restrictions", "patentPending") => "Patent pending",
        ("restrictions", "trademark") => "Trademark",
        ("restrictions", "license") => "License",
        ("restrictions", "intellectualPropertyRights") => "Intellectual property rights",
        ("restrictions", "restricted") => "Restricted",
        ("restrictions", "other") => "Other restrictions",

        ("quality", "isConform") => "Conform",
        ("quality", "isNotConform") => "Not conform",

        _ => return None,
    };
    Some(label)
}
