//! Canonical metadata fixtures and collaborator mocks shared by the tests.

use chrono::NaiveDateTime;
use serde_json::{json, Value};

use crate::i18n::{DateFormatter, Translator};

/// Echoes `domain:key`, so tests can see which label was requested.
pub struct MockTranslator;

impl Translator for MockTranslator {
    fn tr(&self, domain: &str, key: &str) -> String {
        format!("{}:{}", domain, key)
    }
}

/// Echoes the datetime and the pattern it was asked to use.
pub struct MockDateFormatter;

impl DateFormatter for MockDateFormatter {
    fn format(&self, datetime: &NaiveDateTime, pattern: &str) -> String {
        format!("{} as {}", datetime, pattern)
    }
}

pub fn conditions() -> Vec<Value> {
    vec![
        json!({
            "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
            "description": "Conditions d'utilisation de la donnée",
            "license": {
                "_id": "63f121e14eda4f47b748595e0bcccc31",
                "_tag": "license:isogeo:63f121e14eda4f47b748595e0bcccc31",
                "name": "Licence Ouverte version 2.0",
                "link": "https://www.etalab.gouv.fr/licence-ouverte-open-licence",
                "content": "Réutilisation libre sous réserve de mentionner la source."
            }
        }),
        json!({
            "description": "Données diffusées sous licence ODbL",
            "license": {
                "name": "Open Database License (ODbL) 1.0",
                "link": "http://opendatacommons.org/licenses/odbl/1.0/"
            }
        }),
        json!({
            "description": ""
        }),
        json!({
            "description": "",
            "license": {
                "name": "Licence Ouverte",
                "link": "https://www.etalab.gouv.fr/licence-ouverte-open-licence",
                "content": "Contenu de la licence ouverte"
            }
        }),
        json!({
            "description": "Usage interne uniquement",
            "license": {
                "name": "Licence propriétaire"
            }
        }),
        json!({
            "description": "Aucune restriction",
            "license": null
        }),
    ]
}

pub fn limitations() -> Vec<Value> {
    vec![
        json!({
            "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
            "type": "legal",
            "description": "**Gras**\n*Italique*\t\n<del>Supprimé</del>\n<cite>Citation</cite>\n\n* Élément 1\n* Élément 2\n\n1. Élément 1\n2. Élément 2\n\n[Foo](http://foo.bar)",
            "restriction": "license",
            "directive": {
                "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
                "name": "Pas de restriction d’accès public selon INSPIRE",
                "description": "Aucun des articles de la loi ne peut être invoqué pour justifier d’une restriction d’accès public."
            }
        }),
        json!({
            "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
            "type": "security",
            "description": "**Gras**\n*Italique*\t\n<del>Supprimé</del>\n<cite>Citation</cite>\n\n* Élément 1\n* Élément 2\n\n1. Élément 1\n2. Élément 2\n\n[Foo](http://foo.bar)"
        }),
        json!({"type": "legal", "description": "", "restriction": "other"}),
        json!({"type": "legal", "description": "", "restriction": "patentPending"}),
        json!({"type": "legal", "description": "Ceci est un **copyright**", "restriction": "copyright"}),
        json!({"type": "legal", "description": "", "restriction": "trademark"}),
        json!({"type": "legal", "description": "", "restriction": "patent"}),
        json!({"type": "legal", "description": "", "restriction": "intellectualPropertyRights"}),
        json!({"type": "legal", "description": "", "restriction": "restricted"}),
        json!({
            "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
            "type": "legal",
            "description": "Description complémentaire",
            "restriction": "other",
            "directive": {
                "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
                "name": "L124-5-II-2 du code de l’environnement (Directive 2007/2/CE (INSPIRE), Article 13.1.c)",
                "description": "La bonne marche de la justice, la possibilité pour toute personne d’être jugée équitablement ou la capacité d’une autorité publique d’effectuer une enquête d’ordre pénal ou disciplinaire."
            }
        }),
    ]
}

pub fn specifications() -> Vec<Value> {
    vec![
        json!({
            "conformant": true,
            "specification": {
                "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
                "_tag": "specification:isogeo:1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
                "name": "CNIG CC v2014",
                "link": "http://cnig.gouv.fr/wp-content/uploads/2014/10/141002_Standard_CNIG_CC_diffusion.pdf",
                "published": "2014-10-02T00:00:00"
            }
        }),
        json!({
            "conformant": false,
            "specification": {
                "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m20z",
                "_tag": "specification:1a2b3c4d5e6f7g8h9i0j11k12l13m20z:1a2b3c4d5e6f7g8h9i0j11k12l13m20z",
                "name": "Spécification - GT",
                "link": "https://www.isogeo.com",
                "owner": {
                    "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m20z",
                    "_created": "2019-01-30T17:39:21.8947459+00:00",
                    "contact": {
                        "type": "group",
                        "name": "Isogeo TEST - SDK Migration",
                        "countryCode": "FR"
                    },
                    "metadataLanguage": "es"
                }
            }
        }),
    ]
}

/// One whole metadata object, as returned by an Isogeo search.
pub fn metadata() -> Value {
    json!({
        "_id": "1a2b3c4d5e6f7g8h9i0j11k12l13m14n",
        "name": "fixture_table",
        "title": "Réseau hydrographique & bassins",
        "abstract": "Données **brutes** : <b>cours d'eau</b> & plans d'eau < 1 ha",
        "conditions": conditions(),
        "limitations": limitations(),
        "specifications": specifications()
    })
}
