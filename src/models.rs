use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw records, as found in an Isogeo metadata object
// ---------------------------------------------------------------------------

/// A usage condition (CGU) attached to a metadata record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
}

/// A named, linkable license, optionally carrying its full text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A typed restriction on the use of a metadata record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Limitation {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub restriction: Option<String>,
    #[serde(default)]
    pub directive: Option<Directive>,
}

/// INSPIRE directive citation backing a limitation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Directive {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Conformity statement against an external specification.
#[derive(Debug, Clone, Deserialize)]
pub struct Conformity {
    /// Absent or null reads as not conformant.
    #[serde(default)]
    pub conformant: Option<bool>,
    pub specification: Specification,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Specification {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

// ---------------------------------------------------------------------------
// Normalized outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCondition {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSpecification {
    pub conformant: String,
    pub name: String,
    pub link: String,
    /// Locale-formatted publication date; empty when the source has none.
    pub published: String,
}

/// Every section of one metadata object, normalized.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormattedMetadata {
    pub title: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    pub conditions: Vec<NormalizedCondition>,
    pub limitations: Vec<String>,
    pub specifications: Vec<NormalizedSpecification>,
    /// Number of records dropped as shape errors across all sections.
    #[serde(skip)]
    pub skipped: usize,
}
