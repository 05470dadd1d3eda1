//! URN shape, parsing helpers, and entity-type canonicalization.
//!
//! A DataHub URN is `urn:li:<entityType>:<identifier>`. The identifier is
//! everything after the third colon and may itself contain colons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::EntityType;
use crate::errors::CoreError;

/// Prefix shared by every URN the engine produces or rewrites.
pub const URN_PREFIX: &str = "urn:li:";

/// Entity type segment of `urn`, or `None` when the string is not a URN.
///
/// Requires the first two segments to be exactly `urn` and `li` and at least
/// three segments overall.
#[must_use]
pub fn entity_type_of(urn: &str) -> Option<&str> {
    let mut parts = urn.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("urn"), Some("li"), Some(entity_type)) => Some(entity_type),
        _ => None,
    }
}

/// Identifier portion of `urn` (segments 4.. rejoined with `:`), or `None`
/// when the string is not a URN with an identifier.
#[must_use]
pub fn entity_name_of(urn: &str) -> Option<String> {
    let parts: Vec<&str> = urn.split(':').collect();
    if parts.len() < 4 || parts[0] != "urn" || parts[1] != "li" {
        return None;
    }
    Some(parts[3..].join(":"))
}

/// Lower-case and trim `raw`, then map it onto the canonical URN segment.
///
/// Unknown types pass through in their lower-cased, trimmed form.
#[must_use]
pub fn canonicalize_entity_type(raw: &str) -> String {
    EntityType::lookup(raw).map_or_else(
        || raw.trim().to_lowercase(),
        |entity_type| entity_type.as_str().to_string(),
    )
}

/// A validated `urn:li:<type>:<id>` string.
///
/// The entity type segment is not restricted to [`EntityType`]: datasets,
/// corpusers and other foreign URNs are valid `Urn`s too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Urn(String);

impl Urn {
    /// Build a URN for a known entity type.
    #[must_use]
    pub fn new(entity_type: EntityType, id: &str) -> Self {
        Self(format!("{URN_PREFIX}{}:{id}", entity_type.as_str()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw entity type segment.
    #[must_use]
    pub fn entity_type_segment(&self) -> &str {
        entity_type_of(&self.0).unwrap_or_default()
    }

    /// Entity type when it belongs to the managed set.
    #[must_use]
    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::lookup(self.entity_type_segment())
    }

    /// Identifier portion (may contain colons).
    #[must_use]
    pub fn id(&self) -> &str {
        let type_len = self.entity_type_segment().len();
        &self.0[URN_PREFIX.len() + type_len + 1..]
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Urn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidUrn {
            urn: s.to_string(),
            reason: reason.to_string(),
        };

        if !s.starts_with(URN_PREFIX) {
            return Err(invalid("missing 'urn:li:' prefix"));
        }
        let entity_type = entity_type_of(s).unwrap_or_default();
        if entity_type.is_empty() {
            return Err(invalid("empty entity type"));
        }
        match entity_name_of(s) {
            Some(id) if !id.is_empty() => Ok(Self(s.to_string())),
            _ => Err(invalid("missing identifier")),
        }
    }
}

impl TryFrom<String> for Urn {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entity_type_of_glossary_term() {
        assert_eq!(
            entity_type_of("urn:li:glossaryTerm:Finance.Revenue"),
            Some("glossaryTerm")
        );
        assert_eq!(
            entity_name_of("urn:li:glossaryTerm:Finance.Revenue").as_deref(),
            Some("Finance.Revenue")
        );
    }

    #[test]
    fn entity_name_keeps_embedded_colons() {
        let urn = "urn:li:dataset:(urn:li:dataPlatform:hive,db.table,PROD)";
        assert_eq!(entity_type_of(urn), Some("dataset"));
        assert_eq!(
            entity_name_of(urn).as_deref(),
            Some("(urn:li:dataPlatform:hive,db.table,PROD)")
        );
    }

    #[test]
    fn malformed_inputs_return_none() {
        for input in ["", "urn", "urn:li", "urn:xx:tag:pii", "URN:li:tag:pii", "tag:pii"] {
            assert_eq!(entity_type_of(input), None, "input: {input:?}");
            assert_eq!(entity_name_of(input), None, "input: {input:?}");
        }
        assert_eq!(entity_type_of("urn:li:tag"), Some("tag"));
        assert_eq!(entity_name_of("urn:li:tag"), None);
    }

    #[test]
    fn empty_segments_are_still_segments() {
        assert_eq!(entity_type_of("urn:li::x"), Some(""));
        assert_eq!(entity_name_of("urn:li:tag:").as_deref(), Some(""));
    }

    #[test]
    fn canonicalize_known_and_unknown() {
        assert_eq!(canonicalize_entity_type("glossaryterm"), "glossaryTerm");
        assert_eq!(canonicalize_entity_type("  DataProduct "), "dataProduct");
        assert_eq!(canonicalize_entity_type("Tag"), "tag");
        assert_eq!(canonicalize_entity_type(" DataSet "), "dataset");
        assert_eq!(canonicalize_entity_type(""), "");
    }

    #[test]
    fn urn_parses_and_exposes_parts() {
        let urn: Urn = "urn:li:glossaryTerm:Finance.Revenue:v2".parse().unwrap();
        assert_eq!(urn.entity_type_segment(), "glossaryTerm");
        assert_eq!(urn.entity_type(), Some(EntityType::GlossaryTerm));
        assert_eq!(urn.id(), "Finance.Revenue:v2");
        assert_eq!(urn.to_string(), "urn:li:glossaryTerm:Finance.Revenue:v2");
    }

    #[test]
    fn urn_rejects_bad_shapes() {
        assert!("urn:li:tag".parse::<Urn>().is_err());
        assert!("urn:li:tag:".parse::<Urn>().is_err());
        assert!("urn:li::pii".parse::<Urn>().is_err());
        assert!("pii".parse::<Urn>().is_err());
    }

    #[test]
    fn urn_serde_is_a_plain_string() {
        let urn = Urn::new(EntityType::Domain, "marketing");
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, "\"urn:li:domain:marketing\"");
        let back: Urn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
        assert!(serde_json::from_str::<Urn>("\"not-a-urn\"").is_err());
    }
}
