//! Entity types, mutation capability flags, and aspect relation kinds.
//!
//! `EntityType` serializes as the literal URN segment (`glossaryTerm`,
//! `dataProduct`, ...). `MutationFlag` serializes as the `apply_to_*` key used
//! in environment mutation records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Metadata entity kinds managed by the URN engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Tag,
    GlossaryTerm,
    GlossaryNode,
    Domain,
    DataProduct,
    StructuredProperty,
    Assertion,
}

impl EntityType {
    pub const ALL: [Self; 7] = [
        Self::Tag,
        Self::GlossaryTerm,
        Self::GlossaryNode,
        Self::Domain,
        Self::DataProduct,
        Self::StructuredProperty,
        Self::Assertion,
    ];

    /// The URN segment for this entity type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::GlossaryTerm => "glossaryTerm",
            Self::GlossaryNode => "glossaryNode",
            Self::Domain => "domain",
            Self::DataProduct => "dataProduct",
            Self::StructuredProperty => "structuredProperty",
            Self::Assertion => "assertion",
        }
    }

    /// Capability flag gating environment mutation of this type.
    ///
    /// Assertions have no flag and are never mutated.
    #[must_use]
    pub const fn mutation_flag(self) -> Option<MutationFlag> {
        match self {
            Self::Tag => Some(MutationFlag::ApplyToTags),
            Self::GlossaryTerm => Some(MutationFlag::ApplyToGlossaryTerms),
            Self::GlossaryNode => Some(MutationFlag::ApplyToGlossaryNodes),
            Self::Domain => Some(MutationFlag::ApplyToDomains),
            Self::DataProduct => Some(MutationFlag::ApplyToDataProducts),
            Self::StructuredProperty => Some(MutationFlag::ApplyToStructuredProperties),
            Self::Assertion => None,
        }
    }

    /// Lenient lookup: trims and ignores case. Returns `None` for anything
    /// outside the fixed set.
    #[must_use]
    pub fn lookup(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(&lowered))
    }

    /// Exact match on the URN segment, as it appears inside a URN.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == segment)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| CoreError::UnknownEntityType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MutationFlag
// ---------------------------------------------------------------------------

/// Per-environment capability flags controlling which entity types get
/// rewritten during promotion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MutationFlag {
    ApplyToTags,
    ApplyToGlossaryTerms,
    ApplyToGlossaryNodes,
    ApplyToDomains,
    ApplyToDataProducts,
    ApplyToStructuredProperties,
}

impl MutationFlag {
    pub const ALL: [Self; 6] = [
        Self::ApplyToTags,
        Self::ApplyToGlossaryTerms,
        Self::ApplyToGlossaryNodes,
        Self::ApplyToDomains,
        Self::ApplyToDataProducts,
        Self::ApplyToStructuredProperties,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplyToTags => "apply_to_tags",
            Self::ApplyToGlossaryTerms => "apply_to_glossary_terms",
            Self::ApplyToGlossaryNodes => "apply_to_glossary_nodes",
            Self::ApplyToDomains => "apply_to_domains",
            Self::ApplyToDataProducts => "apply_to_data_products",
            Self::ApplyToStructuredProperties => "apply_to_structured_properties",
        }
    }

    /// The entity type this flag controls.
    #[must_use]
    pub const fn entity_type(self) -> EntityType {
        match self {
            Self::ApplyToTags => EntityType::Tag,
            Self::ApplyToGlossaryTerms => EntityType::GlossaryTerm,
            Self::ApplyToGlossaryNodes => EntityType::GlossaryNode,
            Self::ApplyToDomains => EntityType::Domain,
            Self::ApplyToDataProducts => EntityType::DataProduct,
            Self::ApplyToStructuredProperties => EntityType::StructuredProperty,
        }
    }
}

impl fmt::Display for MutationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RelationKind
// ---------------------------------------------------------------------------

/// Association kinds carried inside entity aspects.
///
/// Each kind owns one aspect and knows which flag (if any) gates rewriting
/// the URNs it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    GlobalTags,
    GlossaryTerms,
    StructuredProperties,
    Domains,
    ParentNode,
    RelatedTerms,
    Ownership,
    Forms,
    Tests,
    PlatformInstance,
}

impl RelationKind {
    /// Map an aspect name to the relation it carries.
    #[must_use]
    pub fn from_aspect_name(aspect: &str) -> Option<Self> {
        match aspect {
            "globalTags" => Some(Self::GlobalTags),
            "glossaryTerms" => Some(Self::GlossaryTerms),
            "structuredProperties" => Some(Self::StructuredProperties),
            "domains" => Some(Self::Domains),
            "glossaryTermInfo" | "glossaryNodeInfo" => Some(Self::ParentNode),
            "glossaryRelatedTerms" => Some(Self::RelatedTerms),
            "ownership" => Some(Self::Ownership),
            "forms" => Some(Self::Forms),
            "testResults" => Some(Self::Tests),
            "dataPlatformInstance" => Some(Self::PlatformInstance),
            _ => None,
        }
    }

    /// Entity type a typed pass rewrites. `None` for passes that either
    /// never rewrite (ownership, platform instance) or gate per URN.
    #[must_use]
    pub const fn target(self) -> Option<EntityType> {
        match self {
            Self::GlobalTags => Some(EntityType::Tag),
            Self::GlossaryTerms | Self::RelatedTerms => Some(EntityType::GlossaryTerm),
            Self::StructuredProperties => Some(EntityType::StructuredProperty),
            Self::Domains => Some(EntityType::Domain),
            Self::ParentNode => Some(EntityType::GlossaryNode),
            Self::Ownership | Self::Forms | Self::Tests | Self::PlatformInstance => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GlobalTags => "global_tags",
            Self::GlossaryTerms => "glossary_terms",
            Self::StructuredProperties => "structured_properties",
            Self::Domains => "domains",
            Self::ParentNode => "parent_node",
            Self::RelatedTerms => "related_terms",
            Self::Ownership => "ownership",
            Self::Forms => "forms",
            Self::Tests => "tests",
            Self::PlatformInstance => "platform_instance",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
