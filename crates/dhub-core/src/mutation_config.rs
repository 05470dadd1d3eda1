//! Per-environment mutation rules and the lookup interface that serves them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::enums::{EntityType, MutationFlag};

/// Rules applied when promoting metadata into a named environment.
///
/// Field names match the `apply_to_*` keys of stored environment records, so
/// existing JSON and TOML records deserialize unchanged. Every flag defaults
/// to `false`: mutation is opt-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MutationConfig {
    #[serde(default)]
    pub apply_to_tags: bool,
    #[serde(default)]
    pub apply_to_glossary_terms: bool,
    #[serde(default)]
    pub apply_to_glossary_nodes: bool,
    #[serde(default)]
    pub apply_to_domains: bool,
    #[serde(default)]
    pub apply_to_data_products: bool,
    #[serde(default)]
    pub apply_to_structured_properties: bool,

    /// Source platform-instance id -> target id. Ordered so substring
    /// replacement runs in a stable order.
    #[serde(default)]
    pub platform_instance_mapping: BTreeMap<String, String>,

    /// Free-form settings carried alongside the flags. Not interpreted by the
    /// engine.
    #[serde(default)]
    pub custom_properties: BTreeMap<String, serde_json::Value>,
}

impl MutationConfig {
    /// Whether `flag` is switched on.
    #[must_use]
    pub const fn is_enabled(&self, flag: MutationFlag) -> bool {
        match flag {
            MutationFlag::ApplyToTags => self.apply_to_tags,
            MutationFlag::ApplyToGlossaryTerms => self.apply_to_glossary_terms,
            MutationFlag::ApplyToGlossaryNodes => self.apply_to_glossary_nodes,
            MutationFlag::ApplyToDomains => self.apply_to_domains,
            MutationFlag::ApplyToDataProducts => self.apply_to_data_products,
            MutationFlag::ApplyToStructuredProperties => self.apply_to_structured_properties,
        }
    }

    /// Builder-style flag setter.
    #[must_use]
    pub fn with_flag(mut self, flag: MutationFlag, enabled: bool) -> Self {
        match flag {
            MutationFlag::ApplyToTags => self.apply_to_tags = enabled,
            MutationFlag::ApplyToGlossaryTerms => self.apply_to_glossary_terms = enabled,
            MutationFlag::ApplyToGlossaryNodes => self.apply_to_glossary_nodes = enabled,
            MutationFlag::ApplyToDomains => self.apply_to_domains = enabled,
            MutationFlag::ApplyToDataProducts => self.apply_to_data_products = enabled,
            MutationFlag::ApplyToStructuredProperties => {
                self.apply_to_structured_properties = enabled;
            }
        }
        self
    }

    /// Builder-style platform-instance mapping entry.
    #[must_use]
    pub fn with_instance_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.platform_instance_mapping.insert(from.into(), to.into());
        self
    }

    /// Whether URNs of `entity_type` are rewritten under this config.
    #[must_use]
    pub fn applies_to(&self, entity_type: EntityType) -> bool {
        entity_type
            .mutation_flag()
            .is_some_and(|flag| self.is_enabled(flag))
    }

    /// Flags currently switched on, in declaration order.
    #[must_use]
    pub fn enabled_flags(&self) -> Vec<MutationFlag> {
        MutationFlag::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
            .collect()
    }

    /// True when no flag is on and no instance mapping is configured, i.e.
    /// rewriting under this config changes nothing.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.enabled_flags().is_empty() && self.platform_instance_mapping.is_empty()
    }
}

/// Source of mutation rules keyed by environment name.
///
/// Implementations perform the lookup; the engine itself only ever receives
/// the resulting `MutationConfig` as an explicit argument.
pub trait MutationConfigProvider {
    fn lookup(&self, environment: &str) -> Option<MutationConfig>;
}

impl MutationConfigProvider for BTreeMap<String, MutationConfig> {
    fn lookup(&self, environment: &str) -> Option<MutationConfig> {
        self.get(environment).cloned()
    }
}

impl MutationConfigProvider for HashMap<String, MutationConfig> {
    fn lookup(&self, environment: &str) -> Option<MutationConfig> {
        self.get(environment).cloned()
    }
}
