//! Environment mutation of existing URNs.
//!
//! A URN is rewritten only when all of these hold: the input and environment
//! are non-empty, a `MutationConfig` is supplied, the entity type has a
//! capability flag, and that flag is on. Anything else returns the input
//! unchanged together with the reason.
//!
//! The replacement identifier is seeded by the input URN itself
//! (`<environment>_<input_urn>`), so two entities sharing a display name but
//! holding different source identifiers stay distinct after promotion.

use dhub_core::{EntityType, MutationConfig, MutationConfigProvider, MutationFlag, Urn};
use serde::Serialize;

use crate::hash::hash_token;

/// Why [`mutate`] did or did not rewrite a URN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MutationReason {
    Applied,
    EmptyInput,
    EmptyEnvironment,
    NoConfig,
    UnknownEntityType,
    /// Entity type exists but has no capability flag (assertions).
    Unsupported,
    Disabled {
        flag: MutationFlag,
    },
}

/// Result of a mutation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationOutcome {
    pub urn: String,
    pub reason: MutationReason,
}

impl MutationOutcome {
    fn unchanged(input_urn: &str, reason: MutationReason) -> Self {
        Self {
            urn: input_urn.to_string(),
            reason,
        }
    }

    #[must_use]
    pub fn was_mutated(&self) -> bool {
        self.reason == MutationReason::Applied
    }
}

/// Rewrite `input_urn` for `environment` if `config` enables its entity type.
#[must_use]
pub fn mutate(
    input_urn: &str,
    environment: &str,
    entity_type: EntityType,
    config: Option<&MutationConfig>,
) -> MutationOutcome {
    if input_urn.is_empty() {
        return MutationOutcome::unchanged(input_urn, MutationReason::EmptyInput);
    }
    if environment.is_empty() {
        return MutationOutcome::unchanged(input_urn, MutationReason::EmptyEnvironment);
    }
    let Some(config) = config else {
        return MutationOutcome::unchanged(input_urn, MutationReason::NoConfig);
    };
    let Some(flag) = entity_type.mutation_flag() else {
        tracing::warn!(%entity_type, urn = input_urn, "no mutation flag for entity type; leaving URN unchanged");
        return MutationOutcome::unchanged(input_urn, MutationReason::Unsupported);
    };
    if !config.is_enabled(flag) {
        return MutationOutcome::unchanged(input_urn, MutationReason::Disabled { flag });
    }

    let token = hash_token(&format!("{environment}_{input_urn}"));
    let urn = Urn::new(entity_type, token.as_str()).into_inner();
    tracing::debug!(from = input_urn, to = %urn, environment, "mutated URN");

    MutationOutcome {
        urn,
        reason: MutationReason::Applied,
    }
}

/// String-typed wrapper over [`mutate`] returning only the resulting URN.
///
/// Unrecognized entity type names are logged and leave the URN unchanged.
#[must_use]
pub fn mutate_urn(
    input_urn: &str,
    environment: &str,
    entity_type: &str,
    config: Option<&MutationConfig>,
) -> String {
    mutate_by_type_name(input_urn, environment, entity_type, config).urn
}

/// Like [`mutate_urn`] but keeps the outcome.
///
/// `entity_type` must be the exact URN segment (`glossaryTerm`, not
/// `GlossaryTerm`).
#[must_use]
pub fn mutate_by_type_name(
    input_urn: &str,
    environment: &str,
    entity_type: &str,
    config: Option<&MutationConfig>,
) -> MutationOutcome {
    if input_urn.is_empty() {
        return MutationOutcome::unchanged(input_urn, MutationReason::EmptyInput);
    }
    if environment.is_empty() {
        return MutationOutcome::unchanged(input_urn, MutationReason::EmptyEnvironment);
    }
    if config.is_none() {
        return MutationOutcome::unchanged(input_urn, MutationReason::NoConfig);
    }
    match EntityType::from_segment(entity_type) {
        Some(ty) => mutate(input_urn, environment, ty, config),
        None => {
            tracing::warn!(entity_type, urn = input_urn, "unknown entity type; leaving URN unchanged");
            MutationOutcome::unchanged(input_urn, MutationReason::UnknownEntityType)
        }
    }
}

/// Look up `environment` in `provider` and mutate with whatever it returns.
#[must_use]
pub fn mutate_for_environment<P>(
    input_urn: &str,
    environment: &str,
    entity_type: EntityType,
    provider: &P,
) -> MutationOutcome
where
    P: MutationConfigProvider + ?Sized,
{
    let config = provider.lookup(environment);
    mutate(input_urn, environment, entity_type, config.as_ref())
}
