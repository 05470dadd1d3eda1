//! Deterministic URN construction from human-readable names.

use dhub_core::{EntityType, URN_PREFIX, canonicalize_entity_type};

use crate::hash::hash_token;

/// Environment that never receives hashed identifiers.
pub const DEV_ENVIRONMENT: &str = "dev";

/// Lower-case and trim an entity name.
///
/// Names differing only in case or surrounding whitespace collide on purpose,
/// so re-running a promotion produces the same URNs.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Build `urn:li:<type>:<name>` with the glossary-term namespace rule.
///
/// Glossary terms with a namespace get `<namespace>.<name>` as identifier.
/// Unknown entity types pass through lower-cased.
#[must_use]
pub fn build_base_urn(entity_type: &str, name: &str, namespace: Option<&str>) -> String {
    let canonical = canonicalize_entity_type(entity_type);
    let name = normalize_name(name);

    let identifier = match non_empty(namespace) {
        Some(ns) if canonical == EntityType::GlossaryTerm.as_str() => format!("{ns}.{name}"),
        _ => name,
    };

    format!("{URN_PREFIX}{canonical}:{identifier}")
}

/// Whether `environment` is the unhashed default.
#[must_use]
pub fn is_dev_environment(environment: Option<&str>) -> bool {
    environment.is_none_or(|env| env.is_empty() || env == DEV_ENVIRONMENT)
}

/// Build a URN whose identifier is an environment-salted hash of the name.
///
/// Returns [`build_base_urn`] unchanged for the dev environment (absent,
/// empty, or `"dev"`). Otherwise hashes
/// `<env>_<canonicalType>_<normalizedName>[_<namespace>]`.
#[must_use]
pub fn build_hashed_urn(
    entity_type: &str,
    name: &str,
    namespace: Option<&str>,
    environment: Option<&str>,
) -> String {
    let env = match environment {
        Some(env) if !is_dev_environment(Some(env)) => env,
        _ => return build_base_urn(entity_type, name, namespace),
    };

    let canonical = canonicalize_entity_type(entity_type);
    let mut hash_input = format!("{env}_{canonical}_{}", normalize_name(name));
    if let Some(ns) = non_empty(namespace) {
        hash_input.push('_');
        hash_input.push_str(ns);
    }

    format!("{URN_PREFIX}{canonical}:{}", hash_token(&hash_input))
}
