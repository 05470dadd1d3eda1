//! # dhub-urn
//!
//! Deterministic URN generation and environment mutation for DataHub
//! metadata entities.
//!
//! - [`build_base_urn`] / [`build_hashed_urn`] derive URNs from names
//! - [`mutate`] / [`mutate_urn`] rewrite an existing URN for a target environment
//! - [`rewrite_associations`] rewrites URNs embedded in aspect payloads
//!
//! Every function is pure: same inputs, byte-identical output, no I/O and no
//! shared state. Failures degrade to returning the input unchanged.

pub mod associations;
pub mod build;
pub mod hash;
pub mod mutate;
pub mod platform;

pub use associations::{
    DEFAULT_MAX_DEPTH, RewriteOptions, RewriteReport, rewrite_associations,
    rewrite_associations_in_place,
};
pub use build::{
    DEV_ENVIRONMENT, build_base_urn, build_hashed_urn, is_dev_environment, normalize_name,
};
pub use hash::{HashToken, hash_token, is_hash_token};
pub use mutate::{
    MutationOutcome, MutationReason, mutate, mutate_by_type_name, mutate_for_environment,
    mutate_urn,
};
pub use platform::apply_instance_mapping;
