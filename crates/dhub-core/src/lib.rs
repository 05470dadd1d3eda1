//! # dhub-core
//!
//! Core value types shared by the dhub crates.
//!
//! - `EntityType`, `MutationFlag` and `RelationKind` enums
//! - URN shape, parsing helpers and entity-type canonicalization
//! - `MutationConfig` and the `MutationConfigProvider` lookup trait
//! - Cross-cutting error types
//!
//! Nothing here performs I/O or hashing; that lives in `dhub-urn`.

pub mod enums;
pub mod errors;
pub mod mutation_config;
pub mod urn;

pub use enums::{EntityType, MutationFlag, RelationKind};
pub use errors::CoreError;
pub use mutation_config::{MutationConfig, MutationConfigProvider};
pub use urn::{URN_PREFIX, Urn, canonicalize_entity_type, entity_name_of, entity_type_of};
