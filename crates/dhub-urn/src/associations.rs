//! Rewriting URNs embedded in entity aspect payloads.
//!
//! A payload is one entity record (an object), an MCP record
//! (`entityUrn` / `aspectName` / `aspect`), or an array of either. Each
//! record is handled in three layers:
//!
//! 1. Own-URN keys (`urn`, `entityUrn`, `entity_urn`) are rewritten only when
//!    [`RewriteOptions::mutate_own_entity_urn`] is set.
//! 2. Aspects with a known [`RelationKind`] get a dedicated pass that touches
//!    only the slots holding that relation's URNs, gated by its flag.
//!    Ownership is never touched.
//! 3. Everything else is walked generically: every string that is a URN of a
//!    flagged entity type, or a bare value under a typed URN key, is mutated.
//!
//! Only string leaves change. Object key sets and array lengths are kept.

use dhub_core::{EntityType, MutationConfig, RelationKind, URN_PREFIX, entity_type_of};
use serde::Serialize;
use serde_json::Value;

use crate::mutate::mutate;
use crate::platform::apply_instance_mapping;

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Keys naming the record's own entity.
pub const OWN_URN_KEYS: [&str; 3] = ["urn", "entityUrn", "entity_urn"];

/// Entity type implied by a URN-bearing key, for bare (unprefixed) values.
#[must_use]
pub fn key_entity_type(key: &str) -> Option<EntityType> {
    match key {
        "tag_urn" => Some(EntityType::Tag),
        "term_urn" | "glossary_term_urn" => Some(EntityType::GlossaryTerm),
        "node_urn" | "glossary_node_urn" | "parentNode" => Some(EntityType::GlossaryNode),
        "domain_urn" => Some(EntityType::Domain),
        "property_urn" | "propertyUrn" => Some(EntityType::StructuredProperty),
        "data_product_urn" => Some(EntityType::DataProduct),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Rewrite the record's own URN. Editable aspects keep their identity
    /// stable and set this to `false`.
    pub mutate_own_entity_urn: bool,
    /// Nesting beyond this depth is left untouched.
    pub max_depth: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            mutate_own_entity_urn: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RewriteOptions {
    #[must_use]
    pub const fn keep_own_urn(mut self) -> Self {
        self.mutate_own_entity_urn = false;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    /// String leaves that changed.
    pub rewritten: usize,
    /// Some subtree exceeded `max_depth` and was skipped.
    pub depth_limited: bool,
}

/// Rewrite a copy of `payload`; the input is left untouched.
#[must_use]
pub fn rewrite_associations(
    payload: &Value,
    environment: &str,
    config: &MutationConfig,
    options: RewriteOptions,
) -> Value {
    let mut rewritten = payload.clone();
    rewrite_associations_in_place(&mut rewritten, environment, config, options);
    rewritten
}

/// Rewrite `payload` in place and report what changed.
pub fn rewrite_associations_in_place(
    payload: &mut Value,
    environment: &str,
    config: &MutationConfig,
    options: RewriteOptions,
) -> RewriteReport {
    let mut rewriter = Rewriter {
        environment,
        config,
        options,
        report: RewriteReport::default(),
    };

    match payload {
        Value::Array(records) => {
            for record in records {
                rewriter.record(record, 1);
            }
        }
        other => rewriter.record(other, 0),
    }

    if rewriter.report.depth_limited {
        tracing::warn!(
            max_depth = options.max_depth,
            "payload nested beyond max depth; deeper values left unchanged"
        );
    }
    rewriter.report
}

/// Where a key inside a relation aspect sits.
enum Slot {
    Typed {
        target: EntityType,
        /// Field holding the URN when the slot is an array of objects.
        field: Option<&'static str>,
    },
    InstanceId,
    Walk,
}

fn slot(kind: RelationKind, key: &str) -> Slot {
    let field = match (kind, key) {
        (RelationKind::GlobalTags, "tags") => Some("tag"),
        (RelationKind::GlossaryTerms, "terms") => Some("urn"),
        (RelationKind::StructuredProperties, "properties") => Some("propertyUrn"),
        (RelationKind::Domains, "domains")
        | (RelationKind::ParentNode, "parentNode")
        | (
            RelationKind::RelatedTerms,
            "isRelatedTerms" | "hasRelatedTerms" | "values" | "relatedTerms",
        ) => None,
        (RelationKind::PlatformInstance, "instanceId") => return Slot::InstanceId,
        _ => return Slot::Walk,
    };
    kind.target()
        .map_or(Slot::Walk, |target| Slot::Typed { target, field })
}

/// Unwrap the `{"json": {...}}` envelope used by MCP files.
fn aspect_body(aspect: &mut Value) -> &mut Value {
    let wrapped =
        matches!(&*aspect, Value::Object(map) if map.len() == 1 && map.contains_key("json"));
    if wrapped { &mut aspect["json"] } else { aspect }
}

struct Rewriter<'a> {
    environment: &'a str,
    config: &'a MutationConfig,
    options: RewriteOptions,
    report: RewriteReport,
}

impl Rewriter<'_> {
    fn enter(&mut self, depth: usize) -> bool {
        if depth > self.options.max_depth {
            self.report.depth_limited = true;
            return false;
        }
        true
    }

    fn record(&mut self, record: &mut Value, depth: usize) {
        if !self.enter(depth) {
            return;
        }
        let Value::Object(fields) = record else {
            self.walk(record, depth);
            return;
        };

        let mcp_aspect = fields
            .get("aspectName")
            .and_then(Value::as_str)
            .and_then(RelationKind::from_aspect_name);

        for (key, value) in fields.iter_mut() {
            if OWN_URN_KEYS.contains(&key.as_str()) {
                if self.options.mutate_own_entity_urn {
                    self.own_urn(key, value);
                }
                continue;
            }
            let kind = if key == "aspect" {
                mcp_aspect
            } else {
                RelationKind::from_aspect_name(key)
            };
            match kind {
                Some(kind) => self.aspect(kind, aspect_body(value), depth + 1),
                None => self.walk_entry(Some(key.as_str()), value, depth + 1),
            }
        }
    }

    fn own_urn(&mut self, key: &str, value: &mut Value) {
        let Value::String(urn) = value else {
            return;
        };
        let mut remapped = false;
        if key == "urn" {
            if let Some(mapped) = apply_instance_mapping(urn, &self.config.platform_instance_mapping)
            {
                *urn = mapped;
                remapped = true;
            }
        }

        // One leaf, counted once even when both the mapping and the hash apply.
        let before = self.report.rewritten;
        self.candidate(None, urn);
        if remapped && self.report.rewritten == before {
            self.report.rewritten += 1;
        }
    }

    fn aspect(&mut self, kind: RelationKind, aspect: &mut Value, depth: usize) {
        // Owners are corpusers and groups; they never move between environments.
        if kind == RelationKind::Ownership || !self.enter(depth) {
            return;
        }
        let Value::Object(fields) = aspect else {
            self.walk(aspect, depth);
            return;
        };

        for (key, value) in fields.iter_mut() {
            match slot(kind, key) {
                Slot::Typed { target, field } => self.typed(value, target, field, depth + 1),
                Slot::InstanceId => self.instance_id(value),
                Slot::Walk => self.walk_entry(Some(key.as_str()), value, depth + 1),
            }
        }
    }

    fn typed(
        &mut self,
        value: &mut Value,
        target: EntityType,
        field: Option<&str>,
        depth: usize,
    ) {
        if !self.enter(depth) {
            return;
        }
        match value {
            Value::String(s) => self.rewrite_as(s, target),
            Value::Array(items) => {
                for item in items {
                    self.typed(item, target, field, depth + 1);
                }
            }
            Value::Object(map) => {
                for (key, v) in map.iter_mut() {
                    if field == Some(key.as_str()) {
                        self.typed(v, target, None, depth + 1);
                    } else {
                        self.walk_entry(Some(key.as_str()), v, depth + 1);
                    }
                }
            }
            _ => {}
        }
    }

    fn instance_id(&mut self, value: &mut Value) {
        if let Value::String(id) = value {
            if let Some(mapped) = apply_instance_mapping(id, &self.config.platform_instance_mapping) {
                *id = mapped;
                self.report.rewritten += 1;
            }
        }
    }

    fn walk(&mut self, value: &mut Value, depth: usize) {
        if !self.enter(depth) {
            return;
        }
        match value {
            Value::Object(map) => {
                for (key, v) in map.iter_mut() {
                    self.walk_entry(Some(key.as_str()), v, depth + 1);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.walk_entry(None, item, depth + 1);
                }
            }
            Value::String(s) => self.candidate(None, s),
            _ => {}
        }
    }

    fn walk_entry(&mut self, key: Option<&str>, value: &mut Value, depth: usize) {
        match value {
            Value::String(s) => self.candidate(key, s),
            other => self.walk(other, depth),
        }
    }

    /// Mutate `s` if it is a URN of a flagged type, or a bare value under a
    /// typed URN key.
    fn candidate(&mut self, key: Option<&str>, s: &mut String) {
        let entity_type = if s.starts_with(URN_PREFIX) {
            entity_type_of(s).and_then(EntityType::from_segment)
        } else {
            key.and_then(key_entity_type)
        };
        if let Some(entity_type) = entity_type {
            self.apply(s, entity_type);
        }
    }

    /// Mutate `s` only if it is a URN of exactly `target`.
    fn rewrite_as(&mut self, s: &mut String, target: EntityType) {
        let is_target = entity_type_of(s) == Some(target.as_str());
        if is_target {
            self.apply(s, target);
        }
    }

    fn apply(&mut self, s: &mut String, entity_type: EntityType) {
        if s.is_empty() || !self.config.applies_to(entity_type) {
            return;
        }
        let outcome = mutate(s, self.environment, entity_type, Some(self.config));
        if outcome.was_mutated() {
            *s = outcome.urn;
            self.report.rewritten += 1;
        }
    }
}
