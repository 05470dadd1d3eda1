use dhub_core::EntityType;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;

/// Response for `dhub build` and `dhub hash`.
#[derive(Debug, Serialize)]
pub struct BuiltUrn {
    pub urn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub hashed: bool,
}

/// Warn when `entity_type` is outside the managed set; the URN is still built.
pub fn warn_if_unmanaged(entity_type: &str) {
    if EntityType::lookup(entity_type).is_none() {
        tracing::warn!(entity_type, "entity type is not managed by dhub; using it verbatim");
    }
}

/// Handle `dhub build`.
pub fn handle(args: &BuildArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(args), flags.format)
}

fn build(args: &BuildArgs) -> BuiltUrn {
    warn_if_unmanaged(&args.entity_type);
    BuiltUrn {
        urn: dhub_urn::build_base_urn(&args.entity_type, &args.name, args.namespace.as_deref()),
        environment: None,
        hashed: false,
    }
}
