use dhub_config::DhubConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HashArgs;
use crate::commands::build::{BuiltUrn, warn_if_unmanaged};
use crate::output::output;

/// Handle `dhub hash`.
pub fn handle(args: &HashArgs, config: &DhubConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&hash(args, config), flags.format)
}

fn hash(args: &HashArgs, config: &DhubConfig) -> BuiltUrn {
    warn_if_unmanaged(&args.entity_type);
    let environment = config.resolve_environment(args.env.as_deref());
    BuiltUrn {
        urn: dhub_urn::build_hashed_urn(
            &args.entity_type,
            &args.name,
            args.namespace.as_deref(),
            Some(environment),
        ),
        environment: Some(environment.to_string()),
        hashed: !dhub_urn::is_dev_environment(Some(environment)),
    }
}
