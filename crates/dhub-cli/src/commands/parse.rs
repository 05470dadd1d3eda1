use dhub_core::Urn;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ParsedUrn {
    pub entity_type: String,
    pub entity_name: String,
    /// Whether dhub manages (and can mutate) this entity type.
    pub managed: bool,
}

/// Handle `dhub parse`.
pub fn handle(args: &ParseArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&parse(&args.urn)?, flags.format)
}

fn parse(raw: &str) -> anyhow::Result<ParsedUrn> {
    let urn: Urn = raw.parse()?;
    Ok(ParsedUrn {
        entity_type: urn.entity_type_segment().to_string(),
        entity_name: urn.id().to_string(),
        managed: urn.entity_type().is_some_and(|ty| ty.mutation_flag().is_some()),
    })
}
