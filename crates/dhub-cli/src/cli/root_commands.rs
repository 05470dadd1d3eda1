use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the readable URN for an entity name.
    Build(BuildArgs),
    /// Build the environment-hashed URN for an entity name.
    Hash(HashArgs),
    /// Rewrite one URN for a target environment.
    Mutate(MutateArgs),
    /// Split a URN into entity type and identifier.
    Parse(ParseArgs),
    /// Rewrite every association URN in a JSON export.
    Rewrite(RewriteArgs),
    /// List configured environments and their mutation flags.
    Envs,
    /// Print the JSON Schema of an environment's mutation rules.
    Schema,
}

/// Arguments for `dhub build`.
#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Entity type (tag, glossaryTerm, domain, ...). Case-insensitive.
    pub entity_type: String,
    /// Human-readable entity name.
    pub name: String,
    /// Glossary-term namespace (e.g. `Finance`).
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Arguments for `dhub hash`.
#[derive(Clone, Debug, Args)]
pub struct HashArgs {
    pub entity_type: String,
    pub name: String,
    #[arg(long)]
    pub namespace: Option<String>,
    /// Target environment (defaults to `general.default_environment`).
    #[arg(long)]
    pub env: Option<String>,
}

/// Arguments for `dhub mutate`.
#[derive(Clone, Debug, Args)]
pub struct MutateArgs {
    pub urn: String,
    /// Target environment; its `[environments.<name>]` table supplies the flags.
    #[arg(long)]
    pub env: String,
    /// Entity type to mutate as (defaults to the URN's own type).
    #[arg(long = "type")]
    pub entity_type: Option<String>,
}

/// Arguments for `dhub parse`.
#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    pub urn: String,
}

/// Arguments for `dhub rewrite`.
#[derive(Clone, Debug, Args)]
pub struct RewriteArgs {
    /// JSON file holding one record or an array of records.
    pub input: PathBuf,
    #[arg(long)]
    pub env: String,
    /// Write the rewritten payload here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Leave each record's own URN untouched (editable aspects).
    #[arg(long)]
    pub keep_own_urn: bool,
    /// Override `general.max_depth`.
    #[arg(long)]
    pub max_depth: Option<usize>,
}
