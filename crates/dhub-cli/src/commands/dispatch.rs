use dhub_config::DhubConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command that needs configuration.
pub fn dispatch(command: Commands, config: &DhubConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Hash(args) => commands::hash::handle(&args, config, flags),
        Commands::Mutate(args) => commands::mutate::handle(&args, config, flags),
        Commands::Rewrite(args) => commands::rewrite::handle(&args, config, flags),
        Commands::Envs => commands::envs::handle(config, flags),
        Commands::Build(_) | Commands::Parse(_) | Commands::Schema => {
            unreachable!("build/parse/schema are pre-dispatched in main")
        }
    }
}
