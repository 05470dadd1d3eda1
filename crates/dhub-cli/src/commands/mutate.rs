use anyhow::Context;
use dhub_config::DhubConfig;
use dhub_core::{MutationConfigProvider, entity_type_of};
use dhub_urn::MutationOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MutateArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct MutateResponse {
    pub input: String,
    pub environment: String,
    pub entity_type: String,
    #[serde(flatten)]
    pub outcome: MutationOutcome,
}

/// Handle `dhub mutate`.
pub fn handle(args: &MutateArgs, config: &DhubConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&mutate(args, config)?, flags.format)
}

fn mutate(args: &MutateArgs, config: &DhubConfig) -> anyhow::Result<MutateResponse> {
    let entity_type = match &args.entity_type {
        Some(entity_type) => entity_type.clone(),
        None => entity_type_of(&args.urn)
            .map(str::to_string)
            .with_context(|| format!("'{}' is not a URN; pass --type explicitly", args.urn))?,
    };

    let rules = config.lookup(&args.env);
    if rules.is_none() {
        tracing::warn!(environment = %args.env, "environment is not configured; URN left unchanged");
    }

    let outcome =
        dhub_urn::mutate_by_type_name(&args.urn, &args.env, &entity_type, rules.as_ref());
    Ok(MutateResponse {
        input: args.urn.clone(),
        environment: args.env.clone(),
        entity_type,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use dhub_core::{MutationConfig, MutationFlag};
    use dhub_urn::MutationReason;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> DhubConfig {
        let mut config = DhubConfig::default();
        config.environments.insert(
            "staging".to_string(),
            MutationConfig::default().with_flag(MutationFlag::ApplyToDomains, true),
        );
        config
    }

    fn args(urn: &str, env: &str, entity_type: Option<&str>) -> MutateArgs {
        MutateArgs {
            urn: urn.to_string(),
            env: env.to_string(),
            entity_type: entity_type.map(str::to_string),
        }
    }

    #[test]
    fn type_defaults_to_urn_segment() {
        let response = mutate(&args("urn:li:domain:marketing", "staging", None), &config()).unwrap();
        assert_eq!(response.entity_type, "domain");
        assert_eq!(
            response.outcome.urn,
            "urn:li:domain:18afa29b-a36f-7aee-b859-77f201e92a05"
        );
        assert!(response.outcome.was_mutated());
    }

    #[test]
    fn unconfigured_environment_is_a_no_op() {
        let response = mutate(&args("urn:li:domain:marketing", "prod", None), &config()).unwrap();
        assert_eq!(response.outcome.urn, "urn:li:domain:marketing");
        assert_eq!(response.outcome.reason, MutationReason::NoConfig);
    }

    #[test]
    fn explicit_type_overrides_segment() {
        let response = mutate(
            &args("urn:li:tag:marketing", "staging", Some("domain")),
            &config(),
        )
        .unwrap();
        assert!(response.outcome.urn.starts_with("urn:li:domain:"));
    }

    #[test]
    fn non_urn_without_type_is_an_error() {
        let err = mutate(&args("marketing", "staging", None), &config()).unwrap_err();
        assert!(err.to_string().contains("--type"));
    }

    #[test]
    fn response_flattens_outcome() {
        let response = mutate(&args("urn:li:tag:pii", "staging", None), &config()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["urn"], "urn:li:tag:pii");
        assert_eq!(json["reason"]["kind"], "disabled");
        assert_eq!(json["reason"]["flag"], "apply_to_tags");
    }
}
