use std::collections::BTreeMap;

use dhub_config::DhubConfig;
use dhub_core::MutationFlag;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct EnvironmentSummary {
    pub name: String,
    pub is_default: bool,
    pub enabled_flags: Vec<MutationFlag>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_instance_mapping: BTreeMap<String, String>,
}

/// Handle `dhub envs`.
pub fn handle(config: &DhubConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&summarize(config), flags.format)
}

fn summarize(config: &DhubConfig) -> Vec<EnvironmentSummary> {
    config
        .environments
        .iter()
        .map(|(name, rules)| EnvironmentSummary {
            name: name.clone(),
            is_default: *name == config.general.default_environment,
            enabled_flags: rules.enabled_flags(),
            platform_instance_mapping: rules.platform_instance_mapping.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use dhub_core::MutationConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn lists_environments_in_name_order() {
        let mut config = DhubConfig::default();
        config.general.default_environment = "staging".to_string();
        config.environments.insert(
            "staging".to_string(),
            MutationConfig::default().with_flag(MutationFlag::ApplyToTags, true),
        );
        config.environments.insert(
            "prod".to_string(),
            MutationConfig::default().with_instance_mapping("dev_wh", "prod_wh"),
        );

        let json = serde_json::to_value(summarize(&config)).unwrap();
        assert_eq!(
            json,
            json!([
                {
                    "name": "prod",
                    "is_default": false,
                    "enabled_flags": [],
                    "platform_instance_mapping": {"dev_wh": "prod_wh"}
                },
                {
                    "name": "staging",
                    "is_default": true,
                    "enabled_flags": ["apply_to_tags"]
                }
            ])
        );
    }

    #[test]
    fn empty_config_lists_nothing() {
        assert!(summarize(&DhubConfig::default()).is_empty());
    }
}
