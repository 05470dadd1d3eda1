use dhub_core::MutationConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `dhub schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(MutationConfig);
    output(&schema, flags.format)
}

#[cfg(test)]
mod tests {
    use dhub_core::MutationConfig;

    #[test]
    fn schema_lists_every_flag() {
        let schema = serde_json::to_value(schemars::schema_for!(MutationConfig)).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        for flag in dhub_core::MutationFlag::ALL {
            assert!(properties.contains_key(flag.as_str()), "missing {flag}");
        }
        assert!(properties.contains_key("platform_instance_mapping"));
    }
}
