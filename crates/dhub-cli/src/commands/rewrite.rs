use std::path::PathBuf;

use anyhow::{Context, bail};
use dhub_config::DhubConfig;
use dhub_urn::{RewriteOptions, RewriteReport, rewrite_associations_in_place};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RewriteArgs;
use crate::output::output;

/// Printed instead of the payload when `--output` is given.
#[derive(Debug, Serialize)]
pub struct RewriteSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub environment: String,
    #[serde(flatten)]
    pub report: RewriteReport,
}

/// Handle `dhub rewrite`.
pub fn handle(args: &RewriteArgs, config: &DhubConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (payload, report) = rewrite(args, config)?;

    let Some(path) = &args.output else {
        return output(&payload, flags.format);
    };

    let mut rendered = serde_json::to_string_pretty(&payload)?;
    rendered.push('\n');
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;

    output(
        &RewriteSummary {
            input: args.input.clone(),
            output: path.clone(),
            environment: args.env.clone(),
            report,
        },
        flags.format,
    )
}

fn rewrite(args: &RewriteArgs, config: &DhubConfig) -> anyhow::Result<(Value, RewriteReport)> {
    let rules = config.environment(&args.env)?;

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mut payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    if !payload.is_object() && !payload.is_array() {
        bail!(
            "{} must hold a JSON object or an array of records",
            args.input.display()
        );
    }

    let mut options =
        RewriteOptions::default().with_max_depth(args.max_depth.unwrap_or(config.general.max_depth));
    if args.keep_own_urn {
        options = options.keep_own_urn();
    }

    let report = rewrite_associations_in_place(&mut payload, &args.env, rules, options);
    tracing::info!(
        input = %args.input.display(),
        environment = %args.env,
        rewritten = report.rewritten,
        "rewrote associations"
    );
    Ok((payload, report))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use dhub_core::{MutationConfig, MutationFlag};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::OutputFormat;

    fn config() -> DhubConfig {
        let mut config = DhubConfig::default();
        config.environments.insert(
            "staging".to_string(),
            MutationConfig::default().with_flag(MutationFlag::ApplyToDomains, true),
        );
        config
    }

    fn args(input: &Path, env: &str) -> RewriteArgs {
        RewriteArgs {
            input: input.to_path_buf(),
            env: env.to_string(),
            output: None,
            keep_own_urn: false,
            max_depth: None,
        }
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            config: None,
        }
    }

    fn write_export(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("export.json");
        let export = json!([{
            "entityType": "dataset",
            "entityUrn": "urn:li:dataset:(urn:li:dataPlatform:hive,db.t,PROD)",
            "changeType": "UPSERT",
            "aspectName": "domains",
            "aspect": {"json": {"domains": ["urn:li:domain:marketing"]}}
        }]);
        std::fs::write(&path, export.to_string()).unwrap();
        path
    }

    #[test]
    fn rewrites_mcp_file() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);

        let (payload, report) = rewrite(&args(&input, "staging"), &config()).unwrap();
        assert_eq!(report.rewritten, 1);
        assert_eq!(
            payload[0]["aspect"]["json"]["domains"][0],
            json!("urn:li:domain:18afa29b-a36f-7aee-b859-77f201e92a05")
        );
    }

    #[test]
    fn output_file_receives_pretty_json() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);
        let out = dir.path().join("promoted.json");

        let mut rewrite_args = args(&input, "staging");
        rewrite_args.output = Some(out.clone());
        handle(&rewrite_args, &config(), &flags()).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.ends_with('\n'));
        let payload: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            payload[0]["aspect"]["json"]["domains"][0],
            json!("urn:li:domain:18afa29b-a36f-7aee-b859-77f201e92a05")
        );
    }

    #[test]
    fn unknown_environment_is_an_error() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);
        let err = rewrite(&args(&input, "prod"), &config()).unwrap_err();
        assert!(err.to_string().contains("prod"));
    }

    #[test]
    fn scalar_payload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("scalar.json");
        std::fs::write(&input, "\"urn:li:tag:pii\"").unwrap();
        assert!(rewrite(&args(&input, "staging"), &config()).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = rewrite(&args(Path::new("/nonexistent/export.json"), "staging"), &config())
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/export.json"));
    }

    #[test]
    fn max_depth_flag_limits_descent() {
        let dir = TempDir::new().unwrap();
        let input = write_export(&dir);
        let mut shallow = args(&input, "staging");
        shallow.max_depth = Some(1);

        let (payload, report) = rewrite(&shallow, &config()).unwrap();
        assert!(report.depth_limited);
        assert_eq!(payload[0]["aspect"]["json"]["domains"][0], json!("urn:li:domain:marketing"));
    }
}
