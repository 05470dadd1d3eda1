use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
///
/// `Raw` is single-line JSON, except that a bare string is printed unquoted
/// so URNs can be piped straight into other tools.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => match serde_json::to_value(value)? {
            serde_json::Value::String(s) => Ok(s),
            other => Ok(serde_json::to_string(&other)?),
        },
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        urn: &'static str,
        depth: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            urn: "urn:li:tag:pii",
            depth: 7,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["urn"], "urn:li:tag:pii");
        assert_eq!(parsed["depth"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            urn: "urn:li:tag:pii",
            depth: 7,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["urn"], "urn:li:tag:pii");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn raw_render_unquotes_strings() {
        let out = render(&"urn:li:tag:pii", OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, "urn:li:tag:pii");

        let json = render(&"urn:li:tag:pii", OutputFormat::Json).expect("json render should work");
        assert_eq!(json, "\"urn:li:tag:pii\"");
    }
}
