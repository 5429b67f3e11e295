//! Output formatters for CLI commands.
//!
//! Provides two output formats: human-readable text and JSON.

use anyhow::Result;
use repotools_client::{Asset, Component};
use repotools_extract::FieldMap;

/// Placeholder printed for absent values in text output.
const MISSING: &str = "-";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format an asset list.
    fn format_assets(&self, assets: &[Asset]) -> Result<String>;

    /// Format a component list.
    fn format_components(&self, components: &[Component]) -> Result<String>;

    /// Format extracted fields.
    fn format_fields(&self, fields: &FieldMap) -> Result<String>;
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_assets(&self, assets: &[Asset]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(assets)?))
    }

    fn format_components(&self, components: &[Component]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(components)?))
    }

    fn format_fields(&self, fields: &FieldMap) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(fields)?))
    }
}

/// Text formatter: one tab-separated line per item.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_assets(&self, assets: &[Asset]) -> Result<String> {
        if assets.is_empty() {
            return Ok("No assets found.\n".to_string());
        }

        let mut output = String::new();
        for asset in assets {
            output.push_str(&asset_line(asset, ""));
        }
        Ok(output)
    }

    fn format_components(&self, components: &[Component]) -> Result<String> {
        if components.is_empty() {
            return Ok("No components found.\n".to_string());
        }

        let mut output = String::new();
        for component in components {
            output.push_str(&format!(
                "{}\t{}\t{} asset(s)\n",
                component.coordinates(),
                component.format.as_deref().unwrap_or(MISSING),
                component.assets.len()
            ));
            for asset in &component.assets {
                output.push_str(&asset_line(asset, "  "));
            }
        }
        Ok(output)
    }

    fn format_fields(&self, fields: &FieldMap) -> Result<String> {
        let mut output = String::new();
        for (key, value) in fields {
            output.push_str(&format!(
                "{}\t{}\n",
                key,
                value.as_deref().unwrap_or("(not found)")
            ));
        }
        Ok(output)
    }
}

fn asset_line(asset: &Asset, indent: &str) -> String {
    format!(
        "{}{}\t{}\t{}\n",
        indent,
        asset.path,
        asset.sha256().unwrap_or(MISSING),
        asset.download_url.as_deref().unwrap_or(MISSING)
    )
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str, sha256: Option<&str>) -> Asset {
        let mut json = serde_json::json!({
            "path": path,
            "downloadUrl": format!("http://localhost:8081/repository/raw-hosted/{}", path),
        });
        if let Some(sha256) = sha256 {
            json["checksum"] = serde_json::json!({ "sha256": sha256 });
        }
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_text_assets() {
        let output = TextFormatter
            .format_assets(&[asset("a.txt", Some("abc")), asset("b.txt", None)])
            .unwrap();
        assert_eq!(
            output,
            "a.txt\tabc\thttp://localhost:8081/repository/raw-hosted/a.txt\n\
             b.txt\t-\thttp://localhost:8081/repository/raw-hosted/b.txt\n"
        );
    }

    #[test]
    fn test_text_empty_assets() {
        assert_eq!(TextFormatter.format_assets(&[]).unwrap(), "No assets found.\n");
    }

    #[test]
    fn test_text_components_list_assets() {
        let component: Component = serde_json::from_value(serde_json::json!({
            "group": "org.example",
            "name": "app",
            "version": "1.0.0",
            "format": "maven2",
            "assets": [{ "path": "org/example/app/1.0.0/app-1.0.0.jar" }]
        }))
        .unwrap();

        let output = TextFormatter.format_components(&[component]).unwrap();
        assert_eq!(
            output,
            "org.example:app:1.0.0\tmaven2\t1 asset(s)\n  org/example/app/1.0.0/app-1.0.0.jar\t-\t-\n"
        );
    }

    #[test]
    fn test_fields_text_and_json() {
        let mut fields = FieldMap::new();
        fields.insert("K1".to_string(), Some("v1".to_string()));
        fields.insert("K2".to_string(), None);

        assert_eq!(
            TextFormatter.format_fields(&fields).unwrap(),
            "K1\tv1\nK2\t(not found)\n"
        );

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_fields(&fields).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "K1": "v1", "K2": null }));
    }
}
