//! Generator configuration.
//!
//! The generator is driven by a small TOML file naming the service, the
//! generated type names, where the Smithy model lives, where the generated
//! sources go, and how operations are grouped into `input/` and `output/`
//! modules. Relative paths are resolved against the config file's directory.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Default config file name, looked up next to the generator manifest.
pub const DEFAULT_CONFIG_NAME: &str = "waf-regional.toml";

/// Top-level generator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenConfig {
    /// Service identity and generated type names.
    pub service: ServiceConfig,
    /// Input model and output directory.
    pub paths: PathsConfig,
    /// Operation categories (module name -> operation names).
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Service identity and names of the generated service-level types.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Smithy namespace, e.g. `com.amazonaws.wafregional`.
    pub namespace: String,
    /// Human-readable title used in generated docs.
    pub title: String,
    /// JSON protocol target prefix (`X-Amz-Target` header).
    pub target_prefix: String,
    /// Name of the generated operation enum.
    pub operation_enum: String,
    /// Name of the generated error code enum.
    pub error_enum: String,
    /// Name of the generated error struct.
    pub error_struct: String,
}

/// Filesystem locations used by the generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Smithy JSON AST model file.
    pub model: PathBuf,
    /// Directory receiving the generated sources.
    pub output: PathBuf,
}

impl CodegenConfig {
    /// Load and validate a config file, resolving relative paths against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.paths.model = base.join(&config.paths.model);
        config.paths.output = base.join(&config.paths.output);
        Ok(config)
    }

    /// Parse and validate config text. Paths are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<()> {
        if self.service.namespace.trim().is_empty() {
            bail!("service.namespace must not be empty");
        }
        for (key, value) in [
            ("service.operation_enum", &self.service.operation_enum),
            ("service.error_enum", &self.service.error_enum),
            ("service.error_struct", &self.service.error_struct),
        ] {
            if !is_type_name(value) {
                bail!("{key} is not a valid Rust type name: `{value}`");
            }
        }
        if self.categories.is_empty() {
            bail!("at least one operation category is required");
        }

        let mut seen = BTreeSet::new();
        for (category, operations) in &self.categories {
            if !is_module_name(category) {
                bail!("category `{category}` is not a valid Rust module name");
            }
            if operations.is_empty() {
                bail!("category `{category}` lists no operations");
            }
            for op in operations {
                if !seen.insert(op.as_str()) {
                    bail!("operation `{op}` appears in more than one category");
                }
            }
        }
        Ok(())
    }

    /// Fully qualified shape ID for a short name in the service namespace.
    pub fn shape_id(&self, short_name: &str) -> String {
        format!("{}#{short_name}", self.service.namespace)
    }

    /// All configured operations, sorted by name.
    pub fn operations(&self) -> Vec<&str> {
        let mut ops: Vec<&str> = self
            .categories
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        ops.sort_unstable();
        ops
    }
}

fn is_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [service]
        namespace = "com.amazonaws.wafregional"
        title = "AWS WAF Regional"
        target_prefix = "AWSWAF_Regional_20161128"
        operation_enum = "WafRegionalOperation"
        error_enum = "WafRegionalErrorCode"
        error_struct = "WafRegionalError"

        [paths]
        model = "smithy-model/waf-regional.json"
        output = "../crates/waf-regional-model/src"

        [categories]
        rule = ["UpdateRule", "CreateRateBasedRule"]
        change_token = ["GetChangeToken"]
    "#;

    #[test]
    fn test_should_parse_sample_config() {
        let config = CodegenConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.service.target_prefix, "AWSWAF_Regional_20161128");
        assert_eq!(
            config.operations(),
            vec!["CreateRateBasedRule", "GetChangeToken", "UpdateRule"]
        );
        assert_eq!(
            config.shape_id("RateKey"),
            "com.amazonaws.wafregional#RateKey"
        );
    }

    #[test]
    fn test_should_reject_duplicate_operation() {
        let text = SAMPLE.replace(r#"["GetChangeToken"]"#, r#"["UpdateRule"]"#);
        let err = CodegenConfig::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("more than one category"));
    }

    #[test]
    fn test_should_reject_bad_category_name() {
        let text = SAMPLE.replace("change_token =", "ChangeToken =");
        let err = CodegenConfig::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("not a valid Rust module name"));
    }

    #[test]
    fn test_should_reject_unknown_keys() {
        let text = SAMPLE.replace("[paths]", "[paths]\nextra = 1");
        assert!(CodegenConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn test_should_resolve_paths_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, SAMPLE).unwrap();

        let config = CodegenConfig::load(&path).unwrap();
        assert_eq!(
            config.paths.model,
            dir.path().join("smithy-model/waf-regional.json")
        );
        assert!(config.paths.output.starts_with(dir.path()));
    }

    #[test]
    fn test_should_load_checked_in_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_NAME);
        let config = CodegenConfig::load(&path).unwrap();
        assert_eq!(config.operations().len(), 18);
        assert!(config.paths.model.exists());
    }
}
