//! WAF Regional model code generator.
//!
//! Reads the AWS WAF Regional Smithy JSON AST model and generates Rust source
//! files for the `waf-regional-model` crate. `check` regenerates in memory and
//! fails when the checked-in sources are out of date.

mod codegen;
mod config;
mod layout;
mod model;
mod shapes;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{CodegenConfig, DEFAULT_CONFIG_NAME};

#[derive(Debug, Parser)]
#[command(
    name = "waf-regional-codegen",
    about = "Generate the WAF Regional model crate"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Generator config file. Defaults to the one next to this crate's manifest.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the Smithy model path from the config.
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Override the output directory from the config.
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write every generated file into the output directory.
    Generate,
    /// Compare the output directory with freshly generated sources.
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_NAME));
    let mut config = CodegenConfig::load(&config_path)?;
    if let Some(model) = cli.model {
        config.paths.model = model;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }

    let files = generate(&config)?;
    let output_dir = &config.paths.output;

    match cli.cmd {
        Command::Generate => {
            let written = write_files(output_dir, &files)?;
            info!(files = written, "code generation complete");
        }
        Command::Check => {
            let stale = stale_files(output_dir, &files)?;
            if !stale.is_empty() {
                for path in &stale {
                    warn!(path = %path, "generated file is stale or missing");
                }
                bail!(
                    "{} generated file(s) out of date in {}; run `waf-regional-codegen generate`",
                    stale.len(),
                    output_dir.display()
                );
            }
            info!(files = files.len(), "generated sources are up to date");
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `--log-level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Read the model named by `config` and render every output file.
fn generate(config: &CodegenConfig) -> Result<BTreeMap<String, String>> {
    let model_path = &config.paths.model;
    info!(model = %model_path.display(), "reading Smithy model");

    let model_json = fs::read_to_string(model_path)
        .with_context(|| format!("Failed to read model file: {}", model_path.display()))?;
    let smithy_model: model::SmithyModel =
        serde_json::from_str(&model_json).context("Failed to parse Smithy JSON model")?;

    debug!(
        version = %smithy_model.smithy,
        shapes = smithy_model.shapes.len(),
        "parsed model"
    );

    let resolved = shapes::resolve_model(&smithy_model, config)
        .context("Failed to resolve model shapes")?;

    debug!(
        operations = resolved.operations.len(),
        enums = resolved.enums.len(),
        shared_structs = resolved.shared_structs.len(),
        input_structs = resolved.input_structs.len(),
        output_structs = resolved.output_structs.len(),
        errors = resolved.errors.len(),
        "resolved model"
    );

    codegen::generate_all(&resolved, &config.service).context("Failed to generate code")
}

/// Write generated files below `output_dir`, returning how many were written.
fn write_files(output_dir: &Path, files: &BTreeMap<String, String>) -> Result<usize> {
    for (rel_path, content) in files {
        let full_path = output_dir.join(rel_path);
        ensure_parent_dir(&full_path)?;
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        info!(path = %full_path.display(), "wrote");
    }
    Ok(files.len())
}

/// Relative paths of generated files whose on-disk content differs or is absent.
fn stale_files(output_dir: &Path, files: &BTreeMap<String, String>) -> Result<Vec<String>> {
    let mut stale = Vec::new();
    for (rel_path, content) in files {
        let full_path = output_dir.join(rel_path);
        match fs::read_to_string(&full_path) {
            Ok(existing) if existing == *content => {}
            Ok(_) => stale.push(rel_path.clone()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => stale.push(rel_path.clone()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", full_path.display()));
            }
        }
    }
    Ok(stale)
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_in_config() -> CodegenConfig {
        CodegenConfig::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_NAME))
            .unwrap()
    }

    #[test]
    fn test_should_report_missing_then_clean_after_write() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate(&checked_in_config()).unwrap();

        let stale = stale_files(dir.path(), &files).unwrap();
        assert_eq!(stale.len(), files.len());

        let written = write_files(dir.path(), &files).unwrap();
        assert_eq!(written, files.len());
        assert!(dir.path().join("input/rule.rs").exists());
        assert!(stale_files(dir.path(), &files).unwrap().is_empty());
    }

    #[test]
    fn test_should_detect_modified_file() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate(&checked_in_config()).unwrap();
        write_files(dir.path(), &files).unwrap();

        fs::write(dir.path().join("types.rs"), "// edited\n").unwrap();
        assert_eq!(
            stale_files(dir.path(), &files).unwrap(),
            vec!["types.rs".to_owned()]
        );
    }

    #[test]
    fn test_should_match_checked_in_model_crate() {
        let config = checked_in_config();
        let files = generate(&config).unwrap();
        let stale = stale_files(&config.paths.output, &files).unwrap();
        assert!(stale.is_empty(), "out of date: {stale:?}");
    }

    #[test]
    fn test_should_fail_on_missing_model() {
        let mut config = checked_in_config();
        config.paths.model = PathBuf::from("/nonexistent/waf-regional.json");
        let err = generate(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read model file"));
    }

    #[test]
    fn test_should_parse_cli_overrides() {
        let cli = Cli::try_parse_from([
            "waf-regional-codegen",
            "check",
            "--output",
            "/tmp/out",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(cli.cmd, Command::Check));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.config.is_none());
    }
}
