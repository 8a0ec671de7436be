//! `validate` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::Settings;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    alias: String,
    source: String,
    target: String,
    read_timeout_secs: u64,
    timezone_shift: bool,
    enabled_collectors: Vec<String>,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating configuration");

    let result = validate_config(args);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(args: &ValidateArgs) -> ValidationResult {
    let config_path = args.config.display().to_string();

    // Check file exists
    if !args.config.exists() {
        return ValidationResult {
            valid: false,
            config_path,
            error: Some(format!("File not found: {}", args.config.display())),
            warnings: None,
            summary: None,
        };
    }

    // Try to load and validate
    match config_loader::ConfigLoader::load_from_path(&args.config) {
        Ok(settings) => {
            let warnings = collect_warnings(&settings);

            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary {
                    alias: settings.source.alias.clone(),
                    source: settings.source.connection.base_url(),
                    target: settings.target.connection.base_url(),
                    read_timeout_secs: settings.source.read_timeout_secs,
                    timezone_shift: settings.target.timezone_shift,
                    enabled_collectors: settings
                        .collectors
                        .enabled()
                        .map(|(kind, _)| kind.name().to_string())
                        .collect(),
                }),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

/// Collect configuration warnings (non-fatal issues)
fn collect_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if settings.collectors.enabled_count() == 0 {
        warnings.push("No collectors enabled - a run would write nothing".to_string());
    }

    if settings.source.connection.base_url() == settings.target.connection.base_url() {
        warnings.push(
            "Source and target point at the same cluster - observations will land next to the \
             data they describe"
                .to_string(),
        );
    }

    if settings.source.connection.username.is_empty() {
        warnings.push("Source connection is anonymous - reads may be rejected".to_string());
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Alias: {}", summary.alias);
            println!("  Source: {}", summary.source);
            println!("  Target: {}", summary.target);
            println!("  Read timeout: {}s", summary.read_timeout_secs);
            println!("  Timezone shift: {}", summary.timezone_shift);
            println!(
                "  Enabled collectors: {}",
                summary.enabled_collectors.join(", ")
            );
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
