//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::{CollectorKind, Settings};

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    source: EndpointInfo,
    target: EndpointInfo,
    alias: String,
    read_timeout_secs: u64,
    timezone_shift: bool,
    collectors: Vec<CollectorInfo>,
}

#[derive(Serialize)]
struct EndpointInfo {
    url: String,
    port: u16,
    authenticated: bool,
}

#[derive(Serialize)]
struct CollectorInfo {
    name: String,
    endpoint: String,
    enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    index_prefix: String,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration info");

    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    let settings = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    if args.json {
        let info = build_config_info(&settings, args);
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        print_config_info(&settings, args);
    }

    Ok(())
}

fn build_config_info(settings: &Settings, args: &InfoArgs) -> ConfigInfo {
    let collectors = CollectorKind::ALL
        .iter()
        .filter_map(|&kind| {
            let toggle = settings.collectors.get(kind);
            if !toggle.enabled && !args.all_collectors {
                return None;
            }
            Some(CollectorInfo {
                name: kind.name().to_string(),
                endpoint: kind.endpoint().to_string(),
                enabled: toggle.enabled,
                index_prefix: toggle.index_prefix.clone(),
            })
        })
        .collect();

    ConfigInfo {
        source: endpoint_info(&settings.source.connection),
        target: endpoint_info(&settings.target.connection),
        alias: settings.source.alias.clone(),
        read_timeout_secs: settings.source.read_timeout_secs,
        timezone_shift: settings.target.timezone_shift,
        collectors,
    }
}

fn endpoint_info(connection: &contracts::ConnectionSettings) -> EndpointInfo {
    EndpointInfo {
        url: connection.url.clone(),
        port: connection.port,
        authenticated: !connection.username.is_empty(),
    }
}

fn print_config_info(settings: &Settings, args: &InfoArgs) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                  espulse Configuration                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("🔌 Source");
    println!("   ├─ URL: {}", settings.source.connection.base_url());
    println!("   ├─ Alias: {}", settings.source.alias);
    println!(
        "   ├─ Auth: {}",
        if settings.source.connection.username.is_empty() {
            "anonymous"
        } else {
            "basic"
        }
    );
    println!("   └─ Read timeout: {}s", settings.source.read_timeout_secs);

    println!("\n🎯 Target");
    println!("   ├─ URL: {}", settings.target.connection.base_url());
    println!(
        "   ├─ Auth: {}",
        if settings.target.connection.username.is_empty() {
            "anonymous"
        } else {
            "basic"
        }
    );
    println!("   └─ Timezone shift: {}", settings.target.timezone_shift);

    let shown: Vec<CollectorKind> = CollectorKind::ALL
        .iter()
        .copied()
        .filter(|&kind| args.all_collectors || settings.collectors.get(kind).enabled)
        .collect();

    println!("\n📤 Collectors ({})", shown.len());
    for (i, kind) in shown.iter().enumerate() {
        let toggle = settings.collectors.get(*kind);
        let is_last = i == shown.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };

        if toggle.enabled {
            println!(
                "   {} {} ({}) -> {}-YYYY.MM.DD",
                prefix,
                kind,
                kind.endpoint(),
                toggle.index_prefix
            );
        } else {
            println!("   {} {} ({}) [disabled]", prefix, kind, kind.endpoint());
        }
    }

    println!();
}
