//! `run` command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use contracts::{RunContext, Settings};
use dispatcher::Dispatcher;

use crate::cli::RunArgs;

/// Exit code when either cluster cannot be reached
const EXIT_UNREACHABLE: i32 = 2;

/// Execute the `run` command
pub async fn run_collection(args: &RunArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading configuration");

    // Validate config path
    if !args.config.exists() {
        anyhow::bail!("Configuration file not found: {}", args.config.display());
    }

    // Load and parse configuration
    let mut settings = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(ref url) = args.source_url {
        info!(url = %url, "Overriding source URL from CLI");
        settings.source.connection.url = url.clone();
    }
    if let Some(port) = args.source_port {
        info!(port = %port, "Overriding source port from CLI");
        settings.source.connection.port = port;
    }

    info!(
        alias = %settings.source.alias,
        source = %settings.source.connection.base_url(),
        target = %settings.target.connection.base_url(),
        collectors = settings.collectors.enabled_count(),
        "Configuration loaded"
    );

    // Dry run - just validate and exit
    if args.dry_run {
        info!("Dry run mode - configuration is valid, exiting");
        print_config_summary(&settings);
        return Ok(());
    }

    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    // A cluster that does not answer its root endpoint is an operator
    // problem, not a collection problem. Exit 2 so wrappers can tell the
    // two apart.
    let source = match client_factory::connect(&settings.source.connection).await {
        Ok(client) => client,
        Err(e) => {
            error!(
                error = %e,
                url = %settings.source.connection.base_url(),
                "Source cluster unreachable"
            );
            std::process::exit(EXIT_UNREACHABLE);
        }
    };
    let target = match client_factory::connect(&settings.target.connection).await {
        Ok(client) => client,
        Err(e) => {
            error!(
                error = %e,
                url = %settings.target.connection.base_url(),
                "Target cluster unreachable"
            );
            std::process::exit(EXIT_UNREACHABLE);
        }
    };

    let ctx = RunContext::new(Arc::new(source), Arc::new(target), &settings);
    let dispatcher = Dispatcher::new(ctx, settings.collectors.clone());

    // Setup graceful shutdown handler
    let shutdown_signal = setup_shutdown_signal();

    info!("Starting collection cycle...");

    tokio::select! {
        snapshot = dispatcher.run_to_completion() => {
            info!(
                documents_written = snapshot.documents_written,
                write_failures = snapshot.write_failures,
                collect_failures = snapshot.collect_failures,
                "Collection cycle finished"
            );
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping collection...");
        }
    }

    info!("espulse finished");
    Ok(())
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Print configuration summary for dry-run mode
fn print_config_summary(settings: &Settings) {
    println!("\n=== Configuration Summary ===\n");
    println!("Source:");
    println!("  URL: {}", settings.source.connection.base_url());
    println!("  Alias: {}", settings.source.alias);
    println!("  Read timeout: {}s", settings.source.read_timeout_secs);
    println!("\nTarget:");
    println!("  URL: {}", settings.target.connection.base_url());
    println!("  Timezone shift: {}", settings.target.timezone_shift);

    println!("\nCollectors ({}):", settings.collectors.enabled_count());
    for (kind, prefix) in settings.collectors.enabled() {
        println!("  - {} -> {}-YYYY.MM.DD", kind, prefix);
    }

    println!();
}
