// Exporter Agent - main entry point
// One invocation handles exactly one lifecycle trigger, run to completion.

use anyhow::Result;
use clap::{Parser, Subcommand};
use exporter_agent::agent::Agent;
use exporter_agent::config::ExternalConfig;
use exporter_agent::events::LifecycleEvent;
use exporter_agent::exporter::{ScrapeTargetReconciler, ServiceManager};
use exporter_agent::host::{HookPorts, HttpScrapeRegistry, SnapCli};
use exporter_agent::status::LogStatusReporter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exporter-agent")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to the orchestration-supplied configuration snapshot
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Registration endpoint of the related monitoring consumer
    #[arg(long, global = true)]
    monitoring_url: Option<String>,

    #[command(subcommand)]
    trigger: Trigger,
}

/// Lifecycle triggers the orchestration platform delivers
#[derive(Subcommand, Debug)]
enum Trigger {
    /// Install the exporter snap
    Install {
        /// Local snap artifact to install instead of the store package
        #[arg(long)]
        resource: Option<PathBuf>,
    },
    /// Apply a changed configuration snapshot
    ConfigChanged,
    /// Re-register the scrape target after a monitoring peer connected
    MonitoringPeerConnected,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let event = match cli.trigger {
        Trigger::Install { resource } => LifecycleEvent::InstallRequested { resource },
        Trigger::ConfigChanged => LifecycleEvent::ConfigChanged {
            config: ExternalConfig::load(cli.config)?,
        },
        Trigger::MonitoringPeerConnected => LifecycleEvent::MonitoringPeerConnected {
            config: ExternalConfig::load(cli.config)?,
        },
    };

    let manager = ServiceManager::new(Box::new(SnapCli));
    let reconciler = ScrapeTargetReconciler::new(
        Box::new(HttpScrapeRegistry::new(cli.monitoring_url)),
        Box::new(HookPorts),
    );
    let mut agent = Agent::new(manager, reconciler, Box::new(LogStatusReporter));

    agent.handle_event(event)?;
    Ok(())
}
