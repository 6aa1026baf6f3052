// Lifecycle triggers delivered by the orchestration platform

use crate::config::ExternalConfig;
use std::path::PathBuf;

/// External events the agent reacts to. Each carries the data that was
/// current when the platform emitted it; configuration payloads are
/// immutable snapshots.
#[derive(Debug)]
pub enum LifecycleEvent {
    /// Exporter snap installation requested
    InstallRequested {
        /// Optional local snap artifact attached by the operator
        resource: Option<PathBuf>,
    },

    /// A new configuration snapshot was delivered
    ConfigChanged { config: ExternalConfig },

    /// A monitoring consumer connected and is ready for scrape targets
    MonitoringPeerConnected { config: ExternalConfig },
}

impl LifecycleEvent {
    /// Trigger name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleEvent::InstallRequested { .. } => "install-requested",
            LifecycleEvent::ConfigChanged { .. } => "config-changed",
            LifecycleEvent::MonitoringPeerConnected { .. } => "monitoring-peer-connected",
        }
    }
}
