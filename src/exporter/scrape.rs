// Scrape target registration and host open-port reconciliation

use crate::error::Result;
use serde::Serialize;
use tracing::info;

/// Path under which the exporter serves metrics
pub const METRICS_PATH: &str = "/metrics";

/// Protocol used for the exporter's listening port
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Scrape parameters pushed to the monitoring system. Interval and timeout
/// are rendered in the consumer's wire form, seconds with an "s" suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeTargetSpec {
    pub port: u16,
    pub path: String,
    pub scrape_interval: String,
    pub scrape_timeout: String,
}

impl ScrapeTargetSpec {
    pub fn new(port: u16, interval_secs: u64, timeout_secs: u64) -> Self {
        Self {
            port,
            path: METRICS_PATH.to_string(),
            scrape_interval: format!("{interval_secs}s"),
            scrape_timeout: format!("{timeout_secs}s"),
        }
    }
}

/// A (port, protocol) pair currently advertised as open on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPort {
    pub port: u16,
    pub protocol: String,
}

/// Seam to the monitoring-system integration.
#[cfg_attr(test, mockall::automock)]
pub trait ScrapeRegistry {
    /// Push scrape parameters to the monitoring consumer. Fails when the
    /// consumer rejects the spec or no consumer is related.
    fn expose_target(&self, spec: &ScrapeTargetSpec) -> Result<()>;
}

/// Seam to the host's opened-port bookkeeping.
#[cfg_attr(test, mockall::automock)]
pub trait HostPorts {
    fn opened_ports(&self) -> Result<Vec<OpenPort>>;
    fn open_port(&self, port: u16, protocol: &str) -> Result<()>;
    fn close_port(&self, port: u16, protocol: &str) -> Result<()>;
}

/// Derives scrape parameters from configuration and keeps the monitoring
/// registration and the host's open-port set in line with them.
pub struct ScrapeTargetReconciler {
    registry: Box<dyn ScrapeRegistry>,
    ports: Box<dyn HostPorts>,
}

impl ScrapeTargetReconciler {
    pub fn new(registry: Box<dyn ScrapeRegistry>, ports: Box<dyn HostPorts>) -> Self {
        Self { registry, ports }
    }

    /// Register the scrape target and bring the host's open-port set in
    /// sync with the configured listening port.
    ///
    /// A registry rejection propagates unchanged and leaves the port set
    /// alone. The agent expects a single scrape target, so every
    /// previously opened port is closed before the new one opens.
    pub fn reconcile(&self, port: u16, interval_minutes: u64, timeout_secs: u64) -> Result<()> {
        let spec = ScrapeTargetSpec::new(port, interval_minutes * 60, timeout_secs);
        info!(
            "Updating scrape target: port {}, path {}, interval {}, timeout {}",
            spec.port, spec.path, spec.scrape_interval, spec.scrape_timeout
        );
        self.registry.expose_target(&spec)?;

        self.reconcile_open_ports(port)
    }

    fn reconcile_open_ports(&self, port: u16) -> Result<()> {
        for stale in self.ports.opened_ports()? {
            info!("Closing open port {}/{}", stale.port, stale.protocol);
            self.ports.close_port(stale.port, &stale.protocol)?;
        }

        info!("Opening port {}/{}", port, DEFAULT_PROTOCOL);
        self.ports.open_port(port, DEFAULT_PROTOCOL)
    }
}
