// Lifecycle controller: dispatches orchestration events into the
// exporter components and keeps the unit status current

use crate::config::{ExternalConfig, NativeConfig};
use crate::error::Result;
use crate::events::LifecycleEvent;
use crate::exporter::translate::generate_native_config;
use crate::exporter::{ScrapeTargetReconciler, ServiceManager, ServiceState, SNAP_NAME};
use crate::status::{Status, StatusReporter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Top-level agent reacting to lifecycle triggers. One trigger is
/// processed to completion before the next invocation; there is no
/// concurrent overlap between lifecycle operations.
pub struct Agent {
    manager: ServiceManager,
    reconciler: ScrapeTargetReconciler,
    status: Box<dyn StatusReporter>,
}

impl Agent {
    pub fn new(
        manager: ServiceManager,
        reconciler: ScrapeTargetReconciler,
        status: Box<dyn StatusReporter>,
    ) -> Self {
        Self {
            manager,
            reconciler,
            status,
        }
    }

    pub fn service_state(&self) -> ServiceState {
        self.manager.state()
    }

    /// Process one lifecycle trigger to completion.
    pub fn handle_event(&mut self, event: LifecycleEvent) -> Result<()> {
        debug!("Dispatching lifecycle event: {}", event.kind());
        match event {
            LifecycleEvent::InstallRequested { resource } => self.on_install(resource.as_deref()),
            LifecycleEvent::ConfigChanged { config } => self.on_config_changed(&config),
            LifecycleEvent::MonitoringPeerConnected { config } => self.on_peer_connected(&config),
        }
    }

    /// Install the exporter snap. Install-lock failures are logged with
    /// the attempted source and re-raised so the platform can re-deliver
    /// the event.
    fn on_install(&mut self, resource: Option<&Path>) -> Result<()> {
        self.status
            .set_status(&Status::Maintenance("Installing exporter software.".into()));

        let snap_path = resource.and_then(resolve_resource);
        if let Err(err) = self.manager.install(snap_path.as_deref()) {
            let source = if snap_path.is_some() {
                "local resource"
            } else {
                "snap store"
            };
            error!("Failed to install {} from {}.", SNAP_NAME, source);
            return Err(err);
        }

        Ok(())
    }

    /// Handle a changed configuration snapshot.
    fn on_config_changed(&mut self, config: &ExternalConfig) -> Result<()> {
        info!("Processing new exporter configuration.");
        let native = generate_native_config(config);

        if let Err(err) = self.manager.apply_config(&native) {
            if !err.is_config() {
                return Err(err);
            }
            error!("{err}");
            self.status.set_status(&Status::Blocked(
                "Invalid configuration. Please see logs.".into(),
            ));
            return Ok(());
        }

        let Some((port, interval, timeout)) = scrape_params(&native, config) else {
            // unreachable after a successful apply; port and refresh are validated
            debug!("Applied configuration carries no scrape parameters.");
            return Ok(());
        };

        if self.reconcile_scrape_target(port, interval, timeout)? {
            self.status.set_status(&Status::Active("Unit is ready".into()));
        }
        Ok(())
    }

    /// A monitoring consumer connected; re-register the scrape target from
    /// the last-known configuration. No service restart is involved.
    fn on_peer_connected(&mut self, config: &ExternalConfig) -> Result<()> {
        let native = generate_native_config(config);
        let Some((port, interval, timeout)) = scrape_params(&native, config) else {
            debug!("No complete scrape configuration yet; skipping target registration.");
            return Ok(());
        };

        self.reconcile_scrape_target(port, interval, timeout)?;
        Ok(())
    }

    /// Run scrape-target and open-port reconciliation, converting a
    /// monitoring-integration rejection into a blocked status. Returns
    /// whether reconciliation went through.
    fn reconcile_scrape_target(
        &mut self,
        port: u16,
        interval_minutes: u64,
        timeout_secs: u64,
    ) -> Result<bool> {
        match self.reconciler.reconcile(port, interval_minutes, timeout_secs) {
            Ok(()) => Ok(true),
            Err(err) if err.is_scrape_config() => {
                error!("{err}");
                self.status.set_status(&Status::Blocked(
                    "Scrape target registration failed. Please see logs.".into(),
                ));
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

/// Scrape parameters for reconciliation: listening port and refresh period
/// come from the translated configuration, the scrape timeout is an
/// external-only option.
fn scrape_params(native: &NativeConfig, external: &ExternalConfig) -> Option<(u16, u64, u64)> {
    let port = u16::try_from(native.int("port")?).ok()?;
    let interval = u64::try_from(native.int("refresh")?).ok()?;
    Some((port, interval, external.scrape_timeout_secs()))
}

/// Resolve an optional local snap artifact. An attached but empty file is
/// treated the same as no artifact at all.
pub fn resolve_resource(path: &Path) -> Option<PathBuf> {
    let meta = std::fs::metadata(path).ok()?;
    if meta.is_file() && meta.len() > 0 {
        Some(path.to_path_buf())
    } else {
        None
    }
}
