// Exporter snap lifecycle: install, configure, and service control

use crate::config::NativeConfig;
use crate::error::{AgentError, Result};
use crate::exporter::validate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the exporter snap package
pub const SNAP_NAME: &str = "machine-exporter";

/// Service actions the snap supports
const SNAP_ACTIONS: [&str; 3] = ["stop", "start", "restart"];

/// Seam to the OS package manager (snapd).
///
/// Install and service-action calls block until snapd finishes; the agent
/// adds no retries or timeouts of its own.
#[cfg_attr(test, mockall::automock)]
pub trait PackageBackend {
    /// Install a snap from a local, unsigned artifact.
    fn install_local(&self, path: &Path) -> Result<()>;

    /// Install a snap by name from the default store.
    fn install_store(&self, name: &str) -> Result<()>;

    /// Run a service action on an installed snap.
    fn service_action(&self, name: &str, action: &str) -> Result<()>;
}

/// Exporter service state as tracked through this manager's operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    NotInstalled,
    Stopped,
    Running,
}

/// Handles operations of the exporter snap and its service.
pub struct ServiceManager {
    backend: Box<dyn PackageBackend>,
    config_path: PathBuf,
    state: ServiceState,
}

impl ServiceManager {
    pub fn new(backend: Box<dyn PackageBackend>) -> Self {
        Self::with_config_path(backend, Self::default_config_path())
    }

    /// Manager writing the exporter config to a non-default location.
    pub fn with_config_path(backend: Box<dyn PackageBackend>, config_path: PathBuf) -> Self {
        Self {
            backend,
            config_path,
            state: ServiceState::NotInstalled,
        }
    }

    /// On-disk location of the exporter's configuration file.
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(format!("/var/snap/{SNAP_NAME}/current/config/exporter.yaml"))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Install the exporter snap, from a local artifact when one is given,
    /// otherwise from the snap store.
    ///
    /// A snapd install-lock failure propagates unchanged and leaves the
    /// state untouched; retry policy belongs to the orchestration platform.
    pub fn install(&mut self, snap_path: Option<&Path>) -> Result<()> {
        match snap_path {
            Some(path) => {
                info!("Installing snap {} from local resource.", SNAP_NAME);
                self.backend.install_local(path)?;
            }
            None => {
                info!("Installing {} snap from snap store.", SNAP_NAME);
                self.backend.install_store(SNAP_NAME)?;
            }
        }

        self.state = ServiceState::Stopped;
        Ok(())
    }

    /// Stop the service, validate and persist the new configuration, then
    /// start it again.
    ///
    /// An invalid configuration leaves the service stopped and the
    /// previous config file untouched; the service never runs with a
    /// configuration that has not passed validation.
    pub fn apply_config(&mut self, config: &NativeConfig) -> Result<()> {
        self.stop()?;
        info!("Updating exporter service configuration.");

        let errors = validate::validate(config);
        if !errors.is_empty() {
            return Err(AgentError::Config(errors.join("\n")));
        }

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(config)?;
        std::fs::write(&self.config_path, yaml)?;

        self.start()?;
        info!("Exporter configuration updated.");
        Ok(())
    }

    /// Start exporter service.
    pub fn start(&mut self) -> Result<()> {
        self.execute_service_action("start")?;
        self.state = ServiceState::Running;
        Ok(())
    }

    /// Stop exporter service. Stopping an already stopped service is a
    /// no-op at the snapd level.
    pub fn stop(&mut self) -> Result<()> {
        self.execute_service_action("stop")?;
        self.state = ServiceState::Stopped;
        Ok(())
    }

    /// Restart exporter service.
    pub fn restart(&mut self) -> Result<()> {
        self.execute_service_action("restart")?;
        self.state = ServiceState::Running;
        Ok(())
    }

    /// Dispatch one of the supported snap service actions. An action name
    /// outside the fixed set is a programming defect, not a runtime
    /// condition.
    pub(crate) fn execute_service_action(&self, action: &str) -> Result<()> {
        if !SNAP_ACTIONS.contains(&action) {
            return Err(AgentError::UnsupportedAction(action.to_string()));
        }
        info!("{} service executing action: {}", SNAP_NAME, action);
        self.backend.service_action(SNAP_NAME, action)
    }
}
