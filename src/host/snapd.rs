// snapd adapter: package install and service actions via the snap CLI

use crate::error::{AgentError, Result};
use crate::exporter::PackageBackend;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Marker snapd prints when another change is holding its state lock.
const LOCK_ERROR_MARKER: &str = "cannot acquire state lock";

/// PackageBackend talking to snapd through the snap CLI.
pub struct SnapCli;

impl SnapCli {
    fn run(&self, args: &[&str]) -> Result<()> {
        debug!("Running: snap {}", args.join(" "));
        let output = Command::new("snap").args(args).output()?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.contains(LOCK_ERROR_MARKER) {
            return Err(AgentError::InstallLock(stderr));
        }
        Err(AgentError::HostCommand {
            command: format!("snap {}", args.join(" ")),
            message: stderr,
        })
    }
}

impl PackageBackend for SnapCli {
    fn install_local(&self, path: &Path) -> Result<()> {
        let path_str = path.to_string_lossy();
        self.run(&["install", "--dangerous", &path_str])
    }

    fn install_store(&self, name: &str) -> Result<()> {
        self.run(&["install", name])
    }

    fn service_action(&self, name: &str, action: &str) -> Result<()> {
        self.run(&[action, name])
    }
}
