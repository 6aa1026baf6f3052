// Host port bookkeeping via the platform hook tools

use crate::error::{AgentError, Result};
use crate::exporter::{HostPorts, OpenPort, DEFAULT_PROTOCOL};
use std::process::{Command, Output};
use tracing::debug;

/// HostPorts backed by the platform's opened-ports/open-port/close-port
/// hook tools.
pub struct HookPorts;

impl HookPorts {
    fn run(tool: &str, args: &[&str]) -> Result<Output> {
        debug!("Running: {} {}", tool, args.join(" "));
        let output = Command::new(tool).args(args).output()?;
        if !output.status.success() {
            return Err(AgentError::HostCommand {
                command: format!("{} {}", tool, args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }

    /// Parse one `opened-ports` output line ("5000/tcp"). Lines without an
    /// explicit protocol default to tcp.
    pub(crate) fn parse_port_line(line: &str) -> Option<OpenPort> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (port, protocol) = match line.split_once('/') {
            Some((port, protocol)) => (port, protocol),
            None => (line, DEFAULT_PROTOCOL),
        };
        port.parse().ok().map(|port| OpenPort {
            port,
            protocol: protocol.to_string(),
        })
    }
}

impl HostPorts for HookPorts {
    fn opened_ports(&self) -> Result<Vec<OpenPort>> {
        let output = Self::run("opened-ports", &[])?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(Self::parse_port_line)
            .collect())
    }

    fn open_port(&self, port: u16, protocol: &str) -> Result<()> {
        Self::run("open-port", &[&format!("{port}/{protocol}")])?;
        Ok(())
    }

    fn close_port(&self, port: u16, protocol: &str) -> Result<()> {
        Self::run("close-port", &[&format!("{port}/{protocol}")])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_line() {
        assert_eq!(
            HookPorts::parse_port_line("5000/tcp"),
            Some(OpenPort {
                port: 5000,
                protocol: "tcp".to_string()
            })
        );
        assert_eq!(
            HookPorts::parse_port_line("  9100/udp\n"),
            Some(OpenPort {
                port: 9100,
                protocol: "udp".to_string()
            })
        );
        // bare port defaults to tcp
        assert_eq!(
            HookPorts::parse_port_line("6000"),
            Some(OpenPort {
                port: 6000,
                protocol: "tcp".to_string()
            })
        );
        assert_eq!(HookPorts::parse_port_line(""), None);
        assert_eq!(HookPorts::parse_port_line("icmp"), None);
    }
}
