// Monitoring-system integration: scrape target registration over HTTP

use crate::error::{AgentError, Result};
use crate::exporter::{ScrapeRegistry, ScrapeTargetSpec};
use tracing::info;

/// ScrapeRegistry pushing target specs to the monitoring consumer's
/// registration endpoint. No configured endpoint means no consumer is
/// currently related.
pub struct HttpScrapeRegistry {
    endpoint: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpScrapeRegistry {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl ScrapeRegistry for HttpScrapeRegistry {
    fn expose_target(&self, spec: &ScrapeTargetSpec) -> Result<()> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| AgentError::ScrapeConfig("no monitoring consumer related".to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .json(spec)
            .send()
            .map_err(|err| AgentError::ScrapeConfig(err.to_string()))?;
        if !response.status().is_success() {
            return Err(AgentError::ScrapeConfig(format!(
                "consumer rejected scrape target: HTTP {}",
                response.status()
            )));
        }

        info!("Registered scrape target for port {} with {}", spec.port, endpoint);
        Ok(())
    }
}
