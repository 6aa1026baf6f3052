// Externally visible unit status

/// Status reported to the orchestration platform as a side effect of
/// lifecycle operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Maintenance(String),
    Blocked(String),
    Active(String),
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Maintenance(_) => "maintenance",
            Status::Blocked(_) => "blocked",
            Status::Active(_) => "active",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Maintenance(message) | Status::Blocked(message) | Status::Active(message) => {
                message
            }
        }
    }
}

/// Seam to the platform's status reporting primitive.
#[cfg_attr(test, mockall::automock)]
pub trait StatusReporter {
    fn set_status(&self, status: &Status);
}

/// Production reporter: the platform scrapes unit status from agent logs.
pub struct LogStatusReporter;

impl StatusReporter for LogStatusReporter {
    fn set_status(&self, status: &Status) {
        tracing::info!("Unit status set to {}: {}", status.name(), status.message());
    }
}
