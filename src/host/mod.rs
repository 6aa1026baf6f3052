// Concrete host adapters for the external collaborator surfaces

pub mod monitoring;
pub mod ports;
pub mod snapd;

pub use monitoring::HttpScrapeRegistry;
pub use ports::HookPorts;
pub use snapd::SnapCli;
