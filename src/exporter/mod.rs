// Exporter snap integration module

pub mod scrape;
pub mod service;
pub mod translate;
pub mod validate;


pub use scrape::{
    HostPorts, OpenPort, ScrapeRegistry, ScrapeTargetReconciler, ScrapeTargetSpec,
    DEFAULT_PROTOCOL, METRICS_PATH,
};
pub use service::{PackageBackend, ServiceManager, ServiceState, SNAP_NAME};
