// Translation from orchestration options to the exporter's config keys

use crate::config::{ExternalConfig, NativeConfig};

/// Fixed mapping between external option names and native config keys.
/// scrape-timeout is deliberately absent; it only feeds the scrape target
/// registration, never the exporter's own configuration file.
pub const CONFIG_MAP: [(&str, &str); 5] = [
    ("controller-url", "controller"),
    ("juju-user", "user"),
    ("juju-password", "password"),
    ("scrape-interval", "refresh"),
    ("scrape-port", "port"),
];

/// Build the exporter's native configuration from the external snapshot.
/// Options without a set value are omitted entirely; a missing key means
/// "unset", never an empty value.
pub fn generate_native_config(external: &ExternalConfig) -> NativeConfig {
    let mut native = NativeConfig::default();
    for (option, key) in CONFIG_MAP {
        let value = external.option(option);
        if !value.is_set() {
            continue;
        }
        native.insert(key, value.clone());
    }

    native
}
