// Validation of the exporter's native configuration

use crate::config::{ConfigValue, NativeConfig};

/// Keys the exporter refuses to start without.
pub const REQUIRED_CONFIG: [&str; 5] = ["port", "controller", "user", "password", "refresh"];

/// Check a native configuration for completeness and value correctness.
///
/// Returns one message per violation; an empty list means the
/// configuration is valid. Violations accumulate rather than
/// short-circuiting so an operator sees every problem at once. A missing
/// port or refresh also fails its numeric check, so it is reported both
/// in the combined missing-options message and on its own.
pub fn validate(config: &NativeConfig) -> Vec<String> {
    let mut errors = Vec::new();

    let missing: Vec<&str> = REQUIRED_CONFIG
        .iter()
        .copied()
        .filter(|option| !config.contains(option))
        .collect();
    if !missing.is_empty() {
        errors.push(format!(
            "Following config options are missing: {}",
            missing.join(", ")
        ));
    }

    // 'port' must be a number within the valid TCP port range.
    match as_int(config.get("port")) {
        Some(port) if !(1..=65535).contains(&port) => {
            errors.push(format!("Port {port} is not valid port number."));
        }
        Some(_) => {}
        None => errors.push("Configuration option 'port' must be a number.".to_string()),
    }

    // 'refresh' must be a positive number.
    match as_int(config.get("refresh")) {
        Some(refresh) if refresh < 1 => {
            errors.push("Configuration option 'refresh' must be positive number.".to_string());
        }
        Some(_) => {}
        None => errors.push("Configuration option 'refresh' must be a number.".to_string()),
    }

    errors
}

fn as_int(value: Option<&ConfigValue>) -> Option<i64> {
    value.and_then(ConfigValue::as_int)
}
