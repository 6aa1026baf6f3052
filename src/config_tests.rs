#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::Result;

    #[test]
    fn test_external_config_defaults() {
        let config = ExternalConfig::default();

        assert_eq!(config.controller_url, ConfigValue::Null);
        assert_eq!(config.juju_user, ConfigValue::Null);
        assert_eq!(config.juju_password, ConfigValue::Null);
        assert_eq!(config.scrape_interval, ConfigValue::Int(5));
        assert_eq!(config.scrape_port, ConfigValue::Int(5000));
        assert_eq!(config.scrape_timeout, ConfigValue::Int(30));
    }

    #[test]
    fn test_config_value_truthiness() {
        assert!(!ConfigValue::Null.is_set());
        assert!(!ConfigValue::Int(0).is_set());
        assert!(!ConfigValue::String(String::new()).is_set());

        assert!(ConfigValue::Int(5000).is_set());
        assert!(ConfigValue::Int(-1).is_set());
        assert!(ConfigValue::String("foo".to_string()).is_set());
    }

    #[test]
    fn test_config_value_as_int() {
        assert_eq!(ConfigValue::Int(42).as_int(), Some(42));
        assert_eq!(ConfigValue::String("42".to_string()).as_int(), Some(42));
        assert_eq!(ConfigValue::String(" 42 ".to_string()).as_int(), Some(42));
        assert_eq!(ConfigValue::String("forty-two".to_string()).as_int(), None);
        assert_eq!(ConfigValue::Null.as_int(), None);
    }

    #[test]
    fn test_external_config_deserialization() {
        let yaml = "\
controller-url: http://ctrl:9000
juju-user: foo
juju-password: bar
scrape-interval: 5
scrape-port: \"6000\"
scrape-timeout: 30
";
        let config: ExternalConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.controller_url, "http://ctrl:9000".into());
        assert_eq!(config.juju_user, "foo".into());
        assert_eq!(config.scrape_interval, ConfigValue::Int(5));
        // quoted numbers stay strings; validation parses them later
        assert_eq!(config.scrape_port, "6000".into());
        assert_eq!(config.scrape_port.as_int(), Some(6000));
    }

    #[test]
    fn test_external_config_partial_snapshot_keeps_defaults() {
        let yaml = "juju-user: foo\n";
        let config: ExternalConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.juju_user, "foo".into());
        assert_eq!(config.scrape_port, ConfigValue::Int(5000));
        assert_eq!(config.controller_url, ConfigValue::Null);
    }

    #[test]
    fn test_external_config_load_missing_falls_back_to_defaults() -> Result<()> {
        let config = ExternalConfig::load(Some("/nonexistent/config.yaml".into()))?;
        assert_eq!(config, ExternalConfig::default());
        Ok(())
    }

    #[test]
    fn test_external_config_load_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "controller-url: http://ctrl:9000\nscrape-port: 6000\n")?;

        let config = ExternalConfig::load(Some(path))?;
        assert_eq!(config.controller_url, "http://ctrl:9000".into());
        assert_eq!(config.scrape_port, ConfigValue::Int(6000));
        Ok(())
    }

    #[test]
    fn test_scrape_timeout_secs_fallback() {
        let mut config = ExternalConfig::default();
        assert_eq!(config.scrape_timeout_secs(), 30);

        config.scrape_timeout = ConfigValue::Int(10);
        assert_eq!(config.scrape_timeout_secs(), 10);

        config.scrape_timeout = ConfigValue::String("soon".to_string());
        assert_eq!(config.scrape_timeout_secs(), 30);
    }

    #[test]
    fn test_option_lookup_by_external_name() {
        let config = ExternalConfig {
            juju_user: "foo".into(),
            ..ExternalConfig::default()
        };

        assert_eq!(config.option("juju-user"), &ConfigValue::from("foo"));
        assert_eq!(config.option("scrape-port"), &ConfigValue::Int(5000));
        assert_eq!(config.option("no-such-option"), &ConfigValue::Null);
    }

    #[test]
    fn test_native_config_serialization_is_deterministic() {
        let mut first = NativeConfig::default();
        first.insert("port", ConfigValue::Int(5000));
        first.insert("controller", "http://ctrl:9000".into());

        let mut second = NativeConfig::default();
        second.insert("controller", "http://ctrl:9000".into());
        second.insert("port", ConfigValue::Int(5000));

        let first_yaml = serde_yaml::to_string(&first).unwrap();
        let second_yaml = serde_yaml::to_string(&second).unwrap();
        assert_eq!(first_yaml, second_yaml);

        let roundtrip: NativeConfig = serde_yaml::from_str(&first_yaml).unwrap();
        assert_eq!(roundtrip, first);
    }
}
