//! Tests for the configuration system

use folio::Config;

#[test]
fn test_config_loads_defaults_without_a_file() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.email.smtp_host, "smtp.sendgrid.net");
    assert_eq!(config.email.smtp_port, 587);
    assert!(config.email.api_key.is_empty());
    assert!(!config.email.mock);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_default_cors_origins_cover_local_dev() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(
        config.cors.allowed_origins,
        vec![
            "http://127.0.0.1:5500".to_string(),
            "http://localhost:5500".to_string()
        ]
    );
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.email.from_address.is_empty());
    assert!(!config.email.to_address.is_empty());
    assert!(!config.cors.allowed_origins.is_empty());
    assert!(!config.logging.level.is_empty());
}
