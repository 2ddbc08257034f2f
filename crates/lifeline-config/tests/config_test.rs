#![allow(clippy::unwrap_used)]
// File and environment loading for lifeline-config.

use std::time::Duration;

use figment::Jail;
use pretty_assertions::assert_eq;

use lifeline_config::{Config, Profile, load_config_from, profile_to_client_config, save_config_to};
use lifeline_core::TlsVerification;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.active_profile_name(), "default");
    assert_eq!(cfg.defaults.timeout, 15);
    assert_eq!(cfg.defaults.output, "table");
}

#[test]
fn test_save_then_load_keeps_profiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    cfg.default_profile = Some("local".into());
    cfg.profiles.insert(
        "local".into(),
        Profile {
            api_url: "http://localhost:5000".into(),
            ca_cert: Some("/etc/lifeline/ca.pem".into()),
            ..Profile::default()
        },
    );
    save_config_to(&cfg, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.active_profile_name(), "local");
    let profile = loaded.profile("local").unwrap();
    assert_eq!(profile.api_url, "http://localhost:5000");

    let client = profile_to_client_config(&profile, &loaded.defaults).unwrap();
    assert_eq!(client.tls, TlsVerification::CustomCa("/etc/lifeline/ca.pem".into()));
    assert_eq!(client.timeout, Duration::from_secs(15));
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
                default_profile = "prod"

                [defaults]
                timeout = 20

                [profiles.prod]
                api_url = "https://cms.example.org"
            "#,
        )?;
        jail.set_env("LIFELINE_DEFAULTS__TIMEOUT", "45");
        jail.set_env("LIFELINE_DEFAULT_PROFILE", "staging");

        let cfg = load_config_from(&jail.directory().join("config.toml")).unwrap();
        assert_eq!(cfg.defaults.timeout, 45);
        assert_eq!(cfg.active_profile_name(), "staging");
        assert!(cfg.profile("prod").is_ok());
        Ok(())
    });
}
