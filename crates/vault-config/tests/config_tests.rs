use std::path::PathBuf;

use tempfile::tempdir;
use vault_config::{Config, ConfigError, ConfigManager};

#[test]
fn default_config_matches_wizard_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.locale, "en-US");
    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.required_interests, 5);
    assert_eq!(cfg.required_dislikes, 5);
    assert_eq!(cfg.custom_milestone_budget_tier, "minor_occasion");
    assert!(cfg.api_base_url.is_none());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        currency: "EUR".to_string(),
        required_interests: 3,
        api_base_url: Some("https://api.example.test".into()),
        data_root: Some(PathBuf::from("/srv/vault")),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    assert!(manager.config_path().exists());
    assert!(!manager.config_path().with_extension("json.tmp").exists());

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.profiles_dir(), PathBuf::from("/srv/vault/profiles"));
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale": "fr-FR", "currency": "EUR"}"#).expect("write");
    let manager = ConfigManager::new(path, dir.path().join("backups"));

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.locale, "fr-FR");
    assert_eq!(loaded.required_dislikes, 5);
    assert_eq!(loaded.custom_milestone_budget_tier, "minor_occasion");
}

#[test]
fn backups_restore_and_list() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        locale: "en-GB".into(),
        ..Config::default()
    };
    let name = manager.backup(&cfg, Some("Before edit")).expect("backup");
    assert!(name.starts_with("config_"));
    assert!(name.ends_with("_before-edit.json"));

    let listed = manager.list_backups().expect("list");
    assert_eq!(listed, vec![name.clone()]);

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.locale, "en-GB");

    let missing = manager.restore("config_19990101_0000.json").unwrap_err();
    assert!(matches!(missing, ConfigError::BackupNotFound(_)));
}

#[test]
fn malformed_file_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");
    let manager = ConfigManager::new(path, dir.path().join("backups"));

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
