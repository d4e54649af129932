use std::io::Write;
use std::sync::{Mutex, OnceLock};

use super::paths::resolve_config_path;
use super::util::parse_bool;
use super::*;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn clear_env() {
    let vars = [
        "DEVICE_INVENTORY_CONFIG",
        "DEVICE_INVENTORY_ENABLED",
        "DEVICE_INVENTORY_AUTO_REFRESH",
        "DEVICE_INVENTORY_BATCH_INTERVAL_MS",
        "DEVICE_INVENTORY_NOTIFY_CAPACITY",
        "DEVICE_INVENTORY_ROOT_NAME",
        "DEVICE_INVENTORY_VALIDATE_TOPOLOGY",
    ];
    for v in vars {
        std::env::remove_var(v);
    }
}

fn temp_config(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "device-inventory-config-{}-{}.toml",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    let mut f = std::fs::File::create(&path).expect("create file");
    writeln!(f, "{contents}").expect("write file");
    path
}

#[test]
fn default_config_matches_expected_baseline_values() {
    let cfg = InventoryConfig::default();
    assert!(cfg.enabled);
    assert!(cfg.auto_refresh);
    assert_eq!(cfg.batch_interval_ms, 1_000);
    assert_eq!(cfg.batch_interval(), std::time::Duration::from_secs(1));
    assert_eq!(cfg.notify_capacity, 4_096);
    assert_eq!(cfg.root_display_name, None);
    assert_eq!(cfg.validate_topology, cfg!(debug_assertions));
}

#[test]
fn file_config_is_loaded() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config(
        "[inventory]\nenabled=false\nauto_refresh=false\nroot_display_name=\"lab-7\"\n[notifications]\nbatch_interval_ms=250\ncapacity=64\n[debug]\nvalidate_topology=true",
    );
    std::env::set_var("DEVICE_INVENTORY_CONFIG", &path);
    let cfg = InventoryConfig::load().expect("load config");

    assert!(!cfg.enabled);
    assert!(!cfg.auto_refresh);
    assert_eq!(cfg.root_display_name.as_deref(), Some("lab-7"));
    assert_eq!(cfg.batch_interval_ms, 250);
    assert_eq!(cfg.notify_capacity, 64);
    assert!(cfg.validate_topology);

    let options = cfg.build_options();
    assert_eq!(options.root_name.as_deref(), Some("lab-7"));
    assert!(options.validate);

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn env_overrides_file_config() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config("[notifications]\nbatch_interval_ms=250\ncapacity=64");
    std::env::set_var("DEVICE_INVENTORY_CONFIG", &path);
    std::env::set_var("DEVICE_INVENTORY_BATCH_INTERVAL_MS", "50");
    std::env::set_var("DEVICE_INVENTORY_NOTIFY_CAPACITY", "0");
    std::env::set_var("DEVICE_INVENTORY_ENABLED", "off");
    std::env::set_var("DEVICE_INVENTORY_ROOT_NAME", "  ");
    let cfg = InventoryConfig::load().expect("load config");

    assert_eq!(cfg.batch_interval_ms, 50);
    assert_eq!(cfg.notify_capacity, 64);
    assert!(!cfg.enabled);
    assert_eq!(cfg.root_display_name, None);

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_file_reports_path() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    let path = temp_config("[notifications]\ncapacity=\"lots\"");
    std::env::set_var("DEVICE_INVENTORY_CONFIG", &path);
    let err = InventoryConfig::load().expect_err("invalid capacity");
    assert!(err.to_string().contains("failed parsing TOML config"));

    clear_env();
    let _ = std::fs::remove_file(path);
}

#[test]
fn resolve_config_path_fails_for_missing_explicit_env_path() {
    let _guard = env_lock().lock().expect("env lock");
    clear_env();

    std::env::set_var(
        "DEVICE_INVENTORY_CONFIG",
        "/definitely/not/here/device-inventory.toml",
    );
    let err = resolve_config_path().expect_err("missing path");
    assert!(err.to_string().contains("DEVICE_INVENTORY_CONFIG"));

    clear_env();
}

#[test]
fn parse_bool_accepts_expected_truthy_values() {
    for raw in ["1", "true", "YES", " enabled ", "on"] {
        assert!(parse_bool(raw), "{raw} should be truthy");
    }
    for raw in ["0", "false", "off", "nope", ""] {
        assert!(!parse_bool(raw), "{raw} should be falsy");
    }
}
