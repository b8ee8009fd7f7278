mod common;
use common::{setup_dir, write_file};

use rbikeshare::config::Config;
use rbikeshare::errors::AppError;
use rbikeshare::utils::{format_number, secs2readable};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let cfg = Config::default();

    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.trip_separator, " to ");
    assert_eq!(cfg.city_names(), vec!["chicago", "new york", "washington"]);
    assert_eq!(
        cfg.city_path("new york").expect("known city"),
        PathBuf::from(".").join("new_york_city.csv")
    );
}

#[test]
fn test_config_file_overrides_and_lowercases_cities() {
    let dir = setup_dir("config_custom");
    let conf = write_file(
        &dir,
        "custom.conf",
        "data_dir: /srv/bikes\ncities:\n  Boston: boston.csv\n  Denver: /data/denver.csv\npage_size: 3\n",
    );

    let cfg = Config::load_from(&conf).expect("parse config");
    assert_eq!(cfg.page_size, 3);
    assert_eq!(cfg.trip_separator, " to ");
    assert_eq!(cfg.city_names(), vec!["boston", "denver"]);
    assert_eq!(
        cfg.city_path("boston").expect("boston"),
        PathBuf::from("/srv/bikes/boston.csv")
    );
    assert_eq!(
        cfg.city_path("denver").expect("denver"),
        PathBuf::from("/data/denver.csv")
    );
    assert!(matches!(cfg.city_path("chicago"), Err(AppError::UnknownCity(_))));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = setup_dir("config_missing");
    let err = Config::load_from(&dir.join("nope.conf")).unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.contains("file not found")));
}

#[test]
fn test_config_rejects_zero_page_size() {
    let dir = setup_dir("config_zero_page");
    let conf = write_file(&dir, "zero.conf", "page_size: 0\n");
    assert!(matches!(Config::load_from(&conf), Err(AppError::Config(_))));
}

#[test]
fn test_config_rejects_garbage() {
    let dir = setup_dir("config_garbage");
    let conf = write_file(&dir, "garbage.conf", "cities: 12\n");
    assert!(matches!(Config::load_from(&conf), Err(AppError::Config(_))));
}

#[test]
fn test_duration_formatting() {
    assert_eq!(secs2readable(0.0), "00h 00m 00s");
    assert_eq!(secs2readable(450.0), "00h 07m 30s");
    assert_eq!(secs2readable(6090.0), "01h 41m 30s");
    assert_eq!(secs2readable(90061.0), "1d 01h 01m 01s");
    assert_eq!(format_number(900.0), "900");
    assert_eq!(format_number(12.5), "12.50");
}
