use spotwatch_core::Config;

use super::config_summary;

fn sample_config() -> Config {
    Config::resolve(|name| {
        let value = match name {
            "QRZ_USERNAME" => "w1aw",
            "QRZ_PASSWORD" => "hunter2",
            "PUSHOVER_TOKEN" => "app-token",
            "PUSHOVER_USER" => "user-key",
            "SPOTWATCH_MODES" => "FT8,FT4",
            "SPOTWATCH_REGIONS" => "US-RI,US-HI",
            _ => return None,
        };
        Some(value.to_string())
    })
    .expect("config")
}

#[test]
fn summary_never_contains_secret_values() {
    let rendered = config_summary(&sample_config()).to_string();
    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("app-token"));
    assert!(!rendered.contains("user-key"));
    assert!(rendered.contains("\"qrz_credentials\":\"present\""));
}

#[test]
fn summary_reports_sorted_filter_sets() {
    let summary = config_summary(&sample_config());
    assert_eq!(
        summary["modes"],
        serde_json::json!(["FT4", "FT8"]),
    );
    assert_eq!(
        summary["regions"],
        serde_json::json!(["US-HI", "US-RI"]),
    );
    assert_eq!(summary["max_age_secs"], 120);
}
