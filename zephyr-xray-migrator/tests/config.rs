use std::path::PathBuf;

use zephyr_xray_migrator::{Config, ConfigError, TransformOptions};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn load_config_from_fixture() {
    let config = Config::load(&fixtures_root().join("config.yml")).unwrap();

    assert_eq!(config.jira.site, "https://example.atlassian.net");
    assert_eq!(config.jira.account_id, "5b10ac8d82e05b22cc7d4ef5");
    assert_eq!(
        config.zephyr.base_url,
        "https://prod-api.zephyr4jiracloud.com"
    );
    assert_eq!(config.xray.client_id, "xray-client");
    assert_eq!(config.migration.max_tests, 500);
    assert_eq!(config.migration.poll_interval_secs, 5);

    let options = TransformOptions::from(&config.migration);
    assert_eq!(options.test_type, "Manual");
    assert_eq!(options.destination_project_key.as_deref(), Some("XT"));
    assert_eq!(options.labels_to_add, vec!["migrated-from-zephyr"]);
    assert_eq!(options.simple_fields_to_copy, vec!["customfield_10010"]);
    assert_eq!(options.multi_value_fields_to_copy, vec!["customfield_10020"]);
    assert!(options.create_issue_links);
    assert!(options.preferred_link_type.is_none());
    assert!(options.migrate_tests_with_empty_steps);
}

#[test]
fn load_config_rejects_invalid_fixture() {
    let result = Config::load(&fixtures_root().join("broken.yml"));

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
