//! Config validation
//!
//! Rules:
//! - source/target urls non-empty, with an http(s) scheme
//! - alias non-empty
//! - read_timeout_secs > 0
//! - every enabled collector has a non-empty index prefix
//! - index prefixes satisfy the target store's index naming rules

use contracts::{ConnectionSettings, Settings, TelemetryError};

/// Characters the target store rejects in index names
const FORBIDDEN_PREFIX_CHARS: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ' ', ','];

/// Validate parsed Settings
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(settings: &Settings) -> Result<(), TelemetryError> {
    validate_connection("source", &settings.source.connection)?;
    validate_connection("target", &settings.target.connection)?;
    validate_alias(settings)?;
    validate_read_timeout(settings)?;
    validate_collectors(settings)?;
    Ok(())
}

fn validate_connection(
    section: &str,
    connection: &ConnectionSettings,
) -> Result<(), TelemetryError> {
    if connection.url.is_empty() {
        return Err(TelemetryError::config_validation(
            format!("{section}.url"),
            "url cannot be empty",
        ));
    }
    if !connection.url.starts_with("http://") && !connection.url.starts_with("https://") {
        return Err(TelemetryError::config_validation(
            format!("{section}.url"),
            format!("url must include an http(s) scheme, got '{}'", connection.url),
        ));
    }
    Ok(())
}

fn validate_alias(settings: &Settings) -> Result<(), TelemetryError> {
    if settings.source.alias.is_empty() {
        return Err(TelemetryError::config_validation(
            "source.alias",
            "alias cannot be empty",
        ));
    }
    Ok(())
}

fn validate_read_timeout(settings: &Settings) -> Result<(), TelemetryError> {
    if settings.source.read_timeout_secs == 0 {
        return Err(TelemetryError::config_validation(
            "source.read_timeout_secs",
            "read timeout must be > 0",
        ));
    }
    Ok(())
}

/// An enabled collector must carry a usable index prefix; a disabled one is
/// never consulted, so its prefix is not checked.
fn validate_collectors(settings: &Settings) -> Result<(), TelemetryError> {
    for (kind, prefix) in settings.collectors.enabled() {
        if prefix.is_empty() {
            return Err(TelemetryError::config_validation(
                format!("collectors.{kind}.index_prefix"),
                "enabled collector requires a non-empty index_prefix",
            ));
        }
        if prefix.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(TelemetryError::config_validation(
                format!("collectors.{kind}.index_prefix"),
                format!("index prefix '{prefix}' must be lowercase"),
            ));
        }
        if let Some(bad) = prefix.chars().find(|c| FORBIDDEN_PREFIX_CHARS.contains(c)) {
            return Err(TelemetryError::config_validation(
                format!("collectors.{kind}.index_prefix"),
                format!("index prefix '{prefix}' contains forbidden character '{bad}'"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{
        CollectorSet, CollectorToggle, SourceSettings, TargetSettings,
    };

    fn connection(url: &str) -> ConnectionSettings {
        ConnectionSettings {
            url: url.into(),
            port: 9200,
            username: "user".into(),
            password: "pass".into(),
        }
    }

    fn minimal_settings() -> Settings {
        Settings {
            source: SourceSettings {
                connection: connection("https://src.example.com"),
                read_timeout_secs: 10,
                alias: "prod".into(),
            },
            target: TargetSettings {
                connection: connection("https://sink.example.com"),
                timezone_shift: false,
            },
            collectors: CollectorSet {
                cluster_health: CollectorToggle {
                    enabled: true,
                    index_prefix: "es-health".into(),
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&minimal_settings()).is_ok());
    }

    #[test]
    fn test_empty_alias() {
        let mut settings = minimal_settings();
        settings.source.alias.clear();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("alias cannot be empty"), "got: {err}");
    }

    #[test]
    fn test_zero_read_timeout() {
        let mut settings = minimal_settings();
        settings.source.read_timeout_secs = 0;
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("read timeout"), "got: {err}");
    }

    #[test]
    fn test_missing_scheme() {
        let mut settings = minimal_settings();
        settings.target.connection.url = "sink.example.com".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("http(s) scheme"), "got: {err}");
    }

    #[test]
    fn test_enabled_collector_needs_prefix() {
        let mut settings = minimal_settings();
        settings.collectors.nodes_stats = CollectorToggle {
            enabled: true,
            index_prefix: String::new(),
        };
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("non-empty index_prefix"), "got: {err}");
        assert!(err.contains("nodes_stats"), "got: {err}");
    }

    #[test]
    fn test_disabled_collector_prefix_not_checked() {
        let mut settings = minimal_settings();
        settings.collectors.shard_allocation = CollectorToggle {
            enabled: false,
            index_prefix: "BAD PREFIX".into(),
        };
        assert!(validate(&settings).is_ok());
    }

    #[test]
    fn test_uppercase_prefix_rejected() {
        let mut settings = minimal_settings();
        settings.collectors.cluster_health.index_prefix = "Es-Health".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("lowercase"), "got: {err}");
    }

    #[test]
    fn test_forbidden_character_rejected() {
        let mut settings = minimal_settings();
        settings.collectors.cluster_health.index_prefix = "es health".into();
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("forbidden character"), "got: {err}");
    }
}
