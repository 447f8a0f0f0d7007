// SPDX-License-Identifier: MPL-2.0
//! The signed-in user, derived once at startup and read-only afterwards.

use crate::config::SessionConfig;

/// An authenticated session. Absence (`Option::None` on the app state)
/// means the client runs anonymously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub display_name: String,
}

impl Session {
    /// Resolves the session from the `--user` flag or the settings file,
    /// in that order. Blank names count as absent.
    #[must_use]
    pub fn resolve(cli_user: Option<String>, config: &SessionConfig) -> Option<Self> {
        cli_user
            .or_else(|| config.display_name.clone())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(|display_name| Session { display_name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_user_takes_priority_over_config() {
        let config = SessionConfig {
            display_name: Some("Config Name".to_string()),
        };
        let session = Session::resolve(Some("Cli Name".to_string()), &config);
        assert_eq!(session.unwrap().display_name, "Cli Name");
    }

    #[test]
    fn config_name_used_when_no_flag() {
        let config = SessionConfig {
            display_name: Some("Avery Quinn".to_string()),
        };
        let session = Session::resolve(None, &config);
        assert_eq!(session.unwrap().display_name, "Avery Quinn");
    }

    #[test]
    fn absence_means_anonymous() {
        assert!(Session::resolve(None, &SessionConfig::default()).is_none());
    }

    #[test]
    fn blank_names_count_as_absent() {
        let config = SessionConfig {
            display_name: Some("   ".to_string()),
        };
        assert!(Session::resolve(None, &config).is_none());
    }
}
