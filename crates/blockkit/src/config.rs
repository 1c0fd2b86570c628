use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Read-only defaults consulted while serializing text objects.
///
/// A flag set explicitly on a node always takes precedence over these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default `emoji` flag for `plain_text` objects.
    pub default_emoji: Option<bool>,
    /// Default `verbatim` flag for `mrkdwn` objects.
    pub default_verbatim: Option<bool>,
}

impl Config {
    /// The configuration used by [`Node::serialize`](crate::node::Node::serialize).
    pub const DEFAULT: Config = Config {
        default_emoji: None,
        default_verbatim: None,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_emoji(mut self, emoji: Option<bool>) -> Self {
        self.default_emoji = emoji;
        self
    }

    pub fn default_verbatim(mut self, verbatim: Option<bool>) -> Self {
        self.default_verbatim = verbatim;
        self
    }

    /// Load a configuration from JSON, e.g. `{"default_emoji": true}`.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        assert_eq!(Config::new(), Config::DEFAULT);
        assert_eq!(Config::DEFAULT.default_emoji, None);
        assert_eq!(Config::DEFAULT.default_verbatim, None);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json_str(r#"{"default_verbatim": true}"#).unwrap();
        assert_eq!(config, Config::new().default_verbatim(Some(true)));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Config::from_json_str("{").unwrap_err(),
            Error::Hydration(_)
        ));
    }
}
