//! Application Configuration
//!
//! Configuration for the Account application layer.

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Realm advertised in `WWW-Authenticate` on 401 responses
    pub realm: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            realm: "account".to_string(),
        }
    }
}

impl AccountConfig {
    pub fn with_realm(realm: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
        }
    }

    /// `WWW-Authenticate` challenge for this realm
    pub fn basic_challenge(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm.replace('"', "'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_challenge() {
        assert_eq!(
            AccountConfig::default().basic_challenge(),
            "Basic realm=\"account\""
        );
    }

    #[test]
    fn test_realm_quotes_are_neutralised() {
        let config = AccountConfig::with_realm("my \"realm\"");
        assert_eq!(config.basic_challenge(), "Basic realm=\"my 'realm'\"");
    }
}
