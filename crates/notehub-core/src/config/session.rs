//! Session lifetime configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
///
/// Sessions are sliding: every authenticated request pushes the expiration
/// out by the full lifetime window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in days.
    #[serde(default = "default_lifetime_days")]
    pub lifetime_days: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lifetime_days: default_lifetime_days(),
        }
    }
}

fn default_lifetime_days() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetime_is_thirty_days() {
        assert_eq!(SessionConfig::default().lifetime_days, 30);
    }
}
