//! Document-store connection settings
//!
//! Read once at startup from the process environment (a `.env` file is
//! loaded by `main` through `dotenvy` before this runs).

use std::fmt;

pub const REGION_VAR: &str = "AWS_REGION";
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Static access key pair
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

// Keep the secret out of logs
impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Region and credentials for the DynamoDB client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// `None` falls back to the SDK's region provider chain
    pub region: Option<String>,
    /// `None` falls back to the SDK's default credential chain
    pub credentials: Option<StaticCredentials>,
}

impl StoreConfig {
    /// Read region and key pair from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    ///
    /// Empty values count as unset. Credentials are only used when both
    /// halves of the pair are present.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let credentials = match (get(ACCESS_KEY_ID_VAR), get(SECRET_ACCESS_KEY_VAR)) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key,
            }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "Only one of {ACCESS_KEY_ID_VAR}/{SECRET_ACCESS_KEY_VAR} is set, \
                     using the default credential chain"
                );
                None
            }
            (None, None) => None,
        };

        Self {
            region: get(REGION_VAR),
            credentials,
        }
    }
}
