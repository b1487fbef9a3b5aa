//! Repository identity.

use super::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A repository on the hosting service, identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl Repository {
    /// Creates a repository identity, rejecting empty components.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, ConfigError> {
        let owner = owner.into();
        let name = name.into();
        if owner.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                field: "repository owner",
            });
        }
        if name.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                field: "repository name",
            });
        }
        Ok(Self { owner, name })
    }

    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = ConfigError;

    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            value: value.to_string(),
        };

        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if name.contains('/') {
            return Err(invalid());
        }

        Self::new(owner, name).map_err(|_| invalid())
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let repo: Repository = "octo-org/hello-world".parse().unwrap();
        assert_eq!(repo.owner, "octo-org");
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.full_name(), "octo-org/hello-world");
        assert_eq!(repo.to_string(), "octo-org/hello-world");
    }

    #[test]
    fn rejects_missing_slash() {
        let result = "hello-world".parse::<Repository>();
        assert!(matches!(result, Err(ConfigError::InvalidRepository { .. })));
    }

    #[test]
    fn rejects_extra_segments() {
        let result = "octo-org/hello/world".parse::<Repository>();
        assert!(matches!(result, Err(ConfigError::InvalidRepository { .. })));
    }

    #[test]
    fn rejects_empty_components() {
        assert!("/hello-world".parse::<Repository>().is_err());
        assert!("octo-org/".parse::<Repository>().is_err());
        assert!(matches!(
            Repository::new("", "repo"),
            Err(ConfigError::MissingValue { .. })
        ));
    }
}
