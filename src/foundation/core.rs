use crate::foundation::error::{StrokeError, StrokeResult};
use std::fmt;

/// Name of one progress stream inside a schedule (`"end"`, `"line1-head"`, ...).
///
/// Roles are non-empty and restricted to characters that survive a CSV header untouched.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Create a validated role name.
    pub fn new(name: impl Into<String>) -> StrokeResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(StrokeError::validation("role name must not be empty"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| c.is_control() || matches!(c, ',' | '"'))
        {
            return Err(StrokeError::validation(format!(
                "role name '{}' contains unsupported character {bad:?}",
                name.escape_debug()
            )));
        }
        Ok(Self(name))
    }

    /// Borrow the role name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Role {
    type Error = StrokeError;

    fn try_from(value: String) -> StrokeResult<Self> {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl PartialEq<str> for Role {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Unit used by schedule definitions for their offsets and durations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Values are seconds.
    #[default]
    Seconds,
    /// Values are milliseconds.
    Millis,
}

impl TimeUnit {
    /// Convert a value expressed in this unit to seconds.
    pub fn to_secs(self, value: f64) -> f64 {
        match self {
            Self::Seconds => value,
            Self::Millis => value / 1000.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
