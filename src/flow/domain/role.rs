//! Viewer roles and alias resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ParseRoleError;

/// A named capability a viewer holds within a project.
///
/// `Designer` and `FrontendDeveloper` are cosmetic variants of `Developer`:
/// they exist for display but share the developer move table. The alias map
/// in [`Role::canonical`] collapses them before any transition logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Owns preparation, architect review, and acceptance.
    Architect,
    /// Owns implementation and peer review.
    Developer,
    /// Display variant of `Developer`.
    Designer,
    /// Display variant of `Developer`.
    FrontendDeveloper,
    /// Owns testing.
    Tester,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Architect => "architect",
            Self::Developer => "developer",
            Self::Designer => "designer",
            Self::FrontendDeveloper => "frontend_developer",
            Self::Tester => "tester",
        }
    }

    /// Returns the capability role this role aliases.
    ///
    /// Canonical roles map to themselves, so the function is total and
    /// idempotent over the catalog.
    #[must_use]
    pub const fn canonical(self) -> Self {
        match self {
            Self::Designer | Self::FrontendDeveloper => Self::Developer,
            other => other,
        }
    }

    /// Canonicalizes a requested role list, deduplicating while preserving
    /// first-seen order.
    pub fn resolve(roles: impl IntoIterator<Item = Self>) -> Vec<Self> {
        let mut resolved = Vec::new();
        for role in roles {
            let canonical = role.canonical();
            if !resolved.contains(&canonical) {
                resolved.push(canonical);
            }
        }
        resolved
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "architect" => Ok(Self::Architect),
            "developer" => Ok(Self::Developer),
            "designer" => Ok(Self::Designer),
            "frontend_developer" => Ok(Self::FrontendDeveloper),
            "tester" => Ok(Self::Tester),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
