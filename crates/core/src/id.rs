//! Identifier building blocks shared by the bounded contexts.

use core::str::FromStr;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Reject empty or whitespace-only strings.
pub fn ensure_not_blank(argument: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            argument,
            "cannot be null or empty",
        ));
    }
    Ok(())
}

/// Parse a UUID, rejecting malformed input and the nil UUID.
pub fn parse_uuid(argument: &'static str, s: &str) -> DomainResult<Uuid> {
    let uuid = Uuid::from_str(s.trim())
        .map_err(|e| DomainError::invalid_argument(argument, e.to_string()))?;
    if uuid.is_nil() {
        return Err(DomainError::invalid_argument(argument, "cannot be empty"));
    }
    Ok(uuid)
}

/// Declare a UUID-backed identifier newtype.
///
/// The generated type rejects the nil UUID, generates UUIDv7 values with
/// `new()`, and (de)serialises transparently as a UUID string.
#[macro_export]
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $vis:vis struct $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        $vis struct $t($crate::__uuid::Uuid);

        impl $t {
            /// Generate a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in
            /// tests for determinism.
            pub fn new() -> Self {
                Self($crate::__uuid::Uuid::now_v7())
            }

            /// Wrap an existing UUID; the nil UUID is rejected.
            pub fn from_uuid(uuid: $crate::__uuid::Uuid) -> $crate::DomainResult<Self> {
                if uuid.is_nil() {
                    return Err($crate::DomainError::invalid_argument(
                        $name,
                        "cannot be empty",
                    ));
                }
                Ok(Self(uuid))
            }

            pub fn as_uuid(&self) -> &$crate::__uuid::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<$crate::__uuid::Uuid> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: $crate::__uuid::Uuid) -> Result<Self, Self::Error> {
                Self::from_uuid(value)
            }
        }

        impl From<$t> for $crate::__uuid::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::parse_uuid($name, s).map(Self)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0.to_string()
            }
        }
    };
}
