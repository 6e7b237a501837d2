//! Strongly-typed identifier value objects.
//!
//! BIF identifiers are database-assigned numbers, so these wrap `i64`
//! rather than UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier, rejecting non-positive values.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        "must be a positive integer",
                    ));
                }
                Ok(Self(value))
            }

            /// Returns the raw numeric value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.parse::<i64>().map_err(|e: ParseIntError| {
                    ValidationError::invalid_format($field, e.to_string())
                })?;
                Self::new(value)
            }
        }
    };
}

numeric_id!(
    /// Internal identifier of a BIF user (end user or guardian).
    UserId,
    "user_id"
);

numeric_id!(
    /// Identifier the OAuth provider assigned to the user's social account.
    SocialId,
    "social_id"
);

numeric_id!(
    /// Identifier of a todo item.
    TodoId,
    "todo_id"
);
