//! Typed identifier newtypes backed by human-readable slugs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap a slug, rejecting empty or whitespace-only input.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyId`] when `slug` is blank.
            pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
                let slug = slug.into();
                let trimmed = slug.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                if trimmed.len() == slug.len() {
                    Ok(Self(slug))
                } else {
                    Ok(Self(trimmed.to_string()))
                }
            }

            /// Access the inner slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Race`](crate::race::Race), e.g. `2025-lemans24`.
    RaceId
);

define_id!(
    /// Unique identifier for a [`Place`](crate::place::Place), e.g. `le-mans`.
    PlaceId
);
