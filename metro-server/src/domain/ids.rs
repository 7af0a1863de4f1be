//! Station and line identifier types.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier {value:?}: {reason}")]
pub struct InvalidId {
    value: String,
    reason: &'static str,
}

/// Validate an identifier string.
///
/// Identifiers are opaque but must be non-empty and free of whitespace,
/// so they survive round trips through query strings and the ledger.
fn validate(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            value: s.to_string(),
            reason: "identifier cannot be empty",
        });
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InvalidId {
            value: s.to_string(),
            reason: "identifier cannot contain whitespace",
        });
    }
    Ok(())
}

macro_rules! impl_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting empty or whitespace-bearing input.
            pub fn parse(s: impl Into<String>) -> Result<Self, InvalidId> {
                let s = s.into();
                validate(&s)?;
                Ok(Self(s))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidId;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

impl_identifier!(
    /// Stable identifier of a station, as supplied by the network data.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::StationId;
    ///
    /// let id = StationId::parse("KX").unwrap();
    /// assert_eq!(id.as_str(), "KX");
    ///
    /// assert!(StationId::parse("").is_err());
    /// assert!(StationId::parse("King Cross").is_err());
    /// ```
    StationId
);

impl_identifier!(
    /// Stable identifier of a line.
    LineId
);
