//! Macro for implementing Display and FromStr for status-like enums
//!
//! Event states, account types and notification methods all travel as
//! lowercase strings (config files, persisted records, command payloads).
//! This macro gives each of them one mapping table for both directions.
//!
//! # Example
//!
//! ```rust
//! use agendaia_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     Medium,
//!     High,
//! }
//!
//! impl_domain_status_conversions!(Priority {
//!     Low => "low",
//!     Medium => "medium",
//!     High => "high",
//! });
//!
//! assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
//! assert_eq!(Priority::Low.to_string(), "low");
//! ```

/// Implements Display and FromStr traits for status enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively (surrounding whitespace ignored) and
///   fails with [`AgendaError::InvalidArgument`](crate::AgendaError)
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::AgendaError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::AgendaError::InvalidArgument(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
