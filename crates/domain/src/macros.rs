//! Macro for implementing wire-tag conversions on closed domain enums
//!
//! Severities, source systems, video kinds and contribution reasons all travel
//! as short lowercase tags (in configuration files, fixtures and rendered
//! issue lines). This macro generates the tag mapping once per enum.
//!
//! # Example
//!
//! ```rust
//! use rewatch_domain::impl_domain_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Period {
//!     Regulation,
//!     Overtime,
//! }
//!
//! impl_domain_tag_conversions!(Period {
//!     Regulation => "regulation",
//!     Overtime => "overtime",
//! });
//!
//! assert_eq!(Period::Overtime.as_str(), "overtime");
//! assert_eq!("REGULATION".parse::<Period>(), Ok(Period::Regulation));
//! ```

/// Implements `as_str`, `Display` and `FromStr` for tag enums
///
/// This macro generates:
/// - `as_str()`: the stable tag for a variant
/// - Display trait: writes the tag
/// - FromStr trait: parses trimmed, case-insensitive tags
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $tag` - Mapping of enum variants to their tags
#[macro_export]
macro_rules! impl_domain_tag_conversions {
    ($enum_name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Stable lowercase tag for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($tag => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
