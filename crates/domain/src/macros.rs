//! Macro for implementing Display and FromStr for keyword enums
//!
//! Locales, themes and skin animations all travel as short lowercase
//! keywords (in config files, CLI flags and `data-*` attributes). This macro
//! gives them one consistent Display/FromStr pair.
//!
//! # Example
//!
//! ```rust
//! use creatorhub_domain::impl_keyword_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Density {
//!     Compact,
//!     Comfortable,
//! }
//!
//! impl_keyword_conversions!(Density {
//!     Compact => "compact",
//!     Comfortable => "comfortable",
//! });
//!
//! assert_eq!("COMPACT".parse::<Density>().unwrap(), Density::Compact);
//! ```

/// Implements Display and FromStr traits for keyword enums
///
/// - Display writes the lowercase keyword
/// - FromStr parses case-insensitively and trims surrounding whitespace
///
/// The error message names the enum so CLI and config errors stay readable.
#[macro_export]
macro_rules! impl_keyword_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Lowercase keyword for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
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

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Corner {
        TopLeft,
        BottomRight,
    }

    impl_keyword_conversions!(Corner {
        TopLeft => "top-left",
        BottomRight => "bottom-right",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(Corner::TopLeft.to_string(), "top-left");
        assert_eq!(Corner::BottomRight.as_str(), "bottom-right");
    }

    #[test]
    fn test_fromstr_ignores_case_and_whitespace() {
        assert_eq!(Corner::from_str("TOP-LEFT").unwrap(), Corner::TopLeft);
        assert_eq!(Corner::from_str("  bottom-right\n").unwrap(), Corner::BottomRight);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = Corner::from_str("center");
        assert!(result.unwrap_err().contains("Invalid Corner: center"));
        assert!(Corner::from_str("").is_err());
    }
}
