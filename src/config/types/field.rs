//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Declared per section with [`config_fields!`], so diagnostics always name
/// the TOML key the user has to edit.
///
/// # Example
///
/// ```ignore
/// config_fields!(SourceConfig => SourceConfigFields, "source" { suffix, root_doc });
///
/// // Usage:
/// diag.error(SourceConfig::FIELDS.suffix, "must start with '.'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

/// Generate a `FIELDS` constant holding one [`FieldPath`] per TOML key.
macro_rules! config_fields {
    ($ty:ident => $fields:ident, $section:literal { $($field:ident),* $(,)? }) => {
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $field: $crate::config::FieldPath,)*
        }

        impl $ty {
            pub const FIELDS: $fields = $fields {
                $($field: $crate::config::FieldPath::new(
                    concat!($section, ".", stringify!($field))
                ),)*
            };
        }
    };
}

pub(crate) use config_fields;

#[cfg(test)]
mod tests {
    use super::*;

    struct Demo;
    config_fields!(Demo => DemoFields, "html.theme" { github_user, navigation_depth });

    #[test]
    fn test_generated_paths() {
        assert_eq!(Demo::FIELDS.github_user.as_str(), "html.theme.github_user");
        assert_eq!(
            Demo::FIELDS.navigation_depth,
            FieldPath::new("html.theme.navigation_depth")
        );
    }
}
