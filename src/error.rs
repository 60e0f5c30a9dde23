// error.rs - Error types for property escape compilation.
//
// Per-pattern failures carry one of the PROPERR_* codes so callers that
// speak in numeric codes can still interoperate. Registry construction
// failures are a separate type: they are fatal to the whole subsystem.

use std::fmt;

use crate::errmsg::error_code_to_str;
use crate::types::*;

/// Error produced while compiling a property escape or a char-class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// Shape violation inside `\p{...}` / `\P{...}`.
    MalformedEscapeSyntax { code: i32, message: String },
    /// The property name matches no canonical name or alias.
    UnknownPropertyName { name: String },
    /// The value does not resolve under the property, or the property is
    /// binary and was given a value at all.
    UnknownPropertyValue { property: String, value: String },
    /// The lone token is neither a binary property nor a General_Category value.
    UnknownShorthandToken { token: String },
    /// Shape violation in the enclosing bracket expression.
    MalformedClass { code: i32, message: String },
}

impl PropertyError {
    /// Build a syntax error from its code, filling `%n` from `param`.
    pub fn from_code(code: i32, param: Option<&str>) -> Self {
        let message = error_code_to_str(code, param);
        if prop_is_escape_syntax_error(code) {
            PropertyError::MalformedEscapeSyntax { code, message }
        } else {
            PropertyError::MalformedClass { code, message }
        }
    }

    pub(crate) fn unknown_property_name(name: &str) -> Self {
        PropertyError::UnknownPropertyName {
            name: name.to_string(),
        }
    }

    pub(crate) fn unknown_property_value(property: &str, value: &str) -> Self {
        PropertyError::UnknownPropertyValue {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn unknown_shorthand_token(token: &str) -> Self {
        PropertyError::UnknownShorthandToken {
            token: token.to_string(),
        }
    }

    /// Returns the numeric error code.
    pub fn code(&self) -> i32 {
        match self {
            PropertyError::MalformedEscapeSyntax { code, .. } => *code,
            PropertyError::UnknownPropertyName { .. } => PROPERR_UNKNOWN_PROPERTY_NAME,
            PropertyError::UnknownPropertyValue { .. } => PROPERR_UNKNOWN_PROPERTY_VALUE,
            PropertyError::UnknownShorthandToken { .. } => PROPERR_UNKNOWN_SHORTHAND_TOKEN,
            PropertyError::MalformedClass { code, .. } => *code,
        }
    }

    /// True for the two syntax kinds, false for name-resolution failures.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            PropertyError::MalformedEscapeSyntax { .. } | PropertyError::MalformedClass { .. }
        )
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::MalformedEscapeSyntax { message, .. } => {
                write!(f, "invalid property escape: {}", message)
            }
            PropertyError::UnknownPropertyName { name } => write!(
                f,
                "{}",
                error_code_to_str(PROPERR_UNKNOWN_PROPERTY_NAME, Some(name))
            ),
            PropertyError::UnknownPropertyValue { property, value } => {
                let param = format!("{}={}", property, value);
                write!(
                    f,
                    "{}",
                    error_code_to_str(PROPERR_UNKNOWN_PROPERTY_VALUE, Some(&param))
                )
            }
            PropertyError::UnknownShorthandToken { token } => write!(
                f,
                "{}",
                error_code_to_str(PROPERR_UNKNOWN_SHORTHAND_TOKEN, Some(token))
            ),
            PropertyError::MalformedClass { message, .. } => {
                write!(f, "invalid char-class: {}", message)
            }
        }
    }
}

impl std::error::Error for PropertyError {}

/// Error raised while building the alias table and property registry from
/// a Unicode metadata source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryBuildError {
    /// An alias string was registered for two different canonical targets.
    DuplicateAlias {
        alias: String,
        existing: String,
        conflicting: String,
    },
    /// A grouped value lists a component that the property does not define.
    UnknownComponentValue { property: String, value: String },
    /// More properties or values than the identifier space can hold.
    TooManyEntries,
}

impl fmt::Display for RegistryBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryBuildError::DuplicateAlias {
                alias,
                existing,
                conflicting,
            } => write!(
                f,
                "alias `{}` maps to both `{}` and `{}`",
                alias, existing, conflicting
            ),
            RegistryBuildError::UnknownComponentValue { property, value } => write!(
                f,
                "grouped value of `{}` names unknown component `{}`",
                property, value
            ),
            RegistryBuildError::TooManyEntries => write!(f, "too many properties or values"),
        }
    }
}

impl std::error::Error for RegistryBuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_escape_syntax_code() {
        let err = PropertyError::from_code(PROPERR_END_PATTERN_AT_LEFT_BRACE, None);
        assert!(matches!(err, PropertyError::MalformedEscapeSyntax { .. }));
        assert_eq!(err.code(), PROPERR_END_PATTERN_AT_LEFT_BRACE);
        assert!(err.is_syntax_error());
        assert_eq!(
            err.to_string(),
            "invalid property escape: end pattern at left brace"
        );
    }

    #[test]
    fn from_class_syntax_code() {
        let err = PropertyError::from_code(PROPERR_PREMATURE_END_OF_CHAR_CLASS, None);
        assert!(matches!(err, PropertyError::MalformedClass { .. }));
        assert_eq!(err.code(), PROPERR_PREMATURE_END_OF_CHAR_CLASS);
    }

    #[test]
    fn unknown_value_display() {
        let err = PropertyError::unknown_property_value("Script", "Grek_");
        assert_eq!(err.code(), PROPERR_UNKNOWN_PROPERTY_VALUE);
        assert!(!err.is_syntax_error());
        assert_eq!(
            err.to_string(),
            "invalid character property value {Script=Grek_}"
        );
    }

    #[test]
    fn unknown_shorthand_display() {
        let err = PropertyError::unknown_shorthand_token("IsGreek");
        assert_eq!(
            err.to_string(),
            "invalid character property name or value {IsGreek}"
        );
    }

    #[test]
    fn build_error_display() {
        let err = RegistryBuildError::DuplicateAlias {
            alias: "L".into(),
            existing: "Letter".into(),
            conflicting: "Left_To_Right".into(),
        };
        assert_eq!(err.to_string(), "alias `L` maps to both `Letter` and `Left_To_Right`");
    }

    #[test]
    fn error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(PropertyError::unknown_property_name("Scirpt"));
        assert_eq!(err.to_string(), "invalid character property name {Scirpt}");
    }
}
