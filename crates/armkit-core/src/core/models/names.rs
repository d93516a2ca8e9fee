use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between a group instance and one of its members (`C3.pro`).
pub const SCOPE_SEPARATOR: char = '.';

/// Identifies a species (or an implicit reaction complex) inside a model hierarchy.
///
/// A top-level entity has no scope (`L`, `XIAP`); a group member is scoped by the
/// name of the group instance that owns it (`sCas3.monomer`). Implicit complexes of
/// tracked reactions are scoped by the reaction name (`L_activates_R.ES`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct QualifiedName {
    scope: Option<String>,
    name: String,
}

impl QualifiedName {
    pub fn top(name: impl Into<String>) -> Self {
        Self {
            scope: None,
            name: name.into(),
        }
    }

    pub fn scoped(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            name: name.into(),
        }
    }

    /// Splits on the first separator; a path without separator is a top-level name.
    pub fn parse(path: &str) -> Self {
        match path.split_once(SCOPE_SEPARATOR) {
            Some((scope, name)) => Self::scoped(scope, name),
            None => Self::top(path),
        }
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The top-level model entry this name lives under.
    pub fn root(&self) -> &str {
        self.scope.as_deref().unwrap_or(&self.name)
    }

    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}{}{}", scope, SCOPE_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<&str> for QualifiedName {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for QualifiedName {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.to_string()
    }
}

/// Returns `true` for names usable as model entries or group members:
/// non-empty, ASCII alphanumeric or `_`, not starting with a digit.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_scope_on_first_separator() {
        let name = QualifiedName::parse("sCas3.monomer");
        assert_eq!(name.scope(), Some("sCas3"));
        assert_eq!(name.name(), "monomer");
        assert_eq!(name.root(), "sCas3");
        assert_eq!(name.to_string(), "sCas3.monomer");
    }

    #[test]
    fn parse_without_separator_is_top_level() {
        let name = QualifiedName::parse("XIAP");
        assert!(!name.is_scoped());
        assert_eq!(name.root(), "XIAP");
        assert_eq!(name, QualifiedName::top("XIAP"));
    }

    #[test]
    fn identifiers_reject_empty_dotted_and_digit_leading_names() {
        assert!(is_valid_identifier("IntrinsicStimuli"));
        assert!(is_valid_identifier("_hidden"));
        assert!(is_valid_identifier("M4"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("C3.pro"));
        assert!(!is_valid_identifier("2dimer"));
        assert!(!is_valid_identifier("with space"));
    }

    #[test]
    fn serializes_as_a_dotted_string() {
        let name = QualifiedName::scoped("C3", "pro");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"C3.pro\"");
        let back: QualifiedName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
