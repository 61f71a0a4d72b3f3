use crate::ast::{DeclKind, Declaration, EQUIV_MODE_ATTR};

/// Emission strategy for one declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Recursive field-by-field comparison.
    Compare,
    /// Delegate to `==`.
    Eq,
    /// Always equivalent.
    Ignore,
}

impl Mode {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "compare" => Some(Self::Compare),
            "eq" => Some(Self::Eq),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Eq => "eq",
            Self::Ignore => "ignore",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModeSelection {
    Mode(Mode),
    /// `equiv_mode` was set to something unrecognized.
    Unknown(String),
}

/// Picks the mode from the `equiv_mode` attribute, falling back to the
/// declaration kind.
pub fn select_mode(decl: &Declaration) -> ModeSelection {
    if let Some(value) = decl.attr(EQUIV_MODE_ATTR) {
        return match Mode::from_attr(value) {
            Some(mode) => ModeSelection::Mode(mode),
            None => ModeSelection::Unknown(value.to_string()),
        };
    }

    match decl.kind {
        DeclKind::Struct | DeclKind::Enum => ModeSelection::Mode(Mode::Compare),
        DeclKind::Other => ModeSelection::Mode(Mode::Eq),
    }
}
