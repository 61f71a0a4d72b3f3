use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("malformed declaration {decl:?}: {reason}")]
    MalformedVariant { decl: String, reason: String },
    #[error("unknown equiv_mode {mode:?} on declaration {decl:?}")]
    UnknownMode { decl: String, mode: String },
    #[error("declaration {decl:?} has no variants to compare structurally")]
    CompareOnOpaque { decl: String },
}
