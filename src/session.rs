use crate::codegen::hygiene::{Keywords, RUST_KEYWORDS};

/// This struct holds the options for one generation pass, like the trait
/// the impls target, the reserved words of the output language, and what to
/// do with unknown modes.
#[derive(Debug, Clone)]
pub struct Session {
    /// The trait every generated block implements.
    pub trait_name: String,
    /// The single method of that trait, called recursively on field pairs.
    pub method_name: String,
    /// Shown in the banner of the generated file.
    pub generator_name: String,
    /// Reserved words of the output language, escaped in bindings.
    pub keywords: Keywords,
    /// What to do with an `equiv_mode` value that isn't recognized.
    pub unknown_mode: UnknownModePolicy,
    /// One level of indentation in the generated text.
    pub indent: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            trait_name: "AstEquiv".to_string(),
            method_name: "ast_equiv".to_string(),
            generator_name: env!("CARGO_PKG_NAME").to_string(),
            keywords: RUST_KEYWORDS,
            unknown_mode: UnknownModePolicy::Skip,
            indent: "    ".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnknownModePolicy {
    /// Emit nothing for the declaration.
    #[default]
    Skip,
    /// Abort the whole pass.
    Error,
}
