use std::collections::HashMap;

pub use structs::{Field, Variant};

pub mod structs;

/// Attribute key selecting how a declaration's equivalence impl is generated.
pub const EQUIV_MODE_ATTR: &str = "equiv_mode";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeclKind {
    Struct,
    Enum,
    /// Any declaration without matchable variants (type aliases, opaque
    /// leaf types, fieldless C-like enums handled by `==`, ...).
    Other,
}

/// A type definition subject to equivalence generation.
///
/// A `Struct` carries exactly one variant named after the struct itself, an
/// `Enum` carries one per case and an `Other` carries none. `crate::check`
/// enforces this before anything is emitted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub variants: Vec<Variant>,
    pub attributes: HashMap<String, String>,
}

impl Declaration {
    pub fn new_struct<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            kind: DeclKind::Struct,
            variants: vec![Variant::named(name.clone(), fields)],
            name,
            attributes: HashMap::new(),
        }
    }

    pub fn new_tuple_struct(name: impl Into<String>, arity: usize) -> Self {
        let name = name.into();
        Self {
            kind: DeclKind::Struct,
            variants: vec![Variant::tuple(name.clone(), arity)],
            name,
            attributes: HashMap::new(),
        }
    }

    pub fn new_enum(name: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            kind: DeclKind::Enum,
            name: name.into(),
            variants,
            attributes: HashMap::new(),
        }
    }

    pub fn new_other(name: impl Into<String>) -> Self {
        Self {
            kind: DeclKind::Other,
            name: name.into(),
            variants: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Pairs every variant with the path used to match it: the struct name
    /// for a struct, `Enum::Variant` for an enum case. Declaration order is
    /// kept.
    pub fn variant_paths(&self) -> impl Iterator<Item = (&Variant, String)> + '_ {
        self.variants.iter().map(move |variant| {
            let path = match self.kind {
                DeclKind::Enum => format!("{}::{}", self.name, variant.name),
                DeclKind::Struct | DeclKind::Other => self.name.clone(),
            };
            (variant, path)
        })
    }
}
