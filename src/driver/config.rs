use std::{collections::HashMap, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::ast::{DeclKind, Declaration, Variant};

/// A generator manifest file. Namely Equiv.toml
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: Generator,
    #[serde(default)]
    pub declarations: Vec<DeclarationConfig>,
}

/// Options of the generation pass.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Generator {
    /// The trait implemented by every block.
    pub trait_name: Option<String>,
    /// Its method, called recursively on fields.
    pub method_name: Option<String>,
    /// The name shown in the banner.
    pub generator_name: Option<String>,
    /// Whether an unknown `equiv_mode` aborts generation.
    pub strict: bool,
    /// Where to write the generated file, relative to the manifest.
    pub output: Option<PathBuf>,
}

/// One declaration, tagged by `kind`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DeclarationConfig {
    Struct {
        name: String,
        #[serde(default)]
        fields: Option<FieldsConfig>,
        #[serde(default)]
        attributes: HashMap<String, String>,
    },
    Enum {
        name: String,
        #[serde(default)]
        variants: Vec<VariantConfig>,
        #[serde(default)]
        attributes: HashMap<String, String>,
    },
    Other {
        name: String,
        #[serde(default)]
        attributes: HashMap<String, String>,
    },
}

/// An enum case.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariantConfig {
    pub name: String,
    #[serde(default)]
    pub fields: Option<FieldsConfig>,
}

/// `["a", "b"]` for named fields, `2` for two positional fields. A missing
/// list is a unit shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldsConfig {
    Named(Vec<String>),
    Positional(usize),
}

fn variant(name: String, fields: Option<FieldsConfig>) -> Variant {
    match fields {
        Some(FieldsConfig::Named(fields)) => Variant::named(name, fields),
        Some(FieldsConfig::Positional(arity)) => Variant::tuple(name, arity),
        None => Variant::unit(name),
    }
}

impl DeclarationConfig {
    pub fn name(&self) -> &str {
        match self {
            Self::Struct { name, .. } | Self::Enum { name, .. } | Self::Other { name, .. } => name,
        }
    }

    pub fn into_declaration(self) -> Declaration {
        match self {
            Self::Struct {
                name,
                fields,
                attributes,
            } => Declaration {
                kind: DeclKind::Struct,
                variants: vec![variant(name.clone(), fields)],
                name,
                attributes,
            },
            Self::Enum {
                name,
                variants,
                attributes,
            } => Declaration {
                kind: DeclKind::Enum,
                name,
                variants: variants
                    .into_iter()
                    .map(|v| variant(v.name, v.fields))
                    .collect(),
                attributes,
            },
            Self::Other { name, attributes } => Declaration {
                kind: DeclKind::Other,
                name,
                variants: Vec::new(),
                attributes,
            },
        }
    }
}

impl Config {
    pub fn declarations(self) -> Vec<Declaration> {
        self.declarations
            .into_iter()
            .map(DeclarationConfig::into_declaration)
            .collect()
    }
}
