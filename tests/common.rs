#![allow(dead_code)]

use equivgen::ast::{Declaration, EQUIV_MODE_ATTR, Variant};
use equivgen::codegen::assembler::Banner;

pub const GOLDEN_NODES: &str = include_str!("golden/nodes.rs");

/// A small AST: spans are metadata, `Legacy` carries a mode nobody knows.
pub fn node_declarations() -> Vec<Declaration> {
    vec![
        Declaration::new_struct("Span", ["lo", "hi"]).with_attr(EQUIV_MODE_ATTR, "ignore"),
        Declaration::new_tuple_struct("Ident", 2),
        Declaration::new_other("Mutability"),
        Declaration::new_enum(
            "Expr",
            vec![
                Variant::tuple("Lit", 1),
                Variant::named("Var", ["name", "mutability", "span"]),
                Variant::tuple("Add", 2),
                Variant::named("Block", Vec::<String>::new()),
                Variant::unit("Unit"),
            ],
        ),
        Declaration::new_struct("Legacy", ["a"]).with_attr(EQUIV_MODE_ATTR, "bogus"),
        Declaration::new_tuple_struct("Marker", 0),
        Declaration::new_struct("Item", ["ident", "body", "span"]),
    ]
}

pub fn fixed_banner() -> Banner {
    Banner::fixed("equivgen", "2024-01-01 00:00:00")
}
