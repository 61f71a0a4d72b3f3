//! Structural comparison for structs and enums.
//!
//! The generated body has two matches. The first one only exists so that
//! adding a variant to the source type without regenerating breaks the
//! build. The second one pairs both values, binding every field twice
//! (`kind1`/`kind2`), and conjoins the recursive calls.

use std::collections::HashSet;

use itertools::Itertools;

use crate::ast::{Declaration, Variant};
use crate::session::Session;

use super::assembler::indent;
use super::hygiene::Keywords;

/// Which side of the comparison a pattern binds for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    /// The exhaustiveness check, where only one value is matched.
    Single,
    First,
    Second,
}

impl Side {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Single => "",
            Self::First => "1",
            Self::Second => "2",
        }
    }
}

/// The identifiers one field is bound to on every side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldBinding {
    pub field: String,
    pub single: String,
    pub first: String,
    pub second: String,
}

impl FieldBinding {
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Single => &self.single,
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }
}

/// Binds every field of `variant` once, in declaration order. Patterns and
/// the comparison conjunction are both rendered from this list.
///
/// An escaped keyword takes more underscores when its escaped spelling is
/// already the name of another field of the variant.
pub fn bind_fields(variant: &Variant, keywords: &Keywords) -> Vec<FieldBinding> {
    let mut taken: HashSet<String> = variant.fields.iter().map(|f| f.name.clone()).collect();

    variant
        .fields
        .iter()
        .map(|field| {
            let mut base = keywords.escape(&field.name);
            if base != field.name {
                while taken.contains(&base) {
                    base.push('_');
                }
                taken.insert(base.clone());
            }
            FieldBinding {
                field: field.name.clone(),
                single: format!("{base}{}", Side::Single.suffix()),
                first: format!("{base}{}", Side::First.suffix()),
                second: format!("{base}{}", Side::Second.suffix()),
            }
        })
        .collect()
}

fn render_pattern(variant: &Variant, path: &str, bindings: &[FieldBinding], side: Side) -> String {
    if variant.is_tuple {
        if bindings.is_empty() {
            return path.to_string();
        }
        let fields = bindings
            .iter()
            .map(|b| format!("ref {}", b.get(side)))
            .join(", ");
        format!("{path}({fields})")
    } else {
        if bindings.is_empty() {
            return format!("{path} {{}}");
        }
        let fields = bindings
            .iter()
            .map(|b| format!("{}: ref {}", b.field, b.get(side)))
            .join(", ");
        format!("{path} {{ {fields} }}")
    }
}

/// Pattern matching `variant` at `path`, binding each field by reference.
pub fn struct_pattern(variant: &Variant, path: &str, side: Side, keywords: &Keywords) -> String {
    render_pattern(variant, path, &bind_fields(variant, keywords), side)
}

/// One empty arm per variant, matched against `target`.
pub fn exhaustiveness_check(decl: &Declaration, target: &str, session: &Session) -> Vec<String> {
    // A reference to an empty enum is inhabited, so the match needs the
    // value itself.
    let scrutinee = if decl.variants.is_empty() {
        format!("*{target}")
    } else {
        target.to_string()
    };

    let mut lines = vec![format!("match {scrutinee} {{")];
    let arms = decl.variant_paths().map(|(variant, path)| {
        format!(
            "&{} => {{}}",
            struct_pattern(variant, &path, Side::Single, &session.keywords)
        )
    });
    lines.extend(indent(arms, &session.indent));
    lines.push("}".to_string());
    lines
}

/// Matches `(target1, target2)`: one arm per variant comparing its fields
/// pairwise, and a catch-all for values of different variants.
pub fn comparison(
    decl: &Declaration,
    target1: &str,
    target2: &str,
    session: &Session,
) -> Vec<String> {
    let call = format!("{}::{}", session.trait_name, session.method_name);

    let mut arms = Vec::new();
    for (variant, path) in decl.variant_paths() {
        let bindings = bind_fields(variant, &session.keywords);
        arms.push(format!(
            "(&{},",
            render_pattern(variant, &path, &bindings, Side::First)
        ));
        arms.push(format!(
            " &{}) => {{",
            render_pattern(variant, &path, &bindings, Side::Second)
        ));

        let checks = if bindings.is_empty() {
            vec!["true".to_string()]
        } else {
            let last = bindings.len() - 1;
            bindings
                .iter()
                .enumerate()
                .map(|(i, b)| {
                    let and = if i == last { "" } else { " &&" };
                    format!("{call}({}, {}){and}", b.first, b.second)
                })
                .collect()
        };
        arms.extend(indent(checks, &session.indent));
        arms.push("}".to_string());
    }
    arms.push("(_, _) => false,".to_string());

    let mut lines = vec![format!("match ({target1}, {target2}) {{")];
    lines.extend(indent(arms, &session.indent));
    lines.push("}".to_string());
    lines
}

/// Full method body for a struct or enum in compare mode.
pub fn compare_body(decl: &Declaration, session: &Session) -> Vec<String> {
    let mut lines = vec!["// Exhaustiveness check".to_string()];
    lines.extend(exhaustiveness_check(decl, "self", session));
    lines.push(String::new());
    lines.push("// Comparison".to_string());
    lines.extend(comparison(decl, "self", "other", session));
    lines
}
