use std::collections::HashSet;

use crate::ast::{DeclKind, Declaration, Variant, structs::positional_name};
use crate::codegen::errors::CodegenError;

/// Checks that a declaration respects the shape the emitters rely on.
///
/// Violations come from a broken upstream model, so they are reported as
/// errors and never repaired.
pub fn check_declaration(decl: &Declaration) -> Result<(), CodegenError> {
    let malformed = |reason: String| CodegenError::MalformedVariant {
        decl: decl.name.clone(),
        reason,
    };

    match decl.kind {
        DeclKind::Struct if decl.variants.len() != 1 => {
            return Err(malformed(format!(
                "a struct has exactly one variant, found {}",
                decl.variants.len()
            )));
        }
        DeclKind::Other if !decl.variants.is_empty() => {
            return Err(malformed(format!(
                "an opaque declaration has no variants, found {}",
                decl.variants.len()
            )));
        }
        _ => {}
    }

    let mut seen = HashSet::new();
    for variant in &decl.variants {
        if variant.name.is_empty() {
            return Err(malformed("variant with an empty name".to_string()));
        }
        if !seen.insert(variant.name.as_str()) {
            return Err(malformed(format!("duplicate variant {:?}", variant.name)));
        }
        check_fields(variant).map_err(malformed)?;
    }

    Ok(())
}

fn check_fields(variant: &Variant) -> Result<(), String> {
    if variant.is_tuple {
        for (index, field) in variant.fields.iter().enumerate() {
            if field.name != positional_name(index) {
                return Err(format!(
                    "tuple variant {:?} has field {:?} at position {index}, expected {:?}",
                    variant.name,
                    field.name,
                    positional_name(index)
                ));
            }
        }
        return Ok(());
    }

    let mut seen = HashSet::new();
    for field in &variant.fields {
        if field.name.is_empty() {
            return Err(format!("variant {:?} has an unnamed field", variant.name));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(format!(
                "variant {:?} has duplicate field {:?}",
                variant.name, field.name
            ));
        }
    }
    Ok(())
}
