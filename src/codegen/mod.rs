use std::time::Instant;

use tracing::instrument;

use crate::ast::{DeclKind, Declaration};
use crate::check::check_declaration;
use crate::session::{Session, UnknownModePolicy};
use assembler::{Banner, assemble, impl_block};
use compare::compare_body;
use errors::CodegenError;
use mode::{Mode, ModeSelection, select_mode};
use simple::{eq_body, ignore_body};

pub mod assembler;
pub mod compare;
pub mod errors;
pub mod hygiene;
pub mod mode;
pub mod simple;

/// Generates the equivalence impls for all declarations, stamped with the
/// current time.
pub fn generate(decls: &[Declaration], session: &Session) -> Result<String, CodegenError> {
    generate_with_banner(decls, session, &Banner::now(&session.generator_name))
}

/// Same as [`generate`] with a caller-provided banner, for reproducible
/// output.
#[instrument(level = "debug", skip_all, fields(declarations = decls.len()))]
pub fn generate_with_banner(
    decls: &[Declaration],
    session: &Session,
    banner: &Banner,
) -> Result<String, CodegenError> {
    let start_time = Instant::now();

    let blocks = emit_blocks(decls, session)?;
    let text = assemble(banner, &blocks);

    tracing::debug!(
        "generated {} of {} impls in {:?}",
        blocks.len(),
        decls.len(),
        start_time.elapsed()
    );
    Ok(text)
}

/// One block of lines per emitted declaration, in input order. Fails on the
/// first bad declaration.
pub fn emit_blocks(
    decls: &[Declaration],
    session: &Session,
) -> Result<Vec<Vec<String>>, CodegenError> {
    let mut blocks = Vec::with_capacity(decls.len());
    for decl in decls {
        if let Some(block) = emit_declaration(decl, session)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}

/// The impl block for a single declaration, or `None` when its mode is
/// unknown and the session skips those.
pub fn emit_declaration(
    decl: &Declaration,
    session: &Session,
) -> Result<Option<Vec<String>>, CodegenError> {
    check_declaration(decl)?;

    let mode = match select_mode(decl) {
        ModeSelection::Mode(mode) => mode,
        ModeSelection::Unknown(mode) => match session.unknown_mode {
            UnknownModePolicy::Skip => {
                tracing::warn!(
                    "skipping {:?}: unknown equiv_mode {:?}, no impl emitted",
                    decl.name,
                    mode
                );
                return Ok(None);
            }
            UnknownModePolicy::Error => {
                return Err(CodegenError::UnknownMode {
                    decl: decl.name.clone(),
                    mode,
                });
            }
        },
    };
    tracing::debug!(decl = %decl.name, mode = mode.as_str(), "emitting impl");

    let body = match mode {
        Mode::Compare => {
            if decl.kind == DeclKind::Other {
                return Err(CodegenError::CompareOnOpaque {
                    decl: decl.name.clone(),
                });
            }
            compare_body(decl, session)
        }
        Mode::Eq => eq_body(),
        Mode::Ignore => ignore_body(),
    };

    Ok(Some(impl_block(&decl.name, &body, session)))
}
