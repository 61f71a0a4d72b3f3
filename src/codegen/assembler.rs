use chrono::Local;
use itertools::Itertools;

use crate::session::Session;

/// Header of the generated file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Banner {
    pub generator: String,
    pub produced: String,
}

impl Banner {
    /// Stamped with the current local time.
    pub fn now(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            produced: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn fixed(generator: impl Into<String>, produced: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            produced: produced.into(),
        }
    }

    pub fn lines(&self) -> [String; 2] {
        [
            "// AUTOMATICALLY GENERATED - DO NOT EDIT".to_string(),
            format!("// Produced {} by {}", self.produced, self.generator),
        ]
    }
}

/// Prefixes every non-empty line with `unit`.
pub fn indent<I, S>(lines: I, unit: &str) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(move |line| {
        let line = line.as_ref();
        if line.is_empty() {
            String::new()
        } else {
            format!("{unit}{line}")
        }
    })
}

/// Wraps a method body in the trait impl for `name`.
pub fn impl_block(name: &str, body: &[String], session: &Session) -> Vec<String> {
    let method = [
        "#[allow(unused_variables, unreachable_patterns)]".to_string(),
        format!("fn {}(&self, other: &Self) -> bool {{", session.method_name),
    ]
    .into_iter()
    .chain(indent(body, &session.indent))
    .chain(["}".to_string()]);

    let mut lines = vec![format!("impl {} for {name} {{", session.trait_name)];
    lines.extend(indent(method, &session.indent));
    lines.push("}".to_string());
    lines
}

/// Joins the banner and the blocks into the final text. Blocks keep their
/// order and are separated by a blank line.
pub fn assemble(banner: &Banner, blocks: &[Vec<String>]) -> String {
    let mut out = String::new();
    for line in banner.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    let body = blocks.iter().map(|block| block.join("\n")).join("\n\n");
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out
}
