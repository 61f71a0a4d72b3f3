/// Reserved words of the output language. A field whose name is in the table
/// gets a trailing `_` before it is used as a binding.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Keywords(pub &'static [&'static str]);

pub const RUST_KEYWORDS: Keywords = Keywords(&[
    "const", "else", "fn", "impl", "mod", "mut", "ref", "self", "type", "unsafe",
]);

impl Keywords {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name)
    }

    /// `name` with a trailing `_` if it is reserved.
    pub fn escape(&self, name: &str) -> String {
        if self.contains(name) {
            format!("{name}_")
        } else {
            name.to_string()
        }
    }

    /// The identifier a field is bound to: the field name, escaped if
    /// reserved, followed by `suffix` (`""`, `"1"` or `"2"`).
    pub fn binding(&self, field: &str, suffix: &str) -> String {
        format!("{}{suffix}", self.escape(field))
    }
}
