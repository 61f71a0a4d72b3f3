/// One shape of a declaration: the single implicit variant of a struct, or
/// one case of an enum.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variant {
    pub name: String,
    /// Positional fields, matched as `Path(a, b)`. Named fields are matched
    /// as `Path { a: .., b: .. }`.
    pub is_tuple: bool,
    pub fields: Vec<Field>,
}

impl Variant {
    pub fn named<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            is_tuple: false,
            fields: fields.into_iter().map(Field::new).collect(),
        }
    }

    pub fn tuple(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            is_tuple: true,
            fields: (0..arity).map(Field::positional).collect(),
        }
    }

    /// A variant without any fields, matched by its bare path.
    pub fn unit(name: impl Into<String>) -> Self {
        Self::tuple(name, 0)
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    pub name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Synthetic label for the field at `index` of a tuple variant. Only used
    /// to derive binding names, never written as a field label.
    pub fn positional(index: usize) -> Self {
        Self {
            name: positional_name(index),
        }
    }
}

pub fn positional_name(index: usize) -> String {
    format!("_{index}")
}
