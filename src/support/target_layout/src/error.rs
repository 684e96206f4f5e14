use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutError {
    pub kind: LayoutErrorKind,
    /// Field whose type could not be laid out, if known
    pub field: Option<String>,
}

impl LayoutError {
    pub fn in_field(self, field: &str) -> Self {
        Self {
            field: self.field.or_else(|| Some(field.into())),
            ..self
        }
    }
}

impl From<LayoutErrorKind> for LayoutError {
    fn from(kind: LayoutErrorKind) -> Self {
        Self { kind, field: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutErrorKind {
    UndeclaredRecord(String),
    RecursiveRecord(String),
    NestedTooDeep(String),
    TooLarge(String),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} (in field '{}')", self.kind, field),
            None => self.kind.fmt(f),
        }
    }
}

impl Display for LayoutErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutErrorKind::UndeclaredRecord(name) => write!(f, "Undeclared type '{}'", name),
            LayoutErrorKind::RecursiveRecord(name) => {
                write!(f, "Record '{}' contains itself and has infinite size", name)
            }
            LayoutErrorKind::NestedTooDeep(name) => write!(
                f,
                "Record '{}' is nested more than {} records deep",
                name,
                crate::MAX_RECORD_NESTING
            ),
            LayoutErrorKind::TooLarge(ty) => write!(f, "Type '{}' is too large", ty),
        }
    }
}
