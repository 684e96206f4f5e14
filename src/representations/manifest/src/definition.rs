use crate::TypeExpr;
use indexmap::IndexMap;

/// Record declarations of one manifest by name, in declaration order.
pub type RecordDefinitions = IndexMap<String, RecordDefinition>;

/// A record declaration whose field types have been parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeExpr,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
