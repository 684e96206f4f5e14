//! Record declarations as exported by a language front end.
//!
//! A manifest lists every record type of one package in declaration order,
//! together with the ordered fields of each record and the type expression
//! of each field. Sizes are not part of the manifest, they are computed for
//! whichever target is being checked.

mod definition;
mod parse_type;
mod type_expr;

pub use definition::{FieldDefinition, RecordDefinition, RecordDefinitions};
pub use parse_type::{MAX_TYPE_DEPTH, TypeExprError, parse_type_expr};
use serde::Deserialize;
use std::path::PathBuf;
pub use type_expr::{Primitive, TypeExpr};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub package: Option<String>,
    pub records: Vec<RecordDecl>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordDecl {
    pub name: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default = "first")]
    pub line: u32,
    #[serde(default = "first")]
    pub column: u32,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

fn first() -> u32 {
    1
}

impl Manifest {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_from_json_defaults() {
        let manifest = Manifest::from_json(indoc! {r#"
            {
                "records": [
                    { "name": "Empty" },
                    {
                        "name": "Pair",
                        "file": "pair.go",
                        "line": 7,
                        "column": 6,
                        "fields": [
                            { "name": "left", "type": "u8" },
                            { "name": "right", "type": "*Pair" }
                        ]
                    }
                ]
            }
        "#})
        .unwrap();

        assert_eq!(manifest.package, None);
        assert_eq!(manifest.records.len(), 2);

        let empty = &manifest.records[0];
        assert_eq!((empty.line, empty.column), (1, 1));
        assert!(empty.fields.is_empty());
        assert!(empty.file.is_none());

        let pair = &manifest.records[1];
        assert_eq!((pair.line, pair.column), (7, 6));
        assert_eq!(pair.fields[1].name, "right");
        assert_eq!(pair.fields[1].ty, "*Pair");
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let error = Manifest::from_json(indoc! {r#"
            {
                "records": [
                    { "name": "Point", "feilds": [] }
                ]
            }
        "#})
        .unwrap_err();

        assert!(error.to_string().contains("feilds"));
        assert_eq!(error.line(), 3);
    }
}
