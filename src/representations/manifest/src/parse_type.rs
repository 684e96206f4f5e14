use crate::{Primitive, TypeExpr};
use std::{fmt::Display, iter::Peekable, str::CharIndices};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExprError {
    ExpectedType { found: Option<char> },
    ExpectedClosingBracket { found: Option<char> },
    ArrayLengthTooLarge(String),
    TooDeep,
    TrailingText(String),
}

/// Most `*`, `[]` and `[N]` prefixes allowed in front of one base type.
pub const MAX_TYPE_DEPTH: usize = 64;

impl Display for TypeExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExprError::ExpectedType { found: Some(c) } => {
                write!(f, "Expected type, got '{}'", c)
            }
            TypeExprError::ExpectedType { found: None } => {
                f.write_str("Expected type, got end of type")
            }
            TypeExprError::ExpectedClosingBracket { found: Some(c) } => {
                write!(f, "Expected ']' after array length, got '{}'", c)
            }
            TypeExprError::ExpectedClosingBracket { found: None } => {
                f.write_str("Expected ']' after array length, got end of type")
            }
            TypeExprError::ArrayLengthTooLarge(digits) => {
                write!(f, "Array length '{}' is too large", digits)
            }
            TypeExprError::TooDeep => {
                write!(f, "Type is nested more than {} levels deep", MAX_TYPE_DEPTH)
            }
            TypeExprError::TrailingText(rest) => {
                write!(f, "Unexpected '{}' after type", rest)
            }
        }
    }
}

/// Parses a field type such as `u8`, `*Node`, `[]str` or `[4][2]f32`.
pub fn parse_type_expr(text: &str) -> Result<TypeExpr, TypeExprError> {
    let mut parser = TypeExprParser {
        text,
        chars: text.char_indices().peekable(),
    };

    let ty = parser.parse_type()?;
    parser.skip_whitespace();

    match parser.chars.peek() {
        Some((offset, _)) => Err(TypeExprError::TrailingText(text[*offset..].into())),
        None => Ok(ty),
    }
}

struct TypeExprParser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> TypeExprParser<'a> {
    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().map(|(_, c)| *c)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn parse_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        let mut prefixes = vec![];

        loop {
            let prefix = match self.peek() {
                Some('*') => {
                    self.chars.next();
                    Prefix::Pointer
                }
                Some('[') => {
                    self.chars.next();
                    self.parse_brackets()?
                }
                _ => break,
            };

            if prefixes.len() == MAX_TYPE_DEPTH {
                return Err(TypeExprError::TooDeep);
            }

            prefixes.push(prefix);
        }

        let base = self.parse_base_type()?;

        Ok(prefixes
            .into_iter()
            .rev()
            .fold(base, |inner, prefix| prefix.wrap(inner)))
    }

    fn parse_base_type(&mut self) -> Result<TypeExpr, TypeExprError> {
        match self.peek() {
            Some(c) if is_identifier_start(c) => {
                let name = self.parse_identifier();

                Ok(match Primitive::from_name(name) {
                    Some(primitive) => TypeExpr::Primitive(primitive),
                    None if name == "fn" => TypeExpr::FunctionPointer,
                    None => TypeExpr::Named(name.into()),
                })
            }
            found => Err(TypeExprError::ExpectedType { found }),
        }
    }

    /// Parses the rest of `[]` or `[N]` after the opening bracket.
    fn parse_brackets(&mut self) -> Result<Prefix, TypeExprError> {
        if self.peek() == Some(']') {
            self.chars.next();
            return Ok(Prefix::Slice);
        }

        let mut digits = String::new();
        while let Some((_, c)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            digits.push(c);
        }

        if digits.is_empty() {
            return Err(TypeExprError::ExpectedClosingBracket { found: self.peek() });
        }

        let length = digits
            .parse::<u64>()
            .map_err(|_| TypeExprError::ArrayLengthTooLarge(digits))?;

        match self.peek() {
            Some(']') => {
                self.chars.next();
                Ok(Prefix::FixedArray(length))
            }
            found => Err(TypeExprError::ExpectedClosingBracket { found }),
        }
    }

    fn parse_identifier(&mut self) -> &'a str {
        let start = self.chars.peek().map_or(self.text.len(), |(offset, _)| *offset);
        let mut end = start;

        while let Some((offset, c)) = self.chars.next_if(|(_, c)| is_identifier_continue(*c)) {
            end = offset + c.len_utf8();
        }

        let text = self.text;
        &text[start..end]
    }
}

enum Prefix {
    Pointer,
    Slice,
    FixedArray(u64),
}

impl Prefix {
    fn wrap(self, inner: TypeExpr) -> TypeExpr {
        let inner = Box::new(inner);

        match self {
            Prefix::Pointer => TypeExpr::Pointer(inner),
            Prefix::Slice => TypeExpr::Slice(inner),
            Prefix::FixedArray(length) => TypeExpr::FixedArray(length, inner),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

#[test]
fn test_parse_primitives_and_names() {
    assert_eq!(
        parse_type_expr("u8"),
        Ok(TypeExpr::Primitive(Primitive::U8))
    );
    assert_eq!(parse_type_expr(" fn "), Ok(TypeExpr::FunctionPointer));
    assert_eq!(
        parse_type_expr("geometry.Point"),
        Ok(TypeExpr::Named("geometry.Point".into()))
    );
}

#[test]
fn test_parse_nested() {
    let ty = parse_type_expr("[4] [ ]*Node").unwrap();

    assert_eq!(
        ty,
        TypeExpr::FixedArray(
            4,
            Box::new(TypeExpr::Slice(Box::new(TypeExpr::Pointer(Box::new(
                TypeExpr::Named("Node".into())
            )))))
        )
    );
    assert_eq!(ty.to_string(), "[4][]*Node");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        parse_type_expr(""),
        Err(TypeExprError::ExpectedType { found: None })
    );
    assert_eq!(
        parse_type_expr("[3 u8"),
        Err(TypeExprError::ExpectedClosingBracket { found: Some('u') })
    );
    assert_eq!(
        parse_type_expr("[x]u8"),
        Err(TypeExprError::ExpectedClosingBracket { found: Some('x') })
    );
    assert_eq!(
        parse_type_expr("u8 u16"),
        Err(TypeExprError::TrailingText("u16".into()))
    );
    assert_eq!(
        parse_type_expr("[99999999999999999999999]u8"),
        Err(TypeExprError::ArrayLengthTooLarge(
            "99999999999999999999999".into()
        ))
    );
}

#[test]
fn test_parse_depth_limit() {
    let deepest = format!("{}u8", "*[2]".repeat(MAX_TYPE_DEPTH / 2));
    assert_eq!(
        parse_type_expr(&deepest).map(|ty| ty.to_string()),
        Ok(deepest.clone())
    );

    let too_deep = format!("[]{}", deepest);
    assert_eq!(parse_type_expr(&too_deep), Err(TypeExprError::TooDeep));

    let huge = format!("{}u8", "*".repeat(1_000_000));
    assert_eq!(parse_type_expr(&huge), Err(TypeExprError::TooDeep));
}
