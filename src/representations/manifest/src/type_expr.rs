use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Primitive(Primitive),
    Pointer(Box<TypeExpr>),
    FunctionPointer,
    Slice(Box<TypeExpr>),
    FixedArray(u64, Box<TypeExpr>),
    Named(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    Isize,
    Usize,
    F32,
    F64,
    C64,
    C128,
    Char,
    Str,
    Dyn,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "i8" => Self::I8,
            "u8" => Self::U8,
            "i16" => Self::I16,
            "u16" => Self::U16,
            "i32" => Self::I32,
            "u32" => Self::U32,
            "i64" => Self::I64,
            "u64" => Self::U64,
            "isize" => Self::Isize,
            "usize" => Self::Usize,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "c64" => Self::C64,
            "c128" => Self::C128,
            "char" => Self::Char,
            "str" => Self::Str,
            "dyn" => Self::Dyn,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::Isize => "isize",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::C64 => "c64",
            Self::C128 => "c128",
            Self::Char => "char",
            Self::Str => "str",
            Self::Dyn => "dyn",
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Primitive(primitive) => primitive.fmt(f),
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner),
            TypeExpr::FunctionPointer => f.write_str("fn"),
            TypeExpr::Slice(inner) => write!(f, "[]{}", inner),
            TypeExpr::FixedArray(length, inner) => write!(f, "[{}]{}", length, inner),
            TypeExpr::Named(name) => f.write_str(name),
        }
    }
}
