//! Type descriptors and modifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The eight Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    /// Parse a primitive keyword (`int`, `boolean`, ...).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

/// Closed set of type kinds the generator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Primitive(PrimitiveType),
    /// Classes, interfaces, type variables, and arrays (including primitive arrays).
    Reference,
    /// `void`, the "no value" return kind.
    Void,
}

/// A type as written in source, plus its kind.
///
/// `text` keeps generic arguments and wildcards as written. Providers may
/// qualify names in it so it reads the same from the wrapper's scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub text: String,
    pub kind: TypeKind,
}

impl TypeDescriptor {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Self {
            text: primitive.keyword().to_string(),
            kind: TypeKind::Primitive(primitive),
        }
    }

    pub fn reference(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TypeKind::Reference,
        }
    }

    pub fn void() -> Self {
        Self {
            text: "void".to_string(),
            kind: TypeKind::Void,
        }
    }

    /// Classify source text: primitive keywords and `void` are recognized,
    /// everything else (including `int[]`) is a reference.
    pub fn from_source(text: &str) -> Self {
        let text = text.trim();
        if text == "void" {
            return Self::void();
        }
        match PrimitiveType::from_keyword(text) {
            Some(p) => Self::primitive(p),
            None => Self::reference(text),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    pub fn is_reference(&self) -> bool {
        self.kind == TypeKind::Reference
    }

    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Java declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Sealed,
    NonSealed,
    Strictfp,
    Default,
    Synchronized,
    Native,
    Transient,
    Volatile,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "static" => Self::Static,
            "final" => Self::Final,
            "sealed" => Self::Sealed,
            "non-sealed" => Self::NonSealed,
            "strictfp" => Self::Strictfp,
            "default" => Self::Default,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            _ => return None,
        })
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Sealed => "sealed",
            Self::NonSealed => "non-sealed",
            Self::Strictfp => "strictfp",
            Self::Default => "default",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
        }
    }
}

/// Ordered, duplicate-free modifier set. Declarations rarely carry more
/// than three modifiers, so this stays inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(SmallVec<[Modifier; 4]>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed `public static` pair every wrapper method carries.
    pub fn public_static() -> Self {
        [Modifier::Public, Modifier::Static].into_iter().collect()
    }

    pub fn insert(&mut self, modifier: Modifier) {
        if !self.contains(modifier) {
            self.0.push(modifier);
        }
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Self::new();
        for modifier in iter {
            modifiers.insert(modifier);
        }
        modifiers
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for modifier in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(modifier.keyword())?;
            first = false;
        }
        Ok(())
    }
}
