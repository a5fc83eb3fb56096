//! Declarations as read from source: marked types and their members.

use serde::{Deserialize, Serialize};

use super::types::{Modifiers, TypeDescriptor};

/// A Java annotation as it appears on a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Name as written, e.g. `Deprecated` or `javax.annotation.Nonnull`.
    pub name: String,
    /// Full source text including `@` and arguments.
    pub text: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// A marker annotation (`@Name`, no arguments).
    pub fn marker(name: impl Into<String>) -> Self {
        let name = name.into();
        let text = format!("@{name}");
        Self { name, text }
    }

    /// Last segment of the annotation name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// For varargs, the element type (`String` in `String... args`).
    pub ty: TypeDescriptor,
    pub varargs: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: false,
        }
    }

    pub fn varargs(name: impl Into<String>, element: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty: element,
            varargs: true,
        }
    }

    /// Whether the argument can be null at runtime. Varargs are arrays.
    pub fn is_nullable(&self) -> bool {
        self.varargs || self.ty.is_reference()
    }
}

/// A method member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    /// Generic type parameter clause verbatim, e.g. `<T extends Comparable<T>>`.
    pub type_parameters: Option<String>,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<Parameter>,
    pub thrown: Vec<TypeDescriptor>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
}

impl MethodDeclaration {
    /// A bare method with no modifiers, parameters, or annotations.
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            type_parameters: None,
            return_type,
            parameters: Vec::new(),
            thrown: Vec::new(),
            annotations: Vec::new(),
            doc: None,
        }
    }

    /// Parameter type texts, used to compare signatures for hiding.
    pub fn parameter_types(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.ty.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub name: String,
    pub modifiers: Modifiers,
    pub ty: TypeDescriptor,
}

/// Kinds of type declarations the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

impl TypeDeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Annotation => "annotation type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedType {
    pub name: String,
    pub modifiers: Modifiers,
    pub kind: TypeDeclKind,
}

/// Closed set of member kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Method,
    Constructor,
    Field,
    Type,
}

/// A member of a marked type, own or inherited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    Field(FieldDeclaration),
    Type(NestedType),
}

impl Member {
    pub fn kind(&self) -> ElementKind {
        match self {
            Member::Method(_) => ElementKind::Method,
            Member::Constructor(_) => ElementKind::Constructor,
            Member::Field(_) => ElementKind::Field,
            Member::Type(_) => ElementKind::Type,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::Method(m) => &m.name,
            Member::Constructor(c) => &c.name,
            Member::Field(f) => &f.name,
            Member::Type(t) => &t.name,
        }
    }

    pub fn modifiers(&self) -> &Modifiers {
        match self {
            Member::Method(m) => &m.modifiers,
            Member::Constructor(c) => &c.modifiers,
            Member::Field(f) => &f.modifiers,
            Member::Type(t) => &t.modifiers,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDeclaration> {
        match self {
            Member::Method(m) => Some(m),
            _ => None,
        }
    }
}

/// A type selected for wrapper generation, with its members already
/// flattened across the supertype chain by the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedType {
    /// `com.example.Foo`, or `com.example.Outer.Inner` for nested types.
    pub qualified_name: String,
    pub simple_name: String,
    /// `None` for the default package.
    pub package: Option<String>,
    pub doc: Option<String>,
    /// Single-type and on-demand imports of the declaring file(s), verbatim
    /// without `import` and `;` (e.g. `java.util.List`, `static a.B.c`).
    pub imports: Vec<String>,
    pub members: Vec<Member>,
}

impl MarkedType {
    pub fn new(package: Option<&str>, simple_name: impl Into<String>) -> Self {
        let simple_name = simple_name.into();
        let qualified_name = match package {
            Some(pkg) => format!("{pkg}.{simple_name}"),
            None => simple_name.clone(),
        };
        Self {
            qualified_name,
            simple_name,
            package: package.map(str::to_string),
            doc: None,
            imports: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(Member::as_method)
    }
}
