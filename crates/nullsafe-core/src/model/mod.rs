//! Declaration model: what the metadata provider supplies and what the
//! generator produces. All values are immutable once built.

pub mod declaration;
pub mod types;
pub mod wrapper;

pub use declaration::{
    Annotation, ConstructorDeclaration, ElementKind, FieldDeclaration, MarkedType, Member,
    MethodDeclaration, NestedType, Parameter, TypeDeclKind,
};
pub use types::{Modifier, Modifiers, PrimitiveType, TypeDescriptor, TypeKind};
pub use wrapper::{Statement, WrapperClass, WrapperMethod};
