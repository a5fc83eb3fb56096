//! Generated counterparts: wrapper classes, methods, and body statements.

use serde::{Deserialize, Serialize};

use super::declaration::{Annotation, Parameter};
use super::types::{Modifiers, TypeDescriptor};

/// One statement of a synthesized wrapper body. Rendering to text is the
/// emitter's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `if (parameter == null) { return null; }`
    NullGuard { parameter: String },
    /// `return target.method(arguments...);`
    Delegate {
        target: String,
        method: String,
        arguments: Vec<String>,
    },
}

/// A generated static method. Its name, parameter types, and return type
/// match the source method exactly; only the body differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperMethod {
    pub name: String,
    pub modifiers: Modifiers,
    pub type_parameters: Option<String>,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<Parameter>,
    pub thrown: Vec<TypeDescriptor>,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    pub body: Vec<Statement>,
}

impl WrapperMethod {
    /// Parameters that received a null guard, in body order.
    pub fn guarded_parameters(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(|s| match s {
            Statement::NullGuard { parameter } => Some(parameter.as_str()),
            Statement::Delegate { .. } => None,
        })
    }
}

/// The output unit: one per marked type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperClass {
    /// Prefix plus the origin's simple name, e.g. `NullSafeFoo`.
    pub name: String,
    pub package: Option<String>,
    /// Qualified name of the marked type the class delegates to.
    pub origin: String,
    /// The origin type's documentation, passed through as-is.
    pub doc: Option<String>,
    /// Line appended after the documentation.
    pub attribution: String,
    pub imports: Vec<String>,
    pub methods: Vec<WrapperMethod>,
}

impl WrapperClass {
    /// Qualified name of the generated class.
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(pkg) => format!("{pkg}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
