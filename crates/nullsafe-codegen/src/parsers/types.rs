//! Parser output types.

use std::path::PathBuf;

use nullsafe_core::model::{Annotation, Member, Modifiers, TypeDeclKind};

/// Everything extracted from one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub package: Option<String>,
    pub imports: Vec<String>,
    /// Top-level and nested types, outer before inner, in source order.
    pub types: Vec<ParsedType>,
    /// Number of ERROR/MISSING nodes in the tree.
    pub error_count: u32,
}

/// One type declaration with its own (non-inherited) members.
#[derive(Debug, Clone)]
pub struct ParsedType {
    pub qualified_name: String,
    pub simple_name: String,
    pub package: Option<String>,
    pub kind: TypeDeclKind,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
    pub doc: Option<String>,
    /// Superclass as written, without type arguments (`Base`, `a.b.Base`).
    pub superclass: Option<String>,
    pub members: Vec<Member>,
    /// Index of the owning file in the source index.
    pub file: usize,
}

impl ParsedType {
    /// Whether the type carries an annotation with the given simple name.
    pub fn has_annotation(&self, simple_name: &str) -> bool {
        self.annotations
            .iter()
            .any(|a| a.simple_name() == simple_name)
    }
}
