//! Java parser using native tree-sitter.
//!
//! Extracts the package, imports, and every type declaration (nested ones
//! included) with its methods, constructors, fields, and member types.
//! Modifiers, annotations, generic type parameters, throws clauses, varargs,
//! and Javadoc are kept; type text is copied from source.

use std::path::Path;

use nullsafe_core::errors::ParseError;
use nullsafe_core::model::{
    Annotation, ConstructorDeclaration, FieldDeclaration, Member, MethodDeclaration, Modifier,
    Modifiers, NestedType, Parameter, TypeDeclKind, TypeDescriptor,
};
use tree_sitter::{Node, Parser};

use super::doc_comment::strip_javadoc;
use super::error_tolerant::count_errors;
use super::types::{ParsedFile, ParsedType};

/// Java parser
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse one compilation unit. Syntax errors do not fail the parse;
    /// they are counted and traced, and declarations outside the broken
    /// regions are still returned.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<ParsedFile, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let mut file = ParsedFile {
            path: path.to_path_buf(),
            error_count: count_errors(root),
            ..Default::default()
        };
        if file.error_count > 0 {
            tracing::warn!(
                path = %path.display(),
                errors = file.error_count,
                "syntax errors in source; indexing what parsed cleanly"
            );
        }

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => file.package = package_name(child, src),
                "import_declaration" => file.imports.push(import_path(child, src)),
                kind if type_decl_kind(kind).is_some() => {
                    collect_type(child, src, file.package.as_deref(), None, &mut file.types);
                }
                _ => {}
            }
        }

        tracing::trace!(
            path = %path.display(),
            types = file.types.len(),
            "parsed compilation unit"
        );
        Ok(file)
    }
}

/// Record a type declaration (and, recursively, its member types) into `out`.
/// Returns the member entry the enclosing type should list.
fn collect_type(
    node: Node,
    src: &[u8],
    package: Option<&str>,
    enclosing: Option<&str>,
    out: &mut Vec<ParsedType>,
) -> Option<NestedType> {
    let kind = type_decl_kind(node.kind())?;
    let simple_name = text(node.child_by_field_name("name")?, src).to_string();
    let qualified_name = match (enclosing, package) {
        (Some(outer), _) => format!("{outer}.{simple_name}"),
        (None, Some(pkg)) => format!("{pkg}.{simple_name}"),
        (None, None) => simple_name.clone(),
    };
    let (modifiers, annotations) = modifiers_of(node, src);
    let superclass = node
        .child_by_field_name("superclass")
        .and_then(|s| s.named_child(0))
        .map(|t| erase_type_arguments(text(t, src)));

    let index = out.len();
    out.push(ParsedType {
        qualified_name: qualified_name.clone(),
        simple_name: simple_name.clone(),
        package: package.map(str::to_string),
        kind,
        modifiers: modifiers.clone(),
        annotations,
        doc: doc_comment(node, src),
        superclass,
        members: Vec::new(),
        file: 0,
    });

    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        collect_members(body, src, package, &qualified_name, &mut members, out);
    }
    out[index].members = members;

    Some(NestedType {
        name: simple_name,
        modifiers,
        kind,
    })
}

fn collect_members(
    body: Node,
    src: &[u8],
    package: Option<&str>,
    owner: &str,
    members: &mut Vec<Member>,
    out: &mut Vec<ParsedType>,
) {
    let mut cursor = body.walk();
    for child in body.named_children(&mut cursor) {
        match child.kind() {
            "method_declaration" => {
                if let Some(method) = parse_method(child, src) {
                    members.push(Member::Method(method));
                }
            }
            "constructor_declaration" | "compact_constructor_declaration" => {
                if let Some(ctor) = parse_constructor(child, src) {
                    members.push(Member::Constructor(ctor));
                }
            }
            "field_declaration" | "constant_declaration" => {
                members.extend(parse_fields(child, src).into_iter().map(Member::Field));
            }
            // Enum constants are followed by a nested declarations block.
            "enum_body_declarations" => {
                collect_members(child, src, package, owner, members, out);
            }
            kind if type_decl_kind(kind).is_some() => {
                if let Some(nested) = collect_type(child, src, package, Some(owner), out) {
                    members.push(Member::Type(nested));
                }
            }
            _ => {}
        }
    }
}

fn parse_method(node: Node, src: &[u8]) -> Option<MethodDeclaration> {
    let name = text(node.child_by_field_name("name")?, src).to_string();
    let (modifiers, annotations) = modifiers_of(node, src);

    let mut return_type = type_descriptor(node.child_by_field_name("type")?, src);
    // Legacy array syntax: `int values()[]`.
    if let Some(dims) = node.child_by_field_name("dimensions") {
        return_type = TypeDescriptor::reference(format!("{}{}", return_type.text, text(dims, src)));
    }

    let type_parameters = node
        .child_by_field_name("type_parameters")
        .map(|n| normalize(text(n, src)));
    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| parse_parameters(p, src))
        .unwrap_or_default();
    let thrown = child_of_kind(node, "throws")
        .map(|t| {
            let mut cursor = t.walk();
            let thrown: Vec<_> = t
                .named_children(&mut cursor)
                .map(|ty| TypeDescriptor::reference(normalize(text(ty, src))))
                .collect();
            thrown
        })
        .unwrap_or_default();

    Some(MethodDeclaration {
        name,
        modifiers,
        type_parameters,
        return_type,
        parameters,
        thrown,
        annotations,
        doc: doc_comment(node, src),
    })
}

fn parse_constructor(node: Node, src: &[u8]) -> Option<ConstructorDeclaration> {
    let name = text(node.child_by_field_name("name")?, src).to_string();
    let (modifiers, _) = modifiers_of(node, src);
    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| parse_parameters(p, src))
        .unwrap_or_default();
    Some(ConstructorDeclaration {
        name,
        modifiers,
        parameters,
    })
}

/// One field declaration may declare several names: `int a, b;`.
fn parse_fields(node: Node, src: &[u8]) -> Vec<FieldDeclaration> {
    let Some(ty_node) = node.child_by_field_name("type") else {
        return Vec::new();
    };
    let ty = type_descriptor(ty_node, src);
    let (modifiers, _) = modifiers_of(node, src);

    let mut cursor = node.walk();
    let fields = node
        .children_by_field_name("declarator", &mut cursor)
        .filter_map(|d| d.child_by_field_name("name"))
        .map(|n| FieldDeclaration {
            name: text(n, src).to_string(),
            modifiers: modifiers.clone(),
            ty: ty.clone(),
        })
        .collect();
    fields
}

fn parse_parameters(params: Node, src: &[u8]) -> Vec<Parameter> {
    let mut out = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "formal_parameter" => {
                let (Some(name), Some(ty_node)) = (
                    child.child_by_field_name("name"),
                    child.child_by_field_name("type"),
                ) else {
                    continue;
                };
                let mut ty = type_descriptor(ty_node, src);
                // C-style array declarator: `String args[]`.
                if let Some(dims) = child.child_by_field_name("dimensions") {
                    ty = TypeDescriptor::reference(format!("{}{}", ty.text, text(dims, src)));
                }
                out.push(Parameter::new(text(name, src), ty));
            }
            "spread_parameter" => {
                if let Some(param) = parse_spread_parameter(child, src) {
                    out.push(param);
                }
            }
            // receiver_parameter (`Foo this`) is not a real argument.
            _ => {}
        }
    }
    out
}

/// `Type... name`
fn parse_spread_parameter(node: Node, src: &[u8]) -> Option<Parameter> {
    let mut ty = None;
    let mut name = None;
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        match part.kind() {
            "modifiers" | "marker_annotation" | "annotation" => {}
            "variable_declarator" => {
                name = part
                    .child_by_field_name("name")
                    .map(|n| text(n, src).to_string());
            }
            "identifier" => name = Some(text(part, src).to_string()),
            _ if ty.is_none() => ty = Some(type_descriptor(part, src)),
            _ => {}
        }
    }
    Some(Parameter::varargs(name?, ty?))
}

fn modifiers_of(node: Node, src: &[u8]) -> (Modifiers, Vec<Annotation>) {
    let mut modifiers = Modifiers::new();
    let mut annotations = Vec::new();

    let Some(mods) = child_of_kind(node, "modifiers") else {
        return (modifiers, annotations);
    };
    let mut cursor = mods.walk();
    for child in mods.children(&mut cursor) {
        match child.kind() {
            "marker_annotation" | "annotation" => {
                if let Some(name) = child.child_by_field_name("name") {
                    annotations.push(Annotation::new(text(name, src), text(child, src)));
                }
            }
            keyword => {
                if let Some(modifier) = Modifier::from_keyword(keyword) {
                    modifiers.insert(modifier);
                }
            }
        }
    }
    (modifiers, annotations)
}

fn type_descriptor(node: Node, src: &[u8]) -> TypeDescriptor {
    match node.kind() {
        "void_type" => TypeDescriptor::void(),
        "integral_type" | "floating_point_type" | "boolean_type" => {
            TypeDescriptor::from_source(text(node, src))
        }
        _ => TypeDescriptor::reference(normalize(text(node, src))),
    }
}

/// Javadoc directly preceding a declaration, if any.
fn doc_comment(node: Node, src: &[u8]) -> Option<String> {
    let prev = node.prev_named_sibling()?;
    match prev.kind() {
        "block_comment" | "comment" => strip_javadoc(text(prev, src)),
        _ => None,
    }
}

fn package_name(node: Node, src: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let name = node
        .named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;
    Some(text(name, src).to_string())
}

/// `import static a.B.c;` becomes `static a.B.c`.
fn import_path(node: Node, src: &[u8]) -> String {
    let full = normalize(text(node, src));
    let path = full.strip_prefix("import").unwrap_or(&full);
    path.trim().trim_end_matches(';').trim().to_string()
}

fn type_decl_kind(kind: &str) -> Option<TypeDeclKind> {
    match kind {
        "class_declaration" => Some(TypeDeclKind::Class),
        "interface_declaration" => Some(TypeDeclKind::Interface),
        "enum_declaration" => Some(TypeDeclKind::Enum),
        "record_declaration" => Some(TypeDeclKind::Record),
        "annotation_type_declaration" => Some(TypeDeclKind::Annotation),
        _ => None,
    }
}

fn child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn text<'a>(node: Node, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

/// Collapse whitespace runs (line breaks inside long generic types).
fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `a.b.Base<T>` becomes `a.b.Base`; nested arguments are removed too.
fn erase_type_arguments(s: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if depth == 0 && !c.is_whitespace() => out.push(c),
            _ => {}
        }
    }
    out
}
