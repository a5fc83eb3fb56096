//! SourceIndex: a metadata provider backed by parsed Java sources.

use std::path::Path;

use nullsafe_core::errors::{ParseError, PipelineError, ProviderError};
use nullsafe_core::model::{MarkedType, Member, MethodDeclaration, Modifier, TypeDeclKind};
use nullsafe_core::ScanConfig;
use rustc_hash::{FxHashMap, FxHashSet};

use super::type_scope::{rewrite_type_names, type_parameter_names};
use super::MetadataProvider;
use crate::parsers::{JavaParser, ParsedFile, ParsedType};
use crate::scanner::SourceScanner;

/// Index of every type declared in a set of Java sources.
pub struct SourceIndex {
    marker: String,
    files: Vec<FileEntry>,
    types: Vec<ParsedType>,
    by_name: FxHashMap<String, usize>,
}

struct FileEntry {
    package: Option<String>,
    imports: Vec<String>,
}

impl SourceIndex {
    /// Empty index recognizing `marker` (a simple annotation name).
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            files: Vec::new(),
            types: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Scan the configured source roots and index every file.
    ///
    /// Unreadable files, files that are not UTF-8, and missing roots are
    /// returned as non-fatal errors; only a grammar failure aborts.
    pub fn scan(
        scan: &ScanConfig,
        marker: &str,
    ) -> Result<(Self, Vec<PipelineError>), ParseError> {
        let mut parser = JavaParser::new()?;
        let result = SourceScanner::new(scan.clone()).scan();
        let mut errors: Vec<PipelineError> = result.errors.into_iter().map(Into::into).collect();

        let mut index = Self::new(marker);
        for file in &result.files {
            let Ok(source) = std::str::from_utf8(&file.content) else {
                tracing::warn!(path = %file.path.display(), "source is not valid UTF-8; skipped");
                errors.push(
                    ParseError::InvalidUtf8 {
                        path: file.path.clone(),
                    }
                    .into(),
                );
                continue;
            };
            match parser.parse(source, &file.path) {
                Ok(parsed) => index.add_file(parsed),
                Err(e) => errors.push(e.into()),
            }
        }
        tracing::info!(
            files = index.files.len(),
            types = index.types.len(),
            marked = index.marked_types().len(),
            "indexed Java sources"
        );
        Ok((index, errors))
    }

    /// Parse and index in-memory sources, e.g. from a test.
    pub fn from_sources<'a>(
        marker: &str,
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ParseError> {
        let mut parser = JavaParser::new()?;
        let mut index = Self::new(marker);
        for (path, source) in sources {
            index.add_file(parser.parse(source, Path::new(path))?);
        }
        Ok(index)
    }

    pub fn add_file(&mut self, parsed: ParsedFile) {
        let file = self.files.len();
        self.files.push(FileEntry {
            package: parsed.package,
            imports: parsed.imports,
        });
        for mut ty in parsed.types {
            ty.file = file;
            if let Some(previous) = self.by_name.get(&ty.qualified_name) {
                tracing::warn!(
                    type_name = %ty.qualified_name,
                    "duplicate declaration; keeping the first (index {previous})"
                );
                continue;
            }
            self.by_name.insert(ty.qualified_name.clone(), self.types.len());
            self.types.push(ty);
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&ParsedType> {
        self.by_name.get(qualified_name).map(|&i| &self.types[i])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a superclass reference as written in `from`'s file.
    ///
    /// Order: already qualified, single-type import, enclosing type's
    /// member, same package, unique simple name anywhere in the index.
    fn resolve_supertype(&self, from: &ParsedType, name: &str) -> Option<usize> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(i);
        }
        let file = &self.files[from.file];

        let simple = name.rsplit('.').next().unwrap_or(name);
        for import in &file.imports {
            if import.starts_with("static ") {
                continue;
            }
            if import.rsplit('.').next() == Some(simple) {
                if let Some(&i) = self.by_name.get(import.as_str()) {
                    return Some(i);
                }
            }
        }

        // Sibling member type: `class B extends A` inside `Outer`.
        if let Some((outer, _)) = from.qualified_name.rsplit_once('.') {
            if let Some(&i) = self.by_name.get(&format!("{outer}.{name}")) {
                return Some(i);
            }
        }

        let same_package = match &file.package {
            Some(pkg) => format!("{pkg}.{name}"),
            None => name.to_string(),
        };
        if let Some(&i) = self.by_name.get(&same_package) {
            return Some(i);
        }

        let mut candidates = self
            .types
            .iter()
            .enumerate()
            .filter(|(_, t)| t.simple_name == simple);
        match (candidates.next(), candidates.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// Own members followed by inherited ones, walking the superclass chain.
    ///
    /// Method signatures are localized to the wrapper's scope. Imports are
    /// the marked file's own plus on-demand imports of supertype files;
    /// single-type imports of other files are not merged, since names they
    /// resolve are qualified instead.
    fn flatten_members(&self, start: usize) -> (Vec<Member>, Vec<String>) {
        let mut members: Vec<Member> = Vec::new();
        let home_file = self.types[start].file;
        let mut imports = self.files[home_file].imports.clone();
        let mut visited = FxHashSet::default();
        let mut current = Some(start);

        while let Some(i) = current {
            if !visited.insert(i) {
                tracing::warn!(
                    type_name = %self.types[start].qualified_name,
                    "cyclic superclass chain; stopping inheritance walk"
                );
                break;
            }
            let ty = &self.types[i];
            let inherited = i != start;

            for member in &ty.members {
                if inherited && !is_inheritable(member) {
                    continue;
                }
                let member = match member {
                    Member::Method(method) => Member::Method(self.localize_method(method, i, start)),
                    other => other.clone(),
                };
                if inherited && is_hidden(&member, &members) {
                    continue;
                }
                members.push(member);
            }
            if ty.file != home_file {
                for import in &self.files[ty.file].imports {
                    if import.ends_with(".*") && !imports.contains(import) {
                        imports.push(import.clone());
                    }
                }
            }

            current = match &ty.superclass {
                Some(name) => {
                    let next = self.resolve_supertype(ty, name);
                    if next.is_none() {
                        tracing::debug!(
                            type_name = %ty.qualified_name,
                            superclass = %name,
                            "superclass not in sources; inherited members end here"
                        );
                    }
                    next
                }
                None => None,
            };
        }
        (members, imports)
    }

    /// Copy of `method` (declared in `declaring`) whose type text resolves
    /// the same way inside a wrapper placed beside `marked`.
    fn localize_method(
        &self,
        method: &MethodDeclaration,
        declaring: usize,
        marked: usize,
    ) -> MethodDeclaration {
        let type_vars = method
            .type_parameters
            .as_deref()
            .map(type_parameter_names)
            .unwrap_or_default();
        let mut resolve = |head: &str| {
            if type_vars.iter().any(|v| v == head) {
                return None;
            }
            self.localize_name(head, declaring, marked)
        };

        let mut out = method.clone();
        if let Some(tp) = &method.type_parameters {
            out.type_parameters = Some(rewrite_type_names(tp, &mut resolve));
        }
        let types = std::iter::once(&mut out.return_type)
            .chain(out.parameters.iter_mut().map(|p| &mut p.ty))
            .chain(out.thrown.iter_mut());
        for ty in types {
            if ty.is_reference() {
                ty.text = rewrite_type_names(&ty.text, &mut resolve);
            }
        }
        out
    }

    /// How a simple type name written in `declaring` must be spelled beside
    /// `marked`, or `None` when it can stay as written.
    fn localize_name(&self, name: &str, declaring: usize, marked: usize) -> Option<String> {
        let decl = &self.types[declaring];
        let home = &self.types[marked];

        if let Some(t) = self.member_type_in_scope(declaring, name) {
            let member = &self.types[t];
            return Some(match (&member.package, &home.package) {
                (Some(a), Some(b)) if a == b => member
                    .qualified_name
                    .strip_prefix(&format!("{a}."))
                    .unwrap_or(&member.qualified_name)
                    .to_string(),
                _ => member.qualified_name.clone(),
            });
        }
        if decl.file == home.file {
            return None;
        }

        if let Some(path) = single_import(&self.files[decl.file].imports, name) {
            return match single_import(&self.files[home.file].imports, name) {
                Some(home_path) if home_path == path => None,
                _ => Some(path.to_string()),
            };
        }

        // Same-package reference from a supertype file.
        let candidate = match &decl.package {
            Some(pkg) => format!("{pkg}.{name}"),
            None => return None,
        };
        if !self.by_name.contains_key(&candidate) {
            return None;
        }
        let shadowed = single_import(&self.files[home.file].imports, name)
            .is_some_and(|p| p != candidate);
        (decl.package != home.package || shadowed).then_some(candidate)
    }

    /// Member type `name` visible from `start`: declared or inherited by it,
    /// then by each enclosing type outward.
    fn member_type_in_scope(&self, start: usize, name: &str) -> Option<usize> {
        let mut scope = Some(start);
        while let Some(s) = scope {
            if let Some(t) = self.inherited_member_type(s, name) {
                return Some(t);
            }
            scope = self.enclosing(s);
        }
        None
    }

    fn inherited_member_type(&self, start: usize, name: &str) -> Option<usize> {
        let mut visited = FxHashSet::default();
        let mut current = Some(start);
        while let Some(i) = current {
            if !visited.insert(i) {
                return None;
            }
            let ty = &self.types[i];
            let declares = ty
                .members
                .iter()
                .any(|m| matches!(m, Member::Type(nested) if nested.name == name));
            if declares {
                if let Some(&t) = self.by_name.get(&format!("{}.{name}", ty.qualified_name)) {
                    return Some(t);
                }
            }
            current = ty
                .superclass
                .as_deref()
                .and_then(|s| self.resolve_supertype(ty, s));
        }
        None
    }

    fn enclosing(&self, index: usize) -> Option<usize> {
        let ty = &self.types[index];
        let (outer, _) = ty.qualified_name.rsplit_once('.')?;
        let &i = self.by_name.get(outer)?;
        (self.types[i].file == ty.file).then_some(i)
    }
}

/// Target of a single-type (or single static) import ending in `name`.
fn single_import<'a>(imports: &'a [String], name: &str) -> Option<&'a str> {
    imports.iter().find_map(|import| {
        let path = import.strip_prefix("static ").unwrap_or(import);
        (path.rsplit('.').next() == Some(name) && !path.ends_with(".*")).then_some(path)
    })
}

impl MetadataProvider for SourceIndex {
    fn marked_types(&self) -> Vec<String> {
        self.types
            .iter()
            .filter(|t| t.has_annotation(&self.marker))
            .map(|t| t.qualified_name.clone())
            .collect()
    }

    fn resolve(&self, qualified_name: &str) -> Result<MarkedType, ProviderError> {
        let &index = self
            .by_name
            .get(qualified_name)
            .ok_or_else(|| ProviderError::TypeNotFound {
                qualified_name: qualified_name.to_string(),
            })?;
        let ty = &self.types[index];
        if ty.kind != TypeDeclKind::Class {
            return Err(ProviderError::NotAClass {
                qualified_name: qualified_name.to_string(),
                kind: ty.kind.as_str().to_string(),
            });
        }

        let (members, imports) = self.flatten_members(index);
        Ok(MarkedType {
            qualified_name: ty.qualified_name.clone(),
            simple_name: ty.simple_name.clone(),
            package: ty.package.clone(),
            doc: ty.doc.clone(),
            imports,
            members,
        })
    }
}

/// Private members and constructors are never inherited.
fn is_inheritable(member: &Member) -> bool {
    !matches!(member, Member::Constructor(_)) && !member.modifiers().contains(Modifier::Private)
}

/// A subclass declaration hides a superclass member with the same name
/// (fields, types) or the same name and parameter types (methods).
fn is_hidden(member: &Member, seen: &[Member]) -> bool {
    match member {
        Member::Method(method) => seen.iter().any(|m| match m {
            Member::Method(other) => same_signature(method, other),
            _ => false,
        }),
        _ => seen
            .iter()
            .any(|m| m.kind() == member.kind() && m.name() == member.name()),
    }
}

fn same_signature(a: &MethodDeclaration, b: &MethodDeclaration) -> bool {
    a.name == b.name && a.parameter_types() == b.parameter_types()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullsafe_core::model::ElementKind;

    fn index(sources: &[(&str, &str)]) -> SourceIndex {
        SourceIndex::from_sources("NullSafe", sources.iter().copied()).unwrap()
    }

    #[test]
    fn test_marked_types_in_discovery_order() {
        let idx = index(&[
            ("b/B.java", "package b; @NullSafe class B {}"),
            ("a/A.java", "package a; class Plain {} @a.NullSafe class A {}"),
        ]);
        assert_eq!(idx.marked_types(), vec!["b.B", "a.A"]);
    }

    #[test]
    fn test_resolve_missing_type() {
        let idx = index(&[]);
        let err = idx.resolve("x.Nope").unwrap_err();
        assert!(matches!(err, ProviderError::TypeNotFound { .. }));
    }

    #[test]
    fn test_resolve_rejects_non_class() {
        let idx = index(&[("I.java", "@NullSafe interface I {}")]);
        let err = idx.resolve("I").unwrap_err();
        assert!(matches!(err, ProviderError::NotAClass { .. }));
    }

    #[test]
    fn test_inherited_members_flattened() {
        let idx = index(&[
            (
                "p/Base.java",
                "package p;\nimport java.util.Map;\n\
                 public class Base {\n\
                   public static String a(String s) { return s; }\n\
                   public static String b(String s) { return s; }\n\
                   private static String hidden(String s) { return s; }\n\
                   public Base() {}\n\
                 }",
            ),
            (
                "p/Child.java",
                "package p;\nimport java.util.List;\n\
                 @NullSafe public class Child extends Base {\n\
                   public static String b(String s) { return s; }\n\
                 }",
            ),
        ]);
        let ty = idx.resolve("p.Child").unwrap();
        let names: Vec<_> = ty.members.iter().map(|m| m.name()).collect();
        // Child.b hides Base.b; private and constructors are not inherited.
        assert_eq!(names, vec!["b", "a"]);
        assert!(ty.members.iter().all(|m| m.kind() == ElementKind::Method));
        assert_eq!(ty.imports, vec!["java.util.List"]);
    }

    #[test]
    fn test_supertype_via_import_and_cycle_guard() {
        let idx = index(&[
            (
                "lib/Base.java",
                "package lib; public class Base { public static Object x(Object o) { return o; } }",
            ),
            (
                "app/App.java",
                "package app; import lib.Base; @NullSafe class App extends Base {}",
            ),
            ("c/C1.java", "package c; @NullSafe class C1 extends C2 {}"),
            ("c/C2.java", "package c; class C2 extends C1 { public static String y(String s) { return s; } }"),
        ]);
        assert_eq!(idx.resolve("app.App").unwrap().members.len(), 1);
        // C1 -> C2 -> C1 terminates.
        assert_eq!(idx.resolve("c.C1").unwrap().members.len(), 1);
    }

    #[test]
    fn test_unknown_supertype_ends_walk() {
        let idx = index(&[(
            "E.java",
            "@NullSafe class E extends java.util.ArrayList<String> { public static String z(String s) { return s; } }",
        )]);
        assert_eq!(idx.resolve("E").unwrap().members.len(), 1);
    }

    fn method<'a>(ty: &'a MarkedType, name: &str) -> &'a MethodDeclaration {
        ty.members
            .iter()
            .find_map(|m| match m {
                Member::Method(method) if method.name == name => Some(method),
                _ => None,
            })
            .unwrap()
    }

    fn signature(method: &MethodDeclaration) -> (String, Vec<String>) {
        (
            method.return_type.text.clone(),
            method.parameters.iter().map(|p| p.ty.text.clone()).collect(),
        )
    }

    #[test]
    fn test_member_types_qualified_with_origin() {
        let idx = index(&[(
            "p/Foo.java",
            "package p;\n\
             @NullSafe public class Foo {\n\
               public static class Bar {}\n\
               public static Bar make(Bar b) { return b; }\n\
               public static java.util.List<Bar> all(Bar[] bs) { return null; }\n\
               public static <Bar> Bar id(Bar b) { return b; }\n\
             }",
        )]);
        let ty = idx.resolve("p.Foo").unwrap();
        assert_eq!(
            signature(method(&ty, "make")),
            ("Foo.Bar".to_string(), vec!["Foo.Bar".to_string()])
        );
        assert_eq!(
            signature(method(&ty, "all")),
            ("java.util.List<Foo.Bar>".to_string(), vec!["Foo.Bar[]".to_string()])
        );
        // A method type variable shadows the member type.
        assert_eq!(
            signature(method(&ty, "id")),
            ("Bar".to_string(), vec!["Bar".to_string()])
        );
    }

    #[test]
    fn test_enclosing_member_types_qualified() {
        let idx = index(&[(
            "p/Outer.java",
            "package p;\n\
             public class Outer {\n\
               public static class Sibling {}\n\
               @NullSafe public static class Inner {\n\
                 public static Sibling wrap(Sibling s) { return s; }\n\
               }\n\
             }",
        )]);
        let ty = idx.resolve("p.Outer.Inner").unwrap();
        assert_eq!(
            signature(method(&ty, "wrap")),
            ("Outer.Sibling".to_string(), vec!["Outer.Sibling".to_string()])
        );
    }

    #[test]
    fn test_inherited_names_resolved_in_declaring_file() {
        let idx = index(&[
            (
                "q/Base.java",
                "package q;\nimport java.awt.List;\n\
                 public class Base {\n\
                   public static class Node {}\n\
                   public static Helper help(Helper h) { return h; }\n\
                   public static List shapes(List l) { return l; }\n\
                   public static Node root(Node n) throws HelperException { return n; }\n\
                 }",
            ),
            ("q/Helper.java", "package q; public class Helper {}"),
            ("q/HelperException.java", "package q; public class HelperException extends Exception {}"),
            (
                "p/Child.java",
                "package p;\nimport java.util.List;\nimport q.Base;\n\
                 @NullSafe public class Child extends Base {\n\
                   public static List<String> names(List<String> l) { return l; }\n\
                 }",
            ),
        ]);
        let ty = idx.resolve("p.Child").unwrap();
        assert_eq!(
            signature(method(&ty, "names")),
            ("List<String>".to_string(), vec!["List<String>".to_string()])
        );
        assert_eq!(
            signature(method(&ty, "help")),
            ("q.Helper".to_string(), vec!["q.Helper".to_string()])
        );
        assert_eq!(
            signature(method(&ty, "shapes")),
            ("java.awt.List".to_string(), vec!["java.awt.List".to_string()])
        );
        let root = method(&ty, "root");
        assert_eq!(
            signature(root),
            ("q.Base.Node".to_string(), vec!["q.Base.Node".to_string()])
        );
        assert_eq!(root.thrown[0].text, "q.HelperException");
        // The supertype file's java.awt.List import would clash.
        assert_eq!(ty.imports, vec!["java.util.List", "q.Base"]);
    }

    #[test]
    fn test_same_package_supertype_keeps_simple_names() {
        let idx = index(&[
            (
                "p/Base.java",
                "package p; public class Base { public static Helper h(Helper x) { return x; } }",
            ),
            ("p/Helper.java", "package p; public class Helper {}"),
            ("p/Child.java", "package p; @NullSafe public class Child extends Base {}"),
        ]);
        let ty = idx.resolve("p.Child").unwrap();
        assert_eq!(
            signature(method(&ty, "h")),
            ("Helper".to_string(), vec!["Helper".to_string()])
        );
    }
}
