//! Signature transcription and guarded body synthesis.

use nullsafe_core::model::{MethodDeclaration, Modifiers, Statement, WrapperMethod};

/// Build the wrapper for an eligible method of `origin`.
///
/// The signature (name, type parameters, return type, parameters, thrown
/// types, annotations, docs) is copied as-is, with modifiers fixed to
/// `public static`. The body holds one null guard per nullable parameter in
/// declaration order, then a single delegating call to
/// `origin.name(args...)` whose result is returned.
///
/// Callers filter with [`super::is_eligible_method`] first; the output for
/// an ineligible method is unspecified.
pub fn transcribe(origin: &str, method: &MethodDeclaration) -> WrapperMethod {
    let mut body: Vec<Statement> = method
        .parameters
        .iter()
        .filter(|p| p.is_nullable())
        .map(|p| Statement::NullGuard {
            parameter: p.name.clone(),
        })
        .collect();

    if body.is_empty() {
        tracing::debug!(
            origin,
            method = %method.name,
            "all parameters are primitive; wrapper is a plain passthrough"
        );
    }

    body.push(Statement::Delegate {
        target: origin.to_string(),
        method: method.name.clone(),
        arguments: method.parameters.iter().map(|p| p.name.clone()).collect(),
    });

    WrapperMethod {
        name: method.name.clone(),
        modifiers: Modifiers::public_static(),
        type_parameters: method.type_parameters.clone(),
        return_type: method.return_type.clone(),
        parameters: method.parameters.clone(),
        thrown: method.thrown.clone(),
        annotations: method.annotations.clone(),
        doc: method.doc.clone(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullsafe_core::model::{
        Annotation, Modifier, Parameter, PrimitiveType, TypeDescriptor,
    };

    fn public_static(name: &str, ret: &str, params: Vec<Parameter>) -> MethodDeclaration {
        let mut m = MethodDeclaration::new(name, TypeDescriptor::reference(ret));
        m.modifiers = [Modifier::Public, Modifier::Static].into_iter().collect();
        m.parameters = params;
        m
    }

    #[test]
    fn test_greet_scenario() {
        let m = public_static(
            "greet",
            "String",
            vec![Parameter::new("name", TypeDescriptor::reference("String"))],
        );
        let w = transcribe("Foo", &m);
        assert_eq!(w.name, "greet");
        assert_eq!(w.return_type, m.return_type);
        assert_eq!(w.parameters, m.parameters);
        assert_eq!(
            w.body,
            vec![
                Statement::NullGuard {
                    parameter: "name".into()
                },
                Statement::Delegate {
                    target: "Foo".into(),
                    method: "greet".into(),
                    arguments: vec!["name".into()],
                },
            ]
        );
    }

    #[test]
    fn test_merge_scenario_skips_primitive_guard() {
        let m = public_static(
            "merge",
            "List<String>",
            vec![
                Parameter::new("a", TypeDescriptor::reference("List<String>")),
                Parameter::new("b", TypeDescriptor::reference("List<String>")),
                Parameter::new("limit", TypeDescriptor::primitive(PrimitiveType::Int)),
            ],
        );
        let w = transcribe("com.example.Lists", &m);
        assert_eq!(w.guarded_parameters().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            w.body.last(),
            Some(&Statement::Delegate {
                target: "com.example.Lists".into(),
                method: "merge".into(),
                arguments: vec!["a".into(), "b".into(), "limit".into()],
            })
        );
    }

    #[test]
    fn test_copies_exceptions_annotations_doc_and_type_parameters() {
        let mut m = public_static(
            "parse",
            "T",
            vec![Parameter::new("raw", TypeDescriptor::reference("String"))],
        );
        m.modifiers.insert(Modifier::Synchronized);
        m.type_parameters = Some("<T extends Number>".into());
        m.thrown = vec![
            TypeDescriptor::reference("java.io.IOException"),
            TypeDescriptor::reference("ParseException"),
        ];
        m.annotations = vec![
            Annotation::marker("Deprecated"),
            Annotation::new("SuppressWarnings", "@SuppressWarnings(\"unchecked\")"),
        ];
        m.doc = Some("Parses a number.".into());

        let w = transcribe("Numbers", &m);
        assert_eq!(w.modifiers, Modifiers::public_static());
        assert_eq!(w.type_parameters.as_deref(), Some("<T extends Number>"));
        assert_eq!(w.thrown, m.thrown);
        assert_eq!(w.annotations, m.annotations);
        assert_eq!(w.doc, m.doc);
    }

    #[test]
    fn test_all_primitive_parameters_yield_no_guards() {
        let m = public_static(
            "pad",
            "String",
            vec![
                Parameter::new("width", TypeDescriptor::primitive(PrimitiveType::Int)),
                Parameter::new("fill", TypeDescriptor::primitive(PrimitiveType::Char)),
            ],
        );
        let w = transcribe("Strings", &m);
        assert_eq!(w.body.len(), 1);
        assert!(matches!(w.body[0], Statement::Delegate { .. }));
    }

    #[test]
    fn test_varargs_guarded() {
        let m = public_static(
            "join",
            "String",
            vec![
                Parameter::new("sep", TypeDescriptor::primitive(PrimitiveType::Char)),
                Parameter::varargs("parts", TypeDescriptor::reference("String")),
            ],
        );
        let w = transcribe("Strings", &m);
        assert_eq!(w.guarded_parameters().collect::<Vec<_>>(), vec!["parts"]);
    }
}
