//! Tests for the model's serialized form, as exchanged with external
//! metadata providers.

use nullsafe_core::model::*;
use serde_json::json;

#[test]
fn test_marked_type_from_provider_json() {
    let value = json!({
        "qualified_name": "com.example.Foo",
        "simple_name": "Foo",
        "package": "com.example",
        "doc": null,
        "imports": ["java.util.List"],
        "members": [
            { "Method": {
                "name": "merge",
                "modifiers": ["Public", "Static"],
                "type_parameters": null,
                "return_type": { "text": "List<String>", "kind": "Reference" },
                "parameters": [
                    { "name": "a", "ty": { "text": "List<String>", "kind": "Reference" }, "varargs": false },
                    { "name": "limit", "ty": { "text": "int", "kind": { "Primitive": "Int" } }, "varargs": false }
                ],
                "thrown": [],
                "annotations": [],
                "doc": null
            } }
        ]
    });

    let marked: MarkedType = serde_json::from_value(value).unwrap();
    assert_eq!(marked.doc, None);
    let method = marked.methods().next().unwrap();
    assert!(method.modifiers.contains(Modifier::Public));
    assert!(method.modifiers.contains(Modifier::Static));
    assert!(method.return_type.is_reference());
    assert!(method.parameters[0].is_nullable());
    assert!(!method.parameters[1].is_nullable());
    assert_eq!(method.parameter_types(), ["List<String>", "int"]);
}

#[test]
fn test_statement_serialized_shape() {
    let body = vec![
        Statement::NullGuard {
            parameter: "a".into(),
        },
        Statement::Delegate {
            target: "com.example.Foo".into(),
            method: "merge".into(),
            arguments: vec!["a".into(), "limit".into()],
        },
    ];
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!([
            { "NullGuard": { "parameter": "a" } },
            { "Delegate": {
                "target": "com.example.Foo",
                "method": "merge",
                "arguments": ["a", "limit"]
            } }
        ])
    );
}

#[test]
fn test_varargs_parameter_is_nullable_even_for_primitive_elements() {
    let p = Parameter::varargs("xs", TypeDescriptor::primitive(PrimitiveType::Int));
    assert!(p.is_nullable());
}
