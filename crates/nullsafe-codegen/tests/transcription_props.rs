//! Property tests for wrapper transcription.

use proptest::prelude::*;

use nullsafe_codegen::{is_eligible_method, transcribe, WrapperClassBuilder};
use nullsafe_core::model::{
    Annotation, MarkedType, Member, MethodDeclaration, Modifier, Modifiers, Parameter,
    PrimitiveType, Statement, TypeDescriptor,
};

fn primitive() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just(PrimitiveType::Int),
        Just(PrimitiveType::Long),
        Just(PrimitiveType::Boolean),
        Just(PrimitiveType::Double),
        Just(PrimitiveType::Char),
    ]
    .prop_map(TypeDescriptor::primitive)
}

fn reference() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just("String"),
        Just("Object"),
        Just("List<String>"),
        Just("Map<K, V>"),
        Just("int[]"),
        Just("T"),
    ]
    .prop_map(TypeDescriptor::reference)
}

fn parameter_types() -> impl Strategy<Value = Vec<TypeDescriptor>> {
    prop::collection::vec(prop_oneof![primitive(), reference()], 1..8)
}

fn method(types: Vec<TypeDescriptor>, thrown: usize, annotated: bool) -> MethodDeclaration {
    let mut m = MethodDeclaration::new("op", TypeDescriptor::reference("Object"));
    m.modifiers = [Modifier::Static, Modifier::Public, Modifier::Final]
        .into_iter()
        .collect();
    m.parameters = types
        .into_iter()
        .enumerate()
        .map(|(i, ty)| Parameter::new(format!("p{i}"), ty))
        .collect();
    m.thrown = (0..thrown)
        .map(|i| TypeDescriptor::reference(format!("E{i}Exception")))
        .collect();
    if annotated {
        m.annotations = vec![
            Annotation::marker("Deprecated"),
            Annotation::new("SuppressWarnings", "@SuppressWarnings(\"unchecked\")"),
        ];
    }
    m
}

proptest! {
    /// Name, return type, and parameters are copied exactly.
    #[test]
    fn prop_signature_preserved(types in parameter_types(), thrown in 0usize..4, annotated in any::<bool>()) {
        let source = method(types, thrown, annotated);
        prop_assert!(is_eligible_method(&source));

        let wrapper = transcribe("a.Origin", &source);
        prop_assert_eq!(&wrapper.name, &source.name);
        prop_assert_eq!(&wrapper.return_type, &source.return_type);
        prop_assert_eq!(&wrapper.parameters, &source.parameters);
        prop_assert_eq!(&wrapper.thrown, &source.thrown);
        prop_assert_eq!(&wrapper.annotations, &source.annotations);
        prop_assert_eq!(&wrapper.modifiers, &Modifiers::public_static());
    }

    /// One guard per reference parameter, in order, then a single delegate.
    #[test]
    fn prop_guards_precede_delegate(types in parameter_types()) {
        let source = method(types, 0, false);
        let wrapper = transcribe("a.Origin", &source);

        let expected_guards: Vec<&str> = source
            .parameters
            .iter()
            .filter(|p| p.ty.is_reference())
            .map(|p| p.name.as_str())
            .collect();
        let guards: Vec<&str> = wrapper.guarded_parameters().collect();
        prop_assert_eq!(&guards, &expected_guards);

        prop_assert_eq!(wrapper.body.len(), expected_guards.len() + 1);
        let args: Vec<String> = source.parameters.iter().map(|p| p.name.clone()).collect();
        let delegate = Statement::Delegate {
            target: "a.Origin".into(),
            method: "op".into(),
            arguments: args,
        };
        prop_assert_eq!(wrapper.body.last(), Some(&delegate));
    }

    /// Ineligible members never produce wrapper methods; order is kept.
    #[test]
    fn prop_builder_keeps_only_eligible(flags in prop::collection::vec(any::<bool>(), 1..12)) {
        let mut marked = MarkedType::new(Some("a"), "Origin");
        for (i, eligible) in flags.iter().enumerate() {
            let mut m = method(vec![TypeDescriptor::reference("String")], 0, false);
            m.name = format!("m{i}");
            if !eligible {
                m.modifiers = [Modifier::Static, Modifier::Private].into_iter().collect();
            }
            marked.members.push(Member::Method(m));
        }

        let class = WrapperClassBuilder::default().build(&marked);
        prop_assert!(class.is_some());
        let class = class.unwrap();
        let names: Vec<String> = class.methods.iter().map(|m| m.name.clone()).collect();
        let expected: Vec<String> = flags
            .iter()
            .enumerate()
            .filter(|(_, e)| **e)
            .map(|(i, _)| format!("m{i}"))
            .collect();
        prop_assert_eq!(names, expected);
    }
}
