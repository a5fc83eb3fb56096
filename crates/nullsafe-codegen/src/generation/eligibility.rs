//! Which members get a null-safe wrapper.

use nullsafe_core::model::{Member, MethodDeclaration, Modifier, TypeKind};

/// A member is eligible when it is a method that passes
/// [`is_eligible_method`]. Fields, constructors, and member types never are.
pub fn is_eligible(member: &Member) -> bool {
    match member {
        Member::Method(method) => is_eligible_method(method),
        Member::Constructor(_) | Member::Field(_) | Member::Type(_) => false,
    }
}

/// `public static`, returns a reference type, and takes at least one
/// parameter. All-primitive parameter lists are accepted even though they
/// produce no guards.
pub fn is_eligible_method(method: &MethodDeclaration) -> bool {
    let modifiers = &method.modifiers;
    if !modifiers.contains(Modifier::Static) || !modifiers.contains(Modifier::Public) {
        return false;
    }
    match method.return_type.kind {
        TypeKind::Primitive(_) | TypeKind::Void => return false,
        TypeKind::Reference => {}
    }
    !method.parameters.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullsafe_core::model::{
        ConstructorDeclaration, FieldDeclaration, Modifiers, Parameter, PrimitiveType,
        TypeDescriptor,
    };

    fn method(modifiers: &[Modifier], ret: TypeDescriptor, params: usize) -> MethodDeclaration {
        let mut m = MethodDeclaration::new("f", ret);
        m.modifiers = modifiers.iter().copied().collect();
        m.parameters = (0..params)
            .map(|i| Parameter::new(format!("p{i}"), TypeDescriptor::reference("String")))
            .collect();
        m
    }

    #[test]
    fn test_public_static_reference_with_params() {
        let m = method(
            &[Modifier::Public, Modifier::Static],
            TypeDescriptor::reference("String"),
            1,
        );
        assert!(is_eligible_method(&m));
        assert!(is_eligible(&Member::Method(m)));
    }

    #[test]
    fn test_rejects_missing_modifiers() {
        let string = TypeDescriptor::reference("String");
        assert!(!is_eligible_method(&method(&[Modifier::Public], string.clone(), 1)));
        assert!(!is_eligible_method(&method(&[Modifier::Static], string.clone(), 1)));
        assert!(!is_eligible_method(&method(
            &[Modifier::Private, Modifier::Static],
            string.clone(),
            1
        )));
        assert!(!is_eligible_method(&method(
            &[Modifier::Protected, Modifier::Static],
            string,
            1
        )));
    }

    #[test]
    fn test_rejects_primitive_and_void_returns() {
        let ps = [Modifier::Public, Modifier::Static];
        assert!(!is_eligible_method(&method(
            &ps,
            TypeDescriptor::primitive(PrimitiveType::Int),
            1
        )));
        assert!(!is_eligible_method(&method(
            &ps,
            TypeDescriptor::primitive(PrimitiveType::Boolean),
            1
        )));
        assert!(!is_eligible_method(&method(&ps, TypeDescriptor::void(), 1)));
        // Primitive arrays are references.
        assert!(is_eligible_method(&method(
            &ps,
            TypeDescriptor::reference("int[]"),
            1
        )));
    }

    #[test]
    fn test_rejects_parameterless() {
        let m = method(
            &[Modifier::Public, Modifier::Static],
            TypeDescriptor::reference("String"),
            0,
        );
        assert!(!is_eligible_method(&m));
    }

    #[test]
    fn test_accepts_all_primitive_parameters() {
        let mut m = method(
            &[Modifier::Public, Modifier::Static],
            TypeDescriptor::reference("String"),
            0,
        );
        m.parameters = vec![Parameter::new(
            "n",
            TypeDescriptor::primitive(PrimitiveType::Long),
        )];
        assert!(is_eligible_method(&m));
    }

    #[test]
    fn test_non_method_members_rejected() {
        let ps: Modifiers = [Modifier::Public, Modifier::Static].into_iter().collect();
        let field = Member::Field(FieldDeclaration {
            name: "CACHE".into(),
            modifiers: ps.clone(),
            ty: TypeDescriptor::reference("Map<String, String>"),
        });
        let ctor = Member::Constructor(ConstructorDeclaration {
            name: "Foo".into(),
            modifiers: ps,
            parameters: vec![Parameter::new("s", TypeDescriptor::reference("String"))],
        });
        assert!(!is_eligible(&field));
        assert!(!is_eligible(&ctor));
    }
}
