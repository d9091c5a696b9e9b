//! Virtual-dispatch-compatible signature matching.
//!
//! The incorporation walk must decide whether a method already present on
//! the clone would shadow an ancestor method under virtual dispatch. The
//! decision is a pure function of the two signatures and the class
//! hierarchy, independent of any live dispatch mechanism: names must be
//! equal, parameter counts must be equal, and every parameter and the
//! return type of the subject must be widest-compatible with the candidate,
//! where declared generic type variables stand for `java/lang/Object`.

use os_ir::{ClassUid, Method, MethodDescr, Scene, Type, JAVA_LANG_OBJECT};

/// Replaces declared generic type variables by the universal root type.
fn resolve_var(type_: &Type, declared: &[String]) -> Type {
    match type_ {
        Type::Var(name) if declared.iter().any(|d| d == name) => {
            Type::Class(JAVA_LANG_OBJECT.to_string())
        }
        Type::Array(dims, elem) => Type::Array(*dims, Box::new(resolve_var(elem, declared))),
        other => other.clone(),
    }
}

/// Widest-compatible subtype check, reflexivity included. Primitive types
/// only match themselves; class types follow the scene hierarchy; arrays
/// are covariant at equal dimensions and always typeable as the root type.
fn is_subtype_including(scene: &Scene, sub: &Type, sup: &Type) -> bool {
    match (sub, sup) {
        (sub, sup) if sub == sup => true,
        (Type::Class(sub_name), Type::Class(sup_name)) => {
            scene.is_typeable_as(sub_name, sup_name)
        }
        (Type::Array(_, _), Type::Class(sup_name)) => sup_name == JAVA_LANG_OBJECT,
        (Type::Array(sub_dims, sub_elem), Type::Array(sup_dims, sup_elem)) => {
            sub_dims == sup_dims && is_subtype_including(scene, sub_elem, sup_elem)
        }
        _ => false,
    }
}

/// Returns true if `candidate` would shadow a method with the `subject`
/// signature under virtual dispatch. `subject_declared` lists the generic
/// type parameter names in scope at the subject's declaration (method and
/// class level); the candidate's own scopes are read from the scene.
#[must_use]
pub fn is_dispatch_match(
    scene: &Scene,
    candidate: &Method,
    subject: &MethodDescr,
    subject_declared: &[String],
) -> bool {
    if candidate.name() != subject.name()
        || candidate.parameters_types().len() != subject.parameters_types().len()
    {
        return false;
    }

    let mut candidate_declared = candidate.type_params().to_vec();
    candidate_declared.extend_from_slice(scene[candidate.class()].type_params());

    let return_type = resolve_var(subject.return_type(), subject_declared);
    let candidate_return = resolve_var(candidate.return_type(), &candidate_declared);
    if !is_subtype_including(scene, &return_type, &candidate_return) {
        return false;
    }

    subject
        .parameters_types()
        .iter()
        .zip(candidate.parameters_types())
        .all(|(subject_param, candidate_param)| {
            let subject_param = resolve_var(subject_param, subject_declared);
            let candidate_param = resolve_var(candidate_param, &candidate_declared);
            is_subtype_including(scene, &subject_param, &candidate_param)
        })
}

/// Returns true if the given class already declares a method that would
/// resolve to the `subject` signature under virtual dispatch.
#[must_use]
pub fn contains_dispatch_match(
    scene: &Scene,
    class: ClassUid,
    subject: &MethodDescr,
    subject_declared: &[String],
) -> bool {
    scene[class]
        .iter_methods(scene)
        .any(|candidate| is_dispatch_match(scene, candidate, subject, subject_declared))
}

#[cfg(test)]
mod tests {
    use super::*;
    use os_ir::{Body, ClassFlags, MethodFlags, MethodUid};

    fn fixture() -> (Scene, ClassUid, MethodUid) {
        let mut scene = Scene::new();
        let root = scene
            .new_class(JAVA_LANG_OBJECT, ClassFlags::ACC_PUBLIC, None, Vec::new(), false)
            .unwrap();
        let sup = scene
            .new_class("pkg/Sup", ClassFlags::ACC_PUBLIC, Some(root), Vec::new(), true)
            .unwrap();
        scene
            .new_class("pkg/Sub", ClassFlags::ACC_PUBLIC, Some(sup), Vec::new(), true)
            .unwrap();
        let holder = scene
            .new_class("pkg/Holder", ClassFlags::ACC_PUBLIC, Some(root), Vec::new(), true)
            .unwrap();
        let candidate = scene.new_method(
            holder,
            MethodDescr::new(
                "process",
                Type::Void,
                vec![Type::Class("pkg/Sup".to_string()), Type::Int],
            ),
            MethodFlags::ACC_PUBLIC,
            Vec::new(),
            Vec::new(),
            Some(Body::default()),
        );
        (scene, holder, candidate)
    }

    #[test]
    fn exact_signature_matches() {
        let (scene, _holder, candidate) = fixture();
        let subject = MethodDescr::new(
            "process",
            Type::Void,
            vec![Type::Class("pkg/Sup".to_string()), Type::Int],
        );
        assert!(is_dispatch_match(&scene, &scene[candidate], &subject, &[]));
    }

    #[test]
    fn widening_parameter_matches() {
        let (scene, _holder, candidate) = fixture();
        let subject = MethodDescr::new(
            "process",
            Type::Void,
            vec![Type::Class("pkg/Sub".to_string()), Type::Int],
        );
        assert!(is_dispatch_match(&scene, &scene[candidate], &subject, &[]));
    }

    #[test]
    fn name_or_arity_mismatch_rejected() {
        let (scene, _holder, candidate) = fixture();
        let renamed = MethodDescr::new(
            "handle",
            Type::Void,
            vec![Type::Class("pkg/Sup".to_string()), Type::Int],
        );
        assert!(!is_dispatch_match(&scene, &scene[candidate], &renamed, &[]));
        let shorter = MethodDescr::new("process", Type::Void, vec![Type::Int]);
        assert!(!is_dispatch_match(&scene, &scene[candidate], &shorter, &[]));
    }

    #[test]
    fn primitive_parameters_must_be_equal() {
        let (scene, _holder, candidate) = fixture();
        let subject = MethodDescr::new(
            "process",
            Type::Void,
            vec![Type::Class("pkg/Sup".to_string()), Type::Long],
        );
        assert!(!is_dispatch_match(&scene, &scene[candidate], &subject, &[]));
    }

    #[test]
    fn generic_type_variable_matches_object() {
        let (mut scene, holder, _candidate) = fixture();
        let generic = scene.new_method(
            holder,
            MethodDescr::new(
                "identity",
                Type::Var("T".to_string()),
                vec![Type::Var("T".to_string())],
            ),
            MethodFlags::ACC_PUBLIC,
            Vec::new(),
            vec!["T".to_string()],
            Some(Body::default()),
        );
        let subject = MethodDescr::new(
            "identity",
            Type::Class("pkg/Sup".to_string()),
            vec![Type::Class("pkg/Sup".to_string())],
        );
        assert!(is_dispatch_match(&scene, &scene[generic], &subject, &[]));
    }

    #[test]
    fn contains_match_searches_whole_class() {
        let (scene, holder, _candidate) = fixture();
        let subject = MethodDescr::new(
            "process",
            Type::Void,
            vec![Type::Class("pkg/Sub".to_string()), Type::Int],
        );
        assert!(contains_dispatch_match(&scene, holder, &subject, &[]));
        let missing = MethodDescr::new("missing", Type::Void, vec![]);
        assert!(!contains_dispatch_match(&scene, holder, &missing, &[]));
    }
}
