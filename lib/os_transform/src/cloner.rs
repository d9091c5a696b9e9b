//! Class specialization transform.
//!
//! Creates a clone of a given class, installed as a subclass of the
//! original, so that the points-to analysis can separate the cloned
//! instances from the parent's and gain object sensitivity for a subset of
//! classes.
//!
//! In the original hierarchy, all private fields are made protected so that
//! code in the clone can access them. The clone declares no fields of its
//! own: inherited state is reached through the real ancestor fields.
//!
//! All concrete non-static methods from the original class and its
//! ancestors are added to the clone, walking the chain nearest-first so
//! that method inheritance is observed as in the original hierarchy.
//! Non-virtual self-calls inside the duplicated bodies are then rebound to
//! the clone's own copies.

use crate::errors::{TransformError, TransformResult};
use crate::pta::ReachableMethods;
use crate::registry::{ApiRegistry, MethodClassification, ProjectRegistry};
use crate::signature;
use crate::strings::StringResults;
use os_ir::{
    ClassFlags, ClassUid, FieldFlags, Instr, InvokeKind, MethodFlags, MethodUid, Scene,
    JAVA_LANG_OBJECT,
};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Appended to names of cloned classes, followed by the clone id.
pub const CLONE_POSTFIX: &str = "_clone_";

// Process-wide clone id, monotonically increasing, never reused nor reset,
// so that clone names stay unique across all cloners and scenes of a run.
static NEXT_CLONE_ID: AtomicUsize = AtomicUsize::new(0);

fn next_clone_id() -> usize {
    NEXT_CLONE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Result of one cloning operation.
#[derive(Debug)]
pub struct CloneHandle {
    clone: ClassUid,
    reachable_cloned_methods: BTreeSet<MethodUid>,
}

impl CloneHandle {
    /// The cloned class installed in the scene.
    #[inline]
    #[must_use]
    pub fn cloned_class(&self) -> ClassUid {
        self.clone
    }

    /// Cloned methods whose originating method was reachable in the
    /// points-to solution snapshot at clone time.
    #[inline]
    pub fn reachable_cloned_methods(&self) -> &BTreeSet<MethodUid> {
        &self.reachable_cloned_methods
    }
}

// Book-keeping for one cloning operation, discarded once the clone is
// installed.
struct CloneRecord {
    // Ancestor methods that have been incorporated into the clone
    incorporated: BTreeSet<MethodUid>,
    // Clone methods whose originating method was reachable
    reachable_cloned: BTreeSet<MethodUid>,
}

impl CloneRecord {
    fn new() -> Self {
        Self {
            incorporated: BTreeSet::new(),
            reachable_cloned: BTreeSet::new(),
        }
    }
}

/// The class specializer. Holds the scene and the registries for the
/// duration of a batch of cloning operations; cloning is sequential, one
/// class at a time.
pub struct ClassCloner<'a> {
    scene: &'a mut Scene,
    api: &'a mut ApiRegistry,
    project: &'a mut ProjectRegistry,
    reachable: &'a ReachableMethods,
    strings: &'a mut StringResults,
}

impl<'a> ClassCloner<'a> {
    pub fn new(
        scene: &'a mut Scene,
        api: &'a mut ApiRegistry,
        project: &'a mut ProjectRegistry,
        reachable: &'a ReachableMethods,
        strings: &'a mut StringResults,
    ) -> Self {
        Self {
            scene,
            api,
            project,
            reachable,
            strings,
        }
    }

    /// Clones the given class and installs the clone in the scene.
    pub fn clone_class(&mut self, original: ClassUid) -> TransformResult<CloneHandle> {
        let orig = &self.scene[original];
        if orig.is_interface() || orig.name() == JAVA_LANG_OBJECT {
            return Err(TransformError::NotCloneable(orig.name().to_string()));
        }

        let clone = self.allocate(original)?;
        let mut record = CloneRecord::new();

        // The chain is resolved once, before any mutation of the scene.
        let ancestors = self.scene.ancestors_including(original);
        for ancestor in &ancestors {
            self.relax_ancestor_fields(*ancestor);
        }
        for ancestor in &ancestors {
            self.incorporate_ancestor_methods(*ancestor, clone, &mut record)?;
        }

        self.fix_invoke_specials(clone, &record)?;

        Ok(CloneHandle {
            clone,
            reachable_cloned_methods: record.reachable_cloned,
        })
    }

    /// Creates the empty clone class, linked as a subclass of the original,
    /// and mirrors the original's classification-set memberships.
    fn allocate(&mut self, original: ClassUid) -> TransformResult<ClassUid> {
        if self.scene[original].is_final() {
            // the original must become legally subclassable, process-wide
            log::info!("changing final modifier on {}", self.scene[original].name());
            self.scene[original].flags_mut().remove(ClassFlags::ACC_FINAL);
        }

        let orig = &self.scene[original];
        let orig_name = orig.name().to_string();
        let name = format!("{orig_name}{CLONE_POSTFIX}{}", next_clone_id());
        let flags = orig.flags();
        let interfaces = orig.interfaces().to_vec();
        let type_params = orig.type_params().to_vec();

        let clone = self
            .scene
            .new_class(&name, flags, Some(original), interfaces, true)?;
        self.scene[clone].set_type_params(type_params);
        log::debug!("cloning class {orig_name} as {name}");

        if self.api.is_system_class(&orig_name) {
            self.api.add_system_class(&name);
        }
        if self.api.is_container_class(&orig_name) {
            self.api.add_container_class(&name);
        }
        if self.project.is_src_class(&orig_name) {
            self.project.add_src_class(&name);
        }
        if self.project.is_gen_class(&orig_name) {
            self.project.add_gen_class(&name);
        }
        if self.project.is_lib_class(&orig_name) {
            self.project.add_lib_class(&name);
        }

        Ok(clone)
    }

    /// Changes private to protected and clears final on the fields declared
    /// by the ancestor, so that inherited state stays reachable from code
    /// now living in the clone. Idempotent.
    fn relax_ancestor_fields(&mut self, ancestor: ClassUid) {
        let fuids = self.scene[ancestor].field_uids().to_vec();
        for fuid in fuids {
            let field = &mut self.scene[fuid];
            if field.is_private() {
                field.flags_mut().insert(FieldFlags::ACC_PROTECTED);
                field.flags_mut().remove(FieldFlags::ACC_PRIVATE);
            }
            if field.is_final() {
                field.flags_mut().remove(FieldFlags::ACC_FINAL);
            }
        }
    }

    /// Clones the ancestor's concrete non-static methods that are not hidden
    /// by virtual dispatch into the clone class.
    fn incorporate_ancestor_methods(
        &mut self,
        ancestor: ClassUid,
        clone: ClassUid,
        record: &mut CloneRecord,
    ) -> TransformResult<()> {
        let muids = self.scene[ancestor].method_uids().to_vec();
        for muid in muids {
            let method = &self.scene[muid];
            if method.is_abstract()
                || method.is_phantom()
                || !method.is_concrete()
                || method.is_runtime_stub()
            {
                continue;
            }
            // never clone static methods
            if method.is_static() {
                continue;
            }

            let descriptor = method.descriptor().clone();
            let flags = method.flags();
            let exceptions = method.exceptions().to_vec();
            let type_params = method.type_params().to_vec();

            // generic names in scope at the ancestor method's declaration
            let mut declared = type_params.clone();
            declared.extend_from_slice(self.scene[ancestor].type_params());

            // check if the clone already contains a method that would
            // resolve to this one under virtual dispatch
            if signature::contains_dispatch_match(self.scene, clone, &descriptor, &declared) {
                log::trace!(
                    "clone already contains method {}",
                    self.scene.method_signature(muid)
                );
                continue;
            }

            // turn off final, the clone must be able to own a copy
            if self.scene[muid].is_final() {
                self.scene[muid].flags_mut().remove(MethodFlags::ACC_FINAL);
            }

            record.incorporated.insert(muid);

            let new_body = self.scene.duplicate_body(muid)?;
            let new_muid = self.scene.new_method(
                clone,
                descriptor,
                flags,
                exceptions,
                type_params,
                Some(new_body),
            );
            log::trace!("adding method {}", self.scene.method_signature(new_muid));

            if self.api.is_system_class(self.scene[ancestor].name()) {
                // unclassified system methods (e.g. generated ones) default
                // to the safe classification
                let classification = self
                    .api
                    .classification(muid)
                    .unwrap_or(MethodClassification::Safe);
                self.api.set_classification(new_muid, classification);
            }

            self.propagate_string_results(muid, new_muid)?;

            // if the original method is reachable, then so is this method
            if self.reachable.contains(muid) {
                record.reachable_cloned.insert(new_muid);
            }
        }
        Ok(())
    }

    /// For each value of the original body that is a hotspot of the string
    /// analysis, registers the corresponding value of the duplicated body
    /// with the same result, keyed by the duplicated call site's resolved
    /// signature and argument index.
    fn propagate_string_results(
        &mut self,
        original: MethodUid,
        cloned: MethodUid,
    ) -> TransformResult<()> {
        if !self.strings.has_run() {
            return Ok(());
        }

        let scene: &Scene = &*self.scene;
        let strings: &mut StringResults = &mut *self.strings;
        let original_body = scene[original].retrieve_body()?;
        let cloned_body = scene[cloned].retrieve_body()?;
        if original_body.len() != cloned_body.len() {
            return Err(TransformError::BodyShapeMismatch(
                scene.method_signature(cloned),
            ));
        }

        for (orig_instr, clone_instr) in original_body.instrs().iter().zip(cloned_body.instrs()) {
            let Some(orig_invoke) = orig_instr.as_invoke() else {
                continue;
            };
            let Some(clone_invoke) = clone_instr.as_invoke() else {
                return Err(TransformError::BodyShapeMismatch(
                    scene.method_signature(cloned),
                ));
            };
            for (i, (orig_arg, clone_arg)) in orig_invoke
                .args()
                .iter()
                .zip(clone_invoke.args())
                .enumerate()
            {
                if strings.is_hotspot_value(orig_arg.value()) {
                    let call_signature = scene.method_signature(clone_invoke.target());
                    strings.copy_result(orig_arg.value(), &call_signature, i, clone_arg.value());
                }
            }
        }
        Ok(())
    }

    /// Rebinds non-virtual call sites of the clone's bodies that still point
    /// at an incorporated ancestor method to the clone's own copy. Calls to
    /// ancestor methods that were never incorporated are legitimately shared
    /// behavior and stay untouched.
    fn fix_invoke_specials(&mut self, clone: ClassUid, record: &CloneRecord) -> TransformResult<()> {
        let clone_methods = self.scene[clone].method_uids().to_vec();
        for muid in clone_methods {
            let mut rebinds = Vec::new();
            let body = self.scene[muid].retrieve_body()?;
            for (idx, instr) in body.instrs().iter().enumerate() {
                let Some(invoke) = instr.as_invoke() else {
                    continue;
                };
                if invoke.kind() != InvokeKind::Special
                    || !record.incorporated.contains(&invoke.target())
                {
                    continue;
                }
                let new_target = self.clone_method_for(clone, invoke.target())?;
                rebinds.push((idx, new_target));
            }
            if rebinds.is_empty() {
                continue;
            }
            let body = self.scene[muid].retrieve_body_mut()?;
            for (idx, new_target) in rebinds {
                if let Instr::Invoke(invoke) = &mut body.instrs_mut()[idx] {
                    invoke.retarget(new_target);
                }
            }
        }
        Ok(())
    }

    /// Resolves the clone's own copy of an incorporated ancestor method.
    /// Tries the by-name lookup first and falls back to explicit signature
    /// matching on overloads; a final miss is a structural invariant
    /// violation.
    fn clone_method_for(&self, clone: ClassUid, target: MethodUid) -> TransformResult<MethodUid> {
        let descriptor = self.scene[target].descriptor();
        let class = &self.scene[clone];
        match class.get_method_by_name(descriptor.name(), self.scene) {
            Ok(method) if method.descriptor() == descriptor => Ok(method.uid()),
            _ => class
                .get_method(
                    descriptor.name(),
                    descriptor.return_type(),
                    descriptor.parameters_types(),
                    self.scene,
                )
                .map(os_ir::Method::uid)
                .ok_or_else(|| {
                    TransformError::MethodNotFoundForSignature(format!(
                        "{}->{descriptor}",
                        class.name()
                    ))
                }),
        }
    }
}

/// Strips the synthetic clone suffixes from a class name, recovering the
/// original class's logical name.
#[must_use]
pub fn remove_clone_suffix(name: &str) -> String {
    let regex = format!("{CLONE_POSTFIX}[0-9]+");
    let pattern = Regex::new(&regex).expect("static clone suffix pattern");
    pattern.replace_all(name, "").into_owned()
}

/// Inverse lookup of the original class a clone was created from.
pub fn resolve_original_from_clone(scene: &Scene, clone: ClassUid) -> TransformResult<ClassUid> {
    let original = remove_clone_suffix(scene[clone].name());
    Ok(scene.lookup_class(&original)?.uid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use os_ir::{Body, MethodDescr, Type};

    struct Fixture {
        scene: Scene,
        api: ApiRegistry,
        project: ProjectRegistry,
        reachable: ReachableMethods,
        strings: StringResults,
        a: ClassUid,
        b: ClassUid,
        a_foo: MethodUid,
        a_bar: MethodUid,
        b_foo: MethodUid,
        b_call: MethodUid,
    }

    // Hierarchy: Object <- A <- B.
    //   A: private final int secret; public int shared;
    //      foo()void            (overridden by B)
    //      final bar(int)void
    //      static stat()void
    //      abstract absm()void
    //   B: foo()void
    //      call()void { invokespecial bar(v); invokespecial A.foo(); return }
    fn fixture() -> Fixture {
        let mut scene = Scene::new();
        let root = scene
            .new_class(JAVA_LANG_OBJECT, ClassFlags::ACC_PUBLIC, None, Vec::new(), false)
            .unwrap();
        let a = scene
            .new_class("pkg/A", ClassFlags::ACC_PUBLIC, Some(root), Vec::new(), true)
            .unwrap();
        let b = scene
            .new_class("pkg/B", ClassFlags::ACC_PUBLIC, Some(a), Vec::new(), true)
            .unwrap();

        scene.new_field(
            a,
            "secret",
            Type::Int,
            FieldFlags::ACC_PRIVATE | FieldFlags::ACC_FINAL,
        );
        scene.new_field(a, "shared", Type::Int, FieldFlags::ACC_PUBLIC);

        let a_foo = scene.new_method(
            a,
            MethodDescr::new("foo", Type::Void, vec![]),
            MethodFlags::ACC_PUBLIC,
            Vec::new(),
            Vec::new(),
            Some(Body::new(vec![Instr::Return])),
        );
        let a_bar = scene.new_method(
            a,
            MethodDescr::new("bar", Type::Void, vec![Type::Int]),
            MethodFlags::ACC_PUBLIC | MethodFlags::ACC_FINAL,
            Vec::new(),
            Vec::new(),
            Some(Body::new(vec![Instr::Return])),
        );
        scene.new_method(
            a,
            MethodDescr::new("stat", Type::Void, vec![]),
            MethodFlags::ACC_PUBLIC | MethodFlags::ACC_STATIC,
            Vec::new(),
            Vec::new(),
            Some(Body::new(vec![Instr::Return])),
        );
        scene.new_method(
            a,
            MethodDescr::new("absm", Type::Void, vec![]),
            MethodFlags::ACC_PUBLIC | MethodFlags::ACC_ABSTRACT,
            Vec::new(),
            Vec::new(),
            None,
        );

        let b_foo = scene.new_method(
            b,
            MethodDescr::new("foo", Type::Void, vec![]),
            MethodFlags::ACC_PUBLIC,
            Vec::new(),
            Vec::new(),
            Some(Body::new(vec![Instr::Return])),
        );
        let call_bar = scene.new_invoke(InvokeKind::Special, a_bar, 1);
        let call_foo = scene.new_invoke(InvokeKind::Special, a_foo, 0);
        let b_call = scene.new_method(
            b,
            MethodDescr::new("call", Type::Void, vec![]),
            MethodFlags::ACC_PUBLIC,
            Vec::new(),
            Vec::new(),
            Some(Body::new(vec![
                Instr::Invoke(call_bar),
                Instr::Invoke(call_foo),
                Instr::Return,
            ])),
        );

        let reachable = ReachableMethods::snapshot([a_bar, b_foo]);

        Fixture {
            scene,
            api: ApiRegistry::new(),
            project: ProjectRegistry::new(),
            reachable,
            strings: StringResults::new(),
            a,
            b,
            a_foo,
            a_bar,
            b_foo,
            b_call,
        }
    }

    fn run_clone(fx: &mut Fixture) -> CloneHandle {
        let class = fx.b;
        run_clone_on(fx, class)
    }

    fn run_clone_on(fx: &mut Fixture, class: ClassUid) -> CloneHandle {
        let mut cloner = ClassCloner::new(
            &mut fx.scene,
            &mut fx.api,
            &mut fx.project,
            &fx.reachable,
            &mut fx.strings,
        );
        cloner.clone_class(class).unwrap()
    }

    fn clone_method(fx: &Fixture, clone: ClassUid, name: &str) -> MethodUid {
        fx.scene[clone]
            .get_method_by_name(name, &fx.scene)
            .unwrap()
            .uid()
    }

    #[test]
    fn clone_is_subclass_with_inherited_methods() {
        let mut fx = fixture();
        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        assert_eq!(fx.scene[clone].superclass(), Some(fx.b));
        assert!(fx.scene[clone].is_application());

        let names: Vec<&str> = fx.scene[clone]
            .iter_methods(&fx.scene)
            .map(os_ir::Method::name)
            .collect();
        assert_eq!(names, vec!["foo", "call", "bar"]);
        // no fields of its own: inherited state stays on the ancestors
        assert!(fx.scene[clone].field_uids().is_empty());
        // clone methods are fresh nodes, not shared with the originals
        assert_ne!(clone_method(&fx, clone, "foo"), fx.b_foo);
        assert_ne!(clone_method(&fx, clone, "bar"), fx.a_bar);
    }

    #[test]
    fn shadowed_ancestor_method_is_skipped() {
        let mut fx = fixture();
        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        // B::foo was incorporated first, so A::foo must not be
        let foo = clone_method(&fx, clone, "foo");
        assert_eq!(
            fx.scene[foo].retrieve_body().unwrap().len(),
            fx.scene[fx.b_foo].retrieve_body().unwrap().len()
        );
        let foos = fx.scene[clone]
            .iter_methods(&fx.scene)
            .filter(|m| m.name() == "foo")
            .count();
        assert_eq!(foos, 1);
    }

    #[test]
    fn ancestor_fields_are_relaxed_process_wide() {
        let mut fx = fixture();
        run_clone(&mut fx);

        let secret = fx.scene[fx.a]
            .get_field("secret", &Type::Int, &fx.scene)
            .unwrap();
        assert!(!secret.is_private());
        assert!(secret.is_protected());
        assert!(!secret.is_final());
        let shared = fx.scene[fx.a]
            .get_field("shared", &Type::Int, &fx.scene)
            .unwrap();
        assert!(shared.is_public());
        assert!(!shared.is_protected());
    }

    #[test]
    fn sibling_cloning_is_idempotent_on_shared_ancestors() {
        let mut fx = fixture();
        let b2 = fx
            .scene
            .new_class("pkg/B2", ClassFlags::ACC_PUBLIC, Some(fx.a), Vec::new(), true)
            .unwrap();
        run_clone(&mut fx);
        run_clone_on(&mut fx, b2);

        let secret = fx.scene[fx.a]
            .get_field("secret", &Type::Int, &fx.scene)
            .unwrap();
        assert!(secret.is_protected());
        assert!(!secret.is_private());
        assert!(!secret.is_final());
    }

    #[test]
    fn finality_is_cleared_on_original_and_methods() {
        let mut fx = fixture();
        *fx.scene[fx.b].flags_mut() |= ClassFlags::ACC_FINAL;
        let handle = run_clone(&mut fx);

        assert!(!fx.scene[fx.b].is_final());
        assert!(!fx.scene[handle.cloned_class()].is_final());
        // final ancestor method became overridable
        assert!(!fx.scene[fx.a_bar].is_final());
    }

    #[test]
    fn reachability_mirrors_originating_methods() {
        let mut fx = fixture();
        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        let foo = clone_method(&fx, clone, "foo");
        let bar = clone_method(&fx, clone, "bar");
        let call = clone_method(&fx, clone, "call");
        assert!(handle.reachable_cloned_methods().contains(&foo));
        assert!(handle.reachable_cloned_methods().contains(&bar));
        assert!(!handle.reachable_cloned_methods().contains(&call));
    }

    #[test]
    fn special_invokes_are_rebound_only_for_incorporated_targets() {
        let mut fx = fixture();
        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        let call = clone_method(&fx, clone, "call");
        let bar = clone_method(&fx, clone, "bar");
        let body = fx.scene[call].retrieve_body().unwrap();
        let targets: Vec<MethodUid> = body
            .instrs()
            .iter()
            .filter_map(|i| i.as_invoke().map(os_ir::InvokeInstr::target))
            .collect();
        // bar was incorporated: rebound to the clone's copy;
        // A::foo was shadowed, never incorporated: still the ancestor's
        assert_eq!(targets, vec![bar, fx.a_foo]);
        // the original B::call still points at the ancestor methods
        let orig_targets: Vec<MethodUid> = fx.scene[fx.b_call]
            .retrieve_body()
            .unwrap()
            .instrs()
            .iter()
            .filter_map(|i| i.as_invoke().map(os_ir::InvokeInstr::target))
            .collect();
        assert_eq!(orig_targets, vec![fx.a_bar, fx.a_foo]);
    }

    #[test]
    fn clone_names_are_unique_and_strippable() {
        let mut fx = fixture();
        let first = run_clone(&mut fx);
        let second = run_clone(&mut fx);
        let first_name = fx.scene[first.cloned_class()].name().to_string();
        let second_name = fx.scene[second.cloned_class()].name().to_string();

        assert_ne!(first_name, second_name);
        assert_eq!(remove_clone_suffix(&first_name), "pkg/B");
        assert_eq!(remove_clone_suffix(&second_name), "pkg/B");
        assert_eq!(
            resolve_original_from_clone(&fx.scene, first.cloned_class()).unwrap(),
            fx.b
        );
        assert_eq!(
            resolve_original_from_clone(&fx.scene, second.cloned_class()).unwrap(),
            fx.b
        );
    }

    #[test]
    fn classification_is_mirrored_for_system_ancestors() {
        let mut fx = fixture();
        fx.api.add_system_class("pkg/A");
        fx.api
            .set_classification(fx.a_bar, MethodClassification::Banned);
        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        let bar = clone_method(&fx, clone, "bar");
        assert_eq!(
            fx.api.classification(bar),
            Some(MethodClassification::Banned)
        );
        // B is not a system class, its methods stay unclassified
        let foo = clone_method(&fx, clone, "foo");
        assert_eq!(fx.api.classification(foo), None);
    }

    #[test]
    fn registry_memberships_are_mirrored_on_the_clone() {
        let mut fx = fixture();
        fx.api.add_system_class("pkg/B");
        fx.api.add_container_class("pkg/B");
        fx.project.add_src_class("pkg/B");
        let handle = run_clone(&mut fx);
        let clone_name = fx.scene[handle.cloned_class()].name().to_string();

        assert!(fx.api.is_system_class(&clone_name));
        assert!(fx.api.is_container_class(&clone_name));
        assert!(fx.project.is_src_class(&clone_name));
        assert!(!fx.project.is_gen_class(&clone_name));
        assert!(!fx.project.is_lib_class(&clone_name));
    }

    #[test]
    fn hotspot_results_are_propagated_to_duplicated_call_sites() {
        let mut fx = fixture();
        fx.strings.mark_run();
        let arg = fx.scene[fx.b_call].retrieve_body().unwrap().instrs()[0]
            .as_invoke()
            .unwrap()
            .args()[0]
            .value();
        fx.strings.record_hotspot(arg, "cmd");
        let bar_signature = fx.scene.method_signature(fx.a_bar);

        let handle = run_clone(&mut fx);
        let clone = handle.cloned_class();

        let call = clone_method(&fx, clone, "call");
        let clone_arg = fx.scene[call].retrieve_body().unwrap().instrs()[0]
            .as_invoke()
            .unwrap()
            .args()[0]
            .value();
        assert_ne!(arg, clone_arg);
        assert!(fx.strings.is_hotspot_value(clone_arg));
        assert_eq!(fx.strings.result(clone_arg), Some("cmd"));
        assert_eq!(fx.strings.result_at(&bar_signature, 0), Some("cmd"));
    }

    #[test]
    fn interfaces_and_the_root_are_not_cloneable() {
        let mut fx = fixture();
        let iface = fx
            .scene
            .new_class(
                "pkg/Iface",
                ClassFlags::ACC_PUBLIC | ClassFlags::ACC_INTERFACE,
                fx.scene.class_uid(JAVA_LANG_OBJECT),
                Vec::new(),
                true,
            )
            .unwrap();
        let root = fx.scene.class_uid(JAVA_LANG_OBJECT).unwrap();

        let mut cloner = ClassCloner::new(
            &mut fx.scene,
            &mut fx.api,
            &mut fx.project,
            &fx.reachable,
            &mut fx.strings,
        );
        assert!(matches!(
            cloner.clone_class(iface),
            Err(TransformError::NotCloneable(_))
        ));
        assert!(matches!(
            cloner.clone_class(root),
            Err(TransformError::NotCloneable(_))
        ));
    }
}
