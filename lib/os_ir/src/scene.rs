//! The scene centralizes all loaded classes and owns every class, method
//! and field node of the program model.

use crate::class::Class;
use crate::errors::{IrError, IrResult};
use crate::field::Field;
use crate::flags::{ClassFlags, FieldFlags, MethodFlags};
use crate::instrs::{Body, InvokeInstr, InvokeKind, ValueBox};
use crate::method::{Method, MethodDescr};
use crate::types::Type;
use crate::uids::{ClassUid, FieldUid, MethodUid, SceneCounters};
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use std::collections::{BTreeMap, BTreeSet};
use std::ops;

/// Name of the universal root type of the hierarchy.
pub const JAVA_LANG_OBJECT: &str = "java/lang/Object";

#[derive(Debug)]
pub struct Scene {
    classes: Vec<Class>,
    methods: Vec<Method>,
    fields: Vec<Field>,
    class_ids: BTreeMap<String, ClassUid>,
    counters: SceneCounters,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            class_ids: BTreeMap::new(),
            counters: SceneCounters::new(),
        }
    }
}

impl ops::Index<ClassUid> for Scene {
    type Output = Class;

    fn index(&self, cuid: ClassUid) -> &Class {
        &self.classes[cuid.idx()]
    }
}

impl ops::IndexMut<ClassUid> for Scene {
    fn index_mut(&mut self, cuid: ClassUid) -> &mut Class {
        &mut self.classes[cuid.idx()]
    }
}

impl ops::Index<MethodUid> for Scene {
    type Output = Method;

    fn index(&self, muid: MethodUid) -> &Method {
        &self.methods[muid.idx()]
    }
}

impl ops::IndexMut<MethodUid> for Scene {
    fn index_mut(&mut self, muid: MethodUid) -> &mut Method {
        &mut self.methods[muid.idx()]
    }
}

impl ops::Index<FieldUid> for Scene {
    type Output = Field;

    fn index(&self, fuid: FieldUid) -> &Field {
        &self.fields[fuid.idx()]
    }
}

impl ops::IndexMut<FieldUid> for Scene {
    fn index_mut(&mut self, fuid: FieldUid) -> &mut Field {
        &mut self.fields[fuid.idx()]
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new class node and registers it in the global class table.
    pub fn new_class(
        &mut self,
        name: &str,
        flags: ClassFlags,
        superclass: Option<ClassUid>,
        interfaces: Vec<String>,
        application: bool,
    ) -> IrResult<ClassUid> {
        if self.class_ids.contains_key(name) {
            return Err(IrError::DuplicateClass(name.to_string()));
        }
        log::trace!(
            "pushing '{}'{} in scene",
            name,
            if application { "" } else { " (LIB)" }
        );
        let cuid = self.counters.new_class_uid();
        self.classes.push(Class::new(
            cuid,
            name,
            flags,
            superclass,
            interfaces,
            application,
        ));
        self.class_ids.insert(name.to_string(), cuid);
        Ok(cuid)
    }

    /// Creates a new method node owned by the given class.
    pub fn new_method(
        &mut self,
        class: ClassUid,
        descriptor: MethodDescr,
        flags: MethodFlags,
        exceptions: Vec<String>,
        type_params: Vec<String>,
        body: Option<Body>,
    ) -> MethodUid {
        let muid = self.counters.new_method_uid();
        self.methods.push(Method::new(
            muid,
            class,
            descriptor,
            flags,
            exceptions,
            type_params,
            body,
        ));
        self[class].push_method(muid);
        muid
    }

    /// Creates a new field node owned by the given class.
    pub fn new_field(
        &mut self,
        class: ClassUid,
        name: &str,
        type_: Type,
        flags: FieldFlags,
    ) -> FieldUid {
        let fuid = self.counters.new_field_uid();
        self.fields.push(Field::new(fuid, class, name, type_, flags));
        self[class].push_field(fuid);
        fuid
    }

    /// Creates a call-site instruction with freshly allocated value slots.
    pub fn new_invoke(&mut self, kind: InvokeKind, target: MethodUid, nargs: usize) -> InvokeInstr {
        let args = (0..nargs)
            .map(|_| ValueBox::new(self.counters.new_value_id()))
            .collect();
        InvokeInstr::new(kind, target, args)
    }

    #[must_use]
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.class_ids.get(name).map(|cuid| &self[*cuid])
    }

    #[must_use]
    pub fn class_uid(&self, name: &str) -> Option<ClassUid> {
        self.class_ids.get(name).copied()
    }

    pub fn lookup_class(&self, name: &str) -> IrResult<&Class> {
        self.get_class_by_name(name)
            .ok_or_else(|| IrError::ClassNotFound(name.to_string()))
    }

    pub fn iter_classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }

    pub fn set_superclass(&mut self, class: ClassUid, superclass: Option<ClassUid>) {
        self[class].set_superclass(superclass);
    }

    pub fn set_method_phantom(&mut self, muid: MethodUid, phantom: bool) {
        self[muid].set_phantom(phantom);
    }

    pub fn set_method_runtime_stub(&mut self, muid: MethodUid, runtime_stub: bool) {
        self[muid].set_runtime_stub(runtime_stub);
    }

    /// Full signature of a method, definer included.
    #[must_use]
    pub fn method_signature(&self, muid: MethodUid) -> String {
        let method = &self[muid];
        format!("{}->{}", self[method.class()].name(), method.descriptor())
    }

    /// Resolves the ancestor chain of a class as an ordered list, the class
    /// itself first, then each superclass nearest-first, excluding the
    /// universal root type. The list is built once so that callers can walk
    /// it while mutating the scene.
    #[must_use]
    pub fn ancestors_including(&self, class: ClassUid) -> Vec<ClassUid> {
        let mut chain = Vec::new();
        let mut current = Some(class);
        while let Some(cuid) = current {
            let class = &self[cuid];
            if class.name() == JAVA_LANG_OBJECT {
                break;
            }
            chain.push(cuid);
            current = class.superclass();
        }
        chain
    }

    /// Checks whether an object of class `type_name1` can stand where a
    /// `type_name2` is expected. Accepts equal names without requiring the
    /// classes to be known, and every class is typeable as the root type.
    /// Otherwise follows the superclass chain of `type_name1`, interface
    /// declarations included.
    #[must_use]
    pub fn is_typeable_as(&self, type_name1: &str, type_name2: &str) -> bool {
        if type_name1 == type_name2 || type_name2 == JAVA_LANG_OBJECT {
            return true;
        }
        let mut current = self.class_uid(type_name1);
        while let Some(cuid) = current {
            let class = &self[cuid];
            if class.name() == type_name2 {
                return true;
            }
            if class.interfaces().iter().any(|i| i == type_name2) {
                return true;
            }
            current = class.superclass();
        }
        false
    }

    /// Ensures the hierarchy has its root type, that every other class
    /// without a superclass link inherits from it, and that no superclass
    /// chain loops back on itself.
    pub fn close_hierarchy(&mut self) -> IrResult<()> {
        let root = match self.class_uid(JAVA_LANG_OBJECT) {
            Some(cuid) => cuid,
            None => self.new_class(
                JAVA_LANG_OBJECT,
                ClassFlags::ACC_PUBLIC,
                None,
                Vec::new(),
                false,
            )?,
        };
        let orphans: Vec<ClassUid> = self
            .classes
            .iter()
            .filter(|class| class.superclass().is_none() && class.uid() != root)
            .map(Class::uid)
            .collect();
        for cuid in orphans {
            log::warn!(
                "add missing java.lang.Object inheritance to {}",
                self[cuid].name()
            );
            self.set_superclass(cuid, Some(root));
        }
        for class in &self.classes {
            let mut seen = BTreeSet::new();
            let mut current = Some(class.uid());
            while let Some(cuid) = current {
                if !seen.insert(cuid) {
                    return Err(IrError::CyclicHierarchy(self[cuid].name().to_string()));
                }
                current = self[cuid].superclass();
            }
        }
        Ok(())
    }

    /// Deep-copies the body of the given method. See [`Body::duplicate`]
    /// for the invariants the copy satisfies.
    pub fn duplicate_body(&mut self, muid: MethodUid) -> IrResult<Body> {
        let Self {
            methods, counters, ..
        } = self;
        let body = methods[muid.idx()].retrieve_body()?;
        Ok(body.duplicate(counters))
    }

    /// Renders the inheritance graph in dot format.
    #[must_use]
    pub fn hierarchy_dot(&self) -> String {
        let mut graph: DiGraph<&str, &str> = DiGraph::new();
        let mut nodes = BTreeMap::new();
        for class in &self.classes {
            nodes.insert(class.uid(), graph.add_node(class.name()));
        }
        for class in &self.classes {
            if let Some(superclass) = class.superclass() {
                graph.add_edge(nodes[&class.uid()], nodes[&superclass], "");
            }
        }
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }

    #[must_use]
    pub fn nb_classes(&self) -> usize {
        self.counters.nb_classes()
    }

    #[must_use]
    pub fn nb_methods(&self) -> usize {
        self.counters.nb_methods()
    }

    #[must_use]
    pub fn nb_fields(&self) -> usize {
        self.counters.nb_fields()
    }
}
