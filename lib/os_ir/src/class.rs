use crate::errors::{IrError, IrResult};
use crate::flags::ClassFlags;
use crate::method::Method;
use crate::scene::Scene;
use crate::types::Type;
use crate::uids::{ClassUid, FieldUid, MethodUid};
use crate::Field;
use std::cmp::Ordering;
use std::fmt;

/// A loaded class of the scene.
///
/// Single inheritance: every class except the root has exactly one
/// superclass, and the ancestor chain is acyclic.
#[derive(Debug, Clone)]
pub struct Class {
    // Unique identifier in the scene
    uid: ClassUid,
    name: String,
    flags: ClassFlags,
    superclass: Option<ClassUid>,
    // Implemented interface names (declaration level)
    interfaces: Vec<String>,
    // Flag to distinguish application-defined classes from library ones
    application: bool,
    // Generic type parameter names declared at class level
    type_params: Vec<String>,
    // List of contained methods (declaration level)
    methods: Vec<MethodUid>,
    // List of contained fields (declaration level)
    fields: Vec<FieldUid>,
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for Class {}

impl PartialOrd for Class {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Class {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uid.cmp(&other.uid)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Class {
    pub(crate) fn new(
        uid: ClassUid,
        name: &str,
        flags: ClassFlags,
        superclass: Option<ClassUid>,
        interfaces: Vec<String>,
        application: bool,
    ) -> Self {
        Self {
            uid,
            name: name.to_string(),
            flags,
            superclass,
            interfaces,
            application,
            type_params: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[inline]
    pub fn uid(&self) -> ClassUid {
        self.uid
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> ClassFlags {
        self.flags
    }

    #[inline]
    pub fn flags_mut(&mut self) -> &mut ClassFlags {
        &mut self.flags
    }

    #[inline]
    #[must_use]
    pub const fn superclass(&self) -> Option<ClassUid> {
        self.superclass
    }

    pub(crate) fn set_superclass(&mut self, superclass: Option<ClassUid>) {
        self.superclass = superclass;
    }

    #[inline]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    #[inline]
    #[must_use]
    pub const fn is_application(&self) -> bool {
        self.application
    }

    pub fn set_application(&mut self, application: bool) {
        self.application = application;
    }

    #[inline]
    pub fn type_params(&self) -> &[String] {
        &self.type_params
    }

    pub fn set_type_params(&mut self, type_params: Vec<String>) {
        self.type_params = type_params;
    }

    pub(crate) fn push_method(&mut self, muid: MethodUid) {
        self.methods.push(muid);
    }

    pub(crate) fn push_field(&mut self, fuid: FieldUid) {
        self.fields.push(fuid);
    }

    #[inline]
    pub fn method_uids(&self) -> &[MethodUid] {
        &self.methods
    }

    #[inline]
    pub fn field_uids(&self) -> &[FieldUid] {
        &self.fields
    }

    /// Returns an iterator over all methods declared by the class.
    pub fn iter_methods<'a>(&'a self, scene: &'a Scene) -> impl Iterator<Item = &'a Method> {
        self.methods.iter().map(|muid| &scene[*muid])
    }

    pub fn iter_fields<'a>(&'a self, scene: &'a Scene) -> impl Iterator<Item = &'a Field> {
        self.fields.iter().map(|fuid| &scene[*fuid])
    }

    /// Exact signature lookup among the methods declared by this class.
    pub fn get_method<'a>(
        &'a self,
        name: &str,
        return_type: &Type,
        parameters_types: &[Type],
        scene: &'a Scene,
    ) -> Option<&'a Method> {
        self.iter_methods(scene).find(|meth| {
            meth.name() == name
                && meth.return_type() == return_type
                && meth.parameters_types() == parameters_types
        })
    }

    /// By-name lookup. Fails with [`IrError::AmbiguousMethod`] when several
    /// overloads share the name; callers are expected to fall back to
    /// explicit signature matching in that case.
    pub fn get_method_by_name<'a>(&'a self, name: &str, scene: &'a Scene) -> IrResult<&'a Method> {
        let mut found = None;
        for meth in self.iter_methods(scene) {
            if meth.name() == name {
                if found.is_some() {
                    return Err(IrError::AmbiguousMethod(format!("{}->{name}", self.name)));
                }
                found = Some(meth);
            }
        }
        found.ok_or_else(|| IrError::MethodNotFound(format!("{}->{name}", self.name)))
    }

    pub fn get_field<'a>(&'a self, name: &str, type_: &Type, scene: &'a Scene) -> Option<&'a Field> {
        self.iter_fields(scene)
            .find(|field| field.name() == name && field.type_() == type_)
    }

    #[inline]
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.flags.contains(ClassFlags::ACC_PUBLIC)
    }

    #[inline]
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.flags.contains(ClassFlags::ACC_FINAL)
    }

    #[inline]
    #[must_use]
    pub const fn is_interface(&self) -> bool {
        self.flags.contains(ClassFlags::ACC_INTERFACE)
    }

    #[inline]
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.flags.contains(ClassFlags::ACC_ABSTRACT)
    }

    #[inline]
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        self.flags.contains(ClassFlags::ACC_ENUM)
    }
}
