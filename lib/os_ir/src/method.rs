use crate::errors::{IrError, IrResult};
use crate::flags::MethodFlags;
use crate::instrs::Body;
use crate::types::Type;
use crate::uids::{ClassUid, MethodUid};
use std::fmt;

/// A method declaration owned by exactly one class of the scene.
///
/// The body is present iff the method is concrete. Phantom methods stand for
/// declarations the model knows about but whose defining class was never
/// loaded; runtime stubs are generated placeholders that transforms must
/// never duplicate.
#[derive(Debug, Clone)]
pub struct Method {
    // Unique identifier in the scene
    uid: MethodUid,
    // Owning class
    class: ClassUid,
    // Cache of name and types that identify the method
    descriptor: MethodDescr,
    flags: MethodFlags,
    // Declared exception class names
    exceptions: Vec<String>,
    // Generic type parameter names declared at method level
    type_params: Vec<String>,
    body: Option<Body>,
    phantom: bool,
    runtime_stub: bool,
}

impl Method {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        uid: MethodUid,
        class: ClassUid,
        descriptor: MethodDescr,
        flags: MethodFlags,
        exceptions: Vec<String>,
        type_params: Vec<String>,
        body: Option<Body>,
    ) -> Self {
        Self {
            uid,
            class,
            descriptor,
            flags,
            exceptions,
            type_params,
            body,
            phantom: false,
            runtime_stub: false,
        }
    }

    #[inline]
    pub fn uid(&self) -> MethodUid {
        self.uid
    }

    #[inline]
    pub fn class(&self) -> ClassUid {
        self.class
    }

    #[inline]
    pub fn descriptor(&self) -> &MethodDescr {
        &self.descriptor
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.descriptor().name()
    }

    #[inline]
    pub fn return_type(&self) -> &Type {
        self.descriptor().return_type()
    }

    #[inline]
    pub fn parameters_types(&self) -> &[Type] {
        self.descriptor().parameters_types()
    }

    #[inline]
    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    #[inline]
    pub fn type_params(&self) -> &[String] {
        &self.type_params
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> MethodFlags {
        self.flags
    }

    #[inline]
    pub fn flags_mut(&mut self) -> &mut MethodFlags {
        &mut self.flags
    }

    /// Returns the body of this method, or [`IrError::NoBody`] if the method
    /// is not concrete.
    pub fn retrieve_body(&self) -> IrResult<&Body> {
        self.body.as_ref().ok_or(IrError::NoBody)
    }

    pub fn retrieve_body_mut(&mut self) -> IrResult<&mut Body> {
        self.body.as_mut().ok_or(IrError::NoBody)
    }

    pub fn set_body(&mut self, body: Body) {
        self.body = Some(body);
    }

    pub(crate) fn set_phantom(&mut self, phantom: bool) {
        self.phantom = phantom;
    }

    pub(crate) fn set_runtime_stub(&mut self, runtime_stub: bool) {
        self.runtime_stub = runtime_stub;
    }

    #[inline]
    #[must_use]
    pub const fn is_phantom(&self) -> bool {
        self.phantom
    }

    #[inline]
    #[must_use]
    pub const fn is_runtime_stub(&self) -> bool {
        self.runtime_stub
    }

    /// A method is concrete when it carries a body and is neither abstract,
    /// native nor phantom.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        self.body.is_some() && !self.is_abstract() && !self.is_native() && !self.phantom
    }

    #[inline]
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_PUBLIC)
    }

    #[inline]
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_PRIVATE)
    }

    #[inline]
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_PROTECTED)
    }

    #[inline]
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_STATIC)
    }

    #[inline]
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_FINAL)
    }

    #[inline]
    #[must_use]
    pub const fn is_native(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_NATIVE)
    }

    #[inline]
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_ABSTRACT)
    }

    #[inline]
    #[must_use]
    pub const fn is_constructor(&self) -> bool {
        self.flags.contains(MethodFlags::ACC_CONSTRUCTOR)
    }
}

/// A wrapper to cache prototype information of a method and to allow
/// deriving of eq and ord traits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MethodDescr {
    name: String,
    return_type: Type,
    parameters_types: Vec<Type>,
}

impl fmt::Display for MethodDescr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parameters = self
            .parameters_types
            .iter()
            .map(|t| format!("{t},"))
            .collect::<String>();
        write!(
            f,
            "{}({}){}",
            self.name,
            parameters.trim_end_matches(','),
            self.return_type
        )
    }
}

impl MethodDescr {
    #[must_use]
    pub fn new(name: &str, return_type: Type, parameters_types: Vec<Type>) -> Self {
        Self {
            name: name.to_string(),
            return_type,
            parameters_types,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    #[inline]
    pub fn parameters_types(&self) -> &[Type] {
        &self.parameters_types
    }
}
