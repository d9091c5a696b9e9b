use crate::flags::FieldFlags;
use crate::types::Type;
use crate::uids::{ClassUid, FieldUid};
use std::fmt;

/// A field declaration owned by exactly one class of the scene.
#[derive(Debug, Clone)]
pub struct Field {
    // Unique identifier in the scene
    uid: FieldUid,
    // Owning class
    class: ClassUid,
    name: String,
    type_: Type,
    flags: FieldFlags,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{} {}", self.flags, self.type_, self.name)
    }
}

impl Field {
    pub(crate) fn new(
        uid: FieldUid,
        class: ClassUid,
        name: &str,
        type_: Type,
        flags: FieldFlags,
    ) -> Self {
        Self {
            uid,
            class,
            name: name.to_string(),
            type_,
            flags,
        }
    }

    #[inline]
    pub fn uid(&self) -> FieldUid {
        self.uid
    }

    #[inline]
    pub fn class(&self) -> ClassUid {
        self.class
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn type_(&self) -> &Type {
        &self.type_
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    #[inline]
    pub fn flags_mut(&mut self) -> &mut FieldFlags {
        &mut self.flags
    }

    #[inline]
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.flags.contains(FieldFlags::ACC_PUBLIC)
    }

    #[inline]
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.flags.contains(FieldFlags::ACC_PRIVATE)
    }

    #[inline]
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        self.flags.contains(FieldFlags::ACC_PROTECTED)
    }

    #[inline]
    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.flags.contains(FieldFlags::ACC_STATIC)
    }

    #[inline]
    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.flags.contains(FieldFlags::ACC_FINAL)
    }
}
