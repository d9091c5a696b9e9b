//! Access flag sets for classes, methods and fields.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    pub struct ClassFlags: u32 {
        const ACC_PUBLIC     = 0x00001;
        const ACC_PRIVATE    = 0x00002;
        const ACC_PROTECTED  = 0x00004;
        const ACC_STATIC     = 0x00008;
        const ACC_FINAL      = 0x00010;
        const ACC_INTERFACE  = 0x00200;
        const ACC_ABSTRACT   = 0x00400;
        const ACC_SYNTHETIC  = 0x01000;
        const ACC_ANNOTATION = 0x02000;
        const ACC_ENUM       = 0x04000;
    }
}

bitflags! {
    pub struct MethodFlags: u32 {
        const ACC_PUBLIC       = 0x00001;
        const ACC_PRIVATE      = 0x00002;
        const ACC_PROTECTED    = 0x00004;
        const ACC_STATIC       = 0x00008;
        const ACC_FINAL        = 0x00010;
        const ACC_SYNCHRONIZED = 0x00020;
        const ACC_BRIDGE       = 0x00040;
        const ACC_VARARGS      = 0x00080;
        const ACC_NATIVE       = 0x00100;
        const ACC_ABSTRACT     = 0x00400;
        const ACC_SYNTHETIC    = 0x01000;
        const ACC_CONSTRUCTOR  = 0x10000;
    }
}

bitflags! {
    pub struct FieldFlags: u32 {
        const ACC_PUBLIC    = 0x00001;
        const ACC_PRIVATE   = 0x00002;
        const ACC_PROTECTED = 0x00004;
        const ACC_STATIC    = 0x00008;
        const ACC_FINAL     = 0x00010;
        const ACC_VOLATILE  = 0x00040;
        const ACC_TRANSIENT = 0x00080;
        const ACC_SYNTHETIC = 0x01000;
        const ACC_ENUM      = 0x04000;
    }
}

impl fmt::Display for MethodFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.contains(Self::ACC_PUBLIC) {
            write!(f, "public ")?;
        }
        if self.contains(Self::ACC_PRIVATE) {
            write!(f, "private ")?;
        }
        if self.contains(Self::ACC_PROTECTED) {
            write!(f, "protected ")?;
        }
        if self.contains(Self::ACC_STATIC) {
            write!(f, "static ")?;
        }
        if self.contains(Self::ACC_FINAL) {
            write!(f, "final ")?;
        }
        if self.contains(Self::ACC_ABSTRACT) {
            write!(f, "abstract ")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.contains(Self::ACC_PUBLIC) {
            write!(f, "public ")?;
        }
        if self.contains(Self::ACC_PRIVATE) {
            write!(f, "private ")?;
        }
        if self.contains(Self::ACC_PROTECTED) {
            write!(f, "protected ")?;
        }
        if self.contains(Self::ACC_STATIC) {
            write!(f, "static ")?;
        }
        if self.contains(Self::ACC_FINAL) {
            write!(f, "final ")?;
        }
        Ok(())
    }
}
