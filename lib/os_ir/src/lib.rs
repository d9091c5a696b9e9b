//! This crate provides the mutable whole-program model used by the
//! `objsens` project: classes, methods, fields and instruction bodies,
//! held together in a [`Scene`] that transforms can query and rewrite.

pub mod class;
pub mod errors;
pub mod field;
pub mod flags;
pub mod instrs;
pub mod method;
pub mod scene;
pub mod types;
pub mod uids;

pub use class::Class;
pub use errors::{IrError, IrResult};
pub use field::Field;
pub use flags::{ClassFlags, FieldFlags, MethodFlags};
pub use instrs::{Body, Instr, InvokeInstr, InvokeKind, ValueBox, ValueId};
pub use method::{Method, MethodDescr};
pub use scene::{Scene, JAVA_LANG_OBJECT};
pub use types::Type;
pub use uids::{ClassUid, FieldUid, MethodUid};
