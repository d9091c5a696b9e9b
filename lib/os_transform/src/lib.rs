//! This crate provides the class specialization transform of the `objsens`
//! project: given a class shared by many allocation sites, it installs a
//! fresh subclass clone in the scene so that a points-to analysis can
//! distinguish behavior per clone instead of merging all instances.

pub mod cloner;
pub mod errors;
pub mod pta;
pub mod registry;
pub mod signature;
pub mod strings;

pub use cloner::{
    remove_clone_suffix, resolve_original_from_clone, ClassCloner, CloneHandle, CLONE_POSTFIX,
};
pub use errors::{TransformError, TransformResult};
pub use pta::ReachableMethods;
pub use registry::{ApiRegistry, MethodClassification, ProjectRegistry};
pub use strings::StringResults;
