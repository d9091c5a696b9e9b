//! # `objsens`
//!
//! `objsens` is the main crate of the object-sensitivity class
//! specialization project. The project is subdivided into multiple crates,
//! `objsens` acts as entry point by reexporting important structs and
//! functions from those sub-crates. Most of the reexports are done within
//! the `objsens::prelude` namespace.
//!
//! ## Library basics
//!
//! The central abstraction is the [`os_ir::Scene`]: a mutable whole-program
//! model holding classes, methods and fields. A scene can be populated from
//! a program document (see [`ownprog`]), then handed to the
//! [`os_transform::ClassCloner`] to install specialized clones of selected
//! classes:
//!
//! ```rust,no_run
//! use objsens::prelude::*;
//! use objsens::ownprog;
//!
//! let doc = ownprog::open("program.json")?;
//! let mut program = ownprog::load(&doc)?;
//! let original = program.scene.lookup_class("com/example/Widget")?.uid();
//! let mut cloner = ClassCloner::new(
//!     &mut program.scene,
//!     &mut program.api,
//!     &mut program.project,
//!     &program.reachable,
//!     &mut program.strings,
//! );
//! let handle = cloner.clone_class(original)?;
//! println!("installed {}", program.scene[handle.cloned_class()].name());
//! # Ok::<(), ObjsensError>(())
//! ```
//!
//! ## Sub-crates
//!
//!  - [`os_ir`] contains the program model: scene, classes, methods,
//!    fields, instruction bodies and access flags,
//!  - [`os_transform`] contains the class specialization transform and the
//!    registries and analysis bridges it consumes.

mod errors;

pub mod cli;
pub mod ownprog;
pub mod specialize;

pub use os_ir as ir;
pub use os_transform as transform;

/// Reexport module of commonly used structures and functions from `objsens`
/// project sub-crates:
///
/// ```rust
/// use objsens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::errors::{ObjsensError, ObjsensResult};

    pub use os_ir::{Class, Field, Method, Scene};

    pub use os_transform::{
        remove_clone_suffix, resolve_original_from_clone, ApiRegistry, ClassCloner, CloneHandle,
        ProjectRegistry, ReachableMethods, StringResults,
    };

    use clap::ArgMatches;

    pub fn init_logger(args: &ArgMatches) {
        let env = env_logger::Env::new()
            .filter_or("OBJSENS_LOG", "info")
            .write_style("OBJSENS_LOG_STYLE");

        let mut builder = env_logger::Builder::from_env(env);
        if args.get_flag("verbose") {
            builder.filter_level(log::LevelFilter::Trace);
        } else if args.get_flag("debug") {
            builder.filter_level(log::LevelFilter::Debug);
        }
        if args.get_flag("ecslog") {
            builder.format(ecs_logger::format);
        }
        builder.init();
    }
}
