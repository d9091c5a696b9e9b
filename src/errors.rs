//! Global error handling.
//!
//! Each sub-crate of the project defines its own error type.
//! Their types can be unified, for example in a main function,
//! when winding results at the top-level.

use os_ir::IrError;
use os_transform::TransformError;
use std::io;
use thiserror::Error;

/// An alias for result that can be an [`ObjsensError`].
pub type ObjsensResult<T> = Result<T, ObjsensError>;

/// The main error type for error winding at the top-level.
/// It mainly consists of transparent wrappers over error types that
/// are defined in dependencies.
#[derive(Debug, Error)]
pub enum ObjsensError {
    /// Custom error for reporting bad command line arguments usage.
    #[error("bad arguments: {0}")]
    BadArguments(String),

    /// Custom error for reporting malformed program documents.
    #[error("bad program document: {0}")]
    BadDocument(String),

    /// Error that can be returned from [I/O operations](std::io).
    #[error(transparent)]
    IO(#[from] io::Error),

    /// Error that can be returned from program document parsing.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error that can be returned from [`os_ir`] functions.
    #[error(transparent)]
    Ir(#[from] IrError),

    /// Error that can be returned from [`os_transform`] functions.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
