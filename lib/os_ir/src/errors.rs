//! Program model errors definition.

use thiserror::Error;

pub type IrResult<T> = Result<T, IrError>;

#[derive(Debug, Error)]
pub enum IrError {
    #[error("inheritance cycle through class: {0}")]
    CyclicHierarchy(String),

    #[error("class not found: {0}")]
    ClassNotFound(String),

    #[error("class already in scene: {0}")]
    DuplicateClass(String),

    #[error("method not found: {0}")]
    MethodNotFound(String),

    #[error("ambiguous method name: {0}")]
    AmbiguousMethod(String),

    #[error("the method has no body")]
    NoBody,

    #[error("unknown type descriptor: {0}")]
    BadType(String),
}
