//! Transform errors definition.

use os_ir::IrError;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Ir(#[from] IrError),

    #[error("class cannot be specialized: {0}")]
    NotCloneable(String),

    #[error("method not found for signature: {0}")]
    MethodNotFoundForSignature(String),

    #[error("duplicated body shape mismatch in {0}")]
    BodyShapeMismatch(String),
}
