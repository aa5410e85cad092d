use thiserror::Error;

use crate::extensions::ExtensionKind;

/// Errors raised while talking to an attachment.
///
/// `E` is the error type of the underlying bus transport.
#[derive(Debug, Error)]
pub enum AttachmentError<E> {
    /// The bus transport rejected a write or read.
    #[error("bus transfer failed: {0:?}")]
    Bus(E),
    /// Identification found a different family than the one this attachment is fixed to.
    #[error("attachment family changed from {expected:?} to {found:?}")]
    FamilyChanged {
        expected: ExtensionKind,
        found: ExtensionKind,
    },
    /// The operation needs an identified attachment.
    #[error("attachment has not been identified")]
    Unidentified,
    /// The operation is not available for this family.
    #[error("operation not supported by {0:?}")]
    Unsupported(ExtensionKind),
    /// The calibration block failed its checksum.
    #[error("calibration checksum mismatch")]
    InvalidChecksum,
}

pub type AttachmentResult<T, E> = Result<T, AttachmentError<E>>;
