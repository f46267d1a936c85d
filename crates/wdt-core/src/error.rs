//! Error types for the watchdog peripheral model.
//!
//! The core state machine itself never fails: invalid register traffic is
//! absorbed as a no-op. Errors only surface at the edges, where a bus address
//! has to be decoded or a host-supplied configuration has to be validated.

use thiserror::Error;

use crate::register::AccessWidth;

/// Errors reported by the bus adapter and configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WdtError {
    /// The byte address does not decode to any register.
    #[error("Unmapped register address: {address:#04x}")]
    UnmappedAddress {
        /// The offending byte address.
        address: u32,
    },

    /// The access is not naturally aligned for its width.
    #[error("Misaligned {width} access at {address:#04x}")]
    MisalignedAccess {
        /// The offending byte address.
        address: u32,
        /// The requested access width.
        width: AccessWidth,
    },

    /// The bus presented a size code that names no access width.
    #[error("Invalid access size code: {0:#04b}")]
    InvalidSizeCode(u8),

    /// A duration does not fit in the 32-bit countdown register.
    #[error("Countdown of {cycles} cycles does not fit in 32 bits")]
    CountdownOverflow {
        /// Requested number of clock cycles.
        cycles: u128,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl WdtError {
    /// Create an unmapped address error.
    #[must_use]
    pub fn unmapped_address(address: u32) -> Self {
        Self::UnmappedAddress { address }
    }

    /// Create a misaligned access error.
    #[must_use]
    pub fn misaligned_access(address: u32, width: AccessWidth) -> Self {
        Self::MisalignedAccess { address, width }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}

/// A specialized `Result` type for watchdog peripheral operations.
pub type WdtResult<T> = std::result::Result<T, WdtError>;
