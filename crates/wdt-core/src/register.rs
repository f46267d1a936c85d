//! Register map and bus access primitives.
//!
//! The peripheral exposes five logical registers. COUNTDOWN is the only
//! register with backing storage; the others are command strobes (ENABLE,
//! START, TAP) or a derived view of the state (STATUS).
//!
//! | Index | Name      | Access | Width(s)  |
//! |-------|-----------|--------|-----------|
//! | 0     | ENABLE    | W      | any       |
//! | 1     | START     | W      | any       |
//! | 2     | COUNTDOWN | R/W    | 8/16/32   |
//! | 3     | TAP       | W      | any       |
//! | 4     | STATUS    | R      | any       |

use serde::{Deserialize, Serialize};

use crate::error::{WdtError, WdtResult};

/// The acknowledgment code that must be written to TAP to reload the countdown.
pub const TAP_CODE: u32 = 0xABCD;

/// Number of logical registers in the map.
pub const REGISTER_COUNT: u32 = 5;

/// Logical register selected by a bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    /// Nonzero enables the watchdog, zero disables it and stops the countdown.
    Enable = 0,
    /// Starts the countdown from the configured reload value.
    Start = 1,
    /// 32-bit reload value.
    Countdown = 2,
    /// Acknowledgment strobe.
    Tap = 3,
    /// Bit-packed state snapshot.
    Status = 4,
}

impl Register {
    /// All registers in address order.
    pub const ALL: [Self; 5] = [
        Self::Enable,
        Self::Start,
        Self::Countdown,
        Self::Tap,
        Self::Status,
    ];

    /// Look up a register by its index in the map.
    #[must_use]
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Enable),
            1 => Some(Self::Start),
            2 => Some(Self::Countdown),
            3 => Some(Self::Tap),
            4 => Some(Self::Status),
            _ => None,
        }
    }

    /// Index of this register in the map.
    #[must_use]
    pub fn index(self) -> u32 {
        u32::from(self as u8)
    }

    /// Register name as it appears in the register map.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "ENABLE",
            Self::Start => "START",
            Self::Countdown => "COUNTDOWN",
            Self::Tap => "TAP",
            Self::Status => "STATUS",
        }
    }
}

impl core::fmt::Display for Register {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Width of a single bus transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessWidth {
    /// 8-bit transfer.
    Byte,
    /// 16-bit transfer.
    HalfWord,
    /// 32-bit transfer.
    Word,
}

impl AccessWidth {
    /// Decode the 2-bit transfer size code driven by the host bus.
    ///
    /// `0b00` is a byte, `0b01` a half-word and `0b10` a word. `0b11` means
    /// no transfer is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`WdtError::InvalidSizeCode`] for any other code.
    pub fn from_size_code(code: u8) -> WdtResult<Self> {
        match code {
            0b00 => Ok(Self::Byte),
            0b01 => Ok(Self::HalfWord),
            0b10 => Ok(Self::Word),
            other => Err(WdtError::InvalidSizeCode(other)),
        }
    }

    /// The 2-bit size code for this width.
    #[must_use]
    pub fn size_code(self) -> u8 {
        match self {
            Self::Byte => 0b00,
            Self::HalfWord => 0b01,
            Self::Word => 0b10,
        }
    }

    /// Number of bytes moved by one transfer.
    #[must_use]
    pub fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::HalfWord => 2,
            Self::Word => 4,
        }
    }

    /// Data mask for a transfer of this width, aligned to bit 0.
    #[must_use]
    pub fn mask(self) -> u32 {
        match self {
            Self::Byte => 0x0000_00FF,
            Self::HalfWord => 0x0000_FFFF,
            Self::Word => 0xFFFF_FFFF,
        }
    }

    /// Number of data bits in one transfer.
    #[must_use]
    pub fn bits(self) -> u32 {
        self.bytes().saturating_mul(8)
    }
}

impl core::fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// A decoded access: which register, how wide, and which byte lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterAccess {
    /// Target register.
    pub register: Register,
    /// Transfer width.
    pub width: AccessWidth,
    /// Byte offset of the transfer inside the 32-bit register (0..=3).
    pub lane: u32,
}

impl RegisterAccess {
    /// Access of `width` to the low lane of `register`.
    #[must_use]
    pub fn new(register: Register, width: AccessWidth) -> Self {
        Self {
            register,
            width,
            lane: 0,
        }
    }

    /// Access of `width` at byte offset `lane` of `register`.
    ///
    /// Returns `None` when the transfer would run past the end of the
    /// register or is not naturally aligned.
    #[must_use]
    pub fn at_lane(register: Register, width: AccessWidth, lane: u32) -> Option<Self> {
        let aligned = lane.is_multiple_of(width.bytes());
        let fits = lane.checked_add(width.bytes()).is_some_and(|end| end <= 4);
        (aligned && fits).then_some(Self {
            register,
            width,
            lane,
        })
    }

    /// Bit position of the lane inside the register.
    #[must_use]
    pub fn shift(&self) -> u32 {
        self.lane.saturating_mul(8)
    }

    /// Register bits covered by this access.
    #[must_use]
    pub fn lane_mask(&self) -> u32 {
        self.width.mask().checked_shl(self.shift()).unwrap_or(0)
    }

    /// Merge `value` into `current`, touching only the addressed lane.
    ///
    /// Data bits above the access width are dropped.
    #[must_use]
    pub fn merge(&self, current: u32, value: u32) -> u32 {
        let mask = self.lane_mask();
        let placed = (value & self.width.mask())
            .checked_shl(self.shift())
            .unwrap_or(0);
        (current & !mask) | (placed & mask)
    }

    /// Extract the addressed lane of `register_value`, aligned to bit 0.
    #[must_use]
    pub fn extract(&self, register_value: u32) -> u32 {
        register_value.checked_shr(self.shift()).unwrap_or(0) & self.width.mask()
    }

    /// The value the register sees on its data lines for a write of `value`.
    ///
    /// Strobe registers compare against this so that a narrow write cannot
    /// alias a wider code.
    #[must_use]
    pub fn write_data(&self, value: u32) -> u32 {
        self.merge(0, value)
    }
}
