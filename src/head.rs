//! REGDMA link header word.
//!
//! ```text
//!  31   30     29     28     27..20  19..16  15..10  9..0
//! EOF SKIP_B SKIP_R BRANCH  (res.)   MODE   (res.)  LENGTH
//! ```

use crate::ral::regdma::HEAD::{BRANCH, EOF, LENGTH, MODE, SKIP_B, SKIP_R};
use crate::{Error, Result};

/// The operation a link performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Mode {
    /// Copy `length` contiguous words.
    Continuous = MODE::RW::CONTINUOUS,
    /// Copy the words selected by a 128-bit map.
    AddrMap = MODE::RW::ADDR_MAP,
    /// Masked write of a single register.
    Write = MODE::RW::WRITE,
    /// Poll a register until its masked value matches.
    Wait = MODE::RW::WAIT,
}

impl Mode {
    /// Decode the raw mode field.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            MODE::RW::CONTINUOUS => Some(Mode::Continuous),
            MODE::RW::ADDR_MAP => Some(Mode::AddrMap),
            MODE::RW::WRITE => Some(Mode::Write),
            MODE::RW::WAIT => Some(Mode::Wait),
            _ => None,
        }
    }

    /// Returns `true` if the link copies registers to / from memory.
    pub const fn is_copy(self) -> bool {
        matches!(self, Mode::Continuous | Mode::AddrMap)
    }
}

const fn field(value: u32, offset: u32, mask: u32) -> u32 {
    (value << offset) & mask
}

const fn flag(set: bool, mask: u32) -> u32 {
    if set {
        mask
    } else {
        0
    }
}

/// A link header.
///
/// The end-of-list flag is never set by the constructors. It's applied when
/// a chain is built, on whichever node ends up last.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Head(u32);

impl Head {
    /// Largest value of the length field.
    pub const MAX_LENGTH: u32 = LENGTH::mask >> LENGTH::offset;

    /// Create a header.
    ///
    /// # Panics
    ///
    /// Panics if `length` doesn't fit in the 10-bit length field. In a
    /// `const` or `static` initializer, this is a compile-time error.
    pub const fn new(length: u32, mode: Mode, branch: bool, skip_r: bool, skip_b: bool) -> Self {
        match Self::try_new(length, mode, branch, skip_r, skip_b) {
            Ok(head) => head,
            Err(_) => panic!("REGDMA link length does not fit in the header"),
        }
    }

    /// Create a header, or return [`Error::LengthOverflow`] if `length`
    /// doesn't fit in the length field.
    pub const fn try_new(
        length: u32,
        mode: Mode,
        branch: bool,
        skip_r: bool,
        skip_b: bool,
    ) -> Result<Self> {
        if length > Self::MAX_LENGTH {
            return Err(Error::LengthOverflow { length });
        }
        Ok(Head(
            field(length, LENGTH::offset, LENGTH::mask)
                | field(mode as u32, MODE::offset, MODE::mask)
                | flag(branch, BRANCH::mask)
                | flag(skip_r, SKIP_R::mask)
                | flag(skip_b, SKIP_B::mask),
        ))
    }

    /// Wrap a raw header word. Nothing is checked until the fields are read.
    pub const fn from_bits(bits: u32) -> Self {
        Head(bits)
    }

    /// The raw header word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Word count.
    pub const fn length(self) -> u32 {
        (self.0 & LENGTH::mask) >> LENGTH::offset
    }

    pub const fn mode(self) -> Result<Mode> {
        match Mode::from_raw((self.0 & MODE::mask) >> MODE::offset) {
            Some(mode) => Ok(mode),
            None => Err(Error::InvalidMode { bits: self.0 }),
        }
    }

    pub const fn is_branch(self) -> bool {
        self.0 & BRANCH::mask != 0
    }

    /// Skipped during the restore pass.
    pub const fn skip_restore(self) -> bool {
        self.0 & SKIP_R::mask != 0
    }

    /// Skipped during the backup pass.
    pub const fn skip_backup(self) -> bool {
        self.0 & SKIP_B::mask != 0
    }

    pub const fn is_eof(self) -> bool {
        self.0 & EOF::mask != 0
    }

    /// Returns a copy of this header with the end-of-list flag set to `eof`.
    pub const fn with_eof(self, eof: bool) -> Self {
        Head((self.0 & !EOF::mask) | flag(eof, EOF::mask))
    }
}

impl core::fmt::Debug for Head {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Head")
            .field("length", &self.length())
            .field("mode", &self.mode())
            .field("branch", &self.is_branch())
            .field("skip_r", &self.skip_restore())
            .field("skip_b", &self.skip_backup())
            .field("eof", &self.is_eof())
            .finish()
    }
}
