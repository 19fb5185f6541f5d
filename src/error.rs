//! Retention errors.

use crate::config::LinkId;

/// Errors from decoding, validating, building, or walking retention links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A header's mode field isn't one of the four link modes.
    InvalidMode {
        /// Raw header word.
        bits: u32,
    },
    /// A table doesn't have its declared number of links.
    LengthMismatch { expected: usize, actual: usize },
    /// A word count that doesn't fit in the 10-bit header field.
    LengthOverflow { length: u32 },
    /// A copy link with no words, or a WRITE / WAIT link with some.
    InvalidLength { id: LinkId, length: u32 },
    /// An ADDR_MAP bitmap selects more words than the link copies.
    MapOverflow {
        id: LinkId,
        selected: u32,
        length: u32,
    },
    /// The owner bitmap is empty, or names an entry that doesn't exist.
    InvalidOwner { id: LinkId, owner: u32 },
    /// A retention entry index that doesn't exist.
    InvalidEntry { entry: u32 },
    /// A register address that isn't word aligned.
    Unaligned { id: LinkId, addr: u32 },
    /// A copy link's words run past the end of the address space.
    AddressOverflow { id: LinkId, addr: u32 },
    /// Not enough nodes to hold an entry's chain.
    OutOfNodes { needed: usize, available: usize },
    /// Not enough save memory for an entry's copy links.
    OutOfMemory { needed: usize, available: usize },
    /// A WAIT link never saw its expected value.
    WaitTimeout { id: LinkId, addr: u32 },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::InvalidMode { bits } => write!(f, "invalid link mode in header {bits:#010x}"),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "table has {actual} links, expected {expected}")
            }
            Error::LengthOverflow { length } => {
                write!(f, "{length} words do not fit in a link header")
            }
            Error::InvalidLength { id, length } => {
                write!(f, "link {id} has an invalid length {length} for its mode")
            }
            Error::MapOverflow {
                id,
                selected,
                length,
            } => write!(f, "link {id} maps {selected} words but copies {length}"),
            Error::InvalidOwner { id, owner } => {
                write!(f, "link {id} has an invalid owner bitmap {owner:#x}")
            }
            Error::InvalidEntry { entry } => write!(f, "retention entry {entry} does not exist"),
            Error::Unaligned { id, addr } => {
                write!(f, "link {id} targets unaligned address {addr:#010x}")
            }
            Error::AddressOverflow { id, addr } => {
                write!(f, "link {id} runs past the address space from {addr:#010x}")
            }
            Error::OutOfNodes { needed, available } => {
                write!(f, "chain needs {needed} nodes, only {available} available")
            }
            Error::OutOfMemory { needed, available } => {
                write!(f, "chain needs {needed} words of memory, only {available} available")
            }
            Error::WaitTimeout { id, addr } => {
                write!(f, "link {id} timed out waiting on {addr:#010x}")
            }
        }
    }
}
