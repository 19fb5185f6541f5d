//! Structural checks for retention tables.
//!
//! The link constructors already reject most mistakes while a table is being
//! evaluated. These checks cover what they can't see: tables assembled at
//! runtime, owner bitmaps built with [`Owner::from_bits`](crate::Owner::from_bits),
//! and table lengths against their declared link counts.

use crate::config::{map_count, map_last, Body, EntryConfig};
use crate::head::Head;
use crate::ral::regdma::ENTRY_NUM;
use crate::{Error, Result};

const OWNER_MASK: u32 = (1 << ENTRY_NUM) - 1;

const fn check_addr(link: &EntryConfig, addr: u32) -> Result<()> {
    if addr % 4 != 0 {
        Err(Error::Unaligned {
            id: link.config.id(),
            addr,
        })
    } else {
        Ok(())
    }
}

/// Check that the word `last` words above `addr` is still addressable.
const fn check_span(link: &EntryConfig, addr: u32, last: u32) -> Result<()> {
    match addr.checked_add(4 * last) {
        Some(_) => Ok(()),
        None => Err(Error::AddressOverflow {
            id: link.config.id(),
            addr,
        }),
    }
}

/// Check a single link.
pub const fn check_link(link: &EntryConfig) -> Result<()> {
    let id = link.config.id();
    let length = link.config.head().length();
    let owner = link.owner.bits();
    if owner == 0 || owner & !OWNER_MASK != 0 {
        return Err(Error::InvalidOwner { id, owner });
    }
    match *link.config.body() {
        Body::Continuous { backup, restore } => {
            if length == 0 || length > Head::MAX_LENGTH {
                return Err(Error::InvalidLength { id, length });
            }
            if let Err(err) = check_addr(link, backup) {
                return Err(err);
            }
            if let Err(err) = check_addr(link, restore) {
                return Err(err);
            }
            if let Err(err) = check_span(link, backup, length - 1) {
                return Err(err);
            }
            check_span(link, restore, length - 1)
        }
        Body::AddrMap {
            backup,
            restore,
            map,
        } => {
            if length == 0 || length > Head::MAX_LENGTH {
                return Err(Error::InvalidLength { id, length });
            }
            let selected = map_count(&map);
            if selected > length {
                return Err(Error::MapOverflow {
                    id,
                    selected,
                    length,
                });
            }
            if let Err(err) = check_addr(link, backup) {
                return Err(err);
            }
            if let Err(err) = check_addr(link, restore) {
                return Err(err);
            }
            let Some(last) = map_last(&map) else {
                return Ok(());
            };
            if let Err(err) = check_span(link, backup, last) {
                return Err(err);
            }
            check_span(link, restore, last)
        }
        Body::Write { addr, .. } | Body::Wait { addr, .. } => {
            if length != 0 {
                return Err(Error::InvalidLength { id, length });
            }
            check_addr(link, addr)
        }
    }
}

/// Check every link of a table, in order, and return the first failure.
pub const fn check_table(table: &[EntryConfig]) -> Result<()> {
    let mut i = 0;
    while i < table.len() {
        if let Err(err) = check_link(&table[i]) {
            return Err(err);
        }
        i += 1;
    }
    Ok(())
}

/// Check a table against its declared link count, then check its links.
pub const fn check_table_len(table: &[EntryConfig], expected: usize) -> Result<()> {
    if table.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: table.len(),
        });
    }
    check_table(table)
}

/// Runtime form of [`check_table`] that also reports failures through the
/// crate's logger.
pub fn validate(table: &[EntryConfig]) -> Result<()> {
    check_table(table).inspect_err(|err| {
        if let Some(id) = failing_id(err) {
            warn!("regdma: rejected link {:#x}", id);
        }
    })
}

fn failing_id(err: &Error) -> Option<u16> {
    match *err {
        Error::InvalidLength { id, .. }
        | Error::MapOverflow { id, .. }
        | Error::InvalidOwner { id, .. }
        | Error::Unaligned { id, .. }
        | Error::AddressOverflow { id, .. } => Some(id.raw()),
        _ => None,
    }
}

/// Words of save memory entry `entry` needs to run `table`.
pub const fn retention_words(table: &[EntryConfig], entry: u32) -> usize {
    let mut words = 0;
    let mut i = 0;
    while i < table.len() {
        if table[i].owner.contains(entry) {
            words += table[i].config.words();
        }
        i += 1;
    }
    words
}

/// Number of links entry `entry` runs from `table`.
pub const fn entry_links(table: &[EntryConfig], entry: u32) -> usize {
    let mut links = 0;
    let mut i = 0;
    while i < table.len() {
        if table[i].owner.contains(entry) {
            links += 1;
        }
        i += 1;
    }
    links
}
