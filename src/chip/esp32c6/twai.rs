//! TWAI (CAN) controllers.
//!
//! Most TWAI registers only accept writes in reset mode. Restore enters
//! reset mode, restores the configuration, then restores the saved mode
//! register last.

use super::{PERIPH_OWNER, TWAI0_BASE, TWAI1_BASE};
use crate::config::{map_of, ns, EntryConfig, LinkConfig, LinkId, Map};

pub const TWAI_RETENTION_LINK_LEN: usize = 3;

const MODE: u32 = 0x00;
const RESET_MODE: u32 = 1 << 0;
/// `TWAI_INTERRUPT_ENABLE`; the retained range starts here.
const INT_ENA: u32 = 0x10;

/// Word offsets from `INT_ENA`: interrupt enable, bus timing, error
/// warning limit, error counters, the acceptance filter, clock divider and
/// software standby.
pub const TWAI_RETENTION_MAP: Map = map_of(&[
    0, 2, 3, 9, 12, 13, 14, 15, 16, 17, 18, 19, 27, 28, 29, 30, 31, 34, 35,
]);
const TWAI_RETENTION_WORDS: u32 = 19;

const fn twai(base: u32) -> [EntryConfig; TWAI_RETENTION_LINK_LEN] {
    [
        EntryConfig::new(
            LinkConfig::write(
                LinkId::new(ns::TWAI, 0x00),
                base + MODE,
                RESET_MODE,
                RESET_MODE,
                true,
                false,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::addr_map(
                LinkId::new(ns::TWAI, 0x01),
                base + INT_ENA,
                base + INT_ENA,
                TWAI_RETENTION_WORDS,
                false,
                false,
                TWAI_RETENTION_MAP,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::continuous(
                LinkId::new(ns::TWAI, 0x02),
                base + MODE,
                base + MODE,
                1,
                false,
                false,
            ),
            PERIPH_OWNER,
        ),
    ]
}

pub static TWAI_REGS_RETENTION: [[EntryConfig; TWAI_RETENTION_LINK_LEN]; 2] =
    [twai(TWAI0_BASE), twai(TWAI1_BASE)];
