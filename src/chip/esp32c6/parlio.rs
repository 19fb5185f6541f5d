//! Parallel IO.

use super::{PARL_IO_BASE, PERIPH_OWNER};
use crate::config::{map_of, ns, EntryConfig, LinkConfig, LinkId, Map};
use crate::ral::{parl_io, reg_addr, word_offset};

pub const PARLIO_RETENTION_LINK_LEN: usize = 3;

use crate::ral::parl_io::RegisterBlock as ParlIo;

/// Configuration, interrupt enable and clock registers, from `RX_MODE_CFG`.
pub const PARLIO_RETENTION_MAP: Map = map_of(&[
    word_offset!(ParlIo, RX_MODE_CFG, RX_MODE_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, RX_DATA_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, RX_GENRL_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, TX_DATA_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, TX_GENRL_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, FIFO_CFG),
    word_offset!(ParlIo, RX_MODE_CFG, INT_ENA),
    word_offset!(ParlIo, RX_MODE_CFG, CLK),
]);
const PARLIO_RETENTION_WORDS: u32 = 8;

const RX_MODE_CFG: u32 = reg_addr!(ParlIo, PARL_IO_BASE, RX_MODE_CFG);
const REG_UPDATE: u32 = reg_addr!(ParlIo, PARL_IO_BASE, REG_UPDATE);
const RX_REG_UPDATE: u32 = parl_io::REG_UPDATE::RX_REG_UPDATE::mask;

pub static PARLIO_REGS_RETENTION: [EntryConfig; PARLIO_RETENTION_LINK_LEN] = [
    EntryConfig::new(
        LinkConfig::addr_map(
            LinkId::new(ns::PARLIO, 0x00),
            RX_MODE_CFG,
            RX_MODE_CFG,
            PARLIO_RETENTION_WORDS,
            false,
            false,
            PARLIO_RETENTION_MAP,
        ),
        PERIPH_OWNER,
    ),
    EntryConfig::new(
        LinkConfig::write(
            LinkId::new(ns::PARLIO, 0x01),
            REG_UPDATE,
            RX_REG_UPDATE,
            RX_REG_UPDATE,
            true,
            false,
        ),
        PERIPH_OWNER,
    ),
    EntryConfig::new(
        LinkConfig::wait(
            LinkId::new(ns::PARLIO, 0x02),
            REG_UPDATE,
            0,
            RX_REG_UPDATE,
            true,
            false,
        ),
        PERIPH_OWNER,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{map_contains, map_count};

    #[test]
    fn map_follows_register_layout() {
        assert_eq!(map_count(&PARLIO_RETENTION_MAP), PARLIO_RETENTION_WORDS);
        assert!(map_contains(&PARLIO_RETENTION_MAP, 0x120 / 4));
        assert!(map_contains(&PARLIO_RETENTION_MAP, 0x28 / 4));
        assert!(!map_contains(&PARLIO_RETENTION_MAP, 0x20 / 4), "REG_UPDATE");
        assert_eq!(REG_UPDATE, PARL_IO_BASE + 0x20);
    }
}
