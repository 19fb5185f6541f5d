//! GDMA channel pairs.
//!
//! Each RX / TX channel pair is its own retention module, so a driver only
//! retains the pairs it allocated.

use super::{GDMA_BASE, PERIPH_OWNER};
use crate::config::{map_of, ns, EntryConfig, LinkConfig, LinkId, Map};

pub const GDMA_CHANNEL_RETENTION_LINK_LEN: usize = 4;
pub const GDMA_PAIRS: usize = 3;

/// Interrupt registers step by 0x10 per pair; configuration by 0xc0.
const IN_INT_ENA_CH0: u32 = 0x08;
const OUT_INT_ENA_CH0: u32 = 0x38;
const INT_STRIDE: u32 = 0x10;
const IN_CONF0_CH0: u32 = 0x70;
const OUT_CONF0_CH0: u32 = 0xd0;
const CONF_STRIDE: u32 = 0xc0;

/// `CONF0`, `CONF1`, `LINK`, `PRI` and `PERI_SEL`, from `CONF0`.
pub const GDMA_CONF_MAP: Map = map_of(&[0, 1, 4, 7, 8]);
const GDMA_CONF_WORDS: u32 = 5;

const fn pair(n: u32) -> [EntryConfig; GDMA_CHANNEL_RETENTION_LINK_LEN] {
    let in_int_ena = GDMA_BASE + IN_INT_ENA_CH0 + n * INT_STRIDE;
    let out_int_ena = GDMA_BASE + OUT_INT_ENA_CH0 + n * INT_STRIDE;
    let in_conf0 = GDMA_BASE + IN_CONF0_CH0 + n * CONF_STRIDE;
    let out_conf0 = GDMA_BASE + OUT_CONF0_CH0 + n * CONF_STRIDE;
    let ordinal = 4 * n as u8;
    [
        EntryConfig::new(
            LinkConfig::continuous(
                LinkId::new(ns::GDMA, ordinal),
                in_int_ena,
                in_int_ena,
                1,
                false,
                false,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::continuous(
                LinkId::new(ns::GDMA, ordinal + 1),
                out_int_ena,
                out_int_ena,
                1,
                false,
                false,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::addr_map(
                LinkId::new(ns::GDMA, ordinal + 2),
                in_conf0,
                in_conf0,
                GDMA_CONF_WORDS,
                false,
                false,
                GDMA_CONF_MAP,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::addr_map(
                LinkId::new(ns::GDMA, ordinal + 3),
                out_conf0,
                out_conf0,
                GDMA_CONF_WORDS,
                false,
                false,
                GDMA_CONF_MAP,
            ),
            PERIPH_OWNER,
        ),
    ]
}

pub static GDMA_CHANNEL_REGS_RETENTION: [[EntryConfig; GDMA_CHANNEL_RETENTION_LINK_LEN];
    GDMA_PAIRS] = [pair(0), pair(1), pair(2)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Body;

    #[test]
    fn pairs_are_strided() {
        let Body::AddrMap { backup, .. } = *GDMA_CHANNEL_REGS_RETENTION[2][2].config.body() else {
            panic!("expected an ADDR_MAP link");
        };
        assert_eq!(backup, GDMA_BASE + 0x70 + 2 * 0xc0);
        let Body::Continuous { backup, .. } = *GDMA_CHANNEL_REGS_RETENTION[1][1].config.body()
        else {
            panic!("expected a continuous link");
        };
        assert_eq!(backup, GDMA_BASE + 0x48);
        assert_eq!(
            GDMA_CHANNEL_REGS_RETENTION[2][3].config.id(),
            LinkId::new(ns::GDMA, 0x0b)
        );
    }
}
