//! Event task matrix.

use super::{ETM_BASE, PERIPH_OWNER};
use crate::config::{ns, EntryConfig, LinkConfig, LinkId};

pub const ETM_RETENTION_LINK_LEN: usize = 4;

const CLK_EN: u32 = ETM_BASE + 0x1a8;
/// `CH0_EVT_ID`. Event and task IDs alternate, two words per channel.
const CH0_EVT_ID: u32 = ETM_BASE + 0x18;
const CHANNELS: u32 = 50;

/// Channel enable status. The status registers are read-only; enables are
/// restored through the matching `*_SET` registers, one word up.
const CH_ENA_AD0: u32 = ETM_BASE;
const CH_ENA_AD0_SET: u32 = ETM_BASE + 0x04;
const CH_ENA_AD1: u32 = ETM_BASE + 0x0c;
const CH_ENA_AD1_SET: u32 = ETM_BASE + 0x10;

const fn link(config: LinkConfig) -> EntryConfig {
    EntryConfig::new(config, PERIPH_OWNER)
}

pub static ETM_REGS_RETENTION: [EntryConfig; ETM_RETENTION_LINK_LEN] = [
    link(LinkConfig::continuous(
        LinkId::new(ns::ETM, 0x00),
        CLK_EN,
        CLK_EN,
        1,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::ETM, 0x01),
        CH0_EVT_ID,
        CH0_EVT_ID,
        2 * CHANNELS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::ETM, 0x02),
        CH_ENA_AD0,
        CH_ENA_AD0_SET,
        1,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::ETM, 0x03),
        CH_ENA_AD1,
        CH_ENA_AD1_SET,
        1,
        false,
        false,
    )),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Body;

    #[test]
    fn enables_restore_through_set_registers() {
        for link in &ETM_REGS_RETENTION[2..] {
            let Body::Continuous { backup, restore } = *link.config.body() else {
                panic!("expected a continuous link");
            };
            assert_eq!(restore, backup + 4);
        }
        assert_eq!(ETM_REGS_RETENTION[1].config.head().length(), 100);
    }
}
