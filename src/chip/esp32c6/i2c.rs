//! I2C controller 0.
//!
//! The controller is reset after its configuration is back, then the
//! configuration is committed to the SCL clock domain.

use super::{I2C0_BASE, PERIPH_OWNER};
use crate::config::{ns, EntryConfig, LinkConfig, LinkId, Map};

pub const I2C_RETENTION_LINK_LEN: usize = 5;

const CTR: u32 = I2C0_BASE + 0x04;
const FSM_RST: u32 = 1 << 10;
/// Self-clearing.
const CONF_UPGATE: u32 = 1 << 11;

/// Timing, control and filter registers from `SCL_LOW_PERIOD` on.
pub const I2C_RETENTION_MAP: Map = [0xc03f_345b, 0x3, 0, 0];
const I2C_RETENTION_WORDS: u32 = 18;

const fn link(config: LinkConfig) -> EntryConfig {
    EntryConfig::new(config, PERIPH_OWNER)
}

const fn id(ordinal: u8) -> LinkId {
    LinkId::new(ns::I2C, ordinal)
}

pub static I2C0_REGS_RETENTION: [EntryConfig; I2C_RETENTION_LINK_LEN] = [
    link(LinkConfig::addr_map(
        id(0x00),
        I2C0_BASE,
        I2C0_BASE,
        I2C_RETENTION_WORDS,
        false,
        false,
        I2C_RETENTION_MAP,
    )),
    link(LinkConfig::write(id(0x01), CTR, FSM_RST, FSM_RST, true, false)),
    link(LinkConfig::write(id(0x02), CTR, 0, FSM_RST, true, false)),
    link(LinkConfig::write(id(0x03), CTR, CONF_UPGATE, CONF_UPGATE, true, false)),
    link(LinkConfig::wait(id(0x04), CTR, 0, CONF_UPGATE, true, false)),
];
