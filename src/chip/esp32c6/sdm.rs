//! Sigma-delta modulators.

use super::{GPIO_EXT_BASE, PERIPH_OWNER};
use crate::config::{map_of, ns, EntryConfig, LinkConfig, LinkId, Map};

pub const SDM_RETENTION_LINK_LEN: usize = 1;

/// The four channel registers and `SIGMADELTA_MISC`.
pub const SDM_RETENTION_MAP: Map = map_of(&[0, 1, 2, 3, 9]);

pub static SDM_REGS_RETENTION: [EntryConfig; SDM_RETENTION_LINK_LEN] = [EntryConfig::new(
    LinkConfig::addr_map(
        LinkId::new(ns::SDM, 0x00),
        GPIO_EXT_BASE,
        GPIO_EXT_BASE,
        5,
        false,
        false,
        SDM_RETENTION_MAP,
    ),
    PERIPH_OWNER,
)];
