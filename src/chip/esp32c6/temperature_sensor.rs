//! Temperature sensor, in the SAR ADC block.

use super::{APB_SARADC_BASE, PERIPH_OWNER};
use crate::config::{ns, EntryConfig, LinkConfig, LinkId};

pub const TSENS_RETENTION_LINK_LEN: usize = 1;

/// `APB_TSENS_CTRL` through `APB_TSENS_SAMPLE`.
const TSENS_CTRL: u32 = APB_SARADC_BASE + 0x58;
const TSENS_WORDS: u32 = 4;

pub static TSENS_REGS_RETENTION: [EntryConfig; TSENS_RETENTION_LINK_LEN] = [EntryConfig::new(
    LinkConfig::continuous(
        LinkId::new(ns::TSENS, 0x00),
        TSENS_CTRL,
        TSENS_CTRL,
        TSENS_WORDS,
        false,
        false,
    ),
    PERIPH_OWNER,
)];
