//! IO MUX pad configuration.

use super::{IO_MUX_BASE, SYSTEM_OWNER};
use crate::config::{ns, EntryConfig, LinkConfig, LinkId};
use crate::ral::{io_mux, reg_addr};

pub const IOMUX_RETENTION_LINK_LEN: usize = 1;

const GPIO0: u32 = reg_addr!(io_mux::RegisterBlock, IO_MUX_BASE, GPIO);

/// Every pad register, skipping the reserved first word and `DATE`.
pub static IOMUX_REGS_RETENTION: [EntryConfig; IOMUX_RETENTION_LINK_LEN] = [EntryConfig::new(
    LinkConfig::continuous(
        LinkId::new(ns::IOMUX, 0x00),
        GPIO0,
        GPIO0,
        io_mux::PADS as u32,
        false,
        false,
    ),
    SYSTEM_OWNER,
)];
