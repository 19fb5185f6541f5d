//! Timer groups.

use super::{SYSTEM_OWNER, TIMG0_BASE, TIMG1_BASE};
use crate::chip::{timer_group, TIMG_RETENTION_LINK_LEN};
use crate::config::{ns, EntryConfig};

pub static TG_REGS_RETENTION: [[EntryConfig; TIMG_RETENTION_LINK_LEN]; 2] = [
    timer_group(TIMG0_BASE, ns::TG0_WDT, ns::TG0_TIMER, SYSTEM_OWNER),
    timer_group(TIMG1_BASE, ns::TG1_WDT, ns::TG1_TIMER, SYSTEM_OWNER),
];
