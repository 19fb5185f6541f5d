//! ESP32-P4 retention tables.

pub mod iomux;
pub mod jpeg;
pub mod timer;

use crate::config::{entry, Module, Owner, RetentionInfo};

pub const JPEG_BASE: u32 = 0x5008_6000;
pub const TIMG0_BASE: u32 = 0x500c_2000;
pub const TIMG1_BASE: u32 = 0x500c_3000;
pub const IO_MUX_BASE: u32 = 0x500e_1000;

/// The chip has no PHY; everything is retained by entry 0.
pub const PHY_SUPPORTED: bool = false;

pub const SYSTEM_OWNER: Owner = if PHY_SUPPORTED {
    Owner::of(&[0, 2])
} else {
    entry(0)
};

pub const PERIPH_OWNER: Owner = entry(0);

/// Every retention module on this chip.
pub static RETENTION_INFO: &[RetentionInfo] = &[
    RetentionInfo {
        module: Module::TimerGroup0,
        name: "timg0",
        links: &timer::TG_REGS_RETENTION[0],
    },
    RetentionInfo {
        module: Module::TimerGroup1,
        name: "timg1",
        links: &timer::TG_REGS_RETENTION[1],
    },
    RetentionInfo {
        module: Module::IoMux,
        name: "iomux",
        links: &iomux::IOMUX_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::Jpeg,
        name: "jpeg",
        links: &jpeg::JPEG_REGS_RETENTION,
    },
];
