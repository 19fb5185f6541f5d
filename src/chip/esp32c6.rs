//! ESP32-C6 retention tables.

pub mod etm;
pub mod gdma;
pub mod i2c;
pub mod parlio;
pub mod sdm;
pub mod system;
pub mod temperature_sensor;
pub mod timer;
pub mod twai;
pub mod uart;

use crate::config::{entry, Module, Owner, RetentionInfo};

pub const UART0_BASE: u32 = 0x6000_0000;
pub const UART1_BASE: u32 = 0x6000_1000;
pub const SPI0_BASE: u32 = 0x6000_2000;
pub const I2C0_BASE: u32 = 0x6000_4000;
pub const TIMG0_BASE: u32 = 0x6000_8000;
pub const TIMG1_BASE: u32 = 0x6000_9000;
pub const SYSTIMER_BASE: u32 = 0x6000_a000;
pub const TWAI0_BASE: u32 = 0x6000_b000;
pub const TWAI1_BASE: u32 = 0x6000_d000;
pub const APB_SARADC_BASE: u32 = 0x6000_e000;
pub const INTMTX_BASE: u32 = 0x6001_0000;
pub const ETM_BASE: u32 = 0x6001_3000;
pub const PARL_IO_BASE: u32 = 0x6001_5000;
pub const GDMA_BASE: u32 = 0x6008_0000;
pub const IO_MUX_BASE: u32 = 0x6009_0000;
pub const GPIO_BASE: u32 = 0x6009_1000;
pub const GPIO_EXT_BASE: u32 = 0x6009_1f00;
pub const TEE_BASE: u32 = 0x6009_8000;
pub const HP_APM_BASE: u32 = 0x6009_9000;
pub const INTPRI_BASE: u32 = 0x600c_5000;

/// The chip has a PHY, and so a PHY-adjacent retention entry.
pub const PHY_SUPPORTED: bool = true;

/// Entries that retain system peripherals: full retention, plus entry 2
/// when there's a PHY.
pub const SYSTEM_OWNER: Owner = if PHY_SUPPORTED {
    Owner::of(&[0, 2])
} else {
    entry(0)
};

/// Entries that retain driver-managed peripherals.
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
        module: Module::Systimer,
        name: "systimer",
        links: &system::SYSTIMER_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::IntMtx,
        name: "intmtx",
        links: &system::INTMTX_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::TeeApm,
        name: "tee_apm",
        links: &system::TEE_APM_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::IoMux,
        name: "iomux",
        links: &system::IOMUX_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::SpiMem,
        name: "spimem",
        links: &system::SPIMEM_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::Uart0,
        name: "uart0",
        links: &uart::UART_REGS_RETENTION[0],
    },
    RetentionInfo {
        module: Module::Uart1,
        name: "uart1",
        links: &uart::UART_REGS_RETENTION[1],
    },
    RetentionInfo {
        module: Module::I2c0,
        name: "i2c0",
        links: &i2c::I2C0_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::Twai0,
        name: "twai0",
        links: &twai::TWAI_REGS_RETENTION[0],
    },
    RetentionInfo {
        module: Module::Twai1,
        name: "twai1",
        links: &twai::TWAI_REGS_RETENTION[1],
    },
    RetentionInfo {
        module: Module::Sdm,
        name: "sdm",
        links: &sdm::SDM_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::Etm,
        name: "etm",
        links: &etm::ETM_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::GdmaCh0,
        name: "gdma_ch0",
        links: &gdma::GDMA_CHANNEL_REGS_RETENTION[0],
    },
    RetentionInfo {
        module: Module::GdmaCh1,
        name: "gdma_ch1",
        links: &gdma::GDMA_CHANNEL_REGS_RETENTION[1],
    },
    RetentionInfo {
        module: Module::GdmaCh2,
        name: "gdma_ch2",
        links: &gdma::GDMA_CHANNEL_REGS_RETENTION[2],
    },
    RetentionInfo {
        module: Module::Parlio,
        name: "parlio",
        links: &parlio::PARLIO_REGS_RETENTION,
    },
    RetentionInfo {
        module: Module::Tsens,
        name: "tsens",
        links: &temperature_sensor::TSENS_REGS_RETENTION,
    },
];
