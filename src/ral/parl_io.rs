//! Parallel IO registers.

use super::{RORegister, RWRegister, WORegister};

#[repr(C)]
pub struct RegisterBlock {
    pub RX_MODE_CFG: RWRegister<u32>,
    pub RX_DATA_CFG: RWRegister<u32>,
    pub RX_GENRL_CFG: RWRegister<u32>,
    pub RX_START_CFG: RWRegister<u32>,
    pub TX_DATA_CFG: RWRegister<u32>,
    pub TX_START_CFG: RWRegister<u32>,
    pub TX_GENRL_CFG: RWRegister<u32>,
    pub FIFO_CFG: RWRegister<u32>,
    /// Commit RX configuration into the RX clock domain
    pub REG_UPDATE: RWRegister<u32>,
    pub ST: RORegister<u32>,
    pub INT_ENA: RWRegister<u32>,
    pub INT_RAW: RWRegister<u32>,
    pub INT_ST: RORegister<u32>,
    pub INT_CLR: WORegister<u32>,
    _reserved0: [u32; 58],
    pub CLK: RWRegister<u32>,
    _reserved1: [u32; 182],
    pub VERSION: RWRegister<u32>,
}

const _: () = assert!(core::mem::offset_of!(RegisterBlock, CLK) == 0x120);
const _: () = assert!(core::mem::offset_of!(RegisterBlock, VERSION) == 0x3fc);
const _: () = assert!(core::mem::size_of::<RegisterBlock>() == 0x400);

pub mod REG_UPDATE {
    /// Self-clearing.
    pub mod RX_REG_UPDATE {
        pub const offset: u32 = 31;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}
