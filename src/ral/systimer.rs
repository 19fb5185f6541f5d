//! System timer registers.

use super::{RORegister, RWRegister, WORegister};

#[repr(C)]
pub struct RegisterBlock {
    pub CONF: RWRegister<u32>,
    pub UNIT0_OP: RWRegister<u32>,
    pub UNIT1_OP: RWRegister<u32>,
    pub UNIT0_LOAD_HI: RWRegister<u32>,
    pub UNIT0_LOAD_LO: RWRegister<u32>,
    pub UNIT1_LOAD_HI: RWRegister<u32>,
    pub UNIT1_LOAD_LO: RWRegister<u32>,
    pub TARGET0_HI: RWRegister<u32>,
    pub TARGET0_LO: RWRegister<u32>,
    pub TARGET1_HI: RWRegister<u32>,
    pub TARGET1_LO: RWRegister<u32>,
    pub TARGET2_HI: RWRegister<u32>,
    pub TARGET2_LO: RWRegister<u32>,
    pub TARGET0_CONF: RWRegister<u32>,
    pub TARGET1_CONF: RWRegister<u32>,
    pub TARGET2_CONF: RWRegister<u32>,
    pub UNIT0_VALUE_HI: RORegister<u32>,
    pub UNIT0_VALUE_LO: RORegister<u32>,
    pub UNIT1_VALUE_HI: RORegister<u32>,
    pub UNIT1_VALUE_LO: RORegister<u32>,
    pub COMP0_LOAD: WORegister<u32>,
    pub COMP1_LOAD: WORegister<u32>,
    pub COMP2_LOAD: WORegister<u32>,
    pub UNIT0_LOAD: WORegister<u32>,
    pub UNIT1_LOAD: WORegister<u32>,
    pub INT_ENA: RWRegister<u32>,
    pub INT_RAW: RWRegister<u32>,
    pub INT_CLR: WORegister<u32>,
    pub INT_ST: RORegister<u32>,
    pub REAL_TARGET0_LO: RORegister<u32>,
    pub REAL_TARGET0_HI: RORegister<u32>,
    pub REAL_TARGET1_LO: RORegister<u32>,
    pub REAL_TARGET1_HI: RORegister<u32>,
    pub REAL_TARGET2_LO: RORegister<u32>,
    pub REAL_TARGET2_HI: RORegister<u32>,
    _reserved0: [u32; 28],
    pub DATE: RWRegister<u32>,
}

const _: () = assert!(core::mem::offset_of!(RegisterBlock, UNIT0_VALUE_HI) == 0x40);
const _: () = assert!(core::mem::offset_of!(RegisterBlock, INT_ENA) == 0x64);
const _: () = assert!(core::mem::size_of::<RegisterBlock>() == 0x100);

pub mod UNIT0_OP {
    /// Counter value in UNITn_VALUE is valid.
    pub mod VALUE_VALID {
        pub const offset: u32 = 29;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Latch the counter into UNITn_VALUE.
    pub mod UPDATE {
        pub const offset: u32 = 30;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}
pub use UNIT0_OP as UNIT1_OP;

pub mod UNIT0_LOAD {
    pub mod LOAD {
        pub const offset: u32 = 0;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}
pub use UNIT0_LOAD as UNIT1_LOAD;
pub use UNIT0_LOAD as COMP0_LOAD;
pub use UNIT0_LOAD as COMP1_LOAD;
pub use UNIT0_LOAD as COMP2_LOAD;
