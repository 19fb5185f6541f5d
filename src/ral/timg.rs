//! Timer group registers.
//!
//! One general-purpose timer (T0) and the main system watchdog (MWDT). The
//! layout is shared by the ESP32-C6 and ESP32-P4 timer groups.

use super::{RORegister, RWRegister, WORegister};

#[repr(C)]
pub struct RegisterBlock {
    /// Timer 0 configuration
    pub T0CONFIG: RWRegister<u32>,
    /// Timer 0 current value, low 32 bits
    pub T0LO: RORegister<u32>,
    /// Timer 0 current value, high 22 bits
    pub T0HI: RORegister<u32>,
    /// Latch timer 0 into T0LO / T0HI
    pub T0UPDATE: RWRegister<u32>,
    pub T0ALARMLO: RWRegister<u32>,
    pub T0ALARMHI: RWRegister<u32>,
    /// Reload value, low 32 bits
    pub T0LOADLO: RWRegister<u32>,
    /// Reload value, high 22 bits
    pub T0LOADHI: RWRegister<u32>,
    /// Write any value to reload timer 0
    pub T0LOAD: WORegister<u32>,
    _reserved0: [u32; 9],
    pub WDTCONFIG0: RWRegister<u32>,
    pub WDTCONFIG1: RWRegister<u32>,
    /// Stage 0 timeout
    pub WDTCONFIG2: RWRegister<u32>,
    /// Stage 1 timeout
    pub WDTCONFIG3: RWRegister<u32>,
    /// Stage 2 timeout
    pub WDTCONFIG4: RWRegister<u32>,
    /// Stage 3 timeout
    pub WDTCONFIG5: RWRegister<u32>,
    /// Write any value to feed the watchdog
    pub WDTFEED: WORegister<u32>,
    /// Watchdog write protection
    pub WDTWPROTECT: RWRegister<u32>,
    pub RTCCALICFG: RWRegister<u32>,
    pub RTCCALICFG1: RORegister<u32>,
    pub INT_ENA_TIMERS: RWRegister<u32>,
    pub INT_RAW_TIMERS: RORegister<u32>,
    pub INT_ST_TIMERS: RORegister<u32>,
    pub INT_CLR_TIMERS: WORegister<u32>,
    pub RTCCALICFG2: RWRegister<u32>,
    _reserved1: [u32; 29],
    pub NTIMERS_DATE: RWRegister<u32>,
    pub REGCLK: RWRegister<u32>,
}

const _: () = assert!(core::mem::offset_of!(RegisterBlock, WDTCONFIG0) == 0x48);
const _: () = assert!(core::mem::offset_of!(RegisterBlock, WDTWPROTECT) == 0x64);
const _: () = assert!(core::mem::offset_of!(RegisterBlock, INT_ENA_TIMERS) == 0x70);
const _: () = assert!(core::mem::size_of::<RegisterBlock>() == 0x100);

pub mod T0UPDATE {
    /// Set to latch the counter; clears when the latch completes.
    pub mod UPDATE {
        pub const offset: u32 = 31;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod T0LOAD {
    pub mod LOAD {
        pub const offset: u32 = 0;
        pub const mask: u32 = 0xffff_ffff << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod WDTCONFIG0 {
    pub mod APPCPU_RESET_EN {
        pub const offset: u32 = 12;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod PROCPU_RESET_EN {
        pub const offset: u32 = 13;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod FLASHBOOT_MOD_EN {
        pub const offset: u32 = 14;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod SYS_RESET_LENGTH {
        pub const offset: u32 = 15;
        pub const mask: u32 = 0x7 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {
            /// 3.2 us reset pulse
            pub const LEN_3_2US: u32 = 7;
        }
    }
    pub mod CPU_RESET_LENGTH {
        pub const offset: u32 = 18;
        pub const mask: u32 = 0x7 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {
            pub use super::super::SYS_RESET_LENGTH::RW::LEN_3_2US;
        }
    }
    pub mod USE_XTAL {
        pub const offset: u32 = 21;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Self-clearing; copies configuration into the watchdog clock domain.
    pub mod CONF_UPDATE_EN {
        pub const offset: u32 = 22;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod STG3 {
        pub const offset: u32 = 23;
        pub const mask: u32 = 0x3 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod STG2 {
        pub const offset: u32 = 25;
        pub const mask: u32 = 0x3 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod STG1 {
        pub const offset: u32 = 27;
        pub const mask: u32 = 0x3 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod STG0 {
        pub const offset: u32 = 29;
        pub const mask: u32 = 0x3 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod EN {
        pub const offset: u32 = 31;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod WDTCONFIG1 {
    pub mod DIVCNT_RST {
        pub const offset: u32 = 0;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod CLK_PRESCALE {
        pub const offset: u32 = 16;
        pub const mask: u32 = 0xffff << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod WDTWPROTECT {
    pub mod WKEY {
        pub const offset: u32 = 0;
        pub const mask: u32 = 0xffff_ffff << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {
            /// Any other value locks the watchdog registers.
            pub const UNLOCK: u32 = 0x50d8_3aa1;
            pub const LOCK: u32 = 0;
        }
    }
}

pub mod INT_ENA_TIMERS {
    pub mod T0 {
        pub const offset: u32 = 0;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    pub mod WDT {
        pub const offset: u32 = 1;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod INT_CLR_TIMERS {
    pub use super::INT_ENA_TIMERS::{T0, WDT};
}
