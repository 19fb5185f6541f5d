//! IO MUX registers (ESP32-P4).
//!
//! The vendor header spells out 57 identical `gpioN` registers. They're an
//! array here.

use super::RWRegister;

/// Number of pads with an IO MUX register.
pub const PADS: usize = 57;

#[repr(C)]
pub struct RegisterBlock {
    _reserved0: u32,
    /// Pad configuration, one per GPIO
    pub GPIO: [RWRegister<u32>; PADS],
    _reserved1: [u32; 7],
    pub DATE: RWRegister<u32>,
}

const _: () = assert!(core::mem::offset_of!(RegisterBlock, GPIO) == 0x4);
const _: () = assert!(core::mem::offset_of!(RegisterBlock, DATE) == 0x104);
const _: () = assert!(core::mem::size_of::<RegisterBlock>() == 0x108);
