//! A RAL-like module for REGDMA nodes and the peripherals the retention
//! tables describe.
//!
//! The vendor headers describe these blocks as C structs. We mirror the
//! ones the tables need as `#[repr(C)]` register blocks so that register
//! addresses can be derived from the layout itself, and so that the RAL
//! macros work on them where we touch registers directly.
//!
//! Every block checks its size and a few offsets at compile time. These are
//! silicon contracts; a failing check means a block was edited incorrectly.

#![allow(
    non_snake_case, // Compatibility with RAL
    non_upper_case_globals, // Field offset / mask naming
)]

pub mod io_mux;
pub mod parl_io;
pub mod regdma;
pub mod systimer;
pub mod timg;

pub use ral_registers::{modify_reg, read_reg, write_reg};
use ral_registers::{RORegister, RWRegister, WORegister};

/// Absolute address of register `$reg` in a `$block` instance at `$base`.
macro_rules! reg_addr {
    ($block:ty, $base:expr, $reg:ident) => {
        ($base) + ::core::mem::offset_of!($block, $reg) as u32
    };
}

/// Word offset of register `$reg` from register `$from` in `$block`.
macro_rules! word_offset {
    ($block:ty, $from:ident, $reg:ident) => {
        ((::core::mem::offset_of!($block, $reg) - ::core::mem::offset_of!($block, $from)) / 4)
            as u32
    };
}

/// Number of words in the inclusive register span `$first ..= $last`.
macro_rules! reg_span {
    ($block:ty, $first:ident, $last:ident) => {
        $crate::ral::word_offset!($block, $first, $last) + 1
    };
}

pub(crate) use {reg_addr, reg_span, word_offset};

//
// Helper types for static memory
//
// Similar to the RAL's `Instance` type, but more copy.
//

pub(crate) struct Static<T>(pub(crate) *const T);
impl<T> core::ops::Deref for Static<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        // Safety: pointer points to static memory (peripheral memory)
        unsafe { &*self.0 }
    }
}
impl<T> Clone for Static<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Static<T> {}
