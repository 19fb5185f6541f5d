//! REGDMA sleep retention links for ESP32 chips.
//!
//! Before a chip powers down a domain, its REGDMA engine walks a linked list
//! of *links* that save peripheral registers into memory. After wake up, it
//! walks the same list to write them back. `esp-regdma` provides
//!
//! - a `const` model of retention links: the [`Head`] word, the four link
//!   [`Mode`]s, and [`LinkConfig`] constructors for each mode.
//! - per-chip retention tables in [`chip`], one for every peripheral that
//!   loses state in sleep.
//! - structural checks for tables in [`validate`].
//! - the live node layout the engine parses, and a builder that turns one
//!   entry's share of a table into a node chain, in [`node`].
//! - a software walker, [`engine::Walker`], that runs a table's backup or
//!   restore pass on the CPU.
//! - the timer group watchdog HAL in [`wdt`], whose register sequences the
//!   timer group tables replay.
//!
//! This crate doesn't allocate retention memory, program the PAU, or decide
//! when to sleep. A sleep retention driver does that, using these tables.
//!
//! # Getting started
//!
//! Tables are `static` arrays of [`EntryConfig`]. Each one pairs a link with
//! an [`Owner`] bitmap: the retention entries that run the link. Links run in
//! array order.
//!
//! ```
//! use esp_regdma::{chip::esp32c6, engine::Walker, validate, Mode};
//!
//! let table = &esp32c6::timer::TG_REGS_RETENTION[0];
//! assert_eq!(table[0].config.mode(), Mode::Write);
//! assert!(validate::validate(table).is_ok());
//!
//! // Entry 0 needs this many words to save the timer group.
//! let words = validate::retention_words(table, 0);
//! assert_eq!(words, 10);
//! # let _ = Walker::new();
//! ```
//!
//! Use [`soc`] to reach the tables of the chip selected by the crate's
//! feature, and [`soc::RETENTION_INFO`] to enumerate them.
//!
//! ### License
//!
//! Licensed under either of
//!
//! - [Apache License, Version 2.0](http://www.apache.org/licenses/LICENSE-2.0) ([LICENSE-APACHE](./LICENSE-APACHE))
//! - [MIT License](http://opensource.org/licenses/MIT) ([LICENSE-MIT](./LICENSE-MIT))
//!
//! at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted
//! for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
//! dual licensed as above, without any additional terms or conditions.

#![no_std]

// Must come first; the other modules use its macros.
mod fmt;

pub mod chip;
pub mod config;
pub mod engine;
mod error;
pub mod head;
pub mod node;
pub mod ral;
pub mod validate;
pub mod wdt;

pub use config::{entry, Body, EntryConfig, LinkConfig, LinkId, Module, Owner, RetentionInfo};
pub use error::Error;
pub use head::{Head, Mode};
pub use ral::regdma::ENTRY_NUM;

/// A retention result
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(all(feature = "esp32c6", feature = "esp32p4"))]
compile_error!("Enable only one of the `esp32c6` and `esp32p4` features.");

cfg_if::cfg_if! {
    if #[cfg(feature = "esp32p4")] {
        /// Tables for the selected chip.
        pub use chip::esp32p4 as soc;
    } else {
        /// Tables for the selected chip.
        pub use chip::esp32c6 as soc;
    }
}
