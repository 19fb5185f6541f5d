//! Per-chip retention tables.
//!
//! Each chip module describes, for every peripheral that loses state in
//! sleep, the links that save and restore it. Tables are `static` arrays
//! typed with their declared link count, so a table that gains or loses a
//! link without updating its `*_RETENTION_LINK_LEN` doesn't compile.
//!
//! Both chip modules always build. [`soc`](crate::soc) names the one selected
//! by the crate's chip feature.

pub mod esp32c6;
pub mod esp32p4;

use crate::config::{EntryConfig, LinkConfig, LinkId, Owner};
use crate::ral::{reg_addr, reg_span, timg};

/// Links in a timer group table.
pub const TIMG_RETENTION_LINK_LEN: usize = 8;

/// The timer group sequence, shared by every chip with this timer group.
///
/// The watchdog half reloads the configuration under the write key and
/// latches it into the watchdog clock domain. The timer half latches the
/// counter before backup, then reloads the saved count on restore.
pub(crate) const fn timer_group(
    base: u32,
    wdt: u8,
    timer: u8,
    owner: Owner,
) -> [EntryConfig; TIMG_RETENTION_LINK_LEN] {
    use crate::ral::timg::RegisterBlock as Timg;

    const WKEY: u32 = timg::WDTWPROTECT::WKEY::RW::UNLOCK;
    const WKEY_MASK: u32 = timg::WDTWPROTECT::WKEY::mask;
    const CONF_UPDATE: u32 = timg::WDTCONFIG0::CONF_UPDATE_EN::mask;
    const T0_UPDATE: u32 = timg::T0UPDATE::UPDATE::mask;
    const T0_LOAD: u32 = timg::T0LOAD::LOAD::mask;

    let wprotect = reg_addr!(Timg, base, WDTWPROTECT);
    let config0 = reg_addr!(Timg, base, WDTCONFIG0);
    let update = reg_addr!(Timg, base, T0UPDATE);
    let count = reg_addr!(Timg, base, T0LO);
    let reload = reg_addr!(Timg, base, T0LOADLO);
    let load = reg_addr!(Timg, base, T0LOAD);

    [
        EntryConfig::new(
            LinkConfig::write(LinkId::new(wdt, 0x00), wprotect, WKEY, WKEY_MASK, true, false),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::continuous(
                LinkId::new(wdt, 0x01),
                config0,
                config0,
                reg_span!(Timg, WDTCONFIG0, WDTWPROTECT),
                false,
                false,
            ),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::write(LinkId::new(wdt, 0x02), wprotect, WKEY, WKEY_MASK, true, false),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::write(LinkId::new(wdt, 0x03), config0, CONF_UPDATE, CONF_UPDATE, true, false),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::write(LinkId::new(timer, 0x00), update, T0_UPDATE, T0_UPDATE, false, true),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::wait(LinkId::new(timer, 0x01), update, 0, T0_UPDATE, false, true),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::continuous(
                LinkId::new(timer, 0x02),
                count,
                reload,
                reg_span!(Timg, T0LO, T0HI),
                false,
                false,
            ),
            owner,
        ),
        EntryConfig::new(
            LinkConfig::write(LinkId::new(timer, 0x03), load, 1, T0_LOAD, true, false),
            owner,
        ),
    ]
}
