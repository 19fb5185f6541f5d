//! Retention link configurations.
//!
//! A [`LinkConfig`] is the constant description of one link. Tables of
//! [`EntryConfig`]s pair each link with the retention entries that run it.
//! Everything here is `const` so that tables can live in flash as `static`
//! items.
//!
//! ```
//! use esp_regdma::config::{ns, EntryConfig, LinkConfig, LinkId, Owner};
//!
//! const UPDATE: u32 = 0x6000_0098;
//!
//! static LINKS: [EntryConfig; 2] = [
//!     EntryConfig::new(
//!         LinkConfig::write(LinkId::new(ns::UART, 0x00), UPDATE, 1, 1, true, false),
//!         Owner::of(&[0]),
//!     ),
//!     EntryConfig::new(
//!         LinkConfig::wait(LinkId::new(ns::UART, 0x01), UPDATE, 0, 1, true, false),
//!         Owner::of(&[0]),
//!     ),
//! ];
//! # assert!(esp_regdma::validate::validate(&LINKS).is_ok());
//! ```

use crate::head::{Head, Mode};
use crate::ral::regdma::ENTRY_NUM;

/// Link ID: a namespace byte and an ordinal within that namespace.
///
/// The ordinal documents where a link sits in its table. Execution order is
/// the table order; the ID is never used to reorder links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkId(u16);

impl LinkId {
    pub const fn new(namespace: u8, ordinal: u8) -> Self {
        LinkId((namespace as u16) << 8 | ordinal as u16)
    }

    pub const fn from_raw(raw: u16) -> Self {
        LinkId(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn namespace(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn ordinal(self) -> u8 {
        self.0 as u8
    }
}

impl core::fmt::Display for LinkId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Link ID namespaces.
pub mod ns {
    pub const PCR: u8 = 0x01;
    pub const PAU: u8 = 0x04;
    pub const CACHE: u8 = 0x0c;
    pub const INTMTX: u8 = 0x0d;
    pub const HPSYS: u8 = 0x0e;
    pub const TEEAPM: u8 = 0x0f;
    pub const UART: u8 = 0x10;
    pub const TIMG: u8 = 0x11;
    pub const IOMUX: u8 = 0x12;
    pub const SPIMEM: u8 = 0x13;
    pub const SYSTIMER: u8 = 0x14;
    pub const GDMA: u8 = 0x18;
    pub const I2C: u8 = 0x19;
    pub const TG0_WDT: u8 = 0x21;
    pub const TG1_WDT: u8 = 0x22;
    pub const TG0_TIMER: u8 = 0x23;
    pub const TG1_TIMER: u8 = 0x24;
    pub const ETM: u8 = 0x26;
    pub const TSENS: u8 = 0x27;
    pub const TWAI: u8 = 0x28;
    pub const PARLIO: u8 = 0x29;
    pub const SDM: u8 = 0x34;
    pub const JPEG: u8 = 0x35;
}

/// Bitmap of the retention entries that run a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Owner(u32);

/// The owner bitmap for the single entry `n`.
///
/// # Panics
///
/// Panics if `n` isn't below [`ENTRY_NUM`]. In a `const` or `static`
/// initializer, this is a compile-time error.
pub const fn entry(n: u32) -> Owner {
    assert!((n as usize) < ENTRY_NUM, "retention entry out of range");
    Owner(1 << n)
}

impl Owner {
    /// The union of the given entries.
    pub const fn of(entries: &[u32]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < entries.len() {
            bits |= entry(entries[i]).0;
            i += 1;
        }
        Owner(bits)
    }

    /// Wrap a raw bitmap. Nothing is checked; see [`validate`](crate::validate).
    pub const fn from_bits(bits: u32) -> Self {
        Owner(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Owner) -> Self {
        Owner(self.0 | other.0)
    }

    /// Returns `true` if entry `n` runs the link.
    pub const fn contains(self, n: u32) -> bool {
        n < u32::BITS && self.0 & (1 << n) != 0
    }
}

/// 128-bit ADDR_MAP bitmap. Bit `n` selects the word at `base + 4 * n`.
pub type Map = [u32; 4];

/// Number of words an ADDR_MAP bitmap can span.
pub const MAP_WORDS: u32 = 128;

/// A map selecting the given word offsets.
pub const fn map_of(offsets: &[u32]) -> Map {
    map_with([0; 4], offsets)
}

/// A map selecting `count` consecutive words, starting at word `first`.
pub const fn map_span(first: u32, count: u32) -> Map {
    assert!(first + count <= MAP_WORDS, "map span out of range");
    let mut map = [0; 4];
    let mut offset = first;
    while offset < first + count {
        map[(offset / 32) as usize] |= 1 << (offset % 32);
        offset += 1;
    }
    map
}

/// `map`, plus the given word offsets.
pub const fn map_with(mut map: Map, offsets: &[u32]) -> Map {
    let mut i = 0;
    while i < offsets.len() {
        let offset = offsets[i];
        assert!(offset < MAP_WORDS, "map offset out of range");
        map[(offset / 32) as usize] |= 1 << (offset % 32);
        i += 1;
    }
    map
}

/// `map`, less the given word offsets.
pub const fn map_without(mut map: Map, offsets: &[u32]) -> Map {
    let mut i = 0;
    while i < offsets.len() {
        let offset = offsets[i];
        assert!(offset < MAP_WORDS, "map offset out of range");
        map[(offset / 32) as usize] &= !(1 << (offset % 32));
        i += 1;
    }
    map
}

/// Words selected by either map.
pub const fn map_union(a: Map, b: Map) -> Map {
    [a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]]
}

/// Number of words selected by `map`.
pub const fn map_count(map: &Map) -> u32 {
    map[0].count_ones() + map[1].count_ones() + map[2].count_ones() + map[3].count_ones()
}

/// The highest word offset `map` selects, or `None` for an empty map.
pub const fn map_last(map: &Map) -> Option<u32> {
    let mut i = map.len();
    while i > 0 {
        i -= 1;
        if map[i] != 0 {
            return Some(32 * i as u32 + 31 - map[i].leading_zeros());
        }
    }
    None
}

/// Returns `true` if `map` selects word `offset`.
pub const fn map_contains(map: &Map, offset: u32) -> bool {
    offset < MAP_WORDS && map[(offset / 32) as usize] & (1 << (offset % 32)) != 0
}

/// The mode-specific part of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Body {
    /// Copy words from `backup` on backup, to `restore` on restore.
    Continuous { backup: u32, restore: u32 },
    /// Like `Continuous`, but only the words selected by `map`.
    AddrMap {
        backup: u32,
        restore: u32,
        map: Map,
    },
    /// `*addr = (*addr & !mask) | (value & mask)`
    Write { addr: u32, value: u32, mask: u32 },
    /// Spin until `*addr & mask == value`.
    Wait { addr: u32, value: u32, mask: u32 },
}

impl Body {
    pub const fn mode(&self) -> Mode {
        match self {
            Body::Continuous { .. } => Mode::Continuous,
            Body::AddrMap { .. } => Mode::AddrMap,
            Body::Write { .. } => Mode::Write,
            Body::Wait { .. } => Mode::Wait,
        }
    }
}

const fn aligned(addr: u32) -> bool {
    addr % 4 == 0
}

/// One retention link.
///
/// The constructors take their arguments in the order of the vendor's
/// link initializers: ID, addresses, length or value and mask, then the
/// backup and restore skip flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    head: Head,
    body: Body,
    id: LinkId,
}

impl LinkConfig {
    /// Copy `length` words between `backup` and `restore`.
    pub const fn continuous(
        id: LinkId,
        backup: u32,
        restore: u32,
        length: u32,
        skip_b: bool,
        skip_r: bool,
    ) -> Self {
        assert!(
            aligned(backup) && aligned(restore),
            "unaligned register address"
        );
        LinkConfig {
            head: Head::new(length, Mode::Continuous, false, skip_r, skip_b),
            body: Body::Continuous { backup, restore },
            id,
        }
    }

    /// Copy the `length` words that `map` selects, relative to `backup`
    /// and `restore`.
    pub const fn addr_map(
        id: LinkId,
        backup: u32,
        restore: u32,
        length: u32,
        skip_b: bool,
        skip_r: bool,
        map: Map,
    ) -> Self {
        assert!(
            aligned(backup) && aligned(restore),
            "unaligned register address"
        );
        assert!(
            map_count(&map) <= length,
            "map selects more words than the link copies"
        );
        LinkConfig {
            head: Head::new(length, Mode::AddrMap, false, skip_r, skip_b),
            body: Body::AddrMap {
                backup,
                restore,
                map,
            },
            id,
        }
    }

    /// Masked write of `value` to `addr`.
    pub const fn write(
        id: LinkId,
        addr: u32,
        value: u32,
        mask: u32,
        skip_b: bool,
        skip_r: bool,
    ) -> Self {
        assert!(aligned(addr), "unaligned register address");
        LinkConfig {
            head: Head::new(0, Mode::Write, false, skip_r, skip_b),
            body: Body::Write { addr, value, mask },
            id,
        }
    }

    /// Wait for `addr & mask == value`.
    pub const fn wait(
        id: LinkId,
        addr: u32,
        value: u32,
        mask: u32,
        skip_b: bool,
        skip_r: bool,
    ) -> Self {
        assert!(aligned(addr), "unaligned register address");
        LinkConfig {
            head: Head::new(0, Mode::Wait, false, skip_r, skip_b),
            body: Body::Wait { addr, value, mask },
            id,
        }
    }

    pub const fn head(&self) -> Head {
        self.head
    }

    pub const fn body(&self) -> &Body {
        &self.body
    }

    pub const fn id(&self) -> LinkId {
        self.id
    }

    pub const fn mode(&self) -> Mode {
        self.body.mode()
    }

    /// Words of save memory this link needs.
    pub const fn words(&self) -> usize {
        if self.mode().is_copy() {
            self.head.length() as usize
        } else {
            0
        }
    }
}

/// A link and the entries that run it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EntryConfig {
    pub config: LinkConfig,
    pub owner: Owner,
}

impl EntryConfig {
    pub const fn new(config: LinkConfig, owner: Owner) -> Self {
        EntryConfig { config, owner }
    }
}

/// Sleep retention modules.
///
/// A module is the unit a sleep retention driver allocates and frees; each
/// one owns one link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Module {
    TimerGroup0,
    TimerGroup1,
    Systimer,
    IntMtx,
    TeeApm,
    IoMux,
    SpiMem,
    Uart0,
    Uart1,
    I2c0,
    Twai0,
    Twai1,
    Sdm,
    Etm,
    GdmaCh0,
    GdmaCh1,
    GdmaCh2,
    Parlio,
    Tsens,
    Jpeg,
}

impl Module {
    /// Bit for this module in a node's module bitmap.
    pub const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// Registration record for one peripheral's retention table.
#[derive(Debug, Clone, Copy)]
pub struct RetentionInfo {
    pub module: Module,
    pub name: &'static str,
    pub links: &'static [EntryConfig],
}
