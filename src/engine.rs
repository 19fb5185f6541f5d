//! A software REGDMA walker.
//!
//! [`Walker`] runs one retention entry's share of a table the way the
//! REGDMA engine does, but on the CPU and against a [`Bus`]. Use it to
//! simulate a table in tests, or as a fallback on parts where a peripheral
//! must be retained without the engine.
//!
//! Links run in table order. Save memory is laid out the same way
//! [`Chain`](crate::node::Chain) lays it out, so a backup taken by one can be
//! restored by the other.

use crate::config::{map_contains, Body, EntryConfig, LinkId, MAP_WORDS};
use crate::ral::regdma::ENTRY_NUM;
use crate::{validate, Error, Result};

/// 32-bit register access.
pub trait Bus {
    fn read(&mut self, addr: u32) -> u32;
    fn write(&mut self, addr: u32, value: u32);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn read(&mut self, addr: u32) -> u32 {
        (**self).read(addr)
    }
    fn write(&mut self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }
}

/// Volatile access to the memory map.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Every address that's read or written through this bus must be a valid,
    /// aligned register or memory word. Tables built for another chip break
    /// this contract.
    pub const unsafe fn new() -> Self {
        Mmio { _private: () }
    }
}

impl Bus for Mmio {
    fn read(&mut self, addr: u32) -> u32 {
        // Safety: see Mmio::new.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }
    fn write(&mut self, addr: u32, value: u32) {
        // Safety: see Mmio::new.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}

/// Which direction a pass moves data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pass {
    /// Registers to memory, before power down.
    Backup,
    /// Memory to registers, after power up.
    Restore,
}

/// Runs retention tables in software.
#[derive(Debug, Clone, Copy)]
pub struct Walker {
    /// How many times a WAIT link reads its register before giving up.
    pub max_polls: u32,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

impl Walker {
    pub const DEFAULT_MAX_POLLS: u32 = 100_000;

    pub const fn new() -> Self {
        Walker {
            max_polls: Self::DEFAULT_MAX_POLLS,
        }
    }

    /// Save the registers that entry `entry` retains into `mem`.
    pub fn backup<B: Bus>(
        &self,
        table: &[EntryConfig],
        entry: u32,
        bus: &mut B,
        mem: &mut [u32],
    ) -> Result<()> {
        self.prepare(table, entry, mem.len())?;
        self.walk(Pass::Backup, table, entry, bus, |bus, addr, slot| {
            mem[slot] = bus.read(addr);
        })
    }

    /// Write the registers saved by [`backup`](Self::backup) back from
    /// `mem`.
    pub fn restore<B: Bus>(
        &self,
        table: &[EntryConfig],
        entry: u32,
        bus: &mut B,
        mem: &[u32],
    ) -> Result<()> {
        self.prepare(table, entry, mem.len())?;
        self.walk(Pass::Restore, table, entry, bus, |bus, addr, slot| {
            bus.write(addr, mem[slot]);
        })
    }

    fn prepare(&self, table: &[EntryConfig], entry: u32, available: usize) -> Result<()> {
        if entry as usize >= ENTRY_NUM {
            return Err(Error::InvalidEntry { entry });
        }
        validate::validate(table)?;
        let needed = validate::retention_words(table, entry);
        if needed > available {
            return Err(Error::OutOfMemory { needed, available });
        }
        Ok(())
    }

    fn walk<B: Bus, F: FnMut(&mut B, u32, usize)>(
        &self,
        pass: Pass,
        table: &[EntryConfig],
        entry: u32,
        bus: &mut B,
        mut copy: F,
    ) -> Result<()> {
        debug!("regdma: software pass for entry {}", entry);
        let mut slot = 0;
        for link in table.iter().filter(|link| link.owner.contains(entry)) {
            let config = &link.config;
            let head = config.head();
            let skip = match pass {
                Pass::Backup => head.skip_backup(),
                Pass::Restore => head.skip_restore(),
            };
            if skip {
                trace!("regdma: skip link {:#x}", config.id().raw());
            }
            match *config.body() {
                Body::Continuous { backup, restore } if !skip => {
                    let base = pick(pass, backup, restore);
                    for word in 0..head.length() {
                        copy(bus, base + 4 * word, slot + word as usize);
                    }
                }
                Body::AddrMap {
                    backup,
                    restore,
                    map,
                } if !skip => {
                    let base = pick(pass, backup, restore);
                    let mut copied = 0;
                    for offset in 0..MAP_WORDS {
                        if copied == head.length() {
                            break;
                        }
                        if map_contains(&map, offset) {
                            copy(bus, base + 4 * offset, slot + copied as usize);
                            copied += 1;
                        }
                    }
                }
                Body::Write { addr, value, mask } if !skip => {
                    let current = bus.read(addr);
                    bus.write(addr, (current & !mask) | (value & mask));
                }
                Body::Wait { addr, value, mask } if !skip => {
                    self.wait(bus, config.id(), addr, value, mask)?;
                }
                _ => {}
            }
            slot += config.words();
        }
        Ok(())
    }

    fn wait<B: Bus>(&self, bus: &mut B, id: LinkId, addr: u32, value: u32, mask: u32) -> Result<()> {
        for _ in 0..self.max_polls {
            if bus.read(addr) & mask == value {
                return Ok(());
            }
        }
        warn!("regdma: link {:#x} timed out on {:#x}", id.raw(), addr);
        Err(Error::WaitTimeout { id, addr })
    }
}

const fn pick(pass: Pass, backup: u32, restore: u32) -> u32 {
    match pass {
        Pass::Backup => backup,
        Pass::Restore => restore,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::collections::BTreeMap;

    use core::mem::MaybeUninit;

    use super::*;
    use crate::chip::esp32c6::{timer::TG_REGS_RETENTION, TIMG0_BASE};
    use crate::config::{map_of, ns, LinkConfig, Module, Owner};
    use crate::node::{Chain, Node};

    /// Plain memory, plus one register whose bit 31 clears on every read.
    #[derive(Default)]
    struct FakeBus {
        words: BTreeMap<u32, u32>,
        self_clearing: Option<u32>,
        writes: std::vec::Vec<(u32, u32)>,
    }

    impl Bus for FakeBus {
        fn read(&mut self, addr: u32) -> u32 {
            let value = self.words.get(&addr).copied().unwrap_or(0);
            if Some(addr) == self.self_clearing {
                self.words.insert(addr, value & !(1 << 31));
            }
            value
        }
        fn write(&mut self, addr: u32, value: u32) {
            self.writes.push((addr, value));
            self.words.insert(addr, value);
        }
    }

    const ID: LinkId = LinkId::new(ns::UART, 0x00);

    fn owned(config: LinkConfig) -> EntryConfig {
        EntryConfig::new(config, Owner::of(&[0]))
    }

    #[test]
    fn continuous_round_trip() {
        let table = [owned(LinkConfig::continuous(ID, 0x100, 0x200, 3, false, false))];
        let mut bus = FakeBus::default();
        for i in 0..3 {
            bus.words.insert(0x100 + 4 * i, 10 + i);
        }
        let mut mem = [0; 3];
        let walker = Walker::new();
        walker.backup(&table, 0, &mut bus, &mut mem).unwrap();
        assert_eq!(mem, [10, 11, 12]);

        walker.restore(&table, 0, &mut bus, &mem).unwrap();
        assert_eq!(bus.words[&0x200], 10);
        assert_eq!(bus.words[&0x204], 11);
        assert_eq!(bus.words[&0x208], 12);
    }

    #[test]
    fn addr_map_selects_words() {
        let map = map_of(&[0, 2, 40]);
        let table = [owned(LinkConfig::addr_map(ID, 0x1000, 0x1000, 3, false, false, map))];
        let mut bus = FakeBus::default();
        for i in 0..64 {
            bus.words.insert(0x1000 + 4 * i, i);
        }
        let mut mem = [0; 3];
        Walker::new().backup(&table, 0, &mut bus, &mut mem).unwrap();
        assert_eq!(mem, [0, 2, 40]);

        let mut fresh = FakeBus::default();
        Walker::new().restore(&table, 0, &mut fresh, &mem).unwrap();
        let written: std::vec::Vec<u32> = fresh.writes.iter().map(|&(addr, _)| addr).collect();
        assert_eq!(written, [0x1000, 0x1008, 0x10a0]);
    }

    #[test]
    fn write_is_masked() {
        let table = [owned(LinkConfig::write(ID, 0x40, 0xab, 0x0f, false, false))];
        let mut bus = FakeBus::default();
        bus.words.insert(0x40, 0xff00);
        Walker::new().backup(&table, 0, &mut bus, &mut []).unwrap();
        assert_eq!(bus.words[&0x40], 0xff0b);
    }

    #[test]
    fn skip_flags_select_pass() {
        let table = [
            owned(LinkConfig::write(ID, 0x40, 1, 1, true, false)),
            owned(LinkConfig::write(ID, 0x44, 1, 1, false, true)),
        ];
        let mut bus = FakeBus::default();
        Walker::new().backup(&table, 0, &mut bus, &mut []).unwrap();
        assert_eq!(bus.writes, [(0x44, 1)]);

        let mut bus = FakeBus::default();
        Walker::new().restore(&table, 0, &mut bus, &[]).unwrap();
        assert_eq!(bus.writes, [(0x40, 1)]);
    }

    #[test]
    fn skipped_links_keep_their_memory() {
        let table = [
            owned(LinkConfig::continuous(ID, 0x100, 0x100, 2, true, false)),
            owned(LinkConfig::continuous(ID, 0x200, 0x200, 1, false, false)),
        ];
        let mut bus = FakeBus::default();
        bus.words.insert(0x200, 7);
        let mut mem = [0; 3];
        Walker::new().backup(&table, 0, &mut bus, &mut mem).unwrap();
        assert_eq!(mem, [0, 0, 7]);
    }

    #[test]
    fn wait_polls_until_match() {
        let table = [owned(LinkConfig::wait(ID, 0x80, 0, 1 << 31, false, false))];
        let mut bus = FakeBus {
            self_clearing: Some(0x80),
            ..FakeBus::default()
        };
        bus.words.insert(0x80, 1 << 31);
        Walker::new().backup(&table, 0, &mut bus, &mut []).unwrap();
    }

    #[test]
    fn wait_times_out() {
        let table = [owned(LinkConfig::wait(ID, 0x80, 1, 1, false, false))];
        let mut bus = FakeBus::default();
        let walker = Walker { max_polls: 10 };
        assert_eq!(
            walker.backup(&table, 0, &mut bus, &mut []),
            Err(Error::WaitTimeout { id: ID, addr: 0x80 })
        );
    }

    #[test]
    fn memory_is_checked() {
        let table = [owned(LinkConfig::continuous(ID, 0x100, 0x100, 4, false, false))];
        let mut bus = FakeBus::default();
        assert_eq!(
            Walker::new().backup(&table, 0, &mut bus, &mut [0; 3]),
            Err(Error::OutOfMemory {
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn timer_group_round_trip() {
        const T0LO: u32 = TIMG0_BASE + 0x04;
        const T0HI: u32 = TIMG0_BASE + 0x08;
        const T0UPDATE: u32 = TIMG0_BASE + 0x0c;
        const T0LOADLO: u32 = TIMG0_BASE + 0x18;
        const T0LOADHI: u32 = TIMG0_BASE + 0x1c;
        const T0LOAD: u32 = TIMG0_BASE + 0x20;
        const WDTCONFIG0: u32 = TIMG0_BASE + 0x48;
        const WDTWPROTECT: u32 = TIMG0_BASE + 0x64;
        const UNLOCK: u32 = 0x50d8_3aa1;

        let table = &TG_REGS_RETENTION[0];
        let mut bus = FakeBus {
            self_clearing: Some(T0UPDATE),
            ..FakeBus::default()
        };
        bus.words.insert(WDTCONFIG0, 0xa000_0000);
        bus.words.insert(T0LO, 0x1234_5678);
        bus.words.insert(T0HI, 0x2a);
        let mut mem = [0; 10];
        Walker::new().backup(table, 0, &mut bus, &mut mem).unwrap();
        assert_eq!(mem[0], 0xa000_0000);
        assert_eq!(mem[8..], [0x1234_5678, 0x2a]);
        assert!(bus.writes.contains(&(T0UPDATE, 1 << 31)));
        assert!(!bus.writes.iter().any(|&(addr, _)| addr == WDTWPROTECT));

        let mut fresh = FakeBus::default();
        Walker::new().restore(table, 0, &mut fresh, &mem).unwrap();
        assert_eq!(fresh.words[&WDTCONFIG0], 0xa000_0000 | 1 << 22);
        assert_eq!(fresh.words[&WDTWPROTECT], UNLOCK);
        assert_eq!(fresh.words[&T0LOADLO], 0x1234_5678);
        assert_eq!(fresh.words[&T0LOADHI], 0x2a);
        assert_eq!(fresh.words[&T0LOAD], 1);
        assert!(!fresh.words.contains_key(&T0UPDATE));
    }

    #[test]
    fn chain_and_walker_share_memory_layout() {
        let table = [
            EntryConfig::new(
                LinkConfig::continuous(ID, 0x100, 0x100, 2, true, false),
                Owner::of(&[0]),
            ),
            EntryConfig::new(LinkConfig::write(ID, 0x40, 1, 1, false, false), Owner::of(&[0])),
            EntryConfig::new(
                LinkConfig::addr_map(ID, 0x1000, 0x1000, 2, false, false, map_of(&[3, 9])),
                Owner::of(&[0, 1]),
            ),
            EntryConfig::new(
                LinkConfig::continuous(ID, 0x200, 0x200, 3, false, false),
                Owner::of(&[1]),
            ),
            EntryConfig::new(
                LinkConfig::continuous(ID, 0x300, 0x300, 1, false, false),
                Owner::of(&[0]),
            ),
        ];

        // Safety: an all-zero node is a valid, empty node.
        let mut nodes: [Node; 4] = unsafe { MaybeUninit::zeroed().assume_init() };
        let mut chain_mem = [0u32; 5];
        let base = chain_mem.as_ptr() as usize;
        let chain = Chain::build(&table, 0, Module::GdmaCh0, &mut nodes, &mut chain_mem).unwrap();
        let offsets: std::vec::Vec<usize> = chain
            .nodes()
            .iter()
            .filter(|node| node.head().mode().map_or(false, |mode| mode.is_copy()))
            .map(|node| (node.MEM.read() - base) / 4)
            .collect();
        assert_eq!(offsets, [0, 2, 4]);

        let mut bus = FakeBus::default();
        for addr in [0x100, 0x104, 0x100c, 0x1024, 0x300] {
            bus.words.insert(addr, addr);
        }
        let mut mem = [0; 5];
        Walker::new().backup(&table, 0, &mut bus, &mut mem).unwrap();
        assert_eq!(mem, [0, 0, 0x100c, 0x1024, 0x300]);
    }
}
