//! System peripherals: systimer, interrupt matrix, TEE / APM, IO MUX and
//! the SPI memory controller.
//!
//! These peripherals sit in the HP top domain, so their tables belong to
//! every entry in [`SYSTEM_OWNER`].

use super::{
    GPIO_BASE, HP_APM_BASE, INTMTX_BASE, INTPRI_BASE, IO_MUX_BASE, SPI0_BASE, SYSTEM_OWNER,
    SYSTIMER_BASE, TEE_BASE,
};
use crate::config::{map_span, map_without, ns, EntryConfig, LinkConfig, LinkId, Map};
use crate::ral::{reg_addr, reg_span, systimer};

pub const SYSTIMER_RETENTION_LINK_LEN: usize = 14;
pub const INTMTX_RETENTION_LINK_LEN: usize = 3;
pub const TEE_APM_RETENTION_LINK_LEN: usize = 2;
pub const IOMUX_RETENTION_LINK_LEN: usize = 4;
pub const SPIMEM_RETENTION_LINK_LEN: usize = 3;

const fn link(config: LinkConfig) -> EntryConfig {
    EntryConfig::new(config, SYSTEM_OWNER)
}

//
// Systimer
//

use crate::ral::systimer::RegisterBlock as Systimer;

const UNIT0_OP: u32 = reg_addr!(Systimer, SYSTIMER_BASE, UNIT0_OP);
const UNIT1_OP: u32 = reg_addr!(Systimer, SYSTIMER_BASE, UNIT1_OP);
const OP_UPDATE: u32 = systimer::UNIT0_OP::UPDATE::mask;
const OP_VALUE_VALID: u32 = systimer::UNIT0_OP::VALUE_VALID::mask;
const LOAD: u32 = systimer::UNIT0_LOAD::LOAD::mask;

const fn systimer_id(ordinal: u8) -> LinkId {
    LinkId::new(ns::SYSTIMER, ordinal)
}

/// Counter units are latched and read on backup, then loaded back on
/// restore. Comparators are reloaded once their targets are back.
pub static SYSTIMER_REGS_RETENTION: [EntryConfig; SYSTIMER_RETENTION_LINK_LEN] = [
    // Unit 0
    link(LinkConfig::write(systimer_id(0x00), UNIT0_OP, OP_UPDATE, OP_UPDATE, false, true)),
    link(LinkConfig::wait(systimer_id(0x01), UNIT0_OP, OP_VALUE_VALID, OP_VALUE_VALID, false, true)),
    link(LinkConfig::continuous(
        systimer_id(0x02),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT0_VALUE_HI),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT0_LOAD_HI),
        reg_span!(Systimer, UNIT0_VALUE_HI, UNIT0_VALUE_LO),
        false,
        false,
    )),
    link(LinkConfig::write(
        systimer_id(0x03),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT0_LOAD),
        LOAD,
        LOAD,
        true,
        false,
    )),
    // Unit 1
    link(LinkConfig::write(systimer_id(0x04), UNIT1_OP, OP_UPDATE, OP_UPDATE, false, true)),
    link(LinkConfig::wait(systimer_id(0x05), UNIT1_OP, OP_VALUE_VALID, OP_VALUE_VALID, false, true)),
    link(LinkConfig::continuous(
        systimer_id(0x06),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT1_VALUE_HI),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT1_LOAD_HI),
        reg_span!(Systimer, UNIT1_VALUE_HI, UNIT1_VALUE_LO),
        false,
        false,
    )),
    link(LinkConfig::write(
        systimer_id(0x07),
        reg_addr!(Systimer, SYSTIMER_BASE, UNIT1_LOAD),
        LOAD,
        LOAD,
        true,
        false,
    )),
    // Comparators
    link(LinkConfig::continuous(
        systimer_id(0x08),
        reg_addr!(Systimer, SYSTIMER_BASE, TARGET0_HI),
        reg_addr!(Systimer, SYSTIMER_BASE, TARGET0_HI),
        reg_span!(Systimer, TARGET0_HI, TARGET2_CONF),
        false,
        false,
    )),
    link(LinkConfig::write(
        systimer_id(0x09),
        reg_addr!(Systimer, SYSTIMER_BASE, COMP0_LOAD),
        LOAD,
        LOAD,
        true,
        false,
    )),
    link(LinkConfig::write(
        systimer_id(0x0a),
        reg_addr!(Systimer, SYSTIMER_BASE, COMP1_LOAD),
        LOAD,
        LOAD,
        true,
        false,
    )),
    link(LinkConfig::write(
        systimer_id(0x0b),
        reg_addr!(Systimer, SYSTIMER_BASE, COMP2_LOAD),
        LOAD,
        LOAD,
        true,
        false,
    )),
    // Configuration last; it re-enables the units and comparators.
    link(LinkConfig::continuous(
        systimer_id(0x0c),
        reg_addr!(Systimer, SYSTIMER_BASE, CONF),
        reg_addr!(Systimer, SYSTIMER_BASE, CONF),
        1,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        systimer_id(0x0d),
        reg_addr!(Systimer, SYSTIMER_BASE, INT_ENA),
        reg_addr!(Systimer, SYSTIMER_BASE, INT_ENA),
        1,
        false,
        false,
    )),
];

//
// Interrupt matrix
//

/// One source map register per interrupt source, then the status and clock
/// registers.
const INTMTX_SOURCE_WORDS: u32 = 77;
/// `CPU_INT_ENABLE` and `CPU_INT_TYPE`.
const INTPRI_ENABLE_WORDS: u32 = 2;
const INTPRI_PRI_OFFSET: u32 = 0x0c;
/// 32 priority registers and the threshold.
const INTPRI_PRI_WORDS: u32 = 33;

pub static INTMTX_REGS_RETENTION: [EntryConfig; INTMTX_RETENTION_LINK_LEN] = [
    link(LinkConfig::continuous(
        LinkId::new(ns::INTMTX, 0x00),
        INTMTX_BASE,
        INTMTX_BASE,
        INTMTX_SOURCE_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::INTMTX, 0x01),
        INTPRI_BASE,
        INTPRI_BASE,
        INTPRI_ENABLE_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::INTMTX, 0x02),
        INTPRI_BASE + INTPRI_PRI_OFFSET,
        INTPRI_BASE + INTPRI_PRI_OFFSET,
        INTPRI_PRI_WORDS,
        false,
        false,
    )),
];

//
// TEE / APM
//

/// `HP_APM_REGION_FILTER_EN` through `HP_APM_CLOCK_GATE`. The range ends
/// with the interrupt enable and clock gate registers.
const HP_APM_CLOCK_GATE: u32 = 0x10c;
const HP_APM_WORDS: u32 = HP_APM_CLOCK_GATE / 4 + 1;
const TEE_WORDS: u32 = 33;

pub static TEE_APM_REGS_RETENTION: [EntryConfig; TEE_APM_RETENTION_LINK_LEN] = [
    link(LinkConfig::continuous(
        LinkId::new(ns::TEEAPM, 0x00),
        HP_APM_BASE,
        HP_APM_BASE,
        HP_APM_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::TEEAPM, 0x01),
        TEE_BASE,
        TEE_BASE,
        TEE_WORDS,
        false,
        false,
    )),
];

//
// IO MUX and GPIO matrix
//

/// One pad register per GPIO, 0 through 30, and the date register.
const IO_MUX_WORDS: u32 = 32;
const GPIO_FUNC0_OUT_SEL_CFG: u32 = GPIO_BASE + 0x554;
const GPIO_FUNC_OUT_WORDS: u32 = 31;
const GPIO_STATUS_NEXT: u32 = GPIO_BASE + 0x14c;
/// Interrupt status and pin registers, then the input selection registers.
const GPIO_PIN_WORDS: u32 = 130;
/// Output, enable and input registers, with their set / clear aliases.
const GPIO_BASE_WORDS: u32 = 60;

pub static IOMUX_REGS_RETENTION: [EntryConfig; IOMUX_RETENTION_LINK_LEN] = [
    link(LinkConfig::continuous(
        LinkId::new(ns::IOMUX, 0x00),
        IO_MUX_BASE,
        IO_MUX_BASE,
        IO_MUX_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::IOMUX, 0x01),
        GPIO_FUNC0_OUT_SEL_CFG,
        GPIO_FUNC0_OUT_SEL_CFG,
        GPIO_FUNC_OUT_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::IOMUX, 0x02),
        GPIO_STATUS_NEXT,
        GPIO_STATUS_NEXT,
        GPIO_PIN_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::IOMUX, 0x03),
        GPIO_BASE,
        GPIO_BASE,
        GPIO_BASE_WORDS,
        false,
        false,
    )),
];

//
// SPI memory controller
//

const SPI_MEM_CTRL: u32 = SPI0_BASE + 0x08;
const SPI_MEM_CTRL_WORDS: u32 = 53;
const SPI_MEM_TIMING: u32 = SPI0_BASE + 0x100;
const SPI_MEM_TIMING_WORDS: u32 = 41;
const SPI_MEM_MMU_BASE: u32 = SPI0_BASE + 0x300;

/// `SPI_MEM_MMU_ITEM_CONTENT`, word offset from [`SPI_MEM_MMU_BASE`].
pub const MMU_ITEM_CONTENT_WORD: u32 = (0x37c - 0x300) / 4;
/// `SPI_MEM_MMU_ITEM_INDEX`, word offset from [`SPI_MEM_MMU_BASE`].
pub const MMU_ITEM_INDEX_WORD: u32 = (0x380 - 0x300) / 4;
/// Write-only trigger at the end of the range.
const MMU_POWER_CTRL_WORD: u32 = 63;

/// The MMU registers between `0x300` and `0x3fc`, without the MMU table
/// access window. Writing the content / index pair during restore would
/// overwrite an MMU entry.
pub const SPIMEM_MMU_MAP: Map = map_without(
    map_span(0, 64),
    &[MMU_ITEM_CONTENT_WORD, MMU_ITEM_INDEX_WORD, MMU_POWER_CTRL_WORD],
);
const SPIMEM_MMU_WORDS: u32 = 61;

pub static SPIMEM_REGS_RETENTION: [EntryConfig; SPIMEM_RETENTION_LINK_LEN] = [
    link(LinkConfig::continuous(
        LinkId::new(ns::SPIMEM, 0x00),
        SPI_MEM_CTRL,
        SPI_MEM_CTRL,
        SPI_MEM_CTRL_WORDS,
        false,
        false,
    )),
    link(LinkConfig::continuous(
        LinkId::new(ns::SPIMEM, 0x01),
        SPI_MEM_TIMING,
        SPI_MEM_TIMING,
        SPI_MEM_TIMING_WORDS,
        false,
        false,
    )),
    link(LinkConfig::addr_map(
        LinkId::new(ns::SPIMEM, 0x02),
        SPI_MEM_MMU_BASE,
        SPI_MEM_MMU_BASE,
        SPIMEM_MMU_WORDS,
        false,
        false,
        SPIMEM_MMU_MAP,
    )),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::config::{map_contains, map_count, Body};
    use crate::engine::{Bus, Walker};
    use crate::head::Mode;
    use crate::validate::check_table_len;

    #[test]
    fn table_lengths() {
        assert_eq!(check_table_len(&SYSTIMER_REGS_RETENTION, SYSTIMER_RETENTION_LINK_LEN), Ok(()));
        assert_eq!(check_table_len(&INTMTX_REGS_RETENTION, INTMTX_RETENTION_LINK_LEN), Ok(()));
        assert_eq!(check_table_len(&TEE_APM_REGS_RETENTION, TEE_APM_RETENTION_LINK_LEN), Ok(()));
        assert_eq!(check_table_len(&IOMUX_REGS_RETENTION, IOMUX_RETENTION_LINK_LEN), Ok(()));
        assert_eq!(check_table_len(&SPIMEM_REGS_RETENTION, SPIMEM_RETENTION_LINK_LEN), Ok(()));
    }

    #[test]
    fn spimem_never_touches_mmu_table_window() {
        assert_eq!(SPI_MEM_MMU_BASE + 4 * MMU_ITEM_CONTENT_WORD, SPI0_BASE + 0x37c);
        assert_eq!(SPI_MEM_MMU_BASE + 4 * MMU_ITEM_INDEX_WORD, SPI0_BASE + 0x380);
        let Body::AddrMap { map, .. } = *SPIMEM_REGS_RETENTION[2].config.body() else {
            panic!("expected an ADDR_MAP link");
        };
        assert!(!map_contains(&map, MMU_ITEM_CONTENT_WORD));
        assert!(!map_contains(&map, MMU_ITEM_INDEX_WORD));
        assert_eq!(map[0] >> 31, 0);
        assert_eq!(map[1] & 1, 0);
        assert_eq!(map_count(&map), SPIMEM_MMU_WORDS);
    }

    #[test]
    fn apm_keeps_interrupt_enable_and_clock_gate() {
        #[derive(Default)]
        struct Reads(Vec<u32>);
        impl Bus for Reads {
            fn read(&mut self, addr: u32) -> u32 {
                self.0.push(addr);
                0
            }
            fn write(&mut self, _: u32, _: u32) {}
        }

        let mut bus = Reads::default();
        let mut mem = [0; (HP_APM_WORDS + TEE_WORDS) as usize];
        Walker::new()
            .backup(&TEE_APM_REGS_RETENTION, 0, &mut bus, &mut mem)
            .unwrap();
        assert!(bus.0.contains(&(HP_APM_BASE + 0xc4)), "FUNC_CTRL");
        assert!(bus.0.contains(&(HP_APM_BASE + 0x108)), "INT_EN");
        assert!(bus.0.contains(&(HP_APM_BASE + 0x10c)), "CLOCK_GATE");
        assert_eq!(TEE_APM_REGS_RETENTION[0].config.head().length(), 68);
    }

    #[test]
    fn systimer_latches_before_copy() {
        let modes = SYSTIMER_REGS_RETENTION.map(|link| link.config.mode());
        assert_eq!(
            modes[..4],
            [Mode::Write, Mode::Wait, Mode::Continuous, Mode::Write]
        );
        assert_eq!(
            *SYSTIMER_REGS_RETENTION[2].config.body(),
            Body::Continuous {
                backup: SYSTIMER_BASE + 0x40,
                restore: SYSTIMER_BASE + 0x0c
            }
        );
        assert_eq!(SYSTIMER_REGS_RETENTION[8].config.head().length(), 9);
    }
}
