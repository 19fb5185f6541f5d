//! Timer groups.

use super::{SYSTEM_OWNER, TIMG0_BASE, TIMG1_BASE};
use crate::chip::{timer_group, TIMG_RETENTION_LINK_LEN};
use crate::config::{ns, EntryConfig};

/// Timer group 0 and 1, watchdog then timer 0.
pub static TG_REGS_RETENTION: [[EntryConfig; TIMG_RETENTION_LINK_LEN]; 2] = [
    timer_group(TIMG0_BASE, ns::TG0_WDT, ns::TG0_TIMER, SYSTEM_OWNER),
    timer_group(TIMG1_BASE, ns::TG1_WDT, ns::TG1_TIMER, SYSTEM_OWNER),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Body, LinkId};
    use crate::head::Mode;
    use crate::ral::timg;

    #[test]
    fn tg0_sequence() {
        let links = &TG_REGS_RETENTION[0];
        let steps: [(Mode, u16, bool, bool); TIMG_RETENTION_LINK_LEN] = [
            (Mode::Write, 0x2100, true, false),
            (Mode::Continuous, 0x2101, false, false),
            (Mode::Write, 0x2102, true, false),
            (Mode::Write, 0x2103, true, false),
            (Mode::Write, 0x2300, false, true),
            (Mode::Wait, 0x2301, false, true),
            (Mode::Continuous, 0x2302, false, false),
            (Mode::Write, 0x2303, true, false),
        ];
        for (link, (mode, id, skip_b, skip_r)) in links.iter().zip(steps) {
            let head = link.config.head();
            assert_eq!(link.config.mode(), mode);
            assert_eq!(head.mode(), Ok(mode));
            assert_eq!(link.config.id(), LinkId::from_raw(id));
            assert_eq!(head.skip_backup(), skip_b, "{}", id);
            assert_eq!(head.skip_restore(), skip_r, "{}", id);
            assert!(!head.is_branch());
            assert!(!head.is_eof());
        }

        let unlock = Body::Write {
            addr: 0x6000_8064,
            value: timg::WDTWPROTECT::WKEY::RW::UNLOCK,
            mask: 0xffff_ffff,
        };
        assert_eq!(*links[0].config.body(), unlock);
        assert_eq!(
            *links[1].config.body(),
            Body::Continuous {
                backup: 0x6000_8048,
                restore: 0x6000_8048
            }
        );
        assert_eq!(links[1].config.head().length(), 8);
        assert_eq!(*links[2].config.body(), unlock);
        assert_eq!(
            *links[3].config.body(),
            Body::Write {
                addr: 0x6000_8048,
                value: 1 << 22,
                mask: 1 << 22
            }
        );
        assert_eq!(
            *links[4].config.body(),
            Body::Write {
                addr: 0x6000_800c,
                value: 1 << 31,
                mask: 1 << 31
            }
        );
        assert_eq!(
            *links[5].config.body(),
            Body::Wait {
                addr: 0x6000_800c,
                value: 0,
                mask: 1 << 31
            }
        );
        assert_eq!(
            *links[6].config.body(),
            Body::Continuous {
                backup: 0x6000_8004,
                restore: 0x6000_8018
            }
        );
        assert_eq!(links[6].config.head().length(), 2);
        assert_eq!(
            *links[7].config.body(),
            Body::Write {
                addr: 0x6000_8020,
                value: 1,
                mask: 0xffff_ffff
            }
        );
    }

    #[test]
    fn tg1_uses_its_own_block() {
        let links = &TG_REGS_RETENTION[1];
        assert_eq!(links[0].config.id(), LinkId::new(ns::TG1_WDT, 0x00));
        assert_eq!(links[7].config.id(), LinkId::new(ns::TG1_TIMER, 0x03));
        match *links[1].config.body() {
            Body::Continuous { backup, .. } => assert_eq!(backup, TIMG1_BASE + 0x48),
            _ => panic!("expected a continuous link"),
        }
    }
}
