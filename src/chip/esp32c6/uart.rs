//! UART controllers.

use super::{PERIPH_OWNER, UART0_BASE, UART1_BASE};
use crate::config::{ns, EntryConfig, LinkConfig, LinkId, Map};

pub const UART_RETENTION_LINK_LEN: usize = 3;

/// `UART_INT_ENA`; the retained range starts here.
const INT_ENA: u32 = 0x0c;
const REG_UPDATE: u32 = 0x98;
/// Self-clearing; moves configuration into the core clock domain.
const REG_UPDATE_BIT: u32 = 1 << 0;

/// Configuration registers between `INT_ENA` and `ID`, less FIFO access,
/// status and other read-only words.
pub const UART_RETENTION_MAP: Map = [0x007f_ff6d, 0x10, 0, 0];
const UART_RETENTION_WORDS: u32 = 21;

const fn uart(base: u32) -> [EntryConfig; UART_RETENTION_LINK_LEN] {
    [
        EntryConfig::new(
            LinkConfig::addr_map(
                LinkId::new(ns::UART, 0x00),
                base + INT_ENA,
                base + INT_ENA,
                UART_RETENTION_WORDS,
                false,
                false,
                UART_RETENTION_MAP,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::write(
                LinkId::new(ns::UART, 0x01),
                base + REG_UPDATE,
                REG_UPDATE_BIT,
                REG_UPDATE_BIT,
                true,
                false,
            ),
            PERIPH_OWNER,
        ),
        EntryConfig::new(
            LinkConfig::wait(
                LinkId::new(ns::UART, 0x02),
                base + REG_UPDATE,
                0,
                REG_UPDATE_BIT,
                true,
                false,
            ),
            PERIPH_OWNER,
        ),
    ]
}

pub static UART_REGS_RETENTION: [[EntryConfig; UART_RETENTION_LINK_LEN]; 2] =
    [uart(UART0_BASE), uart(UART1_BASE)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{map_count, Body};
    use crate::validate::check_table_len;

    #[test]
    fn tables() {
        for table in &UART_REGS_RETENTION {
            assert_eq!(check_table_len(table, UART_RETENTION_LINK_LEN), Ok(()));
        }
        assert_eq!(map_count(&UART_RETENTION_MAP), UART_RETENTION_WORDS);
    }

    #[test]
    fn update_is_restore_only() {
        let link = &UART_REGS_RETENTION[1][1];
        assert!(link.config.head().skip_backup());
        assert!(!link.config.head().skip_restore());
        assert_eq!(
            *link.config.body(),
            Body::Write {
                addr: UART1_BASE + 0x98,
                value: 1,
                mask: 1
            }
        );
    }
}
