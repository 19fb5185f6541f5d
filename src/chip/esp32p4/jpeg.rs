//! JPEG codec.

use super::{JPEG_BASE, PERIPH_OWNER};
use crate::config::{map_span, map_union, map_with, ns, EntryConfig, LinkConfig, LinkId, Map};

pub const JPEG_RETENTION_LINK_LEN: usize = 1;

const CONFIG: u32 = 0x00 / 4;
const DQT_INFO: u32 = 0x04 / 4;
const PIC_SIZE: u32 = 0x08 / 4;
/// `T0QNR` through `DHT_INFO`: quantization table selects, decoder
/// configuration and component info.
const T0QNR: u32 = 0x10 / 4;
const INT_ENA: u32 = 0x3c / 4;
/// `DHT_TOTLEN_DC0` through `DHT_CODEMIN_AC1`: Huffman table descriptors.
const DHT_TOTLEN_DC0: u32 = 0x58 / 4;

/// Configuration registers between `CONFIG` and `DHT_CODEMIN_AC1`, without
/// interrupt status and decoder status.
pub const JPEG_RETENTION_MAP: Map = map_with(
    map_union(map_span(T0QNR, 10), map_span(DHT_TOTLEN_DC0, 12)),
    &[CONFIG, DQT_INFO, PIC_SIZE, INT_ENA],
);
const JPEG_RETENTION_WORDS: u32 = 26;

pub static JPEG_REGS_RETENTION: [EntryConfig; JPEG_RETENTION_LINK_LEN] = [EntryConfig::new(
    LinkConfig::addr_map(
        LinkId::new(ns::JPEG, 0x00),
        JPEG_BASE,
        JPEG_BASE,
        JPEG_RETENTION_WORDS,
        false,
        false,
        JPEG_RETENTION_MAP,
    ),
    PERIPH_OWNER,
)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{map_count, map_of};

    #[test]
    fn map() {
        let expected = map_of(&[
            0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 22, 23, 24, 25, 26, 27, 28, 29, 30,
            31, 32, 33,
        ]);
        assert_eq!(JPEG_RETENTION_MAP, expected);
        assert_eq!(map_count(&JPEG_RETENTION_MAP), JPEG_RETENTION_WORDS);
    }
}
