//! REGDMA link node layout.
//!
//! This is what the REGDMA engine parses. A node begins with a bookkeeping
//! block that the engine never reads, followed by the link header and the
//! mode-specific body. `NEXT` pointers always target the `HEAD` word of the
//! following node, never the start of the node.
//!
//! Address-sized words are `usize`; on the 32-bit targets that run the
//! engine these are the `void *` fields of the vendor layout.

use super::RWRegister;

/// Number of independent retention entries.
///
/// The `STATS` reference bitmap reserves 16 bits for entries.
pub const ENTRY_NUM: usize = 4;

const _: () = assert!(ENTRY_NUM < 16);

/// A linear REGDMA link node.
///
/// The body is shared by every mode. For WRITE and WAIT, `RESTORE` holds the
/// value and `MEM` holds the mask; `MAP` is only read in ADDR_MAP mode.
#[repr(C)]
pub struct Node {
    /// Entry reference bitmap and link ID.
    pub STATS: RWRegister<u32>,
    /// Retention module bitmap.
    pub MODULE: RWRegister<u32>,
    /// Link header.
    pub HEAD: RWRegister<u32>,
    /// Next node's `HEAD`, or zero.
    pub NEXT: RWRegister<usize>,
    /// Backup register address, or WRITE / WAIT target.
    pub BACKUP: RWRegister<usize>,
    /// Restore register address, or WRITE / WAIT value.
    pub RESTORE: RWRegister<usize>,
    /// Save memory, or WRITE / WAIT mask.
    pub MEM: RWRegister<usize>,
    /// ADDR_MAP bitmap.
    pub MAP: [RWRegister<u32>; 4],
}

/// A branch node.
///
/// Same as [`Node`], except that there's one `NEXT` pointer for each
/// retention entry. Each entry's chain continues through its own slot.
#[repr(C)]
pub struct BranchNode {
    pub STATS: RWRegister<u32>,
    pub MODULE: RWRegister<u32>,
    pub HEAD: RWRegister<u32>,
    pub NEXT: [RWRegister<usize>; ENTRY_NUM],
    pub BACKUP: RWRegister<usize>,
    pub RESTORE: RWRegister<usize>,
    pub MEM: RWRegister<usize>,
    pub MAP: [RWRegister<u32>; 4],
}

const WORD: usize = core::mem::size_of::<usize>();

// The engine expects the body right behind the header, in this order.
const _: () = assert!(core::mem::offset_of!(Node, HEAD) == 8);
const _: () = assert!(core::mem::offset_of!(Node, BACKUP) == core::mem::offset_of!(Node, NEXT) + WORD);
const _: () = assert!(core::mem::offset_of!(Node, MEM) == core::mem::offset_of!(Node, NEXT) + 3 * WORD);
const _: () = assert!(core::mem::offset_of!(BranchNode, HEAD) == 8);
const _: () = assert!(
    core::mem::offset_of!(BranchNode, BACKUP)
        == core::mem::offset_of!(BranchNode, NEXT) + ENTRY_NUM * WORD
);

// On the chips themselves, the layout is packed 32-bit words.
#[cfg(target_pointer_width = "32")]
const _: () = assert!(core::mem::size_of::<Node>() == 0x2c);
#[cfg(target_pointer_width = "32")]
const _: () = assert!(core::mem::size_of::<BranchNode>() == 0x2c + (ENTRY_NUM - 1) * 4);

pub mod STATS {
    /// One bit per retention entry that references the node.
    pub mod REF {
        pub const offset: u32 = 0;
        pub const mask: u32 = ((1 << super::super::ENTRY_NUM) - 1) << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Link ID.
    pub mod ID {
        pub const offset: u32 = 16;
        pub const mask: u32 = 0xffff << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}

pub mod HEAD {
    /// Number of 32-bit words to copy.
    pub mod LENGTH {
        pub const offset: u32 = 0;
        pub const mask: u32 = 0x3ff << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Link operation.
    pub mod MODE {
        pub const offset: u32 = 16;
        pub const mask: u32 = 0xf << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {
            pub const CONTINUOUS: u32 = 0;
            pub const ADDR_MAP: u32 = 1;
            pub const WRITE: u32 = 2;
            pub const WAIT: u32 = 3;
        }
    }
    /// Node carries one next pointer per entry.
    pub mod BRANCH {
        pub const offset: u32 = 28;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Skip this node while restoring.
    pub mod SKIP_R {
        pub const offset: u32 = 29;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Skip this node while backing up.
    pub mod SKIP_B {
        pub const offset: u32 = 30;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
    /// Last node of the list.
    pub mod EOF {
        pub const offset: u32 = 31;
        pub const mask: u32 = 1 << offset;
        pub mod R {}
        pub mod W {}
        pub mod RW {}
    }
}
