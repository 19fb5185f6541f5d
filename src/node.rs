//! Live REGDMA link nodes.
//!
//! A retention table is constant data. Before the REGDMA engine can run it,
//! each entry needs its own list of nodes in RAM, in the layout described by
//! [`ral::regdma`](crate::ral::regdma), and a block of memory to save
//! registers into. [`Chain`] builds that list from a table.
//!
//! ```
//! use core::mem::MaybeUninit;
//! use esp_regdma::{chip::esp32c6, node::{Chain, Node}, Module};
//!
//! // Safety: an all-zero node is a valid, empty node.
//! let mut nodes: [Node; 8] = unsafe { MaybeUninit::zeroed().assume_init() };
//! let mut mem = [0u32; 16];
//!
//! let table = &esp32c6::timer::TG_REGS_RETENTION[0];
//! let chain = Chain::build(table, 0, Module::TimerGroup0, &mut nodes, &mut mem).unwrap();
//! assert_eq!(chain.len(), 8);
//! assert!(chain.nodes()[7].head().is_eof());
//! ```

use core::marker::PhantomData;

use crate::config::{Body, EntryConfig, LinkId, Module};
use crate::head::Head;
use crate::ral::{self, regdma::ENTRY_NUM};
use crate::{validate, Error, Result};

pub use crate::ral::regdma::{BranchNode, Node};

impl Node {
    /// Write `link` into this node.
    ///
    /// `next` is the address of the following node's `HEAD`, or zero. `mem`
    /// is the save memory address for copy links; it's ignored otherwise.
    fn program(
        &self,
        link: &EntryConfig,
        entry: u32,
        module: Module,
        next: usize,
        eof: bool,
        mem: usize,
    ) {
        let config = &link.config;
        ral::write_reg!(
            crate::ral::regdma,
            self,
            STATS,
            REF: 1 << entry,
            ID: config.id().raw() as u32
        );
        self.MODULE.write(module.bit());
        self.HEAD.write(config.head().with_eof(eof).bits());
        self.NEXT.write(next);
        for map in &self.MAP {
            map.write(0);
        }
        match *config.body() {
            Body::Continuous { backup, restore } => {
                self.BACKUP.write(backup as usize);
                self.RESTORE.write(restore as usize);
                self.MEM.write(mem);
            }
            Body::AddrMap {
                backup,
                restore,
                map,
            } => {
                self.BACKUP.write(backup as usize);
                self.RESTORE.write(restore as usize);
                self.MEM.write(mem);
                for (reg, bits) in self.MAP.iter().zip(map) {
                    reg.write(bits);
                }
            }
            Body::Write { addr, value, mask } | Body::Wait { addr, value, mask } => {
                self.BACKUP.write(addr as usize);
                self.RESTORE.write(value as usize);
                self.MEM.write(mask as usize);
            }
        }
    }

    /// The node's header.
    pub fn head(&self) -> Head {
        Head::from_bits(self.HEAD.read())
    }

    /// The ID of the link this node was built from.
    pub fn id(&self) -> LinkId {
        LinkId::from_raw(ral::read_reg!(crate::ral::regdma, self, STATS, ID) as u16)
    }

    /// Bitmap of the entries that reference this node.
    pub fn refs(&self) -> u32 {
        ral::read_reg!(crate::ral::regdma, self, STATS, REF)
    }

    /// Address of this node's `HEAD`, the word `NEXT` pointers target.
    pub fn addr(&self) -> usize {
        core::ptr::addr_of!(self.HEAD) as usize
    }

    /// Address of the next node's `HEAD`, or zero at the end of a chain.
    pub fn next(&self) -> usize {
        self.NEXT.read()
    }
}

impl BranchNode {
    /// Route entry `entry` through this node to `next`.
    pub fn set_next(&self, entry: u32, next: usize) -> Result<()> {
        let slot = self
            .NEXT
            .get(entry as usize)
            .ok_or(Error::InvalidEntry { entry })?;
        slot.write(next);
        let bit = (1 << entry) << ral::regdma::STATS::REF::offset;
        ral::modify_reg!(crate::ral::regdma, self, STATS, |stats| stats | bit);
        Ok(())
    }

    /// Where entry `entry` continues after this node.
    pub fn next(&self, entry: u32) -> Option<usize> {
        self.NEXT.get(entry as usize).map(|slot| slot.read())
    }

    pub fn head(&self) -> Head {
        Head::from_bits(self.HEAD.read())
    }
}

/// A linked list of nodes that runs one retention entry's share of a table.
///
/// The chain borrows its nodes and save memory for as long as it exists.
/// Hand [`Chain::head`] to the REGDMA engine; don't let the chain go out of
/// scope while the engine may still walk it.
pub struct Chain<'a> {
    nodes: &'a [Node],
    _mem: PhantomData<&'a mut [u32]>,
}

impl<'a> Chain<'a> {
    /// Build the chain for retention entry `entry`.
    ///
    /// Links that `entry` doesn't own are left out. The remaining links keep
    /// their table order, which is the order the engine runs them. The last
    /// node gets the end-of-list flag. Copy links receive consecutive slices
    /// of `mem`.
    ///
    /// Any node past the end of the chain is left untouched.
    pub fn build(
        table: &[EntryConfig],
        entry: u32,
        module: Module,
        nodes: &'a mut [Node],
        mem: &'a mut [u32],
    ) -> Result<Self> {
        if entry as usize >= ENTRY_NUM {
            return Err(Error::InvalidEntry { entry });
        }
        validate::validate(table)?;

        let needed = validate::entry_links(table, entry);
        if needed > nodes.len() {
            return Err(Error::OutOfNodes {
                needed,
                available: nodes.len(),
            });
        }
        let words = validate::retention_words(table, entry);
        if words > mem.len() {
            return Err(Error::OutOfMemory {
                needed: words,
                available: mem.len(),
            });
        }

        let nodes: &'a [Node] = &nodes[..needed];
        let base = mem.as_mut_ptr();
        let mut offset = 0;
        let owned = table.iter().filter(|link| link.owner.contains(entry));
        for (index, link) in owned.enumerate() {
            let last = index + 1 == needed;
            let next = if last { 0 } else { nodes[index + 1].addr() };
            let slot = base.wrapping_add(offset) as usize;
            nodes[index].program(link, entry, module, next, last, slot);
            trace!(
                "regdma: entry {} node {} link {:#x}",
                entry,
                index,
                link.config.id().raw()
            );
            offset += link.config.words();
        }

        debug!(
            "regdma: built entry {} chain, {} nodes, {} words",
            entry, needed, words
        );
        Ok(Chain {
            nodes,
            _mem: PhantomData,
        })
    }

    /// Address of the first node's `HEAD`, or `None` if the entry owns no
    /// links in the table.
    pub fn head(&self) -> Option<usize> {
        self.nodes.first().map(Node::addr)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes, in run order.
    pub fn nodes(&self) -> &[Node] {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use core::mem::MaybeUninit;

    use super::*;
    use crate::config::{map_of, ns, LinkConfig, Owner};
    use crate::head::Mode;

    fn zeroed<T>() -> T {
        // Safety: only used for register blocks, where all-zero is valid.
        unsafe { MaybeUninit::zeroed().assume_init() }
    }

    const A: LinkId = LinkId::new(ns::GDMA, 0x00);
    const B: LinkId = LinkId::new(ns::GDMA, 0x01);
    const C: LinkId = LinkId::new(ns::GDMA, 0x02);

    fn table() -> [EntryConfig; 3] {
        [
            EntryConfig::new(
                LinkConfig::continuous(A, 0x1000, 0x1000, 4, false, false),
                Owner::of(&[0, 2]),
            ),
            EntryConfig::new(
                LinkConfig::write(B, 0x2000, 0x5, 0xf, true, false),
                Owner::of(&[0]),
            ),
            EntryConfig::new(
                LinkConfig::addr_map(C, 0x3000, 0x3000, 2, false, false, map_of(&[1, 33])),
                Owner::of(&[0, 2]),
            ),
        ]
    }

    #[test]
    fn links_in_table_order() {
        let table = table();
        let mut nodes: [Node; 4] = zeroed();
        let mut mem = [0u32; 8];
        let mem_base = mem.as_ptr() as usize;
        let chain = Chain::build(&table, 0, Module::GdmaCh0, &mut nodes, &mut mem).unwrap();

        assert_eq!(chain.len(), 3);
        let nodes = chain.nodes();
        assert_eq!(chain.head(), Some(nodes[0].addr()));
        assert_eq!(nodes[0].next(), nodes[1].addr());
        assert_eq!(nodes[1].next(), nodes[2].addr());
        assert_eq!(nodes[2].next(), 0);

        assert_eq!([nodes[0].id(), nodes[1].id(), nodes[2].id()], [A, B, C]);
        assert!(nodes[2].head().is_eof());
        assert!(!nodes[0].head().is_eof());
        assert!(!nodes[1].head().is_eof());
        assert_eq!(nodes[0].refs(), 1);
        assert_eq!(nodes[0].MODULE.read(), Module::GdmaCh0.bit());

        assert_eq!(nodes[0].head().mode(), Ok(Mode::Continuous));
        assert_eq!(nodes[0].head().length(), 4);
        assert_eq!(nodes[0].BACKUP.read(), 0x1000);
        assert_eq!(nodes[0].MEM.read(), mem_base);

        assert_eq!(nodes[1].head().mode(), Ok(Mode::Write));
        assert!(nodes[1].head().skip_backup());
        assert_eq!(nodes[1].BACKUP.read(), 0x2000);
        assert_eq!(nodes[1].RESTORE.read(), 0x5);
        assert_eq!(nodes[1].MEM.read(), 0xf);

        assert_eq!(nodes[2].head().mode(), Ok(Mode::AddrMap));
        assert_eq!(nodes[2].MEM.read(), mem_base + 4 * 4);
        assert_eq!(nodes[2].MAP[0].read(), 1 << 1);
        assert_eq!(nodes[2].MAP[1].read(), 1 << 1);
    }

    #[test]
    fn entry_filters_links() {
        let table = table();
        let mut nodes: [Node; 4] = zeroed();
        let mut mem = [0u32; 8];
        let chain = Chain::build(&table, 2, Module::GdmaCh0, &mut nodes, &mut mem).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.nodes()[0].id(), A);
        assert_eq!(chain.nodes()[1].id(), C);
        assert_eq!(chain.nodes()[0].refs(), 1 << 2);
        assert!(chain.nodes()[1].head().is_eof());
    }

    #[test]
    fn empty_chain() {
        let table = table();
        let mut nodes: [Node; 1] = zeroed();
        let mut mem = [0u32; 0];
        let chain = Chain::build(&table, 1, Module::GdmaCh0, &mut nodes, &mut mem).unwrap();
        assert!(chain.is_empty());
        assert_eq!(chain.head(), None);
    }

    #[test]
    fn storage_is_checked() {
        let table = table();
        let mut nodes: [Node; 2] = zeroed();
        let mut mem = [0u32; 8];
        assert_eq!(
            Chain::build(&table, 0, Module::GdmaCh0, &mut nodes, &mut mem).err(),
            Some(Error::OutOfNodes {
                needed: 3,
                available: 2
            })
        );

        let mut nodes: [Node; 3] = zeroed();
        let mut mem = [0u32; 5];
        assert_eq!(
            Chain::build(&table, 0, Module::GdmaCh0, &mut nodes, &mut mem).err(),
            Some(Error::OutOfMemory {
                needed: 6,
                available: 5
            })
        );

        let mut mem = [0u32; 8];
        assert_eq!(
            Chain::build(&table, ENTRY_NUM as u32, Module::GdmaCh0, &mut nodes, &mut mem).err(),
            Some(Error::InvalidEntry {
                entry: ENTRY_NUM as u32
            })
        );
    }

    #[test]
    fn branch_routes_each_entry() {
        let node: BranchNode = zeroed();
        node.set_next(0, 0x100).unwrap();
        node.set_next(2, 0x200).unwrap();
        assert_eq!(node.next(0), Some(0x100));
        assert_eq!(node.next(1), Some(0));
        assert_eq!(node.next(2), Some(0x200));
        assert_eq!(node.next(ENTRY_NUM as u32), None);
        assert_eq!(ral::read_reg!(crate::ral::regdma, &node, STATS, REF), 0b101);
        node.set_next(2, 0x300).unwrap();
        assert_eq!(node.next(2), Some(0x300));
        assert_eq!(ral::read_reg!(crate::ral::regdma, &node, STATS, REF), 0b101);
        assert_eq!(
            node.set_next(ENTRY_NUM as u32, 0),
            Err(Error::InvalidEntry {
                entry: ENTRY_NUM as u32
            })
        );
    }
}
