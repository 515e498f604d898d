//! Table registration and markup reassembly.

use super::{ObjectMap, TagNames};
use crate::error::{Error, Result};
use crate::html::{ElementId, HtmlTree};
use crate::names::{cells, collect_wrapped, is_tag, rows};
use indexmap::IndexMap;
use roxmltree::{Node, NodeId};
use std::collections::{HashMap, HashSet};

const TABLE_TEXT: &str = "\n\t\t";
const ROW_TEXT: &str = "\n\t\t\t";
const ROW_TAIL: &str = "\n\t\t";
const CELL_TAIL: &str = "\n\t\t\t";
const LAST_CELL_TAIL: &str = "\n\t\t";
const LAST_ROW_TAIL: &str = "\n\t";

/// Handle to a registered table, returned by [`Tables::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKey(usize);

#[derive(Debug)]
struct Entry<'a, 'input> {
    node: Node<'a, 'input>,
    blocks: Vec<NodeId>,
}

/// Registry of the tables seen while flattening a document.
///
/// Tables keep their registration order; each collects the source
/// paragraphs whose converted blocks belong inside it.
#[derive(Debug)]
pub struct Tables<'a, 'input> {
    entries: IndexMap<NodeId, Entry<'a, 'input>>,
    tag_names: TagNames,
    pretty: bool,
}

impl<'a, 'input> Default for Tables<'a, 'input> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, 'input> Tables<'a, 'input> {
    /// Create an empty registry emitting the default tag names.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            tag_names: TagNames::default(),
            pretty: true,
        }
    }

    /// Set the element names used for tables, rows and cells.
    pub fn with_tag_names(mut self, tag_names: TagNames) -> Self {
        self.tag_names = tag_names;
        self
    }

    /// Enable or disable the indentation text inserted around rows and cells.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Begin collecting blocks for `table`.
    ///
    /// Registering the same table again clears what it collected so far.
    pub fn register(&mut self, table: Node<'a, 'input>) -> TableKey {
        let entry = Entry {
            node: table,
            blocks: Vec::new(),
        };
        let (index, _) = self.entries.insert_full(table.id(), entry);
        TableKey(index)
    }

    /// Record that `paragraph` was flattened out of the table behind `key`.
    pub fn add(&mut self, key: TableKey, paragraph: Node<'a, 'input>) {
        if let Some((_, entry)) = self.entries.get_index_mut(key.0) {
            entry.blocks.push(paragraph.id());
        }
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no table was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered tables in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'a, 'input>> + '_ {
        self.entries.values().map(|entry| entry.node)
    }

    /// Key of an already registered table.
    pub fn key(&self, table: NodeId) -> Option<TableKey> {
        self.entries.get_index_of(&table).map(TableKey)
    }

    /// Source paragraphs contributed to the table behind `key`.
    pub fn blocks(&self, key: TableKey) -> &[NodeId] {
        self.entries
            .get_index(key.0)
            .map(|(_, entry)| entry.blocks.as_slice())
            .unwrap_or(&[])
    }

    /// Rebuild the markup of every registered table inside `tree`.
    ///
    /// `object_map` maps each output block to the source paragraph it was
    /// converted from. Each table replaces the position of the first block
    /// in its subtree, and every contributed block moves into its cell.
    /// Returns the emitted table element of every assembled table.
    pub fn apply_markup(
        &self,
        tree: &mut HtmlTree,
        object_map: &ObjectMap,
    ) -> Result<IndexMap<NodeId, ElementId>> {
        let rmap: HashMap<NodeId, ElementId> =
            object_map.iter().map(|(block, p)| (*p, *block)).collect();
        let contributed: HashSet<NodeId> = self
            .entries
            .values()
            .flat_map(|entry| entry.blocks.iter().copied())
            .collect();

        let mut assembly = Assembly {
            tables: self,
            rmap: &rmap,
            contributed: &contributed,
            built: IndexMap::new(),
        };

        for (id, entry) in &self.entries {
            if assembly.built.contains_key(id) {
                continue;
            }
            let Some(first) = assembly.first_block(entry.node) else {
                log::debug!("skipping table {:?} without blocks", id);
                continue;
            };
            let anchor = assembly.lookup(first)?;
            let parent = tree.parent(anchor).ok_or_else(|| Error::DetachedBlock {
                paragraph: format!("{:?}", first),
            })?;
            let index = tree.index_of(parent, anchor).unwrap_or(0);

            let table = tree.create_element(self.tag_names.table.as_str());
            tree.insert(parent, index, table);
            assembly.build(tree, entry.node, table)?;
        }

        log::debug!("assembled {} tables", assembly.built.len());
        Ok(assembly.built)
    }
}

struct Assembly<'t, 'a, 'input> {
    tables: &'t Tables<'a, 'input>,
    rmap: &'t HashMap<NodeId, ElementId>,
    contributed: &'t HashSet<NodeId>,
    built: IndexMap<NodeId, ElementId>,
}

impl Assembly<'_, '_, '_> {
    /// The first contributed paragraph inside `table`, in document order.
    fn first_block(&self, table: Node<'_, '_>) -> Option<NodeId> {
        table
            .descendants()
            .filter(|n| is_tag(*n, "p"))
            .map(|n| n.id())
            .find(|id| self.contributed.contains(id))
    }

    fn lookup(&self, paragraph: NodeId) -> Result<ElementId> {
        self.rmap
            .get(&paragraph)
            .copied()
            .ok_or_else(|| Error::MissingBlock {
                paragraph: format!("{:?}", paragraph),
            })
    }

    fn build(&mut self, tree: &mut HtmlTree, table: Node<'_, '_>, element: ElementId) -> Result<()> {
        let tables = self.tables;
        let tags = &tables.tag_names;
        let pretty = tables.pretty;
        self.built.insert(table.id(), element);
        if pretty {
            tree.set_text(element, TABLE_TEXT);
        }

        let mut last_row = None;
        for tr in rows(table) {
            let row = tree.create_element(tags.row.as_str());
            if pretty {
                tree.set_text(row, ROW_TEXT);
                tree.set_tail(row, ROW_TAIL);
            }
            tree.append(element, row);
            last_row = Some(row);

            let mut last_cell = None;
            for tc in cells(tr) {
                let cell = tree.create_element(tags.cell.as_str());
                if pretty {
                    tree.set_tail(cell, CELL_TAIL);
                }
                tree.append(row, cell);
                last_cell = Some(cell);

                for content in cell_content(tc) {
                    if is_tag(content, "tbl") {
                        if self.first_block(content).is_none() {
                            continue;
                        }
                        let nested = tree.create_element(tags.table.as_str());
                        tree.append(cell, nested);
                        self.build(tree, content, nested)?;
                    } else if self.contributed.contains(&content.id()) {
                        let block = self.lookup(content.id())?;
                        tree.append(cell, block);
                    }
                }
            }
            match last_cell {
                Some(cell) if pretty => tree.set_tail(cell, LAST_CELL_TAIL),
                _ => {}
            }
        }
        match last_row {
            Some(row) if pretty => tree.set_tail(row, LAST_ROW_TAIL),
            _ => {}
        }
        Ok(())
    }
}

/// Paragraphs and nested tables of a cell, looking through content controls.
fn cell_content<'a, 'input>(tc: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    let mut out = Vec::new();
    collect_wrapped(tc, &["p", "tbl"], &mut out);
    out
}
