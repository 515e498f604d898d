//! Flattening a document body into a block stream.

use super::{ObjectMap, TableKey, TagNames, Tables};
use crate::error::Result;
use crate::html::{ElementId, HtmlTree};
use crate::names::is_tag;
use indexmap::IndexMap;
use roxmltree::{Node, NodeId};

/// Converts one source paragraph into an output block.
pub trait BlockConverter {
    /// Create the block for `paragraph` in `tree`. The block is returned detached.
    fn convert(&mut self, paragraph: Node<'_, '_>, tree: &mut HtmlTree) -> ElementId;
}

/// Emits a `<p>` holding the paragraph's plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBlockConverter;

impl BlockConverter for TextBlockConverter {
    fn convert(&mut self, paragraph: Node<'_, '_>, tree: &mut HtmlTree) -> ElementId {
        let block = tree.create_element("p");
        tree.set_text(block, paragraph_text(paragraph));
        block
    }
}

/// Concatenated run text of a paragraph. Tabs and breaks become whitespace.
pub(crate) fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        if is_tag(node, "t") {
            text.push_str(node.text().unwrap_or_default());
        } else if is_tag(node, "tab") && !node.parent().is_some_and(|p| is_tag(p, "tabs")) {
            text.push('\t');
        } else if is_tag(node, "br") || is_tag(node, "cr") {
            text.push('\n');
        }
    }
    text
}

/// The outcome of flattening a body.
#[derive(Debug)]
pub struct Flattened<'a, 'input> {
    /// Registered tables and their contributed paragraphs
    pub tables: Tables<'a, 'input>,
    /// Output block → source paragraph
    pub object_map: ObjectMap,
}

impl Flattened<'_, '_> {
    /// Re-nest the flattened blocks inside `tree`.
    pub fn assemble(&self, tree: &mut HtmlTree) -> Result<IndexMap<NodeId, ElementId>> {
        self.tables.apply_markup(tree, &self.object_map)
    }
}

/// Walks a document body in order, converting paragraphs and registering tables.
#[derive(Debug)]
pub struct Flattener<C = TextBlockConverter> {
    converter: C,
    tag_names: TagNames,
    pretty: bool,
}

impl Default for Flattener<TextBlockConverter> {
    fn default() -> Self {
        Self::new()
    }
}

impl Flattener<TextBlockConverter> {
    /// Create a flattener emitting plain text blocks.
    pub fn new() -> Self {
        Self::with_converter(TextBlockConverter)
    }
}

impl<C: BlockConverter> Flattener<C> {
    /// Create a flattener with a custom block converter.
    pub fn with_converter(converter: C) -> Self {
        Self {
            converter,
            tag_names: TagNames::default(),
            pretty: true,
        }
    }

    /// Set the element names the registered tables will emit.
    pub fn with_tag_names(mut self, tag_names: TagNames) -> Self {
        self.tag_names = tag_names;
        self
    }

    /// Enable or disable indentation text in the assembled tables.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Flatten `body` into the root of `tree`.
    pub fn flatten<'a, 'input>(
        &mut self,
        body: Node<'a, 'input>,
        tree: &mut HtmlTree,
    ) -> Flattened<'a, 'input> {
        let mut out = Flattened {
            tables: Tables::new()
                .with_tag_names(self.tag_names.clone())
                .with_pretty(self.pretty),
            object_map: ObjectMap::new(),
        };
        self.walk(body, None, tree, &mut out);
        log::debug!(
            "flattened {} blocks from {} tables",
            out.object_map.len(),
            out.tables.len()
        );
        out
    }

    fn walk<'a, 'input>(
        &mut self,
        node: Node<'a, 'input>,
        table: Option<TableKey>,
        tree: &mut HtmlTree,
        out: &mut Flattened<'a, 'input>,
    ) {
        for child in node.children().filter(|n| n.is_element()) {
            if is_tag(child, "p") {
                let block = self.converter.convert(child, tree);
                tree.append(tree.root(), block);
                out.object_map.insert(block, child.id());
                if let Some(key) = table {
                    out.tables.add(key, child);
                }
            } else if is_tag(child, "tbl") {
                let key = out.tables.register(child);
                self.walk(child, Some(key), tree, out);
            } else if !is_tag(child, "sectPr") {
                self.walk(child, table, tree, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::{child, testing::wml};

    #[test]
    fn test_paragraph_text() {
        let xml = wml(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr>
               <w:r><w:t>a</w:t><w:tab/><w:t xml:space="preserve">b </w:t></w:r>
               <w:hyperlink><w:r><w:br/><w:t>c</w:t></w:r></w:hyperlink></w:p>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let p = child(doc.root_element(), "p").unwrap();
        assert_eq!(paragraph_text(p), "a\tb \nc");
    }

    #[test]
    fn test_flatten_registers_tables() {
        let xml = wml(
            r#"<w:body>
                 <w:p><w:r><w:t>before</w:t></w:r></w:p>
                 <w:tbl><w:tr><w:tc><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
                 <w:sdt><w:sdtContent><w:p/></w:sdtContent></w:sdt>
                 <w:sectPr/>
               </w:body>"#,
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let body = child(doc.root_element(), "body").unwrap();

        let mut tree = HtmlTree::new("body");
        let flat = Flattener::new().flatten(body, &mut tree);

        assert_eq!(flat.object_map.len(), 3);
        assert_eq!(tree.children(tree.root()).len(), 3);
        assert_eq!(flat.tables.len(), 1);
        let tbl = child(body, "tbl").unwrap();
        let key = flat.tables.key(tbl.id()).unwrap();
        assert_eq!(flat.tables.blocks(key).len(), 1);
    }
}
