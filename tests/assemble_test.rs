//! Integration tests for table reassembly.

use docx_tables::assemble::{BlockConverter, Flattener, TagNames};
use docx_tables::html::{ElementId, HtmlTree};
use docx_tables::names::{child, is_tag, WML_NS};
use docx_tables::Error;
use roxmltree::{Document, Node};

fn document(body: &str) -> String {
    format!(
        r#"<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WML_NS, body
    )
}

fn para(text: &str) -> String {
    format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", text)
}

fn cell(content: &str) -> String {
    format!("<w:tc>{}</w:tc>", content)
}

fn row(cells: &[String]) -> String {
    format!("<w:tr>{}</w:tr>", cells.concat())
}

fn table(rows: &[String]) -> String {
    format!("<w:tbl>{}</w:tbl>", rows.concat())
}

/// Flatten and reassemble a document, returning the output tree.
fn assemble(xml: &str, tags: TagNames, pretty: bool) -> HtmlTree {
    let doc = Document::parse(xml).unwrap();
    let body = child(doc.root_element(), "body").unwrap();
    let mut tree = HtmlTree::new("body");
    let flat = Flattener::new()
        .with_tag_names(tags)
        .with_pretty(pretty)
        .flatten(body, &mut tree);
    flat.assemble(&mut tree).unwrap();
    tree
}

fn compact(xml: &str) -> String {
    assemble(xml, TagNames::html(), false).to_html_document()
}

#[test]
fn test_rows_and_cells_follow_source() {
    let xml = document(&table(&[
        row(&[cell(&para("a")), cell(&para("b")), cell(&para("c"))]),
        row(&[cell(&para("d"))]),
    ]));
    let tree = assemble(&xml, TagNames::default(), true);

    let root = tree.root();
    assert_eq!(tree.children(root).len(), 1);
    let table = tree.children(root)[0];
    assert_eq!(tree.tag(table), "table");

    let rows = tree.children(table);
    assert_eq!(rows.len(), 2);
    assert_eq!(tree.children(rows[0]).len(), 3);
    assert_eq!(tree.children(rows[1]).len(), 1);
    assert!(rows.iter().all(|r| tree.tag(*r) == "table-row"));

    let first = tree.children(rows[0])[0];
    assert_eq!(tree.tag(first), "table-cell");
    assert_eq!(tree.text(tree.children(first)[0]), "a");
}

#[test]
fn test_whitespace_layout() {
    let xml = document(&table(&[
        row(&[cell(&para("a")), cell(&para("b"))]),
        row(&[cell(&para("c"))]),
    ]));
    let html = assemble(&xml, TagNames::html(), true).to_html_document();
    assert_eq!(
        html,
        "<body><table>\n\t\t\
         <tr>\n\t\t\t<td><p>a</p></td>\n\t\t\t<td><p>b</p></td>\n\t\t</tr>\n\t\t\
         <tr>\n\t\t\t<td><p>c</p></td>\n\t\t</tr>\n\t\
         </table></body>"
    );
}

#[test]
fn test_table_replaces_first_block_position() {
    let xml = document(&format!(
        "{}{}{}",
        para("before"),
        table(&[row(&[cell(&para("x"))])]),
        para("after")
    ));
    assert_eq!(
        compact(&xml),
        "<body><p>before</p><table><tr><td><p>x</p></td></tr></table><p>after</p></body>"
    );
}

#[test]
fn test_multiple_paragraphs_keep_order() {
    let xml = document(&table(&[row(&[
        cell(&format!("{}{}{}", para("1"), para("2"), para("3"))),
        cell(&para("4")),
    ])]));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>1</p><p>2</p><p>3</p></td><td><p>4</p></td></tr></table></body>"
    );
}

#[test]
fn test_table_without_blocks_is_skipped() {
    let xml = document(&format!(
        "{}<w:tbl><w:tr><w:tc/></w:tr></w:tbl>{}",
        para("a"),
        para("b")
    ));
    assert_eq!(compact(&xml), "<body><p>a</p><p>b</p></body>");
}

#[test]
fn test_empty_cells_still_emitted() {
    let xml = document(&table(&[
        row(&[cell(&para("a")), "<w:tc><w:tcPr/></w:tc>".to_string()]),
        "<w:tr/>".to_string(),
    ]));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>a</p></td><td></td></tr><tr></tr></table></body>"
    );
}

#[test]
fn test_grid_span_does_not_change_structure() {
    let xml = document(&table(&[
        row(&[format!(
            r#"<w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr>{}</w:tc>"#,
            para("wide")
        )]),
        row(&[cell(&para("a")), cell(&para("b"))]),
    ]));
    let tree = assemble(&xml, TagNames::html(), false);
    let table = tree.children(tree.root())[0];
    let rows = tree.children(table);
    assert_eq!(tree.children(rows[0]).len(), 1);
    assert_eq!(tree.children(rows[1]).len(), 2);
}

#[test]
fn test_nested_table() {
    let inner = table(&[row(&[cell(&para("inner"))])]);
    let xml = document(&table(&[row(&[
        cell(&format!("{}{}", para("outer"), inner)),
        cell(&para("next")),
    ])]));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>outer</p><table><tr><td><p>inner</p></td></tr></table></td>\
         <td><p>next</p></td></tr></table></body>"
    );
}

#[test]
fn test_nested_table_as_first_content() {
    let inner = table(&[row(&[cell(&para("inner"))])]);
    let xml = document(&format!(
        "{}{}",
        para("lead"),
        table(&[row(&[cell(&inner), cell(&para("x"))])])
    ));
    assert_eq!(
        compact(&xml),
        "<body><p>lead</p><table><tr><td><table><tr><td><p>inner</p></td></tr></table></td>\
         <td><p>x</p></td></tr></table></body>"
    );
}

#[test]
fn test_content_controls_in_cells() {
    let xml = document(&table(&[row(&[cell(&format!(
        "<w:sdt><w:sdtContent>{}</w:sdtContent></w:sdt>",
        para("ctl")
    ))])]));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>ctl</p></td></tr></table></body>"
    );
}

#[test]
fn test_cell_inside_content_control() {
    let xml = document(&table(&[format!(
        "<w:tr>{}<w:sdt><w:sdtContent>{}</w:sdtContent></w:sdt></w:tr>",
        cell(&para("a")),
        cell(&para("b"))
    )]));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>a</p></td><td><p>b</p></td></tr></table></body>"
    );
}

#[test]
fn test_row_inside_content_control() {
    let xml = document(&format!(
        "{}{}",
        table(&[
            row(&[cell(&para("a"))]),
            format!(
                "<w:sdt><w:sdtContent>{}</w:sdtContent></w:sdt>",
                row(&[cell(&para("b"))])
            ),
            format!("<w:customXml>{}</w:customXml>", row(&[cell(&para("c"))])),
        ]),
        para("after")
    ));
    assert_eq!(
        compact(&xml),
        "<body><table><tr><td><p>a</p></td></tr><tr><td><p>b</p></td></tr>\
         <tr><td><p>c</p></td></tr></table><p>after</p></body>"
    );
}

/// Emits a heading for every paragraph.
struct HeadingConverter;

impl BlockConverter for HeadingConverter {
    fn convert(&mut self, paragraph: Node<'_, '_>, tree: &mut HtmlTree) -> ElementId {
        let block = tree.create_element("h2");
        let text: String = paragraph
            .descendants()
            .filter(|n| is_tag(*n, "t"))
            .filter_map(|n| n.text())
            .collect();
        tree.set_text(block, text);
        block
    }
}

#[test]
fn test_custom_block_converter() {
    let xml = document(&table(&[row(&[cell(&para("t"))])]));
    let doc = Document::parse(&xml).unwrap();
    let body = child(doc.root_element(), "body").unwrap();

    let mut tree = HtmlTree::new("div");
    let mut flattener = Flattener::with_converter(HeadingConverter)
        .with_tag_names(TagNames::html())
        .with_pretty(false);
    let flat = flattener.flatten(body, &mut tree);
    flat.assemble(&mut tree).unwrap();

    assert_eq!(
        tree.to_html_document(),
        "<div><table><tr><td><h2>t</h2></td></tr></table></div>"
    );
}

#[test]
fn test_missing_block_aborts() {
    let xml = document(&table(&[row(&[cell(&para("a"))])]));
    let doc = Document::parse(&xml).unwrap();
    let body = child(doc.root_element(), "body").unwrap();

    let mut tree = HtmlTree::new("body");
    let mut flat = Flattener::new().flatten(body, &mut tree);
    flat.object_map.clear();

    let err = flat.assemble(&mut tree).unwrap_err();
    assert!(matches!(err, Error::MissingBlock { .. }));
}
