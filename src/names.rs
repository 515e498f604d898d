//! WordprocessingML qualified names and child lookup helpers.

use roxmltree::Node;

/// The WordprocessingML main namespace.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Check whether `node` is the `w:<name>` element.
pub fn is_tag(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// Iterate over the `w:<name>` element children of `node`, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| is_tag(*n, name))
}

/// The first `w:<name>` child of `node`.
pub fn child<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'a str) -> Option<Node<'a, 'input>> {
    children(node, name).next()
}

/// Check whether `node` is a content control or custom XML wrapper.
pub fn is_wrapper(node: Node<'_, '_>) -> bool {
    is_tag(node, "sdt") || is_tag(node, "sdtContent") || is_tag(node, "customXml")
}

/// The `w:<name>` children of `node`, looking through wrapper elements.
pub fn wrapped_children<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    let mut out = Vec::new();
    collect_wrapped(node, &[name], &mut out);
    out
}

/// Collect the children of `node` named by `names`, descending into wrappers.
pub fn collect_wrapped<'a, 'input>(
    node: Node<'a, 'input>,
    names: &[&str],
    out: &mut Vec<Node<'a, 'input>>,
) {
    for child in node.children().filter(|n| n.is_element()) {
        if names.iter().any(|name| is_tag(child, name)) {
            out.push(child);
        } else if is_wrapper(child) {
            collect_wrapped(child, names, out);
        }
    }
}

/// Rows of a `w:tbl`, including rows inside content controls.
pub fn rows<'a, 'input>(tbl: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    wrapped_children(tbl, "tr")
}

/// Cells of a `w:tr`, including cells inside content controls.
pub fn cells<'a, 'input>(tr: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    wrapped_children(tr, "tc")
}

/// The value of the `w:<attr>` attribute.
pub fn get<'a>(node: Node<'a, '_>, attr: &str) -> Option<&'a str> {
    node.attribute((WML_NS, attr))
}
