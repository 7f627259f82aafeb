//! XML utility functions for navigating parsed documents.
//!
//! Lookups match on local tag names, so the namespaced RFC index and the
//! namespace-free BibXML files go through the same helpers.

use roxmltree::Node;

use crate::error::{BibError, Result};

/// Get the tag name without namespace prefix.
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given local tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given local tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use ietfbib2bibtex::xml::find_child;
///
/// let doc = Document::parse("<root><a/><b/></root>").unwrap();
/// assert!(find_child(doc.root_element(), "a").is_some());
/// assert!(find_child(doc.root_element(), "c").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given local tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Get the trimmed text of the first child element with the given tag name.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag)
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
}

/// Like [`find_child`], but a missing child is an error.
pub fn require_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    context: &str,
) -> Result<Node<'a, 'input>> {
    find_child(node, tag).ok_or_else(|| BibError::MissingElement {
        element: tag.to_string(),
        context: context.to_string(),
    })
}

/// Like [`child_text`], but a missing child is an error.
pub fn require_text(node: Node<'_, '_>, tag: &str, context: &str) -> Result<String> {
    child_text(node, tag).ok_or_else(|| BibError::MissingElement {
        element: tag.to_string(),
        context: context.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_find_child_ignores_namespace() {
        let xml = r#"<index xmlns="http://www.rfc-editor.org/rfc-index">
            <rfc-entry><doc-id>RFC0781</doc-id></rfc-entry>
        </index>"#;
        let doc = Document::parse(xml).unwrap();
        let entry = find_child(doc.root_element(), "rfc-entry").unwrap();
        assert_eq!(child_text(entry, "doc-id"), Some("RFC0781".to_string()));
    }

    #[test]
    fn test_find_children() {
        let doc = Document::parse("<root><item>1</item><other/><item>2</item></root>").unwrap();
        let items: Vec<_> = find_children(doc.root_element(), "item").collect();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_child_text_trims() {
        let doc = Document::parse("<root><title>  A Title \n </title></root>").unwrap();
        assert_eq!(
            child_text(doc.root_element(), "title"),
            Some("A Title".to_string())
        );
        assert_eq!(child_text(doc.root_element(), "missing"), None);
    }

    #[test]
    fn test_require_text_missing() {
        let doc = Document::parse("<root/>").unwrap();
        let err = require_text(doc.root_element(), "title", "RFC0781").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required XML element: title in RFC0781"
        );
    }
}
