//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node, ParsingOptions};

use crate::config::namespace_uri;
use crate::error::Result;

/// Parse XML text, accepting a `<!DOCTYPE>` declaration.
///
/// ArcGIS exports commonly reference the ESRI profile DTD. The DTD is not
/// fetched; only its internal entity declarations are honoured.
///
/// # Returns
/// * `Err(ReportError::XmlParse)` if the text is not well-formed XML
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use metadata_report::xml::get_tag_name;
///
/// let xml = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "MD_Metadata");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check whether an element has the given namespace URI and local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use metadata_report::config::GMD_NS;
/// use metadata_report::xml::is_qualified;
///
/// let xml = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(is_qualified(doc.root_element(), GMD_NS, "MD_Metadata"));
/// assert!(!is_qualified(doc.root_element(), GMD_NS, "metadata"));
/// ```
pub fn is_qualified(node: Node<'_, '_>, namespace: &str, local: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(namespace)
        && get_tag_name(node) == local
}

/// Concatenated text of a node and all its descendants, trimmed.
///
/// Text of nested elements and the tails between them is kept in document
/// order, so `<a>x<b>y</b>z</a>` yields `xyz`.
pub fn collect_text(node: Node<'_, '_>) -> String {
    let mut text = String::new();
    push_text(node, &mut text);
    text.trim().to_string()
}

fn push_text(node: Node<'_, '_>, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                out.push_str(t);
            }
        } else if child.is_element() {
            push_text(child, out);
        }
    }
}

/// Get an attribute value by name.
///
/// A `prefix:local` name is resolved through the known ISO namespace
/// prefixes; a plain name matches an attribute without namespace.
///
/// # Returns
/// Attribute value, or `None` if not found or the prefix is unknown
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    match name.split_once(':') {
        Some((prefix, local)) => {
            let uri = namespace_uri(prefix)?;
            node.attribute((uri, local))
        }
        None => node
            .attributes()
            .find(|a| a.namespace().is_none() && a.name() == name)
            .map(|a| a.value()),
    }
}
