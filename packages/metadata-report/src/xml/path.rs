//! Minimal path selection over a roxmltree DOM.
//!
//! Supported grammar, relative to a context element:
//!
//! - `a/b` selects child `b` of child `a`
//! - `//a` selects `a` at any depth below the context
//! - `*` matches any element
//! - `gmd:title` matches by namespace URI in [`NamespaceMode::Qualified`]
//!   and by local name in [`NamespaceMode::Agnostic`]
//! - a leading `.` is ignored, so `.//a` equals `//a`

use roxmltree::Node;
use tracing::debug;

use crate::config::namespace_uri;

/// How element names in a path are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceMode {
    /// `prefix:name` must match namespace URI and local name; an unprefixed
    /// step only matches elements without a namespace.
    Qualified,

    /// Only local names are compared; prefixes are ignored.
    Agnostic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameTest<'p> {
    Any,
    Name {
        prefix: Option<&'p str>,
        local: &'p str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step<'p> {
    axis: Axis,
    test: NameTest<'p>,
}

fn parse(path: &str) -> Vec<Step<'_>> {
    let path = path.strip_prefix('.').unwrap_or(path);
    let mut steps = Vec::new();
    let mut axis = Axis::Child;
    let mut leading = true;

    for segment in path.split('/') {
        if segment.is_empty() {
            // The first empty segment is just the leading slash.
            if !leading || path.starts_with("//") {
                axis = Axis::Descendant;
            }
            leading = false;
            continue;
        }
        leading = false;

        let test = if segment == "*" {
            NameTest::Any
        } else {
            match segment.split_once(':') {
                Some((prefix, local)) => NameTest::Name {
                    prefix: Some(prefix),
                    local,
                },
                None => NameTest::Name {
                    prefix: None,
                    local: segment,
                },
            }
        };
        steps.push(Step { axis, test });
        axis = Axis::Child;
    }

    steps
}

fn matches(node: Node<'_, '_>, test: NameTest<'_>, mode: NamespaceMode) -> bool {
    if !node.is_element() {
        return false;
    }
    match test {
        NameTest::Any => true,
        NameTest::Name { prefix, local } => {
            let tag = node.tag_name();
            if tag.name() != local {
                return false;
            }
            match (mode, prefix) {
                (NamespaceMode::Agnostic, _) => true,
                (NamespaceMode::Qualified, None) => tag.namespace().is_none(),
                (NamespaceMode::Qualified, Some(p)) => match namespace_uri(p) {
                    Some(uri) => tag.namespace() == Some(uri),
                    None => {
                        debug!(prefix = p, "unknown namespace prefix in path");
                        false
                    }
                },
            }
        }
    }
}

/// Select all elements matching `path` below `context`, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use metadata_report::xml::{select, NamespaceMode};
///
/// let xml = r#"<metadata><dataIdInfo><searchKeys>
///     <keyword>water</keyword><keyword>land</keyword>
/// </searchKeys></dataIdInfo></metadata>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let found = select(doc.root_element(), "//dataIdInfo//keyword", NamespaceMode::Agnostic);
/// let words: Vec<_> = found.iter().filter_map(|n| n.text()).collect();
/// assert_eq!(words, vec!["water", "land"]);
/// ```
pub fn select<'a, 'input>(
    context: Node<'a, 'input>,
    path: &str,
    mode: NamespaceMode,
) -> Vec<Node<'a, 'input>> {
    let steps = parse(path);
    if steps.is_empty() {
        return Vec::new();
    }

    let mut current = vec![context];
    for step in steps {
        let mut next: Vec<Node<'a, 'input>> = Vec::new();
        for node in &current {
            match step.axis {
                Axis::Child => next.extend(
                    node.children()
                        .filter(|c| matches(*c, step.test, mode)),
                ),
                Axis::Descendant => next.extend(
                    node.descendants()
                        .skip(1)
                        .filter(|c| matches(*c, step.test, mode)),
                ),
            }
        }
        next.sort_by_key(|n| n.id().get());
        next.dedup_by_key(|n| n.id());
        if next.is_empty() {
            return next;
        }
        current = next;
    }

    current
}

/// First element matching `path` below `context`.
pub fn select_first<'a, 'input>(
    context: Node<'a, 'input>,
    path: &str,
    mode: NamespaceMode,
) -> Option<Node<'a, 'input>> {
    select(context, path, mode).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const ISO: &str = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
        xmlns:gco="http://www.isotc211.org/2005/gco">
      <gmd:identificationInfo>
        <gmd:MD_DataIdentification>
          <gmd:citation><gmd:CI_Citation>
            <gmd:title><gco:CharacterString>Soils</gco:CharacterString></gmd:title>
          </gmd:CI_Citation></gmd:citation>
        </gmd:MD_DataIdentification>
      </gmd:identificationInfo>
    </gmd:MD_Metadata>"#;

    fn texts(nodes: &[Node<'_, '_>]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| crate::xml::collect_text(*n))
            .collect()
    }

    #[test]
    fn test_parse_axes() {
        let steps = parse("//a/b//c");
        let axes: Vec<Axis> = steps.iter().map(|s| s.axis).collect();
        assert_eq!(axes, vec![Axis::Descendant, Axis::Child, Axis::Descendant]);

        let steps = parse("a/*");
        assert_eq!(steps[0].axis, Axis::Child);
        assert_eq!(steps[1].test, NameTest::Any);

        let steps = parse(".//x");
        assert_eq!(steps[0].axis, Axis::Descendant);
    }

    #[test]
    fn test_qualified_path_with_wildcard() {
        let doc = Document::parse(ISO).unwrap();
        let found = select(
            doc.root_element(),
            "gmd:identificationInfo/*/gmd:citation/gmd:CI_Citation/gmd:title",
            NamespaceMode::Qualified,
        );
        assert_eq!(texts(&found), vec!["Soils"]);
    }

    #[test]
    fn test_qualified_rejects_wrong_namespace() {
        let xml = r#"<root xmlns:gmd="urn:not-iso"><gmd:title>x</gmd:title></root>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(select(doc.root_element(), "gmd:title", NamespaceMode::Qualified).is_empty());
        assert_eq!(
            select(doc.root_element(), "gmd:title", NamespaceMode::Agnostic).len(),
            1
        );
    }

    #[test]
    fn test_qualified_unprefixed_step_needs_no_namespace() {
        let doc = Document::parse(ISO).unwrap();
        assert!(select(doc.root_element(), "//title", NamespaceMode::Qualified).is_empty());
        assert_eq!(
            select(doc.root_element(), "//title", NamespaceMode::Agnostic).len(),
            1
        );
    }

    #[test]
    fn test_relative_path_starts_at_children() {
        let xml = r#"<metadata><idCitation><resTitle>Top</resTitle></idCitation>
            <dataIdInfo><idCitation><resTitle>Nested</resTitle></idCitation></dataIdInfo>
        </metadata>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        let direct = select(root, "idCitation/resTitle", NamespaceMode::Agnostic);
        assert_eq!(texts(&direct), vec!["Top"]);

        let anywhere = select(root, "//idCitation/resTitle", NamespaceMode::Agnostic);
        assert_eq!(texts(&anywhere), vec!["Top", "Nested"]);
    }

    #[test]
    fn test_nested_descendant_steps_are_deduplicated() {
        let xml = r#"<m><a><a><k>1</k></a><k>2</k></a></m>"#;
        let doc = Document::parse(xml).unwrap();
        let found = select(doc.root_element(), "//a//k", NamespaceMode::Agnostic);
        assert_eq!(texts(&found), vec!["1", "2"]);
    }

    #[test]
    fn test_child_step_results_follow_document_order() {
        // The outer <a> is visited first but its <k> comes last in the document.
        let xml = r#"<m><a><a><k>1</k></a><k>2</k></a></m>"#;
        let doc = Document::parse(xml).unwrap();
        let found = select(doc.root_element(), "//a/k", NamespaceMode::Agnostic);
        assert_eq!(texts(&found), vec!["1", "2"]);
    }

    #[test]
    fn test_select_first_and_empty_path() {
        let doc = Document::parse(ISO).unwrap();
        let root = doc.root_element();
        assert!(select_first(root, "//gmd:title", NamespaceMode::Qualified).is_some());
        assert!(select_first(root, "//gmd:abstract", NamespaceMode::Qualified).is_none());
        assert!(select(root, "", NamespaceMode::Agnostic).is_empty());
    }
}
