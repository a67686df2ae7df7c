//! Declarative extraction rule types.

use crate::codelist::Codelist;
use crate::xml::NamespaceMode;

/// One candidate element path for a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Element path relative to the document root element.
    pub path: String,

    /// How element names in the path are matched.
    pub mode: NamespaceMode,
}

/// How many matches of the winning lookup contribute to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Only the first matching element.
    First,

    /// Every matching element, joined in document order.
    Repeatable,
}

/// Where the value of a matched element is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Concatenated descendant text.
    Text,

    /// A named attribute (`prefix:name` for namespaced attributes).
    Attribute(String),

    /// A named attribute, or element text when the attribute is missing.
    AttributeOrText(String),

    /// The `value` attribute, then `codeListValue`, then element text.
    Code,
}

/// Maps one logical field to the elements it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    /// Display name of the field (unique within a rule set).
    pub field: String,

    /// Candidate lookups; namespace-aware lookups precede agnostic ones.
    pub lookups: Vec<Lookup>,

    pub cardinality: Cardinality,

    pub value: ValueSource,

    /// Codelist the raw value is resolved through, if any.
    pub codelist: Option<Codelist>,
}

impl ExtractionRule {
    fn new(field: impl Into<String>, value: ValueSource) -> Self {
        Self {
            field: field.into(),
            lookups: Vec::new(),
            cardinality: Cardinality::First,
            value,
            codelist: None,
        }
    }

    /// Rule reading element text.
    #[must_use]
    pub fn text(field: impl Into<String>) -> Self {
        Self::new(field, ValueSource::Text)
    }

    /// Rule reading a named attribute.
    #[must_use]
    pub fn attribute(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(field, ValueSource::Attribute(name.into()))
    }

    /// Rule reading a named attribute, falling back to element text.
    #[must_use]
    pub fn attribute_or_text(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(field, ValueSource::AttributeOrText(name.into()))
    }

    /// Rule reading a code value without codelist resolution (language codes).
    #[must_use]
    pub fn code(field: impl Into<String>) -> Self {
        Self::new(field, ValueSource::Code)
    }

    /// Rule reading a code value and resolving it through a codelist.
    #[must_use]
    pub fn coded(field: impl Into<String>, codelist: Codelist) -> Self {
        Self::new(field, ValueSource::Code).with_codelist(codelist)
    }

    /// Add a namespace-aware ISO 19139 lookup.
    ///
    /// Inserted after any existing namespace-aware lookups and before all
    /// agnostic ones, so ISO paths are always tried first.
    #[must_use]
    pub fn iso(mut self, path: impl Into<String>) -> Self {
        let at = self
            .lookups
            .iter()
            .position(|l| l.mode == NamespaceMode::Agnostic)
            .unwrap_or(self.lookups.len());
        self.lookups.insert(
            at,
            Lookup {
                path: path.into(),
                mode: NamespaceMode::Qualified,
            },
        );
        self
    }

    /// Add a namespace-agnostic (ArcGIS) lookup.
    #[must_use]
    pub fn arcgis(mut self, path: impl Into<String>) -> Self {
        self.lookups.push(Lookup {
            path: path.into(),
            mode: NamespaceMode::Agnostic,
        });
        self
    }

    /// Collect every match instead of only the first.
    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.cardinality = Cardinality::Repeatable;
        self
    }

    /// Resolve values through a codelist.
    #[must_use]
    pub fn with_codelist(mut self, codelist: Codelist) -> Self {
        self.codelist = Some(codelist);
        self
    }
}
