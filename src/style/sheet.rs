//! Named table styles from a `w:styles` part.

use super::Cascade;
use crate::error::Result;
use crate::model::TableStyle;
use crate::names::{child, children, get, is_tag};
use crate::parser::FragmentResolver;
use std::collections::{HashMap, HashSet};

struct RawStyle {
    style: TableStyle,
    based_on: Option<String>,
}

/// Resolved named table styles, by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, TableStyle>,
    default_id: Option<String>,
}

impl StyleSheet {
    /// Create a sheet with no styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `styles.xml` document.
    pub fn parse(xml: &str, resolver: &dyn FragmentResolver) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Ok(Self::from_document(&doc, resolver))
    }

    /// Read the table styles of a parsed `styles.xml` document.
    ///
    /// `w:basedOn` chains are resolved top-down so every stored style is
    /// complete on its own.
    pub fn from_document(doc: &roxmltree::Document<'_>, resolver: &dyn FragmentResolver) -> Self {
        let mut raw = HashMap::new();
        let mut default_id = None;

        let root = doc.root_element();
        if !is_tag(root, "styles") {
            log::warn!("style part root is not w:styles");
        }
        for definition in children(root, "style") {
            if get(definition, "type") != Some("table") {
                continue;
            }
            let Some(id) = get(definition, "styleId") else {
                continue;
            };
            if matches!(get(definition, "default"), Some("1" | "true" | "on")) {
                default_id = Some(id.to_string());
            }
            let based_on = child(definition, "basedOn")
                .and_then(|b| get(b, "val"))
                .map(str::to_string);
            raw.insert(
                id.to_string(),
                RawStyle {
                    style: TableStyle::from_definition(definition, resolver),
                    based_on,
                },
            );
        }

        let mut styles = HashMap::new();
        let ids: Vec<String> = raw.keys().cloned().collect();
        for id in ids {
            let mut visiting = HashSet::new();
            resolve(&id, &raw, &mut styles, &mut visiting);
        }
        log::debug!("loaded {} table styles", styles.len());

        Self { styles, default_id }
    }

    /// Insert an already-resolved style.
    pub fn insert(&mut self, id: impl Into<String>, style: TableStyle) {
        self.styles.insert(id.into(), style);
    }

    /// Mark a style as the document's default table style.
    pub fn set_default(&mut self, id: impl Into<String>) {
        self.default_id = Some(id.into());
    }

    /// The default table style, if the document declares one.
    pub fn default_style(&self) -> Option<&TableStyle> {
        self.default_id.as_deref().and_then(|id| self.styles.get(id))
    }

    /// Look up the style a table references, falling back to the default.
    pub fn table_style(&self, id: Option<&str>) -> Option<&TableStyle> {
        match id {
            Some(id) => match self.styles.get(id) {
                Some(style) => Some(style),
                None => {
                    log::warn!("unknown table style {:?}, using the default", id);
                    self.default_style()
                }
            },
            None => self.default_style(),
        }
    }

    /// Number of table styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the sheet has no table styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn resolve(
    id: &str,
    raw: &HashMap<String, RawStyle>,
    resolved: &mut HashMap<String, TableStyle>,
    visiting: &mut HashSet<String>,
) -> Option<TableStyle> {
    if let Some(done) = resolved.get(id) {
        return Some(done.clone());
    }
    let entry = raw.get(id)?;
    if !visiting.insert(id.to_string()) {
        log::warn!("table style {:?} is based on itself", id);
        return None;
    }

    let mut style = entry.style.clone();
    let parent = entry
        .based_on
        .as_deref()
        .and_then(|parent_id| resolve(parent_id, raw, resolved, visiting));
    if let Some(parent) = parent {
        inherit_overrides(&mut style, &parent);
        style.resolve_based_on(&parent);
    }

    resolved.insert(id.to_string(), style.clone());
    Some(style)
}

/// Regions the child does not redefine keep the parent's bundle.
fn inherit_overrides(style: &mut TableStyle, parent: &TableStyle) {
    let Some(inherited) = parent.overrides.as_ref() else {
        return;
    };
    let own = style.overrides.get_or_insert_with(Default::default);
    for (region, bundle) in inherited {
        if !own.contains_key(region) {
            own.insert(*region, bundle.clone());
        }
    }
}
