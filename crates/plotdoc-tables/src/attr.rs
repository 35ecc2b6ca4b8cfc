//! Attribute-table construction.

use std::collections::BTreeMap;

use plotdoc_backend::attrs::AttrRegistry;

use crate::html::RenderedTable;

/// One row of an attribute table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub name: String,
    pub default: String,
    /// Alternate names, sorted and deduplicated.
    pub aliases: Vec<String>,
    /// Text before the first period of the description string.
    pub type_label: String,
    pub description: String,
}

/// Build one row per attribute in `defaults`, sorted by name.
///
/// Missing descriptions degrade to empty strings, missing aliases to an
/// empty list; nothing here is fatal.
#[must_use]
pub fn build_attribute_rows(
    defaults: &BTreeMap<String, String>,
    registry: &AttrRegistry,
) -> Vec<AttributeRow> {
    let mut rows: Vec<AttributeRow> = defaults
        .iter()
        .map(|(name, default)| {
            let raw = registry.descriptions.get(name).map_or("", String::as_str);
            let (type_label, description) = split_description(raw);
            AttributeRow {
                name: name.clone(),
                default: default.clone(),
                aliases: aliases_for(name, registry),
                type_label,
                description,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Split a raw description at its first period into a type label and the
/// trimmed free text. A string with no period degrades to an empty type
/// label with the whole trimmed string as description.
fn split_description(raw: &str) -> (String, String) {
    match raw.find('.') {
        Some(dot) => (raw[..dot].to_owned(), raw[dot + 1..].trim().to_owned()),
        None => (String::new(), raw.trim().to_owned()),
    }
}

/// Every alias whose canonical target is `name`, sorted and deduplicated.
fn aliases_for(name: &str, registry: &AttrRegistry) -> Vec<String> {
    let mut aliases: Vec<String> = registry
        .aliases
        .iter()
        .filter(|(_, target)| target.as_str() == name)
        .map(|(alias, _)| alias.clone())
        .collect();
    aliases.sort_unstable();
    aliases.dedup();
    aliases
}

/// Flatten rows into display strings for HTML rendering.
#[must_use]
pub fn to_table(rows: &[AttributeRow]) -> RenderedTable {
    RenderedTable {
        columns: ["Attribute", "Default", "Aliases", "Type", "Description"]
            .map(str::to_owned)
            .to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.default.clone(),
                    row.aliases.join(", "),
                    row.type_label.clone(),
                    row.description.clone(),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use plotdoc_backend::attrs::{AttrGroup, attr_registry, group_defaults};
    use pretty_assertions::assert_eq;

    use super::*;

    fn synthetic_registry() -> AttrRegistry {
        AttrRegistry {
            descriptions: [
                ("alpha", "Number. Opacity value."),
                ("beta", "no period here"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
            aliases: [("a", "alpha"), ("al", "alpha"), ("b", "beta")]
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    fn synthetic_defaults() -> BTreeMap<String, String> {
        [("beta", "1"), ("alpha", "0.5"), ("gamma", ":auto")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        let names: Vec<_> = rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_description_split() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        assert_eq!(rows[0].type_label, "Number");
        assert_eq!(rows[0].description, "Opacity value.");
    }

    #[test]
    fn test_description_without_period_degrades() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        assert_eq!(rows[1].type_label, "");
        assert_eq!(rows[1].description, "no period here");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        assert_eq!(rows[2].type_label, "");
        assert_eq!(rows[2].description, "");
        assert!(rows[2].aliases.is_empty());
    }

    #[test]
    fn test_aliases_sorted_and_unique() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        assert_eq!(rows[0].aliases, ["a", "al"]);
    }

    #[test]
    fn test_builtin_series_group() {
        let rows = build_attribute_rows(
            &group_defaults(AttrGroup::Series),
            &attr_registry(),
        );
        let seriestype = rows.iter().find(|r| r.name == "seriestype").unwrap();
        assert_eq!(seriestype.type_label, "Symbol");
        assert_eq!(seriestype.aliases, ["st", "t"]);
    }

    #[test]
    fn test_to_table_shape() {
        let rows = build_attribute_rows(&synthetic_defaults(), &synthetic_registry());
        let table = to_table(&rows);
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows[0][2], "a, al");
    }
}
