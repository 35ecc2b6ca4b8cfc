//! Value universes classified by the support-matrix builds.
//!
//! These are the library-wide sets; whether a given backend supports an
//! entry is answered per backend by the capability queries.

use crate::attrs::{AttrGroup, group_defaults};

/// Every series type the library knows about.
pub const ALL_SERIES_TYPES: &[&str] = &[
    "area",
    "bar",
    "contour",
    "heatmap",
    "histogram",
    "line",
    "scatter",
    "step",
    "surface",
];

/// Every line style.
pub const ALL_STYLES: &[&str] = &["dash", "dashdot", "dot", "solid"];

/// Every marker shape.
pub const ALL_MARKERS: &[&str] = &["circle", "cross", "diamond", "hexagon", "none", "square"];

/// Every axis scale.
pub const ALL_SCALES: &[&str] = &["identity", "ln", "log2", "log10"];

/// Every attribute name across all attribute groups, sorted and
/// deduplicated.
#[must_use]
pub fn all_arguments() -> Vec<String> {
    let mut names: Vec<String> = AttrGroup::ALL
        .iter()
        .flat_map(|group| group_defaults(*group).into_keys())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_arguments_sorted_and_unique() {
        let names = all_arguments();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(names.contains(&"seriestype".to_owned()));
        assert!(names.contains(&"guide".to_owned()));
    }
}
