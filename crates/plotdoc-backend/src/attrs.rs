//! Attribute registries: defaults, descriptions and aliases.
//!
//! The registries are exposed as owned configuration values rather than
//! ambient globals, so the attribute-table builder can be tested against
//! synthetic data. Description strings follow the `"Type. Free text"`
//! convention; the text before the first period is the type label.

use std::collections::BTreeMap;

/// Attribute groups, one table document per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrGroup {
    Series,
    Subplot,
    Plot,
    Axis,
}

impl AttrGroup {
    pub const ALL: [AttrGroup; 4] = [
        AttrGroup::Series,
        AttrGroup::Subplot,
        AttrGroup::Plot,
        AttrGroup::Axis,
    ];

    /// Group label used in artifact filenames (`<label>_attr.html`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttrGroup::Series => "series",
            AttrGroup::Subplot => "subplot",
            AttrGroup::Plot => "plot",
            AttrGroup::Axis => "axis",
        }
    }
}

/// Description strings and alias mappings shared by every table build.
#[derive(Debug, Clone)]
pub struct AttrRegistry {
    /// Attribute name to raw `"Type. Free text"` description.
    pub descriptions: BTreeMap<String, String>,
    /// Alias name to canonical attribute name.
    pub aliases: BTreeMap<String, String>,
}

/// The built-in registry.
#[must_use]
pub fn attr_registry() -> AttrRegistry {
    AttrRegistry {
        descriptions: to_map(DESCRIPTIONS),
        aliases: to_map(ALIASES),
    }
}

/// Default values for one attribute group.
#[must_use]
pub fn group_defaults(group: AttrGroup) -> BTreeMap<String, String> {
    let table = match group {
        AttrGroup::Series => SERIES_DEFAULTS,
        AttrGroup::Subplot => SUBPLOT_DEFAULTS,
        AttrGroup::Plot => PLOT_DEFAULTS,
        AttrGroup::Axis => AXIS_DEFAULTS,
    };
    to_map(table)
}

fn to_map(table: &[(&str, &str)]) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

const SERIES_DEFAULTS: &[(&str, &str)] = &[
    ("bar_width", ":auto"),
    ("bins", "30"),
    ("fillalpha", "1.0"),
    ("fillcolor", ":match"),
    ("label", "\"\""),
    ("linecolor", ":auto"),
    ("linestyle", ":solid"),
    ("linewidth", "1"),
    ("markercolor", ":match"),
    ("markershape", ":none"),
    ("markersize", "4"),
    ("seriestype", ":line"),
    ("smooth", "false"),
];

const SUBPLOT_DEFAULTS: &[(&str, &str)] = &[
    ("aspect_ratio", ":auto"),
    ("background_color_subplot", ":match"),
    ("colorbar", ":legend"),
    ("legend", "true"),
    ("margin", "1mm"),
    ("projection", ":none"),
    ("title", "\"\""),
    ("title_location", ":center"),
];

const PLOT_DEFAULTS: &[(&str, &str)] = &[
    ("background_color", ":white"),
    ("dpi", "100"),
    ("layout", "1"),
    ("overwrite_figure", "true"),
    ("show", "false"),
    ("size", "(600, 400)"),
    ("window_title", "\"plotdoc\""),
];

const AXIS_DEFAULTS: &[(&str, &str)] = &[
    ("flip", "false"),
    ("grid", "true"),
    ("guide", "\"\""),
    ("guidefont", "font(11)"),
    ("lims", ":auto"),
    ("minorgrid", "false"),
    ("rotation", "0"),
    ("scale", ":identity"),
    ("tickfont", "font(8)"),
    ("ticks", ":auto"),
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("aspect_ratio", "Symbol or Number. Plot area aspect ratio, or :auto to fit."),
    ("background_color", "Color. Background of the full plot window."),
    ("background_color_subplot", "Color. Background of one subplot, :match inherits."),
    ("bar_width", "Number. Width of bars as a fraction of the slot, :auto to derive."),
    ("bins", "Integer. Number of histogram bins."),
    ("colorbar", "Symbol. Colorbar position, or :legend to share the legend slot."),
    ("dpi", "Integer. Dots per inch of rasterized output."),
    ("fillalpha", "Number. Opacity of filled regions, from 0 to 1."),
    ("fillcolor", "Color. Fill color, :match follows the series color."),
    ("flip", "Bool. Reverse the axis direction."),
    ("grid", "Bool. Draw grid lines."),
    ("guide", "String. Axis guide label."),
    ("guidefont", "Font. Font of the axis guide."),
    ("label", "String. Legend entry for the series; empty hides it."),
    ("layout", "Integer or grid shape. Subplot layout."),
    ("legend", "Bool or Symbol. Legend visibility or position."),
    ("lims", "Tuple. Axis limits, :auto to fit the data."),
    ("linecolor", "Color. Stroke color of lines, :auto cycles the palette."),
    ("linestyle", "Symbol. Stroke style, for example :solid or :dash."),
    ("linewidth", "Number. Stroke width in points."),
    ("margin", "Measure. Padding around each subplot."),
    ("markercolor", "Color. Marker fill color, :match follows the series color."),
    ("markershape", "Symbol. Marker glyph, :none hides markers."),
    ("markersize", "Number. Marker diameter in points."),
    ("minorgrid", "Bool. Draw minor grid lines."),
    ("overwrite_figure", "Bool. Reuse the current figure window."),
    ("projection", "Symbol. Subplot projection, :none for cartesian."),
    ("rotation", "Number. Tick label rotation in degrees."),
    ("scale", "Symbol. Axis scale, for example :identity or :log10."),
    ("seriestype", "Symbol. Determines how the data points are visualized."),
    ("show", "Bool. Display the figure interactively after plotting."),
    ("size", "Tuple. Figure size in pixels."),
    ("smooth", "Bool. Add a least-squares regression line."),
    ("tickfont", "Font. Font of the tick labels."),
    ("ticks", "Symbol or Vector. Tick positions, :auto to derive."),
    ("title", "String. Subplot title text."),
    ("title_location", "Symbol. Horizontal placement of the title."),
    ("window_title", "String. Title of the interactive window."),
];

const ALIASES: &[(&str, &str)] = &[
    ("bg", "background_color"),
    ("bg_subplot", "background_color_subplot"),
    ("c", "linecolor"),
    ("color", "linecolor"),
    ("fa", "fillalpha"),
    ("fc", "fillcolor"),
    ("lab", "label"),
    ("leg", "legend"),
    ("ls", "linestyle"),
    ("lw", "linewidth"),
    ("m", "markershape"),
    ("mc", "markercolor"),
    ("ms", "markersize"),
    ("nbins", "bins"),
    ("shape", "markershape"),
    ("st", "seriestype"),
    ("t", "seriestype"),
    ("wtitle", "window_title"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_has_a_description() {
        let registry = attr_registry();
        for group in AttrGroup::ALL {
            for name in group_defaults(group).keys() {
                assert!(
                    registry.descriptions.contains_key(name),
                    "missing description for {name}"
                );
            }
        }
    }

    #[test]
    fn test_descriptions_carry_a_type_label() {
        for (name, raw) in DESCRIPTIONS {
            assert!(raw.contains('.'), "{name} has no type label separator");
        }
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        let registry = attr_registry();
        for (alias, target) in &registry.aliases {
            assert!(
                registry.descriptions.contains_key(target),
                "alias {alias} points at unknown attribute {target}"
            );
        }
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(AttrGroup::Series.as_str(), "series");
        assert_eq!(AttrGroup::Axis.as_str(), "axis");
    }
}
