//! Default options file written on first run.

/// Generate the default TOML options content with comments.
pub(crate) fn default_options_toml() -> String {
    r##"# Chart options
# Every key is optional -- anything left out is not sent to the chart
# engine, which then applies its own default.

# [legend]
# enabled = true

# Legend items in the normal state.
# [legend.itemStyle]
# color = "#333333"
# cursor = "pointer"
# fontSize = "12px"
# fontWeight = "bold"
# textOverflow = "ellipsis"

# Legend items while hovered. Unset properties are inherited from
# itemStyle by the engine.
# [legend.itemHoverStyle]
# color = "#000000"
"##
    .to_string()
}
