//! Color lint and rewriting over an options tree.
//!
//! Options nodes accept any string, so these passes are opt-in: they
//! collect a message for every assigned color the CSS parser rejects and
//! report them together as one `OptionsError`.

use hicharts_common::OptionsError;

use crate::colors::{normalize_color, validate_color, ColorNotation};
use crate::schema::{ChartOptions, Legend};

/// Run the color lint, collecting all problems.
pub fn validate(options: &ChartOptions) -> Result<(), OptionsError> {
    let mut errors: Vec<String> = Vec::new();

    if let Some(legend) = &options.legend {
        validate_legend(&mut errors, legend);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(OptionsError::ValidationError(errors.join("; ")))
    }
}

/// Rewrite every assigned color in `notation`.
///
/// Fails without touching `options` if any assigned color is unparseable.
pub fn normalize_colors(
    options: &mut ChartOptions,
    notation: ColorNotation,
) -> Result<(), OptionsError> {
    validate(options)?;

    let Some(legend) = options.legend.as_mut() else {
        return Ok(());
    };
    if let Some(style) = legend.item_style.as_mut() {
        if let Some(color) = style.color.as_deref() {
            style.color = Some(normalize_color(color, notation)?);
        }
    }
    if let Some(style) = legend.item_hover_style.as_mut() {
        if let Some(color) = style.color() {
            let normalized = normalize_color(color, notation)?;
            style.set_color(normalized);
        }
    }
    Ok(())
}

fn validate_legend(errors: &mut Vec<String>, legend: &Legend) {
    if let Some(style) = &legend.item_style {
        check_color(errors, "legend.itemStyle.color", style.color());
    }
    if let Some(style) = &legend.item_hover_style {
        check_color(errors, "legend.itemHoverStyle.color", style.color());
    }
}

fn check_color(errors: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid CSS color"));
        }
    }
}
