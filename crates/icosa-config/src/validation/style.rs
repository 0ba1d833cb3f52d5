//! Style validation: color formats and stroke/dot sizes.

use crate::colors::parse_color;
use crate::schema::IcosaConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_style(errors: &mut Vec<String>, config: &IcosaConfig) {
    let style = &config.style;

    for (name, value) in [
        ("style.background", &style.background),
        ("style.edge_color", &style.edge_color),
        ("style.vertex_color", &style.vertex_color),
    ] {
        if let Err(e) = parse_color(value) {
            errors.push(format!("{name}: {e}"));
        }
    }

    validate_range_f64(errors, "style.edge_width", style.edge_width, 0.1, 10.0);
    validate_range_f64(errors, "style.vertex_radius", style.vertex_radius, 0.0, 50.0);
}
