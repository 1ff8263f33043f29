//! Blip and window constraints.

use crate::schema::RadarConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_blips(errors: &mut Vec<String>, config: &RadarConfig) {
    validate_range_f64(
        errors,
        "blips.pick_radius_px",
        config.blips.pick_radius_px,
        1.0,
        256.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &RadarConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 8192);
    validate_range(errors, "window.height", config.window.height, 64, 8192);
}
