//! Color format and alpha constraints.

use crate::colors::validate_color;
use crate::schema::RadarConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_appearance(errors: &mut Vec<String>, config: &RadarConfig) {
    let a = &config.appearance;

    for (name, value) in [
        ("appearance.background", &a.background),
        ("appearance.disc_inner", &a.disc_inner),
        ("appearance.disc_outer", &a.disc_outer),
        ("appearance.ring", &a.ring),
        ("appearance.blip", &a.blip),
    ] {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }

    validate_range_f64(errors, "appearance.disc_alpha", a.disc_alpha, 0.0, 1.0);
}
