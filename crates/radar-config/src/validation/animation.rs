//! Rotation and pulse constraints.

use crate::schema::RadarConfig;

use super::helpers::validate_range_f64;

/// Highest rotation speed accepted from config or host props.
pub const MAX_ROTATION_SPEED: f64 = 720.0;

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &RadarConfig) {
    let radar = &config.radar;

    validate_range_f64(
        errors,
        "radar.rotation_speed",
        radar.rotation_speed,
        0.0,
        MAX_ROTATION_SPEED,
    );
    validate_range_f64(errors, "radar.pulse_rate", radar.pulse_rate, 0.0, 5.0);
    validate_range_f64(errors, "radar.pulse_min", radar.pulse_min, 0.1, 3.0);
    validate_range_f64(errors, "radar.pulse_max", radar.pulse_max, 0.1, 3.0);

    if radar.pulse_min >= radar.pulse_max {
        errors.push(format!(
            "radar.pulse_min ({}) must be below radar.pulse_max ({})",
            radar.pulse_min, radar.pulse_max
        ));
    }
}
