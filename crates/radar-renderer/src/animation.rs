//! Per-frame animation state: rotation angle and the pulse.

use radar_config::schema::AnimationConfig;

/// Default rotation speed, degrees per second.
pub const DEFAULT_ROTATION_SPEED: f64 = 30.0;

/// Pulse range and rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSettings {
    pub enabled: bool,
    /// Scale units per second.
    pub rate: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for PulseSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 0.5,
            min: 0.8,
            max: 1.2,
        }
    }
}

impl PulseSettings {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            enabled: config.pulse_enabled,
            rate: config.pulse_rate as f32,
            min: config.pulse_min as f32,
            max: config.pulse_max as f32,
        }
    }
}

/// Mutable animation scalars advanced once per frame.
///
/// The rotation is kept unwrapped in `f64` degrees so it grows
/// monotonically; it is reduced modulo 360 only when a matrix is built.
#[derive(Debug, Clone)]
pub struct AnimationState {
    rotation_degrees: f64,
    rotation_speed: f64,
    pulse_scale: f32,
    pulse_direction: f32,
    pulse: PulseSettings,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_SPEED, PulseSettings::default())
    }
}

impl AnimationState {
    pub fn new(rotation_speed: f64, pulse: PulseSettings) -> Self {
        Self {
            rotation_degrees: 0.0,
            rotation_speed,
            pulse_scale: 1.0,
            pulse_direction: 1.0,
            pulse,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.rotation_speed, PulseSettings::from_config(config))
    }

    /// Advance by `dt` seconds. Non-finite or negative deltas are ignored.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.rotation_degrees += self.rotation_speed * dt as f64;

        if !self.pulse.enabled {
            self.pulse_scale = 1.0;
            return;
        }

        self.pulse_scale += self.pulse.rate * self.pulse_direction * dt;
        if self.pulse_scale > self.pulse.max {
            self.pulse_direction = -1.0;
        } else if self.pulse_scale < self.pulse.min {
            self.pulse_direction = 1.0;
        }
    }

    /// Total rotation since construction, in degrees (unwrapped).
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    /// Current rotation in radians, reduced to `[0, 2π)`.
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.rem_euclid(360.0).to_radians() as f32
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn set_rotation_speed(&mut self, degrees_per_second: f64) {
        self.rotation_speed = degrees_per_second;
    }

    pub fn pulse_scale(&self) -> f32 {
        self.pulse_scale
    }

    pub fn pulse_direction(&self) -> f32 {
        self.pulse_direction
    }

    pub fn pulse_settings(&self) -> PulseSettings {
        self.pulse
    }

    pub fn set_pulse_enabled(&mut self, enabled: bool) {
        self.pulse.enabled = enabled;
        if !enabled {
            self.pulse_scale = 1.0;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let anim = AnimationState::default();
        assert_eq!(anim.rotation_degrees(), 0.0);
        assert_eq!(anim.pulse_scale(), 1.0);
        assert_eq!(anim.pulse_direction(), 1.0);
    }

    #[test]
    fn rotates_thirty_degrees_per_second() {
        let mut anim = AnimationState::default();
        anim.tick(0.5);
        assert!((anim.rotation_degrees() - 15.0).abs() < 1e-9);
        anim.tick(2.0);
        assert!((anim.rotation_degrees() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn twelve_one_second_ticks_is_a_full_turn() {
        let mut anim = AnimationState::default();
        for _ in 0..12 {
            anim.tick(1.0);
        }
        assert!((anim.rotation_degrees() - 360.0).abs() < 1e-9);
        assert!(anim.rotation_degrees().rem_euclid(360.0) < 1e-9);
        assert!(anim.rotation_radians().abs() < 1e-6);
    }

    #[test]
    fn rotation_is_monotonic() {
        let mut anim = AnimationState::default();
        let mut last = anim.rotation_degrees();
        for i in 0..2000 {
            anim.tick(0.001 + (i % 7) as f32 * 0.01);
            assert!(anim.rotation_degrees() > last);
            last = anim.rotation_degrees();
        }
        assert!(last > 360.0);
    }

    #[test]
    fn zero_and_negative_deltas_do_nothing() {
        let mut anim = AnimationState::default();
        anim.tick(0.0);
        anim.tick(-1.0);
        anim.tick(f32::NAN);
        assert_eq!(anim.rotation_degrees(), 0.0);
        assert_eq!(anim.pulse_scale(), 1.0);
    }

    #[test]
    fn pulse_stays_within_bounds_plus_one_step() {
        let mut anim = AnimationState::default();
        let pulse = anim.pulse_settings();
        let deltas = [0.016f32, 0.033, 0.1, 0.25, 0.008];
        let step = pulse.rate * 0.25;
        for i in 0..5000 {
            anim.tick(deltas[i % deltas.len()]);
            assert!(
                anim.pulse_scale() <= pulse.max + step + 1e-5
                    && anim.pulse_scale() >= pulse.min - step - 1e-5,
                "tick {i}: scale {} escaped",
                anim.pulse_scale()
            );
        }
    }

    #[test]
    fn pulse_flips_direction_at_the_top() {
        let mut anim = AnimationState::default();
        // 1.0 + 0.5 * 0.5 = 1.25 > 1.2
        anim.tick(0.5);
        assert_eq!(anim.pulse_direction(), -1.0);
        anim.tick(0.1);
        assert!(anim.pulse_scale() < 1.25);
    }

    #[test]
    fn pulse_recovers_from_a_huge_step() {
        let mut anim = AnimationState::default();
        anim.tick(10.0);
        assert!(anim.pulse_scale() > 1.2);
        assert_eq!(anim.pulse_direction(), -1.0);
        // Small follow-up ticks keep heading down instead of oscillating.
        for _ in 0..3 {
            anim.tick(0.016);
            assert_eq!(anim.pulse_direction(), -1.0);
        }
    }

    #[test]
    fn disabled_pulse_holds_scale_at_one() {
        let mut anim = AnimationState::default();
        anim.tick(0.3);
        anim.set_pulse_enabled(false);
        assert_eq!(anim.pulse_scale(), 1.0);
        anim.tick(0.3);
        assert_eq!(anim.pulse_scale(), 1.0);
        assert!((anim.rotation_degrees() - 18.0).abs() < 1e-5);
    }

    #[test]
    fn rotation_speed_is_adjustable() {
        let mut anim = AnimationState::default();
        anim.set_rotation_speed(90.0);
        anim.tick(1.0);
        assert!((anim.rotation_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn from_config_reads_every_field() {
        let config = AnimationConfig {
            rotation_speed: 45.0,
            pulse_enabled: false,
            pulse_rate: 1.0,
            pulse_min: 0.5,
            pulse_max: 1.5,
        };
        let anim = AnimationState::from_config(&config);
        assert_eq!(anim.rotation_speed(), 45.0);
        let pulse = anim.pulse_settings();
        assert!(!pulse.enabled);
        assert_eq!(pulse.rate, 1.0);
        assert_eq!(pulse.min, 0.5);
        assert_eq!(pulse.max, 1.5);
    }
}
