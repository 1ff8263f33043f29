use radar_config::validation::MAX_ROTATION_SPEED;
use serde_json::json;

use crate::error::BridgeError;
use crate::props::PropValue;
use crate::view::{NativeView, RadarView, ViewContext};

use super::ViewManager;

/// Component name of the radar view.
pub const REACT_CLASS: &str = "RTRadar3DView";

pub const PROP_ROTATION_SPEED: &str = "rotationSpeed";
pub const PROP_PULSE_ENABLED: &str = "pulseEnabled";

pub const EVENT_RADAR_CLICK: &str = "onRadarClick";

/// Manager for [`RadarView`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RadarViewManager;

impl RadarViewManager {
    fn radar_view<'a>(view: &'a mut dyn NativeView) -> Result<&'a mut RadarView, BridgeError> {
        let tag = view.view_tag();
        view.as_any_mut()
            .downcast_mut::<RadarView>()
            .ok_or_else(|| BridgeError::WrongViewType {
                tag,
                component: REACT_CLASS.to_string(),
            })
    }
}

fn invalid(prop: &str, reason: impl Into<String>) -> BridgeError {
    BridgeError::InvalidPropValue {
        prop: prop.to_string(),
        reason: reason.into(),
    }
}

impl ViewManager for RadarViewManager {
    fn name(&self) -> &'static str {
        REACT_CLASS
    }

    fn prop_names(&self) -> &'static [&'static str] {
        &[PROP_ROTATION_SPEED, PROP_PULSE_ENABLED]
    }

    fn create_view_instance(&self, ctx: ViewContext) -> Result<Box<dyn NativeView>, BridgeError> {
        Ok(Box::new(RadarView::new(ctx)))
    }

    fn set_prop(
        &self,
        view: &mut dyn NativeView,
        prop: &str,
        value: &PropValue,
    ) -> Result<(), BridgeError> {
        match prop {
            PROP_ROTATION_SPEED => {
                let speed = value.as_f64().ok_or_else(|| {
                    invalid(prop, format!("expected number, got {}", value.type_name()))
                })?;
                if !speed.is_finite() || !(0.0..=MAX_ROTATION_SPEED).contains(&speed) {
                    return Err(invalid(
                        prop,
                        format!("{speed} is outside 0-{MAX_ROTATION_SPEED} deg/s"),
                    ));
                }
                Self::radar_view(view)?.set_rotation_speed(speed);
            }
            PROP_PULSE_ENABLED => {
                let enabled = value.as_bool().ok_or_else(|| {
                    invalid(prop, format!("expected boolean, got {}", value.type_name()))
                })?;
                Self::radar_view(view)?.set_pulse_enabled(enabled);
            }
            _ => {
                return Err(BridgeError::UnknownProp {
                    component: REACT_CLASS.to_string(),
                    prop: prop.to_string(),
                })
            }
        }
        tracing::debug!(prop, ?value, "Radar prop applied");
        Ok(())
    }

    fn exported_direct_event_types(&self) -> serde_json::Value {
        json!({ (EVENT_RADAR_CLICK): { "registrationName": EVENT_RADAR_CLICK } })
    }

    fn exported_view_constants(&self) -> serde_json::Value {
        json!({ "Mode": { "Basic": 0, "Advanced": 1 } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::context;

    fn mounted() -> Box<dyn NativeView> {
        let (ctx, _events) = context(1);
        RadarViewManager.create_view_instance(ctx).unwrap()
    }

    fn speed_of(view: &mut Box<dyn NativeView>) -> f64 {
        RadarViewManager::radar_view(view.as_mut())
            .unwrap()
            .renderer()
            .scene()
            .animation()
            .rotation_speed()
    }

    #[test]
    fn name_is_react_class() {
        assert_eq!(RadarViewManager.name(), "RTRadar3DView");
    }

    #[test]
    fn exports_click_event() {
        let events = RadarViewManager.exported_direct_event_types();
        assert_eq!(events["onRadarClick"]["registrationName"], "onRadarClick");
    }

    #[test]
    fn exports_mode_constants() {
        let constants = RadarViewManager.exported_view_constants();
        assert_eq!(constants["Mode"]["Basic"], 0);
        assert_eq!(constants["Mode"]["Advanced"], 1);
    }

    #[test]
    fn rotation_speed_prop_applies() {
        let mut view = mounted();
        RadarViewManager
            .set_prop(view.as_mut(), PROP_ROTATION_SPEED, &PropValue::Number(120.0))
            .unwrap();
        assert_eq!(speed_of(&mut view), 120.0);
    }

    #[test]
    fn rotation_speed_rejects_out_of_range() {
        let mut view = mounted();
        for bad in [-1.0, 721.0, f64::NAN, f64::INFINITY] {
            let err = RadarViewManager
                .set_prop(view.as_mut(), PROP_ROTATION_SPEED, &PropValue::Number(bad))
                .unwrap_err();
            assert!(matches!(err, BridgeError::InvalidPropValue { .. }));
        }
        assert_eq!(speed_of(&mut view), 30.0);
    }

    #[test]
    fn rotation_speed_rejects_wrong_type() {
        let mut view = mounted();
        let err = RadarViewManager
            .set_prop(view.as_mut(), PROP_ROTATION_SPEED, &PropValue::Bool(true))
            .unwrap_err();
        assert!(err.to_string().contains("expected number, got boolean"));
    }

    #[test]
    fn pulse_prop_toggles_pulse() {
        let mut view = mounted();
        RadarViewManager
            .set_prop(view.as_mut(), PROP_PULSE_ENABLED, &PropValue::Bool(false))
            .unwrap();
        let radar = RadarViewManager::radar_view(view.as_mut()).unwrap();
        assert!(!radar.renderer().scene().animation().pulse_settings().enabled);
    }

    #[test]
    fn unknown_prop_is_an_error() {
        let mut view = mounted();
        let err = RadarViewManager
            .set_prop(view.as_mut(), "sweepColor", &PropValue::Text("#fff".into()))
            .unwrap_err();
        assert!(matches!(err, BridgeError::UnknownProp { .. }));
    }
}
