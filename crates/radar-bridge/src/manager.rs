//! View managers: per-component factories and prop setters.

mod radar;

pub use radar::*;

use crate::error::BridgeError;
use crate::props::PropValue;
use crate::view::{NativeView, ViewContext};

/// Host-side factory and prop router for one native component.
pub trait ViewManager {
    /// Component name the host refers to.
    fn name(&self) -> &'static str;

    /// Props this component accepts.
    fn prop_names(&self) -> &'static [&'static str];

    fn create_view_instance(&self, ctx: ViewContext) -> Result<Box<dyn NativeView>, BridgeError>;

    fn set_prop(
        &self,
        view: &mut dyn NativeView,
        prop: &str,
        value: &PropValue,
    ) -> Result<(), BridgeError>;

    /// `{ eventName: { registrationName } }` for direct events.
    fn exported_direct_event_types(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }

    fn exported_view_constants(&self) -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }
}
