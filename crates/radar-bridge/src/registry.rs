//! Host-side registry of components and mounted views.
//!
//! The host registers packages once at startup, then creates views by
//! component name and routes props to them by view tag.


use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use radar_common::EventBus;
use radar_config::RadarConfig;
use radar_renderer::RenderSurface;

use crate::error::BridgeError;
use crate::manager::ViewManager;
use crate::package::ViewPackage;
use crate::props::PropValue;
use crate::view::{NativeView, ViewContext};

struct MountedView {
    component: &'static str,
    view: Box<dyn NativeView>,
}

pub struct HostRegistry {
    managers: HashMap<&'static str, Box<dyn ViewManager>>,
    views: HashMap<u32, MountedView>,
    events: Arc<EventBus>,
    next_tag: u32,
}

impl HostRegistry {
    pub fn new(events: Arc<EventBus>) -> Self {
        Self {
            managers: HashMap::new(),
            views: HashMap::new(),
            events,
            next_tag: 1,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Register every view manager in `package`. Returns how many were added.
    ///
    /// Fails without registering anything if a component name is taken.
    pub fn register_package(&mut self, package: &dyn ViewPackage) -> Result<usize, BridgeError> {
        let managers = package.create_view_managers();
        let mut seen = HashSet::new();
        for manager in &managers {
            let name = manager.name();
            if self.managers.contains_key(name) || !seen.insert(name) {
                return Err(BridgeError::DuplicateComponent(name.to_string()));
            }
        }

        let modules = package.create_native_modules();
        if !modules.is_empty() {
            tracing::debug!(
                modules = ?modules.iter().map(|m| m.name()).collect::<Vec<_>>(),
                "Package exports native modules"
            );
        }

        let count = managers.len();
        for manager in managers {
            tracing::info!(component = manager.name(), "Registered native component");
            self.managers.insert(manager.name(), manager);
        }
        Ok(count)
    }

    pub fn manager(&self, component: &str) -> Option<&dyn ViewManager> {
        self.managers.get(component).map(|m| m.as_ref())
    }

    /// Registered component names, sorted.
    pub fn component_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.managers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Everything the host needs to know about each component, keyed by name:
    /// props, direct events and view constants.
    pub fn constants(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        for name in self.component_names() {
            if let Some(manager) = self.managers.get(name) {
                out.insert(
                    name.to_string(),
                    serde_json::json!({
                        "props": manager.prop_names(),
                        "directEventTypes": manager.exported_direct_event_types(),
                        "Constants": manager.exported_view_constants(),
                    }),
                );
            }
        }
        serde_json::Value::Object(out)
    }

    /// Create and mount a `component` view on `surface`. Returns its tag.
    pub fn create_view(
        &mut self,
        component: &str,
        surface: Arc<dyn RenderSurface>,
        config: &RadarConfig,
    ) -> Result<u32, BridgeError> {
        let manager = self
            .managers
            .get(component)
            .ok_or_else(|| BridgeError::UnknownComponent(component.to_string()))?;

        let view_tag = self.next_tag;
        let view = manager.create_view_instance(ViewContext {
            view_tag,
            surface,
            config: config.clone(),
            events: Arc::clone(&self.events),
        })?;
        self.next_tag += 1;

        tracing::info!(component = manager.name(), view_tag, "Mounted view");
        self.views.insert(
            view_tag,
            MountedView {
                component: manager.name(),
                view,
            },
        );
        Ok(view_tag)
    }

    pub fn view_mut(&mut self, view_tag: u32) -> Option<&mut dyn NativeView> {
        self.views
            .get_mut(&view_tag)
            .map(|mounted| mounted.view.as_mut() as &mut dyn NativeView)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Apply a prop to a mounted view through its component's manager.
    pub fn set_prop(
        &mut self,
        view_tag: u32,
        prop: &str,
        value: &PropValue,
    ) -> Result<(), BridgeError> {
        let mounted = self
            .views
            .get_mut(&view_tag)
            .ok_or(BridgeError::UnknownView(view_tag))?;
        let manager = self
            .managers
            .get(mounted.component)
            .ok_or_else(|| BridgeError::UnknownComponent(mounted.component.to_string()))?;

        match manager.set_prop(mounted.view.as_mut(), prop, value) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(view_tag, prop, "Rejected prop: {e}");
                Err(e)
            }
        }
    }

    /// Apply a prop given as raw JSON from the host.
    pub fn set_prop_json(
        &mut self,
        view_tag: u32,
        prop: &str,
        value: &serde_json::Value,
    ) -> Result<(), BridgeError> {
        let value = PropValue::from_json(value).ok_or_else(|| BridgeError::InvalidPropValue {
            prop: prop.to_string(),
            reason: "expected a scalar value".to_string(),
        })?;
        self.set_prop(view_tag, prop, &value)
    }

    /// Unmount a view. Its GPU resources are released on drop.
    pub fn drop_view(&mut self, view_tag: u32) -> bool {
        let removed = self.views.remove(&view_tag).is_some();
        if removed {
            tracing::debug!(view_tag, "Unmounted view");
        }
        removed
    }
}
