//! RadarApp struct definition and constructor.

use std::sync::Arc;

use tokio::sync::broadcast;
use winit::window::Window;

use radar_bridge::HostRegistry;
use radar_common::{EventBus, RadarEvent};
use radar_config::RadarConfig;

/// Top-level application state.
pub struct RadarApp {
    pub(super) config: RadarConfig,
    pub(super) registry: HostRegistry,
    pub(super) events_rx: broadcast::Receiver<RadarEvent>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) view_tag: Option<u32>,

    // Last cursor position in physical pixels; taps use it.
    pub(super) cursor: Option<(f32, f32)>,
    pub(super) paused: bool,
}

impl RadarApp {
    pub fn new(config: RadarConfig) -> Self {
        let events = Arc::new(EventBus::default());
        let events_rx = events.subscribe();
        Self {
            config,
            registry: HostRegistry::new(events),
            events_rx,
            window: None,
            view_tag: None,
            cursor: None,
            paused: false,
        }
    }
}
