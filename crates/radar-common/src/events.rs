use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Events a mounted radar view reports back to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RadarEvent {
    /// The view was tapped. `x`/`y` are surface pixels; `blip` is the
    /// index of the blip under the tap, if any.
    RadarClick {
        view_tag: u32,
        x: f32,
        y: f32,
        blip: Option<usize>,
    },
    /// Rendering could not be set up; the view stays blank.
    RenderUnavailable { view_tag: u32, reason: String },
    Resumed { view_tag: u32 },
    Paused { view_tag: u32 },
    #[serde(other)]
    Unknown,
}

impl RadarEvent {
    /// Host-side event name, as registered by the view manager.
    pub fn name(&self) -> &'static str {
        match self {
            RadarEvent::RadarClick { .. } => "onRadarClick",
            RadarEvent::RenderUnavailable { .. } => "onRenderUnavailable",
            RadarEvent::Resumed { .. } => "onResume",
            RadarEvent::Paused { .. } => "onPause",
            RadarEvent::Unknown => "unknown",
        }
    }

    /// Serialize to the JSON shape delivered to a JS host.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

pub struct EventBus {
    sender: broadcast::Sender<RadarEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RadarEvent> {
        self.sender.subscribe()
    }

    /// Publish to all subscribers. Returns how many received it.
    pub fn publish(&self, event: RadarEvent) -> usize {
        tracing::debug!(event = event.name(), "publishing radar event");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
