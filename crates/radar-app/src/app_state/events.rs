//! Drains radar events published by the mounted view.

use tokio::sync::broadcast::error::TryRecvError;

use radar_common::RadarEvent;

use super::core::RadarApp;

impl RadarApp {
    /// Forward every pending event to the log, as a JS host would dispatch it.
    pub(super) fn drain_events(&mut self) {
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => self.dispatch_event(&event),
                Err(TryRecvError::Lagged(n)) => {
                    tracing::warn!("Dropped {n} radar events");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn dispatch_event(&self, event: &RadarEvent) {
        match event {
            RadarEvent::RadarClick { blip: Some(i), .. } => {
                tracing::info!("Blip {i} selected");
            }
            RadarEvent::RenderUnavailable { reason, .. } => {
                tracing::error!("Radar view is blank: {reason}");
            }
            _ => {}
        }
        tracing::debug!(name = event.name(), "{}", event.to_json());
    }
}
