use radar_common::RadarError;

/// Errors raised while registering components or routing props.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("unknown prop '{prop}' on {component}")]
    UnknownProp { component: String, prop: String },

    #[error("invalid value for '{prop}': {reason}")]
    InvalidPropValue { prop: String, reason: String },

    #[error("component already registered: {0}")]
    DuplicateComponent(String),

    #[error("no mounted view with tag {0}")]
    UnknownView(u32),

    #[error("view {tag} is not a {component}")]
    WrongViewType { tag: u32, component: String },
}

impl From<BridgeError> for RadarError {
    fn from(e: BridgeError) -> Self {
        RadarError::Bridge(e.to_string())
    }
}
