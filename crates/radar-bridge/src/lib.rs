//! Host bridge for the radar view.
//!
//! Exposes the radar to a host UI framework the way a native component is
//! registered with a JS runtime:
//! - [`ViewManager`]: factory, prop setter and exported events/constants
//! - [`ViewPackage`]: the bundle of managers handed to the host at startup
//! - [`HostRegistry`]: looks components up by name, mounts views, routes props
//! - [`NativeView`]: the mounted instance driven by surface and lifecycle callbacks

pub mod error;
pub mod manager;
pub mod package;
pub mod props;
pub mod registry;
pub mod view;

pub use error::BridgeError;
pub use manager::{RadarViewManager, ViewManager, REACT_CLASS};
pub use package::{NativeModule, RadarPackage, ViewPackage};
pub use props::PropValue;
pub use registry::HostRegistry;
pub use view::{NativeView, RadarView, ViewContext};
