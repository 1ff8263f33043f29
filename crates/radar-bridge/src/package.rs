//! Packages bundle view managers and native modules for host registration.

use crate::manager::{RadarViewManager, ViewManager};

/// A non-view native module exported to the host.
pub trait NativeModule {
    fn name(&self) -> &'static str;
}

pub trait ViewPackage {
    fn create_view_managers(&self) -> Vec<Box<dyn ViewManager>>;

    fn create_native_modules(&self) -> Vec<Box<dyn NativeModule>> {
        Vec::new()
    }
}

/// The radar package: one view manager, no native modules.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadarPackage;

impl ViewPackage for RadarPackage {
    fn create_view_managers(&self) -> Vec<Box<dyn ViewManager>> {
        vec![Box::new(RadarViewManager)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radar_package_exports_one_manager() {
        let managers = RadarPackage.create_view_managers();
        assert_eq!(managers.len(), 1);
        assert_eq!(managers[0].name(), "RTRadar3DView");
    }

    #[test]
    fn radar_package_has_no_native_modules() {
        assert!(RadarPackage.create_native_modules().is_empty());
    }
}
