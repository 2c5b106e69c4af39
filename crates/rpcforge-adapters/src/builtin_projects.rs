//! Built-in project catalogue.
//!
//! Only `treasurecore` is fully wired. `reversebase` has a constants holder
//! but no proxies yet; the rest are known ids with every field blank, so
//! generation still works and the templates render blanks where the wiring
//! would go. Entries loaded from configuration replace these by id.

use rpcforge_core::domain::{ProjectDescriptor, ProjectRegistry};

/// Project ids with no wiring yet.
const UNWIRED: [&str; 5] = [
    "changecore",
    "delaycore",
    "refundcore",
    "reverseauxiliary",
    "reversecore",
];

/// The catalogue as a registry.
pub fn registry() -> ProjectRegistry {
    let mut registry: ProjectRegistry = UNWIRED.into_iter().map(ProjectDescriptor::blank).collect();

    registry.insert(ProjectDescriptor::new(
        "treasurecore",
        "com.ly.flight.intl.treasurecore.biz.constants.TreasureServiceConstants",
        "app/biz/src/main/java/com/ly/flight/intl/treasurecore/biz/constants/TreasureServiceConstants.java",
        "com.ly.flight.intl.treasurecore.facade.TreasureServiceProxy",
        "com.ly.flight.intl.treasurecore.biz.gateway.TreasureCoreProxyService",
    ));

    registry.insert(ProjectDescriptor::new(
        "reversebase",
        "com.ly.flight.intl.reversebase.biz.constants.ReverseBaseServiceConstants",
        "",
        "",
        "",
    ));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_lists_known_projects() {
        let registry = registry();
        assert_eq!(registry.len(), 7);
        for id in UNWIRED.into_iter().chain(["treasurecore", "reversebase"]) {
            assert!(registry.contains(id), "missing {id}");
        }
    }

    #[test]
    fn treasurecore_is_fully_wired() {
        let d = registry().lookup("treasurecore");
        assert_eq!(d.constants_type_name(), "TreasureServiceConstants");
        assert_eq!(d.proxy_type_name(), "TreasureServiceProxy");
        assert_eq!(d.core_proxy_type_name(), "TreasureCoreProxyService");
        assert!(d.constants_file_path().is_some());
    }

    #[test]
    fn unwired_projects_are_blank() {
        let registry = registry();
        for id in UNWIRED {
            assert!(registry.lookup(id).is_blank(), "{id} should be blank");
        }
        assert_eq!(registry.lookup("reversebase").constants_file_path(), None);
    }
}
