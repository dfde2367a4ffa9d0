//! Properties of deployment directory naming.

use plinth::domain::value_objects::{CommitId, DeploymentId};
use proptest::prelude::*;

proptest! {
    /// Any valid (target, commit) pair survives formatting and re-parsing
    #[test]
    fn dir_names_roundtrip(
        target in "[a-z][a-z0-9_.]{0,15}",
        commit in "[0-9a-f]{6,40}",
    ) {
        let id = DeploymentId::new(&target, CommitId::new(&commit)).unwrap();
        let parsed = DeploymentId::parse_dir_name(&id.dir_name()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// Derived directory names never collide across the three roles
    #[test]
    fn derived_names_are_distinct(
        target in "[a-z][a-z0-9]{0,15}",
        commit in "[0-9a-f]{6,40}",
    ) {
        let id = DeploymentId::new(&target, CommitId::new(&commit)).unwrap();
        prop_assert_ne!(id.dir_name(), id.staging_name());
        prop_assert_ne!(id.dir_name(), id.overlay_name());
        prop_assert_ne!(id.staging_name(), id.overlay_name());
    }

    /// Staging and overlay names are never mistaken for deployments
    #[test]
    fn auxiliary_names_do_not_parse(
        target in "[a-z][a-z0-9]{0,15}",
        commit in "[0-9a-f]{6,40}",
    ) {
        let id = DeploymentId::new(&target, CommitId::new(&commit)).unwrap();
        prop_assert!(DeploymentId::parse_dir_name(&id.staging_name()).is_none());
        prop_assert!(DeploymentId::parse_dir_name(&id.overlay_name()).is_none());
    }
}
