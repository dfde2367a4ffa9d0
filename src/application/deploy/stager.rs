//! Deployment Stager
//!
//! Builds a complete deployment next to the live system without touching it:
//! checkout into a `.tmp` staging directory, trigger execution, etc overlay
//! creation, config replay, and finally one atomic rename that commits the
//! staged tree under its final name. A crash before the rename leaves only a
//! stale `.tmp` directory, which the next run deletes.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentStore;
use crate::domain::ports::{DeployEvent, DeployEventSink, ObjectStore, TriggerRunner};
use crate::domain::services::{merge_config, MergeSummary};
use crate::domain::value_objects::DeploymentId;
use crate::error::{PlinthError, PlinthResult};
use crate::fs_tree;

/// Name of the default-configuration directory inside a deployed tree
pub const ETC_DIR: &str = "etc";

/// A deployment committed under its final directory name
#[derive(Debug, Clone)]
pub struct StagedDeployment {
    pub id: DeploymentId,
    pub path: PathBuf,
    pub reused: bool,
    pub merge: Option<MergeSummary>,
}

/// Stages deployments into a store
pub struct Stager<'a, S, T> {
    store: &'a DeploymentStore,
    objects: &'a S,
    triggers: &'a T,
}

impl<'a, S: ObjectStore, T: TriggerRunner> Stager<'a, S, T> {
    pub fn new(store: &'a DeploymentStore, objects: &'a S, triggers: &'a T) -> Self {
        Self {
            store,
            objects,
            triggers,
        }
    }

    /// Stage the deployment `id`, merging local config changes carried by the
    /// active deployment `current` (if any).
    pub fn stage(
        &self,
        id: &DeploymentId,
        current: Option<&Path>,
        force: bool,
        events: &dyn DeployEventSink,
    ) -> PlinthResult<StagedDeployment> {
        let final_path = self.store.deployment_path(id);
        let staging = self.store.staging_path(id);
        let overlay = self.store.overlay_path(id);

        // a stale staging directory is leftover from an interrupted run
        fs_tree::ensure_removed(&staging)?;

        // capture the merge source before force removal can destroy it
        let prior = self.prior_config(current, &final_path);

        if final_path.is_dir() {
            if !force {
                events.on_event(DeployEvent::DeploymentReused {
                    path: final_path.clone(),
                });
                return Ok(StagedDeployment {
                    id: id.clone(),
                    path: final_path,
                    reused: true,
                    merge: None,
                });
            }
            fs_tree::ensure_removed(&final_path)?;
            fs_tree::ensure_removed(&overlay)?;
        }

        events.on_event(DeployEvent::StagingStarted {
            path: staging.clone(),
        });
        self.objects
            .checkout(id.commit(), &staging)
            .map_err(|e| PlinthError::Checkout {
                commit: id.commit().to_string(),
                path: staging.clone(),
                message: e.to_string(),
            })?;

        self.triggers
            .run(&staging)
            .map_err(|e| PlinthError::Triggers {
                root: staging.clone(),
                message: e.to_string(),
            })?;

        self.create_overlay(&staging, &overlay, events)?;

        let merge = match prior {
            Some((old_default, old_live)) => {
                let summary = merge_config(&old_default, &old_live, &overlay)?;
                events.on_event(DeployEvent::ConfigMerged {
                    modified: summary.modified,
                    removed: summary.removed,
                    added: summary.added,
                });
                Some(summary)
            }
            None => {
                events.on_event(DeployEvent::NoPriorConfig);
                None
            }
        };

        fs_tree::atomic_rename(&staging, &final_path)?;
        events.on_event(DeployEvent::Committed {
            path: final_path.clone(),
        });

        Ok(StagedDeployment {
            id: id.clone(),
            path: final_path,
            reused: false,
            merge,
        })
    }

    /// Old default etc and old live overlay of the active deployment, when
    /// both exist and the active deployment is not the one being re-staged
    fn prior_config(&self, current: Option<&Path>, final_path: &Path) -> Option<(PathBuf, PathBuf)> {
        let current = current?;
        if current == final_path {
            return None;
        }
        let old_default = current.join(ETC_DIR);
        let old_live = self.store.overlay_for(current);
        if old_default.is_dir() && old_live.is_dir() {
            Some((old_default, old_live))
        } else {
            None
        }
    }

    /// Copy the tree's own etc into the overlay; a tree that ships no etc
    /// gets an empty overlay so local additions still have somewhere to live
    fn create_overlay(
        &self,
        staging: &Path,
        overlay: &Path,
        events: &dyn DeployEventSink,
    ) -> PlinthResult<()> {
        fs_tree::ensure_removed(overlay)?;
        let default_etc = staging.join(ETC_DIR);
        if default_etc.is_dir() {
            fs_tree::copy_tree(&default_etc, overlay)?;
        } else {
            fs_tree::ensure_dir(overlay)?;
        }
        events.on_event(DeployEvent::OverlayCreated {
            path: overlay.to_path_buf(),
        });
        Ok(())
    }
}
