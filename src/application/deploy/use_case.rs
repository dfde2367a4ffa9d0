//! Deploy Use Case
//!
//! Orchestrates one whole deploy: resolve the revision, stage the
//! deployment, swap the active pointers, run kernel integration. Generic
//! over the object store, trigger runner, and kernel integration ports so
//! the flow can be exercised without real adapters.

use crate::domain::entities::DeploymentStore;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, KernelIntegration, ObjectStore, TriggerRunner,
};
use crate::domain::value_objects::DeploymentId;
use crate::error::{PlinthError, PlinthResult};

use super::options::DeployOptions;
use super::result::DeployOutcome;
use super::stager::Stager;
use super::swap::{activate, Activation};

/// The deploy orchestrator
pub struct DeployUseCase<'a, S, T, K> {
    store: &'a DeploymentStore,
    objects: &'a S,
    triggers: &'a T,
    kernel: &'a K,
}

impl<'a, S, T, K> DeployUseCase<'a, S, T, K>
where
    S: ObjectStore,
    T: TriggerRunner,
    K: KernelIntegration,
{
    pub fn new(store: &'a DeploymentStore, objects: &'a S, triggers: &'a T, kernel: &'a K) -> Self {
        Self {
            store,
            objects,
            triggers,
            kernel,
        }
    }

    pub fn execute(
        &self,
        options: &DeployOptions,
        events: &dyn DeployEventSink,
    ) -> PlinthResult<DeployOutcome> {
        if !self.store.is_initialized() {
            return Err(PlinthError::Uninitialized {
                path: self.store.root().to_path_buf(),
            });
        }

        let commit = self
            .objects
            .resolve(&options.revision)
            .map_err(|e| PlinthError::Resolve {
                revision: options.revision.clone(),
                message: e.to_string(),
            })?;
        events.on_event(DeployEvent::Resolved {
            target: options.target.clone(),
            revision: options.revision.clone(),
            commit: commit.to_string(),
        });

        let id = DeploymentId::new(&options.target, commit)?;
        let current = self.store.read_current()?;

        let stager = Stager::new(self.store, self.objects, self.triggers);
        let staged = stager.stage(&id, current.as_deref(), options.force, events)?;

        let activation = activate(self.store, &staged.path, events)?;
        let (already_active, previous) = match activation {
            Activation::AlreadyActive => (true, None),
            Activation::Switched { previous } => (false, previous),
        };

        // a reused deployment that was already active changed nothing
        let kernel_updated = if options.no_kernel || (already_active && staged.reused) {
            false
        } else {
            self.kernel
                .update(&staged.path)
                .map_err(|e| PlinthError::Kernel {
                    deployment: staged.path.clone(),
                    message: e.to_string(),
                })?;
            events.on_event(DeployEvent::KernelUpdated {
                deployment: staged.path.clone(),
            });
            true
        };

        Ok(DeployOutcome {
            id: staged.id,
            path: staged.path,
            reused: staged.reused,
            merge: staged.merge,
            already_active,
            previous,
            kernel_updated,
        })
    }
}
