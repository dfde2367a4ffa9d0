//! Active-Pointer Swap
//!
//! Promotes a committed deployment to active by updating the
//! `current`/`previous` pointer pair. Each pointer is updated atomically:
//! the new target is written to a temporary symlink which is then renamed
//! over the real one, so a reader of either pointer always sees a valid
//! deployment. The two renames are not jointly atomic; a crash between them
//! leaves the new `current` with the old `previous`, which still names a
//! valid rollback target.

use std::path::{Path, PathBuf};

use crate::domain::entities::DeploymentStore;
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::error::PlinthResult;
use crate::fs_tree;

/// What the swap did to the pointer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// `current` already pointed at the requested deployment; nothing changed
    AlreadyActive,

    /// `current` now points at the new deployment; `previous`, when set,
    /// points at the demoted one
    Switched { previous: Option<PathBuf> },
}

/// Make `deployment` the active one.
///
/// `deployment` must be a committed deployment directory inside the store.
pub fn activate(
    store: &DeploymentStore,
    deployment: &Path,
    events: &dyn DeployEventSink,
) -> PlinthResult<Activation> {
    let current = store.read_current()?;

    if current.as_deref() == Some(deployment) {
        events.on_event(DeployEvent::AlreadyActive {
            path: deployment.to_path_buf(),
        });
        return Ok(Activation::AlreadyActive);
    }

    // pointers are stored relative to the root so the store can be relocated
    let new_target = store.relative_from_root(deployment)?;

    if let Some(demoted) = &current {
        let demoted_target = store.relative_from_root(demoted)?;
        let tmp_previous = store.tmp_previous_link();
        fs_tree::ensure_unlinked(&tmp_previous)?;
        fs_tree::symlink(&demoted_target, &tmp_previous)?;
    }

    let tmp_current = store.tmp_current_link();
    fs_tree::ensure_unlinked(&tmp_current)?;
    fs_tree::symlink(&new_target, &tmp_current)?;

    fs_tree::atomic_rename(&tmp_current, &store.current_link())?;
    if current.is_some() {
        fs_tree::atomic_rename(&store.tmp_previous_link(), &store.previous_link())?;
    }

    events.on_event(DeployEvent::Activated {
        current: deployment.to_path_buf(),
        previous: current.clone(),
    });

    Ok(Activation::Switched { previous: current })
}
