//! Drop Settlement
//!
//! Where a finished drag meets the week: plan, apply, save. Rejected
//! drops leave the week untouched and write nothing.

use leptos::prelude::*;
use leptos_dragdrop::{plan_move, CommitError, DragHost, DragKind, MovePlan, Release};
use thiserror::Error;

use crate::context::AppContext;
use crate::storage::{KeyValueStore, Persistence, StorageError};
use crate::store::AppStateStoreFields;
use crate::week::WeekStore;

#[derive(Debug, Error)]
pub enum DropError {
    #[error(transparent)]
    Rejected(#[from] CommitError),
    /// The move was applied in memory but could not be written
    #[error("move was not saved: {0}")]
    Unsaved(#[from] StorageError),
}

/// Plan the move, apply it and save the result.
pub fn settle<K, S>(
    week: &mut WeekStore,
    persistence: &Persistence<S>,
    release: &Release<K::Container, K::Id>,
) -> Result<MovePlan<K::Container, K::Id>, DropError>
where
    K: DragKind<Collections = WeekStore>,
    S: KeyValueStore,
{
    let plan = plan_move::<K>(week, release)?;
    plan.apply::<K>(week)?;
    // Moving a day's last card away leaves nothing worth saving under it
    week.prune_empty_days();
    persistence.save(week)?;
    Ok(plan)
}

/// Connects both drag engines to the app store
#[derive(Clone, Copy)]
pub struct PlannerHost {
    ctx: AppContext,
}

impl PlannerHost {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }
}

impl<K: DragKind<Collections = WeekStore>> DragHost<K> for PlannerHost {
    fn inspect<R>(&self, f: impl FnOnce(&WeekStore) -> R) -> R {
        self.ctx.store().week().with_untracked(f)
    }

    fn release(&self, release: Release<K::Container, K::Id>) {
        let persistence = self.ctx.persistence();
        let mut outcome = None;
        // Subscribers only hear about the week when the move went through
        self.ctx.store().week().maybe_update(|week| {
            let result = settle::<K, _>(week, &persistence, &release);
            let changed = !matches!(result, Err(DropError::Rejected(_)));
            outcome = Some(result);
            changed
        });

        match outcome {
            Some(Ok(plan)) => {
                log::debug!(
                    "[DND] moved {} {:?} {:?}[{}] -> {:?}[{}]",
                    K::SCOPE,
                    plan.dragged,
                    plan.from.container,
                    plan.from.index,
                    plan.to.container,
                    plan.to.index
                );
            }
            Some(Err(DropError::Rejected(err))) if err.is_desync() => {
                log::warn!("[DND] {} drop of {:?} rejected: {}", K::SCOPE, release.dragged, err);
            }
            Some(Err(DropError::Rejected(err))) => {
                log::debug!("[DND] {} drop of {:?} ignored: {}", K::SCOPE, release.dragged, err);
            }
            Some(Err(DropError::Unsaved(err))) => {
                log::error!("[STORAGE] save after move failed: {}", err);
                self.ctx.notify(format!("Changes were not saved: {}", err));
            }
            None => log::warn!("[DND] store disposed before {} drop settled", K::SCOPE),
        }
    }
}
