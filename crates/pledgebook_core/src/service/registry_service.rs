//! Registry operation façade.
//!
//! # Responsibility
//! - Expose the public commitment operations: initiate, modify, terminate,
//!   inspect, classify, schedule, delegate.
//! - Enforce the existence gate before field validation, per operation.
//!
//! # Invariants
//! - Priority/deadline writes require an objective for the address at the
//!   moment of the call; this is a point-in-time check, not a referential
//!   constraint. Terminating the objective later does not cascade, so
//!   orphaned priority/deadline rows are expected state.
//! - `schedule` reads the block counter exactly once and freezes the
//!   resulting target point.
//! - `delegate` mutates the target's record with no caller/target
//!   relationship check. Kept deliberately; see DESIGN.md.

use log::info;

use crate::counter::BlockCounter;
use crate::model::deadline::DeadlineRecord;
use crate::model::objective::{Objective, ObjectiveStatus};
use crate::model::priority::PriorityRecord;
use crate::model::{validate, Address, RecordValidationError};
use crate::repo::registry_store::{
    DeadlineStore, ObjectiveStore, PriorityStore, RepoError, RepoResult,
};

/// Use-case façade over the three registry stores and the ambient counter.
///
/// The store bound covers all three tables so one migrated connection can
/// back the whole registry, while tests may substitute any piece.
pub struct RegistryService<S, C>
where
    S: ObjectiveStore + PriorityStore + DeadlineStore,
    C: BlockCounter,
{
    store: S,
    counter: C,
}

impl<S, C> RegistryService<S, C>
where
    S: ObjectiveStore + PriorityStore + DeadlineStore,
    C: BlockCounter,
{
    /// Creates a service over the provided store and counter.
    pub fn new(store: S, counter: C) -> Self {
        Self { store, counter }
    }

    /// Records a new objective for the caller.
    ///
    /// # Contract
    /// - `AlreadyExists` when the caller already holds an objective,
    ///   regardless of `description`.
    /// - `Validation` when `description` is empty or over the length limit.
    /// - On success the record starts with `completed = false`.
    pub fn initiate(&self, caller: Address, description: &str) -> RepoResult<()> {
        if self.store.get_objective(caller)?.is_some() {
            return Err(RepoError::AlreadyExists(caller));
        }

        self.store
            .insert_objective(caller, &Objective::new(description))?;
        info!("event=initiate module=service status=ok caller={caller}");
        Ok(())
    }

    /// Overwrites both fields of the caller's objective.
    ///
    /// # Contract
    /// - `NotFound` when the caller holds no objective, for any input.
    /// - `Validation` when `description` is empty or over the length limit.
    /// - `completed` is accepted in both directions; a finished objective
    ///   may be reopened.
    pub fn modify(&self, caller: Address, description: &str, completed: bool) -> RepoResult<()> {
        if self.store.get_objective(caller)?.is_none() {
            return Err(RepoError::NotFound(caller));
        }

        let objective = Objective {
            description: description.to_string(),
            completed,
        };
        self.store.update_objective(caller, &objective)?;
        info!("event=modify module=service status=ok caller={caller} completed={completed}");
        Ok(())
    }

    /// Removes the caller's objective.
    ///
    /// # Contract
    /// - `NotFound` when the caller holds no objective.
    /// - Priority and deadline rows for the caller are NOT removed; they
    ///   remain readable and overwritable as orphans.
    pub fn terminate(&self, caller: Address) -> RepoResult<()> {
        self.store.delete_objective(caller)?;
        info!("event=terminate module=service status=ok caller={caller}");
        Ok(())
    }

    /// Read-only status projection of the caller's objective.
    ///
    /// Absence is a normal result: `present = false` with zero/false
    /// defaults. Only transport-level failures surface as errors.
    pub fn inspect(&self, caller: Address) -> RepoResult<ObjectiveStatus> {
        let status = match self.store.get_objective(caller)? {
            Some(objective) => ObjectiveStatus::of(&objective),
            None => ObjectiveStatus::absent(),
        };
        Ok(status)
    }

    /// Attaches or replaces the caller's urgency classification.
    ///
    /// # Contract
    /// - `NotFound` when the caller holds no objective at call time.
    /// - `Validation` when `urgency` is outside 1..=3.
    /// - Overwrites any previous classification, orphaned or not.
    pub fn classify(&self, caller: Address, urgency: u8) -> RepoResult<()> {
        if self.store.get_objective(caller)?.is_none() {
            return Err(RepoError::NotFound(caller));
        }

        self.store
            .upsert_priority(caller, &PriorityRecord::new(urgency))?;
        info!("event=classify module=service status=ok caller={caller} urgency={urgency}");
        Ok(())
    }

    /// Attaches or replaces the caller's completion deadline.
    ///
    /// # Contract
    /// - `NotFound` when the caller holds no objective at call time.
    /// - `Validation` when `offset` is zero.
    /// - The target point is `counter + offset` evaluated once here; no
    ///   later operation re-derives it.
    /// - The alert flag is reset to false on every (re)schedule.
    pub fn schedule(&self, caller: Address, offset: u64) -> RepoResult<u64> {
        if self.store.get_objective(caller)?.is_none() {
            return Err(RepoError::NotFound(caller));
        }
        if !validate::is_valid_offset(offset) {
            return Err(RecordValidationError::NonPositiveOffset.into());
        }

        let target_point = self.counter.current().saturating_add(offset);
        self.store
            .upsert_deadline(caller, &DeadlineRecord::at(target_point))?;
        info!(
            "event=schedule module=service status=ok caller={caller} target_point={target_point}"
        );
        Ok(target_point)
    }

    /// Records a new objective for `target` on the caller's initiative.
    ///
    /// # Contract
    /// - Operates on `target`'s record, never the caller's; the caller may
    ///   already hold an objective of their own.
    /// - `AlreadyExists` when `target` already holds an objective.
    /// - `Validation` when `description` is empty or over the length limit.
    /// - No relationship between caller and target is required or checked.
    pub fn delegate(&self, caller: Address, target: Address, description: &str) -> RepoResult<()> {
        if self.store.get_objective(target)?.is_some() {
            return Err(RepoError::AlreadyExists(target));
        }

        self.store
            .insert_objective(target, &Objective::new(description))?;
        info!("event=delegate module=service status=ok caller={caller} target={target}");
        Ok(())
    }

    /// Reads the caller's urgency classification, orphaned or not.
    pub fn priority_of(&self, caller: Address) -> RepoResult<Option<PriorityRecord>> {
        self.store.get_priority(caller)
    }

    /// Reads the caller's deadline, orphaned or not.
    pub fn deadline_of(&self, caller: Address) -> RepoResult<Option<DeadlineRecord>> {
        self.store.get_deadline(caller)
    }
}
