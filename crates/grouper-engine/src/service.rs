//! Service layer applying scheme mutations atomically.
//!
//! `SchemeService` owns the single live `Scheme` and is the one place
//! mutations enter. Every mutation method follows this protocol:
//! 1. Clone the live scheme
//! 2. Apply the change to the clone
//! 3. Recompute happiness for everyone
//! 4. Run `enforce` on the clone
//! 5. Swap the clone in, or drop it and return the integrity error
//!
//! A rejected mutation leaves the live scheme exactly as it was.

use grouper_core::happiness::recompute_all;
use grouper_core::{AssignStrategy, CoreError, Group, GroupKey, Person, PersonId, Scheme};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::assign::{self, AssignmentOutcome, DEFAULT_BALANCE_SLACK};
use crate::error::EngineError;
use crate::import::{self, ImportReport};
use crate::validate::{ValidationReport, enforce};

/// Tunables for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Seed for the placement RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// How far a group may run ahead of the emptiest group when group
    /// preferences are off.
    pub balance_slack: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            balance_slack: DEFAULT_BALANCE_SLACK,
        }
    }
}

/// Destination of a manual placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub group: GroupKey,
    /// Preferred slot. Falls back to the first free slot when taken or absent.
    pub slot: Option<usize>,
}

impl Target {
    pub fn group(key: impl Into<GroupKey>) -> Self {
        Self {
            group: key.into(),
            slot: None,
        }
    }

    #[must_use]
    pub const fn at_slot(mut self, slot: usize) -> Self {
        self.slot = Some(slot);
        self
    }
}

/// A committed mutation: its own result plus the validator report.
#[derive(Debug, Clone, PartialEq)]
pub struct Committed<T> {
    pub value: T,
    pub report: ValidationReport,
}

/// Owner of the live scheme.
pub struct SchemeService {
    scheme: Scheme,
    rng: StdRng,
    balance_slack: usize,
}

impl SchemeService {
    /// Start from an empty scheme.
    #[must_use]
    pub fn new(title: impl Into<String>, options: EngineOptions) -> Self {
        Self {
            scheme: Scheme::new(title),
            rng: rng_from(options.seed),
            balance_slack: options.balance_slack,
        }
    }

    /// Adopt an existing scheme, typically one decoded from a snapshot.
    ///
    /// Cached happiness is kept as found, so stale values surface as
    /// warnings in the returned report.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the scheme has structural errors.
    pub fn open(
        mut scheme: Scheme,
        options: EngineOptions,
    ) -> Result<(Self, ValidationReport), EngineError> {
        let report = enforce(&mut scheme)?;
        tracing::info!(
            "opened scheme title={} people={} groups={}",
            scheme.title,
            scheme.people.len(),
            scheme.groups.len()
        );
        let service = Self {
            scheme,
            rng: rng_from(options.seed),
            balance_slack: options.balance_slack,
        };
        Ok((service, report))
    }

    #[must_use]
    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    #[must_use]
    pub fn into_scheme(self) -> Scheme {
        self.scheme
    }

    /// Run the validator over the live scheme without changing it.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        crate::validate::validate(&self.scheme)
    }

    /// Replace everyone.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation,
    /// e.g. a group still holds someone no longer present.
    pub fn set_people(&mut self, people: Vec<Person>) -> Result<ValidationReport, EngineError> {
        self.commit("set_people", |scheme, _| {
            scheme.people = people;
            Ok(())
        })
        .map(|committed| committed.report)
    }

    /// Replace every group.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn set_groups(&mut self, groups: Vec<Group>) -> Result<ValidationReport, EngineError> {
        self.commit("set_groups", |scheme, _| {
            scheme.groups = groups;
            Ok(())
        })
        .map(|committed| committed.report)
    }

    /// Apply `id,connectedId,...` lines.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn set_connections(&mut self, input: &str) -> Result<Committed<ImportReport>, EngineError> {
        self.commit("set_connections", |scheme, _| {
            Ok(import::apply_connections(scheme, input))
        })
    }

    /// Apply `id,groupTitle,...` preference lines.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn set_group_preferences(
        &mut self,
        input: &str,
    ) -> Result<Committed<ImportReport>, EngineError> {
        self.commit("set_group_preferences", |scheme, _| {
            Ok(import::apply_preferences(scheme, input))
        })
    }

    /// Switch between preference and connection scoring.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn set_use_group_preferences(
        &mut self,
        enabled: bool,
    ) -> Result<ValidationReport, EngineError> {
        self.commit("set_use_group_preferences", |scheme, _| {
            scheme.use_group_preferences = enabled;
            Ok(())
        })
        .map(|committed| committed.report)
    }

    /// Set the highlight rank threshold.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn set_rank_threshold(&mut self, threshold: u32) -> Result<ValidationReport, EngineError> {
        self.commit("set_rank_threshold", |scheme, _| {
            scheme.rank_threshold = threshold;
            Ok(())
        })
        .map(|committed| committed.report)
    }

    /// Place every unassigned person with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn autoassign(
        &mut self,
        strategy: AssignStrategy,
    ) -> Result<Committed<AssignmentOutcome>, EngineError> {
        let slack = self.balance_slack;
        self.commit("autoassign", |scheme, rng| {
            Ok(assign::autoassign(scheme, strategy, rng, slack))
        })
    }

    /// Move one person: out of every group, then into `target` if given.
    ///
    /// Returns the slot the person landed in, `None` when unassigned.
    ///
    /// # Errors
    ///
    /// - `EngineError::Core` when the person or group does not exist, or the
    ///   requested slot is out of range.
    /// - `EngineError::GroupFull` when the target group has no free slot.
    /// - `EngineError::Integrity` when the result fails validation.
    pub fn reassign(
        &mut self,
        person: &PersonId,
        target: Option<Target>,
    ) -> Result<Committed<Option<usize>>, EngineError> {
        self.commit("reassign", |scheme, _| {
            if scheme.person(person).is_none() {
                return Err(CoreError::person_not_found(person.as_str()).into());
            }
            scheme.unassign(person);

            let Some(target) = target else {
                return Ok(None);
            };
            let group = scheme
                .group_mut(&target.group)
                .ok_or_else(|| CoreError::group_not_found(target.group.as_str()))?;
            let slot = match target.slot {
                Some(slot) => group.place_at(person.clone(), slot)?,
                None => group.place(person.clone()),
            };
            slot.map(Some).ok_or_else(|| EngineError::GroupFull {
                group: target.group.to_string(),
            })
        })
    }

    /// Empty every group.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Integrity` when the result fails validation.
    pub fn unassign_all(&mut self) -> Result<ValidationReport, EngineError> {
        self.commit("unassign_all", |scheme, _| {
            for group in &mut scheme.groups {
                group.clear();
            }
            Ok(())
        })
        .map(|committed| committed.report)
    }

    /// Change a group's display title. Its key, and so every preference
    /// pointing at it, is unchanged.
    ///
    /// # Errors
    ///
    /// - `EngineError::Core` when no group has `key`.
    /// - `EngineError::Integrity` when the new title collides with another group.
    pub fn rename_group(
        &mut self,
        key: &GroupKey,
        title: impl Into<String>,
    ) -> Result<ValidationReport, EngineError> {
        let title = title.into();
        self.commit("rename_group", |scheme, _| {
            let group = scheme
                .group_mut(key)
                .ok_or_else(|| CoreError::group_not_found(key.as_str()))?;
            group.title = title;
            Ok(())
        })
        .map(|committed| committed.report)
    }

    fn commit<T>(
        &mut self,
        operation: &str,
        mutate: impl FnOnce(&mut Scheme, &mut StdRng) -> Result<T, EngineError>,
    ) -> Result<Committed<T>, EngineError> {
        let mut draft = self.scheme.clone();
        let value = mutate(&mut draft, &mut self.rng)?;
        recompute_all(&mut draft);

        let report = enforce(&mut draft).inspect_err(|_| {
            tracing::error!("{operation} rejected; scheme left unchanged");
        })?;
        tracing::info!(
            "{operation} committed warnings={}",
            report.warnings.len()
        );
        self.scheme = draft;
        Ok(Committed { value, report })
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
