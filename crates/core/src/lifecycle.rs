//! Authoring lifecycle
//!
//! `Empty → Hydrating → Ready → Submitting → {Submitted | Ready}`, with `HydrationFailed` as a
//! dead end for edit sessions whose product could not be loaded.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Where an authoring session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthoringState {
    /// Nothing loaded yet.
    #[default]
    Empty,

    /// Fetching the persisted product to edit.
    Hydrating,

    /// Loading failed; the session cannot continue.
    HydrationFailed,

    /// Accepting edits.
    Ready,

    /// Waiting for the backend to accept the draft.
    Submitting,

    /// The backend accepted the draft.
    Submitted,
}

impl AuthoringState {
    /// Whether a network round trip for the draft itself is in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Hydrating | Self::Submitting)
    }

    /// Whether edits are accepted.
    pub fn is_editable(self) -> bool {
        self == Self::Ready
    }
}

impl Display for AuthoringState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Empty => "empty",
            Self::Hydrating => "hydrating",
            Self::HydrationFailed => "hydration failed",
            Self::Ready => "ready",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        };

        f.write_str(name)
    }
}

/// Lifecycle actions, used when reporting refused transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Open a new, empty draft.
    Open,

    /// Start loading a persisted product.
    BeginHydration,

    /// Finish loading a persisted product.
    FinishHydration,

    /// Hand the draft to the backend.
    BeginSubmission,

    /// Receive the backend's answer.
    FinishSubmission,
}

impl Display for LifecycleAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Open => "open",
            Self::BeginHydration => "begin hydration",
            Self::FinishHydration => "finish hydration",
            Self::BeginSubmission => "begin submission",
            Self::FinishSubmission => "finish submission",
        };

        f.write_str(name)
    }
}

/// Refused lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The action is not valid from the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        /// Current state
        state: AuthoringState,

        /// Attempted action
        action: LifecycleAction,
    },
}

/// Authoring lifecycle state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    state: AuthoringState,
}

impl Lifecycle {
    /// A lifecycle that has not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(self) -> AuthoringState {
        self.state
    }

    /// `Empty → Ready` for a new product.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] unless the lifecycle is empty.
    pub fn open(&mut self) -> Result<(), LifecycleError> {
        self.transition(LifecycleAction::Open, AuthoringState::Empty, AuthoringState::Ready)
    }

    /// `Empty → Hydrating` for an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] unless the lifecycle is empty.
    pub fn begin_hydration(&mut self) -> Result<(), LifecycleError> {
        self.transition(
            LifecycleAction::BeginHydration,
            AuthoringState::Empty,
            AuthoringState::Hydrating,
        )
    }

    /// `Hydrating → Ready` on success, `Hydrating → HydrationFailed` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] unless hydration is in progress.
    pub fn finish_hydration(&mut self, loaded: bool) -> Result<(), LifecycleError> {
        let next = if loaded {
            AuthoringState::Ready
        } else {
            AuthoringState::HydrationFailed
        };

        self.transition(LifecycleAction::FinishHydration, AuthoringState::Hydrating, next)
    }

    /// `Ready → Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] unless the draft is ready.
    pub fn begin_submission(&mut self) -> Result<(), LifecycleError> {
        self.transition(
            LifecycleAction::BeginSubmission,
            AuthoringState::Ready,
            AuthoringState::Submitting,
        )
    }

    /// `Submitting → Submitted` on success, back to `Ready` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::InvalidTransition`] unless a submission is in progress.
    pub fn finish_submission(&mut self, accepted: bool) -> Result<(), LifecycleError> {
        let next = if accepted {
            AuthoringState::Submitted
        } else {
            AuthoringState::Ready
        };

        self.transition(LifecycleAction::FinishSubmission, AuthoringState::Submitting, next)
    }

    fn transition(
        &mut self,
        action: LifecycleAction,
        from: AuthoringState,
        to: AuthoringState,
    ) -> Result<(), LifecycleError> {
        if self.state != from {
            return Err(LifecycleError::InvalidTransition {
                state: self.state,
                action,
            });
        }

        self.state = to;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn create_flow() -> TestResult {
        let mut lifecycle = Lifecycle::new();

        lifecycle.open()?;
        assert_eq!(lifecycle.state(), AuthoringState::Ready);

        lifecycle.begin_submission()?;
        assert!(lifecycle.state().is_loading());

        lifecycle.finish_submission(true)?;
        assert_eq!(lifecycle.state(), AuthoringState::Submitted);

        Ok(())
    }

    #[test]
    fn failed_submission_returns_to_ready() -> TestResult {
        let mut lifecycle = Lifecycle::new();

        lifecycle.open()?;
        lifecycle.begin_submission()?;
        lifecycle.finish_submission(false)?;

        assert_eq!(lifecycle.state(), AuthoringState::Ready);
        assert!(lifecycle.state().is_editable());

        Ok(())
    }

    #[test]
    fn edit_flow_hydrates_first() -> TestResult {
        let mut lifecycle = Lifecycle::new();

        lifecycle.begin_hydration()?;
        assert!(lifecycle.state().is_loading());
        assert!(!lifecycle.state().is_editable());

        lifecycle.finish_hydration(true)?;
        assert_eq!(lifecycle.state(), AuthoringState::Ready);

        Ok(())
    }

    #[test]
    fn hydration_failure_is_a_dead_end() -> TestResult {
        let mut lifecycle = Lifecycle::new();

        lifecycle.begin_hydration()?;
        lifecycle.finish_hydration(false)?;

        assert_eq!(lifecycle.state(), AuthoringState::HydrationFailed);
        assert_eq!(
            lifecycle.begin_submission(),
            Err(LifecycleError::InvalidTransition {
                state: AuthoringState::HydrationFailed,
                action: LifecycleAction::BeginSubmission,
            })
        );
        assert!(lifecycle.begin_hydration().is_err());

        Ok(())
    }

    #[test]
    fn submitted_is_terminal() -> TestResult {
        let mut lifecycle = Lifecycle::new();

        lifecycle.open()?;
        lifecycle.begin_submission()?;
        lifecycle.finish_submission(true)?;

        assert!(lifecycle.begin_submission().is_err());
        assert!(lifecycle.open().is_err());

        Ok(())
    }

    #[test]
    fn cannot_submit_before_opening() {
        let mut lifecycle = Lifecycle::new();

        let error = lifecycle.begin_submission();

        assert_eq!(
            error.map_err(|e| e.to_string()),
            Err("cannot begin submission while empty".to_string())
        );
    }
}
