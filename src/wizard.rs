//! Wizard controller.
//!
//! Owns the reservation state machine and is the only writer of `WizardState`.
//! Front-ends render from the state and feed user actions back through the
//! operations here; guards are enforced on this side too, so a front-end that
//! forgets to disable a button cannot push the wizard into a bad step.

use crate::catalog;
use crate::directory::SportDirectory;
use crate::model::{MatchOption, Step, WizardState};

pub const MISSING_TOKEN: &str = "Veuillez entrer un token.";
pub const INVALID_TOKEN: &str = "Token invalide, veuillez réessayer.";

pub struct Wizard<D> {
    state: WizardState,
    directory: D,
}

impl<D> Wizard<D> {
    pub fn new(directory: D) -> Self {
        Self {
            state: WizardState::default(),
            directory,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Completion guard for the current step.
    fn may_advance(&self) -> bool {
        match self.state.step {
            Step::Token => !self.state.token.is_empty(),
            Step::Sport => !self.state.selected_sport.is_empty(),
            Step::Match => true,
            Step::Confirm => false,
        }
    }

    /// Move one step forward. Returns false (state untouched) when the guard
    /// fails, the wizard is complete, or we are already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.state.complete || !self.may_advance() {
            return false;
        }
        match self.state.step.next() {
            Some(next) => {
                self.state.step = next;
                true
            }
            None => false,
        }
    }

    /// Move one step back. No-op on the first step or once complete.
    pub fn retreat(&mut self) -> bool {
        if self.state.complete {
            return false;
        }
        match self.state.step.prev() {
            Some(prev) => {
                self.state.step = prev;
                true
            }
            None => false,
        }
    }

    /// Seal the reservation. Only valid on the confirmation step; terminal.
    pub fn finish(&mut self) -> bool {
        if self.state.step != Step::Confirm {
            return false;
        }
        self.state.complete = true;
        true
    }

    /// Pure assignment. An earlier successful authorization is not revoked
    /// when the token changes; re-validation only happens on `authorize`.
    pub fn submit_token(&mut self, value: &str) {
        self.state.token = value.to_string();
    }

    /// Changing sport invalidates a previously chosen match.
    pub fn select_sport(&mut self, name: &str) {
        self.state.selected_sport = name.to_string();
        self.state.selected_category.clear();
    }

    pub fn select_category(&mut self, name: &str) {
        self.state.selected_category = name.to_string();
    }

    /// Match options for the currently selected sport (possibly empty).
    pub fn current_options(&self) -> &'static [MatchOption] {
        catalog::match_options(&self.state.selected_sport)
    }
}

impl<D: SportDirectory> Wizard<D> {
    /// Validate the token against the listing service and store the sports.
    ///
    /// The wizard's only async operation. There is no cancellation: a caller
    /// that fires a second authorize while one is in flight gets last-write-
    /// wins on the shared fields. `loading` is reset on every exit path.
    pub async fn authorize(&mut self) {
        if self.state.token.is_empty() {
            self.state.token_error = MISSING_TOKEN.to_string();
            return;
        }
        self.state.loading = true;
        let res = self.directory.list_sports(&self.state.token).await;
        match res {
            Ok(sports) => {
                self.state.sports = sports;
                self.state.is_authorized = true;
                self.state.token_error.clear();
            }
            Err(e) => {
                // Token and previously fetched sports are kept; the user can
                // correct the token and retry.
                self.state.is_authorized = false;
                self.state.token_error = INVALID_TOKEN.to_string();
                self.state.error = e.detail();
            }
        }
        self.state.loading = false;
    }
}
