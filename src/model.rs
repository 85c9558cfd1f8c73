use serde::{Deserialize, Serialize};

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Token,
    Sport,
    Match,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Token, Step::Sport, Step::Match, Step::Confirm];

    /// 1-based position of the step in the flow.
    pub fn ordinal(self) -> u8 {
        match self {
            Step::Token => 1,
            Step::Sport => 2,
            Step::Match => 3,
            Step::Confirm => 4,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Token => Some(Step::Sport),
            Step::Sport => Some(Step::Match),
            Step::Match => Some(Step::Confirm),
            Step::Confirm => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Token => None,
            Step::Sport => Some(Step::Token),
            Step::Match => Some(Step::Sport),
            Step::Confirm => Some(Step::Match),
        }
    }

    /// Label shown in the step header.
    pub fn label(self) -> &'static str {
        match self {
            Step::Token => "Token Authorization",
            Step::Sport => "Choisir Sport",
            Step::Match => "Choisir Match",
            Step::Confirm => "Réserver terrain",
        }
    }
}

/// One selectable sport as returned by the listing service.
/// The name is the identity used for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSummary {
    pub name: String,
}

/// One bookable match in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchOption {
    pub name: &'static str,
    pub image: &'static str,
}

/// Full wizard state. Owned by the controller; front-ends read it and mutate
/// only through the controller's operations.
#[derive(Debug, Clone, Serialize)]
pub struct WizardState {
    pub step: Step,
    pub complete: bool,
    pub token: String,
    pub is_authorized: bool,
    pub token_error: String,
    pub selected_sport: String,
    pub selected_category: String,
    pub sports: Vec<SportSummary>,
    pub loading: bool,
    pub error: String,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::Token,
            complete: false,
            token: String::new(),
            is_authorized: false,
            token_error: String::new(),
            selected_sport: String::new(),
            selected_category: String::new(),
            sports: Vec::new(),
            loading: false,
            error: String::new(),
        }
    }
}

/// Record emitted once the wizard finishes.
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub timestamp_utc: String,
    pub reservation_id: String,
    pub sport: String,
    pub match_name: Option<String>,
}
