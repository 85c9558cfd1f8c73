//! Confirmation output for a finished reservation.

use crate::model::{Reservation, WizardState};
use anyhow::Result;
use rand::RngCore;

/// Pre-formatted lines for text output.
pub(crate) struct ConfirmationSummary {
    pub lines: Vec<String>,
}

/// Turn a completed wizard state into the reservation record.
pub(crate) fn build_reservation(state: &WizardState) -> Result<Reservation> {
    if !state.complete {
        anyhow::bail!("wizard is not finished");
    }
    if state.selected_sport.is_empty() {
        anyhow::bail!("no sport selected");
    }
    Ok(Reservation {
        timestamp_utc: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "now".into()),
        reservation_id: gen_reservation_id(),
        sport: state.selected_sport.clone(),
        match_name: (!state.selected_category.is_empty()).then(|| state.selected_category.clone()),
    })
}

fn gen_reservation_id() -> String {
    let mut b = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut b);
    u64::from_le_bytes(b).to_string()
}

pub(crate) fn build_confirmation(res: &Reservation) -> ConfirmationSummary {
    let mut lines = Vec::new();
    lines.push(format!("Réservation confirmée (n° {})", res.reservation_id));
    lines.push(format!("Sport: {}", res.sport));
    if let Some(m) = res.match_name.as_deref() {
        lines.push(format!("Match: {m}"));
    }
    lines.push(format!("Horodatage: {}", res.timestamp_utc));
    ConfirmationSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;

    fn finished_state(sport: &str, category: &str) -> WizardState {
        WizardState {
            step: Step::Confirm,
            complete: true,
            selected_sport: sport.to_string(),
            selected_category: category.to_string(),
            ..WizardState::default()
        }
    }

    #[test]
    fn reservation_carries_sport_and_match() {
        let res = build_reservation(&finished_state("Tennis", "Match B")).unwrap();
        assert_eq!(res.sport, "Tennis");
        assert_eq!(res.match_name.as_deref(), Some("Match B"));
        let lines = build_confirmation(&res).lines;
        assert!(lines.iter().any(|l| l.contains("Tennis")));
        assert!(lines.iter().any(|l| l.contains("Match B")));
    }

    #[test]
    fn matchless_sport_omits_the_match_line() {
        let res = build_reservation(&finished_state("Musculation", "")).unwrap();
        assert_eq!(res.match_name, None);
        let lines = build_confirmation(&res).lines;
        assert!(!lines.iter().any(|l| l.starts_with("Match:")));
    }

    #[test]
    fn unfinished_state_is_rejected() {
        let mut state = finished_state("Tennis", "Match A");
        state.complete = false;
        assert!(build_reservation(&state).is_err());
    }
}
