//! Static sport → match catalog.
//!
//! The listing service only supplies the selectable sport names; the match
//! options per sport live here and are never refreshed from the network.

use crate::model::MatchOption;

const FOOTBALL: &[MatchOption] = &[
    MatchOption {
        name: "Match A",
        image: "assets/footballA.jpg",
    },
    MatchOption {
        name: "Match B",
        image: "assets/footballB.jpg",
    },
    MatchOption {
        name: "Match C",
        image: "assets/footballC.jpg",
    },
];

const BASKETBALL: &[MatchOption] = &[
    MatchOption {
        name: "Match A",
        image: "/images/basketballA.jpg",
    },
    MatchOption {
        name: "Match B",
        image: "/images/basketballB.jpg",
    },
];

const PADEL: &[MatchOption] = &[
    MatchOption {
        name: "Match A",
        image: "/images/padelA.jpg",
    },
    MatchOption {
        name: "Match B",
        image: "/images/padelB.jpg",
    },
];

const TENNIS: &[MatchOption] = &[
    MatchOption {
        name: "Match A",
        image: "/images/tennisA.jpg",
    },
    MatchOption {
        name: "Match B",
        image: "/images/tennisB.jpg",
    },
];

/// Match options for a sport. Total: unknown sports and sports that need no
/// match selection both map to the empty slice.
pub fn match_options(sport: &str) -> &'static [MatchOption] {
    match sport {
        "Football" => FOOTBALL,
        "Basketball" => BASKETBALL,
        "Padel" => PADEL,
        "Tennis" => TENNIS,
        // Musculation is bookable without picking a match.
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sports_have_options() {
        assert_eq!(match_options("Football").len(), 3);
        assert_eq!(match_options("Basketball").len(), 2);
        assert_eq!(match_options("Padel").len(), 2);
        assert_eq!(match_options("Tennis").len(), 2);
    }

    #[test]
    fn unknown_or_matchless_sports_are_empty() {
        assert!(match_options("Musculation").is_empty());
        assert!(match_options("Curling").is_empty());
        assert!(match_options("").is_empty());
    }
}
