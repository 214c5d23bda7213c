//! Matching users to vaycovers and building share copy.

use serde::Serialize;
use tracing::warn;

use super::model::Vaycover;
use crate::big_five::TraitVector;
use crate::compatibility::{CompatibilityScore, compute_compatibility};
use crate::persona::PersonaCatalog;

pub const SHARE_URL_BASE: &str = "https://flightsnapp.com/vaycovers";

/// Component-wise mean of the named personas' weights.
///
/// Unknown names are skipped. With no known names the result is the zero
/// vector, which scores 0 against every user.
pub fn ideal_weights_for<S: AsRef<str>>(names: &[S], catalog: &PersonaCatalog) -> TraitVector {
    let weights: Vec<&TraitVector> = names
        .iter()
        .filter_map(|name| match catalog.find(name.as_ref()) {
            Ok(persona) => Some(&persona.weights),
            Err(_) => {
                warn!(persona = %name.as_ref(), "Skipping unknown dominant persona");
                None
            }
        })
        .collect();
    TraitVector::mean(weights)
}

/// Share blurb for a vaycover, personalised when a compatibility is known.
pub fn share_text(vaycover: &Vaycover, compatibility: Option<CompatibilityScore>) -> String {
    let mut text = match compatibility {
        Some(score) => format!(
            "I'm a {score}% match for the '{}' Vaycover!",
            vaycover.title
        ),
        None => format!("Who's joining the '{}' Vaycover?", vaycover.title),
    };
    if let Some(reward) = vaycover.latest_unlocked_reward() {
        text.push_str(&format!(" We've already unlocked: {reward}!"));
    }
    text.push_str(" #FlightSnapp #Vaycover");
    text
}

pub fn share_url(vaycover: &Vaycover) -> String {
    format!("{SHARE_URL_BASE}/{}", vaycover.id)
}

/// A vaycover paired with the user's compatibility.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankedVaycover<'a> {
    pub vaycover: &'a Vaycover,
    pub compatibility: CompatibilityScore,
}

/// Vaycovers ordered by compatibility with `user`, best first.
/// Equal scores keep their input order.
pub fn rank_by_compatibility<'a>(
    user: &TraitVector,
    vaycovers: &'a [Vaycover],
) -> Vec<RankedVaycover<'a>> {
    let mut ranked: Vec<RankedVaycover<'a>> = vaycovers
        .iter()
        .map(|vaycover| RankedVaycover {
            vaycover,
            compatibility: compute_compatibility(user, &vaycover.ideal_weights),
        })
        .collect();
    ranked.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vaycover::default_vaycovers;

    #[test]
    fn test_ideal_weights_average_known_personas() {
        let catalog = PersonaCatalog::builtin();
        let weights = ideal_weights_for(
            &["The Wild Trailblazer", "The Adventure Architect"],
            catalog,
        );
        let trailblazer = catalog.find("The Wild Trailblazer").unwrap().weights;
        let architect = catalog.find("The Adventure Architect").unwrap().weights;
        let expected = (trailblazer.openness + architect.openness) / 2.0;
        assert!((weights.openness - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ideal_weights_skip_unknown_names() {
        let catalog = PersonaCatalog::builtin();
        let zen = catalog.find("The Zen Seeker").unwrap().weights;
        assert_eq!(ideal_weights_for(&["The Zen Seeker", "Nobody"], catalog), zen);
        assert_eq!(ideal_weights_for(&["Nobody"], catalog), TraitVector::ZERO);
        assert_eq!(ideal_weights_for::<&str>(&[], catalog), TraitVector::ZERO);
    }

    #[test]
    fn test_share_text_with_score_and_reward() {
        let patagonia = &default_vaycovers()[0];
        assert_eq!(
            share_text(patagonia, Some(87)),
            "I'm a 87% match for the 'Patagonia Trailblazer Takeover' Vaycover! \
             We've already unlocked: Private Welcome Dinner! #FlightSnapp #Vaycover"
        );
    }

    #[test]
    fn test_share_text_without_score_or_reward() {
        let tokyo = &default_vaycovers()[1];
        assert_eq!(
            share_text(tokyo, None),
            "Who's joining the 'Tokyo Culture Chaser Convergence' Vaycover? #FlightSnapp #Vaycover"
        );
        assert_eq!(share_url(tokyo), "https://flightsnapp.com/vaycovers/vaycover-2");
    }

    #[test]
    fn test_rank_puts_own_persona_trip_first() {
        let vaycovers = default_vaycovers();
        let party = PersonaCatalog::builtin()
            .find("The Party Pathfinder")
            .unwrap()
            .weights;
        let ranked = rank_by_compatibility(&party, &vaycovers);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].vaycover.id, "vaycover-3");
        assert!(ranked[0].compatibility >= ranked[1].compatibility);
        assert!(ranked[1].compatibility >= ranked[2].compatibility);
    }

    #[test]
    fn test_rank_zero_user_keeps_input_order() {
        let vaycovers = default_vaycovers();
        let ranked = rank_by_compatibility(&TraitVector::ZERO, &vaycovers);
        let ids: Vec<_> = ranked.iter().map(|r| r.vaycover.id.as_str()).collect();
        assert_eq!(ids, ["vaycover-1", "vaycover-2", "vaycover-3"]);
        assert!(ranked.iter().all(|r| r.compatibility == 0));
    }
}
