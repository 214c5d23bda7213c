//! Best-match persona selection.

use tracing::{debug, warn};

use super::model::{Persona, ScoredPersona};
use crate::big_five::TraitVector;
use crate::error::{Result, SnappError};

/// Picks the persona whose weights have the greatest dot product with `user`.
///
/// Scanning keeps the first maximum it sees and only replaces it on a
/// strictly greater score, so ties resolve to the earliest catalog entry.
/// Out-of-range or NaN user components are clamped before scoring.
pub fn select_persona(personas: &[Persona], user: &TraitVector) -> Result<ScoredPersona> {
    let user = sanitize(user);

    let mut best: Option<(&Persona, f64)> = None;
    let mut max_score = f64::NEG_INFINITY;
    for persona in personas {
        let score = persona.similarity(&user);
        debug!(persona = %persona.name, score, "Scored persona");
        if score > max_score {
            max_score = score;
            best = Some((persona, score));
        }
    }

    let (persona, similarity_score) = match (best, personas.first()) {
        (Some(found), _) => found,
        // Only reachable when every score is NaN, i.e. a malformed catalog.
        (None, Some(first)) => (first, 0.0),
        (None, None) => return Err(SnappError::not_found("persona", "<empty catalog>")),
    };

    debug!(persona = %persona.name, similarity_score, "Selected persona");
    Ok(ScoredPersona {
        persona: persona.clone(),
        similarity_score,
    })
}

/// Every persona with its score, in catalog order.
pub fn score_all(personas: &[Persona], user: &TraitVector) -> Vec<ScoredPersona> {
    let user = sanitize(user);
    personas
        .iter()
        .map(|persona| ScoredPersona {
            persona: persona.clone(),
            similarity_score: persona.similarity(&user),
        })
        .collect()
}

fn sanitize(user: &TraitVector) -> TraitVector {
    let clamped = user.clamped();
    if clamped != *user {
        warn!(original = %user, clamped = %clamped, "User trait vector out of range, clamping");
    }
    clamped
}
