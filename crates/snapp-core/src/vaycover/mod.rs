//! Vaycover domain module.
//!
//! # Module Structure
//!
//! - `model`: `Vaycover`, reward tiers, itinerary days
//! - `matching`: ideal weights, compatibility ranking, share copy
//! - `catalog`: the read-only `VaycoverCatalog`
//! - `preset`: the launch vaycovers

mod catalog;
mod matching;
mod model;
mod preset;

// Re-export public API
pub use catalog::VaycoverCatalog;
pub use matching::{
    RankedVaycover, SHARE_URL_BASE, ideal_weights_for, rank_by_compatibility, share_text,
    share_url,
};
pub use model::{ItineraryDay, RewardTier, Vaycover};
pub use preset::{default_vaycovers, default_vaycovers_with};
