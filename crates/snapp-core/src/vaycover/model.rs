//! Vaycover data types.

use serde::{Deserialize, Serialize};

use crate::big_five::TraitVector;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RewardTier {
    pub member_count: u32,
    pub reward: String,
    pub unlocked: bool,
}

/// One itinerary entry. `day` is a label such as `"1"` or `"2-4"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: String,
    pub title: String,
    pub description: String,
}

/// A group trip that unlocks rewards as its squad fills up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vaycover {
    pub id: String,
    #[serde(rename = "isSpotlight", default)]
    pub is_spotlight: bool,
    pub title: String,
    pub destination: String,
    pub dates: String,
    pub price_range: String,
    pub hero_image: String,
    pub dominant_personas: Vec<String>,
    /// Mean of the dominant personas' weights
    pub ideal_weights: TraitVector,
    pub squad_progress: u32,
    pub squad_goal: u32,
    pub reward_tiers: Vec<RewardTier>,
    pub description: String,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub lodging_info: String,
}

impl Vaycover {
    /// The last unlocked reward in tier order, if any.
    pub fn latest_unlocked_reward(&self) -> Option<&str> {
        self.reward_tiers
            .iter()
            .filter(|tier| tier.unlocked)
            .last()
            .map(|tier| tier.reward.as_str())
    }

    /// The first tier not yet unlocked.
    pub fn next_reward_tier(&self) -> Option<&RewardTier> {
        self.reward_tiers.iter().find(|tier| !tier.unlocked)
    }

    /// Adds one member to the squad and unlocks every tier the new size
    /// reaches. Returns the rewards unlocked by this join.
    pub fn record_join(&mut self) -> Vec<String> {
        self.squad_progress = self.squad_progress.saturating_add(1);
        let progress = self.squad_progress;
        self.reward_tiers
            .iter_mut()
            .filter(|tier| !tier.unlocked && tier.member_count <= progress)
            .map(|tier| {
                tier.unlocked = true;
                tier.reward.clone()
            })
            .collect()
    }

    /// Squad fill level in percent, capped at 100.
    pub fn progress_percent(&self) -> u8 {
        if self.squad_goal == 0 {
            return 100;
        }
        let percent = u64::from(self.squad_progress) * 100 / u64::from(self.squad_goal);
        percent.min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(member_count: u32, reward: &str, unlocked: bool) -> RewardTier {
        RewardTier {
            member_count,
            reward: reward.to_string(),
            unlocked,
        }
    }

    fn vaycover(tiers: Vec<RewardTier>) -> Vaycover {
        Vaycover {
            id: "v".to_string(),
            is_spotlight: false,
            title: "Test".to_string(),
            destination: String::new(),
            dates: String::new(),
            price_range: String::new(),
            hero_image: String::new(),
            dominant_personas: Vec::new(),
            ideal_weights: TraitVector::ZERO,
            squad_progress: 9,
            squad_goal: 20,
            reward_tiers: tiers,
            description: String::new(),
            itinerary: Vec::new(),
            lodging_info: String::new(),
        }
    }

    #[test]
    fn test_latest_unlocked_is_last_in_tier_order() {
        let v = vaycover(vec![
            tier(10, "Dinner", true),
            tier(20, "Boat", true),
            tier(30, "Party", false),
        ]);
        assert_eq!(v.latest_unlocked_reward(), Some("Boat"));
        assert_eq!(v.next_reward_tier().unwrap().reward, "Party");
    }

    #[test]
    fn test_nothing_unlocked() {
        let v = vaycover(vec![tier(10, "Dinner", false)]);
        assert_eq!(v.latest_unlocked_reward(), None);
    }

    #[test]
    fn test_record_join_unlocks_reached_tiers() {
        let mut v = vaycover(vec![
            tier(10, "Museum Tickets", false),
            tier(15, "Sushi Class", false),
        ]);
        assert_eq!(v.record_join(), vec!["Museum Tickets".to_string()]);
        assert_eq!(v.squad_progress, 10);
        assert_eq!(v.latest_unlocked_reward(), Some("Museum Tickets"));
        assert!(v.record_join().is_empty());
    }

    #[test]
    fn test_progress_percent() {
        let mut v = vaycover(Vec::new());
        assert_eq!(v.progress_percent(), 45);
        v.squad_progress = 50;
        assert_eq!(v.progress_percent(), 100);
        v.squad_goal = 0;
        assert_eq!(v.progress_percent(), 100);
    }

    #[test]
    fn test_spotlight_uses_camel_case_key() {
        let mut v = vaycover(Vec::new());
        v.is_spotlight = true;
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["isSpotlight"], true);
        assert_eq!(json["ideal_weights"]["O"], 0.0);
    }
}
