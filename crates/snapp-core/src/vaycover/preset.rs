//! The three launch vaycovers.

use super::matching::ideal_weights_for;
use super::model::{ItineraryDay, RewardTier, Vaycover};
use crate::persona::PersonaCatalog;

fn tiers(entries: &[(u32, &str, bool)]) -> Vec<RewardTier> {
    entries
        .iter()
        .map(|&(member_count, reward, unlocked)| RewardTier {
            member_count,
            reward: reward.to_string(),
            unlocked,
        })
        .collect()
}

fn itinerary(entries: &[(&str, &str, &str)]) -> Vec<ItineraryDay> {
    entries
        .iter()
        .map(|&(day, title, description)| ItineraryDay {
            day: day.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

struct Draft<'a> {
    id: &'a str,
    is_spotlight: bool,
    title: &'a str,
    destination: &'a str,
    dates: &'a str,
    price_range: &'a str,
    hero_image: &'a str,
    dominant_personas: [&'a str; 2],
    squad_progress: u32,
    squad_goal: u32,
    reward_tiers: Vec<RewardTier>,
    description: &'a str,
    itinerary: Vec<ItineraryDay>,
    lodging_info: &'a str,
}

impl Draft<'_> {
    fn build(self, personas: &PersonaCatalog) -> Vaycover {
        Vaycover {
            id: self.id.to_string(),
            is_spotlight: self.is_spotlight,
            title: self.title.to_string(),
            destination: self.destination.to_string(),
            dates: self.dates.to_string(),
            price_range: self.price_range.to_string(),
            hero_image: self.hero_image.to_string(),
            dominant_personas: self.dominant_personas.iter().map(|p| p.to_string()).collect(),
            ideal_weights: ideal_weights_for(&self.dominant_personas, personas),
            squad_progress: self.squad_progress,
            squad_goal: self.squad_goal,
            reward_tiers: self.reward_tiers,
            description: self.description.to_string(),
            itinerary: self.itinerary,
            lodging_info: self.lodging_info.to_string(),
        }
    }
}

/// Launch vaycovers with ideal weights taken from the built-in personas.
pub fn default_vaycovers() -> Vec<Vaycover> {
    default_vaycovers_with(PersonaCatalog::builtin())
}

/// Launch vaycovers with ideal weights taken from `personas`.
pub fn default_vaycovers_with(personas: &PersonaCatalog) -> Vec<Vaycover> {
    vec![
        Draft {
            id: "vaycover-1",
            is_spotlight: true,
            title: "Patagonia Trailblazer Takeover",
            destination: "Patagonia, Chile",
            dates: "March 10-20, 2026",
            price_range: "$1,800 - $2,200",
            hero_image: "https://picsum.photos/seed/patagonia/800/600",
            dominant_personas: ["The Wild Trailblazer", "The Adventure Architect"],
            squad_progress: 18,
            squad_goal: 30,
            reward_tiers: tiers(&[
                (15, "Private Welcome Dinner", true),
                (25, "Guided Glacier Hike", false),
                (30, "Celebratory Farewell Fiesta", false),
            ]),
            description: "An epic 10-day trek through the heart of Patagonia. This Vaycover is for those who crave raw nature, challenging hikes, and disconnecting from the grid. We're taking over a series of exclusive eco-lodges.",
            itinerary: itinerary(&[
                ("1", "Arrival & Welcome", "Arrive in Punta Arenas, meet the squad, and enjoy a private welcome dinner."),
                ("2-4", "Torres del Paine W-Trek", "Begin the iconic W-Trek, witnessing stunning glaciers and mountainscapes."),
                ("5", "Rest & Recharge", "A day of relaxation at our eco-lodge, with optional yoga sessions."),
                ("6-8", "Glacier Grey Exploration", "Kayak among icebergs and hike to breathtaking viewpoints of the Grey Glacier."),
                ("9", "Farewell Fiesta", "Conclude the trek and celebrate with a farewell party if the squad goal is met."),
                ("10", "Departure", "Depart from Punta Arenas with unforgettable memories."),
            ]),
            lodging_info: "Accommodation will be in a series of exclusive, sustainable eco-lodges along the trekking route, offering comfort in the heart of the wilderness.",
        }
        .build(personas),
        Draft {
            id: "vaycover-2",
            is_spotlight: false,
            title: "Tokyo Culture Chaser Convergence",
            destination: "Tokyo, Japan",
            dates: "April 5-12, 2026",
            price_range: "$2,000 - $2,500",
            hero_image: "https://picsum.photos/seed/tokyo/800/600",
            dominant_personas: ["The Culture Chaser", "The Solo Dreamer"],
            squad_progress: 9,
            squad_goal: 20,
            reward_tiers: tiers(&[
                (10, "Ghibli Museum Tickets", false),
                (15, "Private Sushi Making Class", false),
                (20, "Day Trip to Hakone", false),
            ]),
            description: "Immerse yourself in the vibrant tapestry of Tokyo. From ancient temples to neon-lit skyscrapers, this trip is a deep dive into Japanese art, food, and culture. Perfect for curious, introspective travelers.",
            itinerary: itinerary(&[
                ("1", "Arrival in Shinjuku", "Settle into our boutique hotel and explore the vibrant Shinjuku Gyoen National Garden."),
                ("2", "Art & Tech", "Visit the teamLab Borderless digital art museum and explore the tech hub of Akihabara."),
                ("3", "Tradition in Asakusa", "Explore the historic Senso-ji Temple and Nakamise-dori market."),
                ("4", "Youth Culture", "Dive into the fashion and energy of Harajuku's Takeshita Street and the Shibuya Crossing."),
                ("5", "Free Day", "A day for personal exploration, with optional Ghibli Museum visit if unlocked."),
                ("6", "Culinary Deep Dive", "Explore the Tsukiji Outer Market followed by a sushi making class (if unlocked)."),
                ("7", "Farewell", "Enjoy a final group dinner in a traditional izakaya."),
                ("8", "Departure", "Depart from Narita or Haneda airport."),
            ]),
            lodging_info: "We'll be staying at a stylish boutique hotel in the heart of Shinjuku, providing a calm oasis with easy access to the city's best attractions.",
        }
        .build(personas),
        Draft {
            id: "vaycover-3",
            is_spotlight: false,
            title: "The Ibiza Party Pathfinder Escape",
            destination: "Ibiza, Spain",
            dates: "July 20-27, 2026",
            price_range: "$1,500 - $1,900",
            hero_image: "https://picsum.photos/seed/ibiza/800/600",
            dominant_personas: ["The Party Pathfinder", "The Impulsive Influencer"],
            squad_progress: 28,
            squad_goal: 40,
            reward_tiers: tiers(&[
                (25, "VIP Club Access", true),
                (35, "Private Catamaran Party", false),
                (40, "Closing Party DJ Set", false),
            ]),
            description: "Experience the world's most iconic party island. This Vaycover is all about sun, sea, and sound. We've secured a private villa and access to the best clubs for a week of non-stop energy.",
            itinerary: itinerary(&[
                ("1", "Villa Welcome Party", "Arrive at our private villa, meet the squad, and kick things off with a sunset pool party."),
                ("2", "Beach Club Bliss", "Relax and vibe at one of Ibiza's famous beach clubs with reserved beds."),
                ("3", "Pacha & VIP", "Experience the legendary Pacha nightclub with VIP access (unlocked)."),
                ("4", "Formentera Day Trip", "Escape to the pristine beaches of Formentera on a private boat."),
                ("5", "Free Day & Exploration", "Explore Ibiza Town's Dalt Vila or discover a hidden cove."),
                ("6", "Ushuaïa Experience", "Attend a world-famous open-air party at Ushuaïa."),
                ("7", "Sunset & Farewell", "Watch the iconic Ibiza sunset at a cliffside bar for our farewell gathering."),
                ("8", "Departure", "Depart from Ibiza Airport."),
            ]),
            lodging_info: "A stunning, private villa takeover near Ibiza Town, featuring a pool, outdoor lounge areas, and plenty of space for the squad to connect and recharge.",
        }
        .build(personas),
    ]
}
