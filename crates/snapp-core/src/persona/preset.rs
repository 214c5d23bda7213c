//! The 25 built-in travel personas.

use super::model::Persona;
use crate::big_five::TraitVector;

fn persona(
    name: &str,
    vibe: &str,
    tags: &[&str],
    weights: [f64; 5],
    description: &str,
    image_url: &str,
) -> Persona {
    Persona {
        name: name.to_string(),
        vibe: vibe.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        weights: TraitVector::from_array(weights),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

/// Returns the official persona catalog in its canonical order.
///
/// Order matters: persona selection breaks ties in favour of the earlier
/// entry, so "The Wild Trailblazer" is the fallback for a neutral profile.
pub fn default_personas() -> Vec<Persona> {
    vec![
        persona(
            "The Wild Trailblazer",
            "Fearless explorer of uncharted paths.",
            &["Adventure", "Spontaneous", "Outdoor", "Cultural"],
            [0.286, -0.214, 0.286, -0.143, -0.071],
            "Drawn to the thrill of the unknown, you seek out remote landscapes and authentic cultural encounters, forging your own path.",
            "https://picsum.photos/seed/wildtrailblazer/400/600",
        ),
        persona(
            "The Party Pathfinder",
            "Nightlife socialite, lives for vibrant crowds.",
            &["Social", "Nightlife", "Spontaneous", "Group"],
            [0.071, -0.286, 0.357, 0.214, -0.071],
            "You come alive after dark, seeking out the most vibrant clubs, bars, and festivals. For you, a great trip is a great party.",
            "https://picsum.photos/seed/partypathfinder/400/600",
        ),
        persona(
            "The Solo Dreamer",
            "Introspective creative seeking solitude.",
            &["Solo", "Creative", "Introspective", "Wellness"],
            [0.385, -0.231, -0.308, 0.0, 0.077],
            "Your travels are a canvas for creativity and self-reflection. You prefer quiet cafes and inspiring landscapes to crowded landmarks.",
            "https://picsum.photos/seed/solodreamer/400/600",
        ),
        persona(
            "The Easygoing Roamer",
            "Laid-back drifter loving flexibility.",
            &["Relaxed", "Spontaneous", "Offbeat", "Eco"],
            [0.364, -0.364, -0.273, 0.0, 0.0],
            "You go where the wind takes you, embracing serendipity. A loose plan and an open mind are your only travel essentials.",
            "https://picsum.photos/seed/easygoingroamer/400/600",
        ),
        persona(
            "The Adventure Architect",
            "Structured thrill-planner.",
            &["Adventure", "Planner", "Organized", "Eco"],
            [0.364, 0.364, 0.0, 0.0, -0.273],
            "Adrenaline is on the itinerary. You meticulously plan your adventures, from mountain treks to scuba dives, for maximum thrill.",
            "https://picsum.photos/seed/adventurearchitect/400/600",
        ),
        persona(
            "The Comfort Crusader",
            "Seeker of cozy luxury and familiarity.",
            &["Comfort", "Luxury", "Social", "Familiar"],
            [-0.286, 0.214, 0.143, 0.286, -0.071],
            "You believe a vacation is for relaxing in style. High-end hotels, familiar comforts, and seamless service are your non-negotiables.",
            "https://picsum.photos/seed/comfortcrusader/400/600",
        ),
        persona(
            "The Quiet Traditionalist",
            "Planner preferring classic calm.",
            &["Planner", "History", "Traditional", "Solo"],
            [-0.333, 0.417, -0.25, 0.0, 0.0],
            "You appreciate the timeless and tranquil. Well-planned visits to historical sites and quiet, classic destinations are your ideal.",
            "https://picsum.photos/seed/quiettraditionalist/400/600",
        ),
        persona(
            "The Steady Socialite",
            "Reliable connector, group harmony lover.",
            &["Social", "Group", "Relaxed", "Friendly"],
            [0.077, 0.231, 0.308, 0.231, -0.154],
            "You're the glue that holds a group trip together, ensuring everyone is happy. You thrive on shared experiences and good vibes.",
            "https://picsum.photos/seed/steadysocialite/400/600",
        ),
        persona(
            "The Nervous Nomad",
            "Cautious traveler favoring safety.",
            &["Cautious", "Solo", "Creative", "Guided"],
            [0.25, -0.25, -0.167, 0.0, 0.333],
            "You love to explore but prioritize safety and predictability. Guided tours and well-vetted destinations give you peace of mind.",
            "https://picsum.photos/seed/nervousnomad/400/600",
        ),
        persona(
            "The Coolheaded Captain",
            "Calm leader of group journeys.",
            &["Planner", "Group", "Calm", "Leader"],
            [0.0, 0.385, 0.231, 0.077, -0.308],
            "You're the natural leader on any group trip. Your calm demeanor and organizational skills make every journey smooth.",
            "https://picsum.photos/seed/coolheadedcaptain/400/600",
        ),
        persona(
            "The Impulsive Influencer",
            "Charismatic trendsetter and content creator.",
            &["Spontaneous", "Social", "Influencer", "Viral"],
            [0.25, -0.333, 0.333, 0.083, 0.0],
            "You chase the next viral moment, drawn to photogenic spots and trendy experiences. Your journey is your content.",
            "https://picsum.photos/seed/impulsiveinfluencer/400/600",
        ),
        persona(
            "The Lone Maverick",
            "Independent off-grid adventurer.",
            &["Solo", "Adventure", "Independent", "Off-Grid"],
            [0.333, 0.0, -0.333, -0.333, 0.0],
            "You find freedom in solitude and rugged landscapes. You're self-reliant and prefer destinations far from the tourist trail.",
            "https://picsum.photos/seed/lonemaverick/400/600",
        ),
        persona(
            "The Friendly Voyager",
            "Warm connector of cultures.",
            &["Social", "Friendly", "Spontaneous", "Eco"],
            [0.0, -0.214, 0.286, 0.357, -0.143],
            "You travel to connect with people. You easily make friends with locals and fellow travelers, creating a global community.",
            "https://picsum.photos/seed/friendlyvoyager/400/600",
        ),
        persona(
            "The Budget Buccaneer",
            "Resourceful bargain hunter.",
            &["Budget", "Adventure", "Resourceful", "Spontaneous"],
            [0.4, -0.3, 0.0, -0.3, 0.0],
            "You can make any trip happen on a shoestring budget. You're a master of finding deals and unique, low-cost adventures.",
            "https://picsum.photos/seed/budgetbuccaneer/400/600",
        ),
        persona(
            "The Lavish Logistician",
            "Precise luxury planner.",
            &["Luxury", "Planner", "Organized", "Social"],
            [0.0, 0.455, 0.273, 0.0, -0.273],
            "You curate flawless, high-end experiences. Every detail of your luxurious itinerary is planned to perfection.",
            "https://picsum.photos/seed/lavishlogistician/400/600",
        ),
        persona(
            "The Culture Chaser",
            "Empathetic seeker of arts & heritage.",
            &["Culture", "Solo", "Curious", "Eco"],
            [0.308, 0.0, -0.231, 0.308, -0.154],
            "You travel to understand the world, immersing yourself in local art, history, and traditions with an open heart and mind.",
            "https://picsum.photos/seed/culturechaser/400/600",
        ),
        persona(
            "The Fearless Flyer",
            "Adrenaline-driven thrill seeker.",
            &["Adventure", "Fearless", "Social", "Thrill"],
            [0.364, 0.0, 0.273, 0.0, -0.364],
            "If it gets your heart racing, you're there. You live for bungee jumping, skydiving, and any activity that tests your limits.",
            "https://picsum.photos/seed/fearlessflyer/400/600",
        ),
        persona(
            "The Cozy Companion",
            "Family-oriented comfort lover.",
            &["Comfort", "Social", "Planner", "Family"],
            [-0.286, 0.214, 0.143, 0.286, -0.071],
            "Your ideal trip is about creating warm memories with loved ones in a comfortable, welcoming setting.",
            "https://picsum.photos/seed/cozycompanion/400/600",
        ),
        persona(
            "The Restless Ruler",
            "Ambitious achiever seeking status.",
            &["Ambitious", "Social", "Adventure", "Driven"],
            [-0.071, 0.143, 0.286, -0.214, 0.286],
            "You're always on the move, seeking challenges and status. Your travels are as ambitious and competitive as you are.",
            "https://picsum.photos/seed/restlessruler/400/600",
        ),
        persona(
            "The Zen Seeker",
            "Peaceful wellness-oriented traveler.",
            &["Wellness", "Calm", "Solo", "Eco"],
            [0.273, 0.0, 0.0, 0.273, -0.455],
            "You travel to restore your mind and body. Yoga retreats, spa days, and serene natural settings are your sanctuary.",
            "https://picsum.photos/seed/zenseeker/400/600",
        ),
        persona(
            "The Squad Strategist",
            "Sociable organizer of group fun.",
            &["Group", "Planner", "Social", "Friendly"],
            [0.0, 0.308, 0.308, 0.231, -0.154],
            "You excel at planning unforgettable trips for your friends, balancing everyone's interests to create the perfect group getaway.",
            "https://picsum.photos/seed/squadstrategist/400/600",
        ),
        persona(
            "The Casual Curator",
            "Chill collector of unique experiences.",
            &["Curious", "Solo", "Relaxed", "Cultural"],
            [0.286, 0.214, -0.214, 0.143, -0.143],
            "You have a knack for finding unique, low-key experiences. You enjoy museums, local markets, and wandering without a strict plan.",
            "https://picsum.photos/seed/casualcurator/400/600",
        ),
        persona(
            "The Edgy Empath",
            "Heartfelt creative with alternative edge.",
            &["Introspective", "Creative", "Spontaneous", "Empathetic"],
            [0.214, -0.214, -0.143, 0.214, 0.214],
            "You connect deeply with the world's creative undercurrents, drawn to street art, indie music scenes, and authentic, emotional experiences.",
            "https://picsum.photos/seed/edgyempath/400/600",
        ),
        persona(
            "The Grounded Globetrotter",
            "Balanced planner of eco-adventures.",
            &["Adventure", "Planner", "Calm", "Global"],
            [0.333, 0.333, 0.0, 0.0, -0.333],
            "You're a well-balanced traveler who plans exciting eco-adventures while maintaining a calm, practical approach to your journey.",
            "https://picsum.photos/seed/groundedglobetrotter/400/600",
        ),
        persona(
            "The Homebound Hustler",
            "Local explorer optimizing weekends.",
            &["Planner", "Local", "Practical", "Staycation"],
            [-0.286, 0.286, -0.214, 0.0, 0.214],
            "You're a master of the micro-adventure, finding exciting experiences close to home and making the most of your time off.",
            "https://picsum.photos/seed/homeboundhustler/400/600",
        ),
    ]
}
