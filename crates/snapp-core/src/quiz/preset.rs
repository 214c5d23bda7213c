//! Built-in quiz content: the ten core statements, per-persona follow-ups and
//! the selectable trip modifiers.

use super::catalog::{PersonaFollowups, QuestionCatalog};
use super::model::{Feedback, FollowupQuestion, Polarity, QuizQuestion};
use crate::big_five::Trait;

fn question(
    id: u32,
    trait_: Trait,
    polarity: Polarity,
    text: &str,
    [low, neutral, high]: [&str; 3],
) -> QuizQuestion {
    QuizQuestion {
        id,
        trait_,
        polarity,
        text: text.to_string(),
        feedback: Feedback {
            low: low.to_string(),
            neutral: neutral.to_string(),
            high: high.to_string(),
        },
    }
}

/// The ten core Big Five statements, two per trait (one direct, one reverse).
pub fn default_core_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            1,
            Trait::Openness,
            Polarity::Direct,
            "If a friend pitches a wild idea—like painting a mural at midnight—I’m in, no questions asked.",
            [
                "Sticking to the familiar? Nothing wrong with a comfort zone!",
                "You’re open to new places, but not quite ready to leap without looking.",
                "Nice, you’re a true adventurer at heart—bet you’ve got stories!",
            ],
        ),
        question(
            2,
            Trait::Openness,
            Polarity::Reverse,
            "I’d rather rewatch my favorite show than dive into something totally out there.",
            [
                "Always chasing the unknown? Love that adventurous spirit!",
                "You’re open to both the familiar and the new—best of both worlds!",
                "You like the tried-and-true—nothing wrong with sticking to the classics!",
            ],
        ),
        question(
            3,
            Trait::Conscientiousness,
            Polarity::Direct,
            "I’d never show up to a potluck without knowing who’s bringing what.",
            [
                "You’re a free spirit—love the energy!",
                "You like a plan but can roll with the punches—nice balance!",
                "You’ve got that planner energy—everything must run like clockwork!",
            ],
        ),
        question(
            4,
            Trait::Conscientiousness,
            Polarity::Reverse,
            "I’d roll into a party with a bag of chips and a shrug—someone’ll figure it out.",
            [
                "You’re a planner through and through—respect the structure!",
                "You like a bit of spontaneity but not too much—balanced vibes.",
                "You’re all about that spontaneous life—love that energy!",
            ],
        ),
        question(
            5,
            Trait::Extraversion,
            Polarity::Direct,
            "I’d pick a karaoke night with strangers over a quiet coffee solo any day.",
            [
                "Solo vibes—nothing wrong with keeping to yourself!",
                "You’re open to socializing but not always seeking it—cool balance.",
                "You’re a social butterfly—bet you’ve got friends all over!",
            ],
        ),
        question(
            6,
            Trait::Extraversion,
            Polarity::Reverse,
            "A packed room sounds like a nightmare—I’d rather vibe alone with my playlist.",
            [
                "Crowds are your thing—love the social energy!",
                "You’re flexible—solo or social, you’re good either way.",
                "You’re a lone wolf—love that independent spirit!",
            ],
        ),
        question(
            7,
            Trait::Agreeableness,
            Polarity::Direct,
            "I’d cancel my plans to help a friend move, even if it’s last-minute chaos.",
            [
                "You’re keeping your plans—nothing wrong with that!",
                "You’re willing to help but not always at your own expense—fair enough.",
                "You’re a helpful soul—bet you’re the go-to for favors!",
            ],
        ),
        question(
            8,
            Trait::Agreeableness,
            Polarity::Reverse,
            "If my crew’s arguing, I’m not playing referee—I’ll do my own thing.",
            [
                "You’re a peacemaker—bet you’re the glue in your crew!",
                "You’re flexible—sometimes you step in, sometimes you don’t.",
                "You’re independent—love that trailblazer vibe!",
            ],
        ),
        question(
            9,
            Trait::Neuroticism,
            Polarity::Direct,
            "If my phone dies mid-day, I’m spiraling about all the ‘what-ifs.’",
            [
                "You’re cool as a cucumber—nothing fazes you!",
                "You’re flexible but not totally chill—fair enough.",
                "You’re a bit of a worrier—planning must be key for you!",
            ],
        ),
        question(
            10,
            Trait::Neuroticism,
            Polarity::Reverse,
            "I’d lose my wallet and still think, ‘Eh, it’ll work itself out.’",
            [
                "You’re a bit of a stress case—planning must be your jam!",
                "You’re adaptable but not totally unfazed—balanced.",
                "You’re chill as hell—love that energy!",
            ],
        ),
    ]
}

/// Three follow-up statements for each of the 25 catalog personas.
pub fn default_followups() -> Vec<PersonaFollowups> {
    let table: [(&str, [(&str, &str); 3]); 25] = [
        (
            "The Wild Trailblazer",
            [
                ("I’d rather wing my plans and see where the day takes me.", "Spontaneous Planner"),
                ("I love diving into new cultures and trying wild stuff tourists skip.", "Culture Enthusiast"),
                ("I’m always pushing to stay out late or hit one more spot.", "Night Owl"),
            ],
        ),
        (
            "The Party Pathfinder",
            [
                ("I thrive in social settings and love meeting new people.", "Social Butterfly"),
                ("I’m always up for a spontaneous adventure.", "Spontaneous Adventurer"),
                ("I enjoy nightlife and vibrant atmospheres.", "Nightlife Lover"),
            ],
        ),
        (
            "The Solo Dreamer",
            [
                ("I prefer solo travel to explore at my own pace.", "Solo Traveler"),
                ("I’m drawn to quiet, reflective destinations.", "Reflective Explorer"),
                ("I love immersing myself in local art and culture.", "Culture Enthusiast"),
            ],
        ),
        (
            "The Easygoing Roamer",
            [
                ("I prefer flexible plans over strict schedules.", "Flexible Planner"),
                ("I enjoy spontaneous detours during my trips.", "Spontaneous Explorer"),
                ("I’m open to trying new things without much planning.", "Open-Minded Adventurer"),
            ],
        ),
        (
            "The Adventure Architect",
            [
                ("I meticulously plan every detail of my trips.", "Detailed Planner"),
                ("I enjoy organizing group adventures.", "Group Coordinator"),
                ("I prefer structured activities over free time.", "Structured Adventurer"),
            ],
        ),
        (
            "The Comfort Crusader",
            [
                ("I stick to familiar destinations and routines.", "Routine Traveler"),
                ("I prefer group travel for safety and comfort.", "Group Traveler"),
                ("I enjoy revisiting places I’ve been before.", "Repeat Visitor"),
            ],
        ),
        (
            "The Quiet Traditionalist",
            [
                ("I prefer solo travel to avoid social exhaustion.", "Solo Traveler"),
                ("I enjoy quiet, predictable environments.", "Calm Seeker"),
                ("I stick to well-known tourist spots.", "Traditional Explorer"),
            ],
        ),
        (
            "The Steady Socialite",
            [
                ("I enjoy traveling with a small group of close friends.", "Small Group Traveler"),
                ("I like a balance of planned activities and free time.", "Balanced Planner"),
                ("I’m open to meeting new people but prefer familiar faces.", "Socially Selective"),
            ],
        ),
        (
            "The Nervous Nomad",
            [
                ("I need a detailed plan to feel secure while traveling.", "Security Seeker"),
                ("I prefer destinations with good infrastructure and safety.", "Safe Traveler"),
                ("I enjoy adventurous activities but with precautions.", "Cautious Adventurer"),
            ],
        ),
        (
            "The Coolheaded Captain",
            [
                ("I stay calm under pressure and handle travel mishaps well.", "Calm Problem Solver"),
                ("I prefer leading group trips and making decisions.", "Group Leader"),
                ("I enjoy planning but can adapt when needed.", "Adaptable Planner"),
            ],
        ),
        (
            "The Impulsive Influencer",
            [
                ("I often make last-minute travel decisions.", "Last-Minute Traveler"),
                ("I love sharing my travel experiences on social media.", "Social Media Sharer"),
                ("I enjoy group trips where I can meet new people.", "Social Connector"),
            ],
        ),
        (
            "The Lone Maverick",
            [
                ("I prefer traveling alone and setting my own pace.", "Solo Adventurer"),
                ("I enjoy off-the-beaten-path destinations.", "Offbeat Explorer"),
                ("I don’t mind taking risks for unique experiences.", "Risk Taker"),
            ],
        ),
        (
            "The Friendly Voyager",
            [
                ("I make friends easily while traveling.", "Social Butterfly"),
                ("I enjoy participating in local community events.", "Community Engager"),
                ("I prefer group tours to meet like-minded travelers.", "Group Tour Enthusiast"),
            ],
        ),
        (
            "The Budget Buccaneer",
            [
                ("I always look for the best deals and discounts.", "Deal Hunter"),
                ("I enjoy budget-friendly accommodations like hostels.", "Hostel Dweller"),
                ("I’m open to unconventional travel methods to save money.", "Unconventional Traveler"),
            ],
        ),
        (
            "The Lavish Logistician",
            [
                ("I prefer luxury accommodations and experiences.", "Luxury Lover"),
                ("I meticulously plan every aspect of my trip.", "Meticulous Planner"),
                ("I enjoy fine dining and high-end activities.", "Gourmet Traveler"),
            ],
        ),
        (
            "The Culture Chaser",
            [
                ("I immerse myself in local customs and traditions.", "Cultural Immersionist"),
                ("I enjoy visiting museums and historical sites.", "History Buff"),
                ("I prefer destinations with rich cultural heritage.", "Heritage Explorer"),
            ],
        ),
        (
            "The Fearless Flyer",
            [
                ("I’m always up for extreme sports and adventures.", "Adrenaline Junkie"),
                ("I don’t let fear hold me back from new experiences.", "Fearless Explorer"),
                ("I enjoy traveling to remote or challenging destinations.", "Remote Adventurer"),
            ],
        ),
        (
            "The Cozy Companion",
            [
                ("I prefer familiar destinations with comfortable amenities.", "Comfort Seeker"),
                ("I enjoy traveling with a close friend or partner.", "Companion Traveler"),
                ("I like to have a home-like base during my trips.", "Homebody Explorer"),
            ],
        ),
        (
            "The Restless Ruler",
            [
                ("I often feel the need to be in control of travel plans.", "Control Seeker"),
                ("I enjoy leading group activities and making decisions.", "Group Leader"),
                ("I get anxious if things don’t go according to plan.", "Anxiety Prone"),
            ],
        ),
        (
            "The Zen Seeker",
            [
                ("I travel to find peace and tranquility.", "Peace Seeker"),
                ("I enjoy meditation or yoga retreats.", "Wellness Traveler"),
                ("I prefer destinations with natural beauty and serenity.", "Nature Lover"),
            ],
        ),
        (
            "The Squad Strategist",
            [
                ("I enjoy organizing group trips and activities.", "Group Organizer"),
                ("I prefer traveling with a large group of friends.", "Large Group Traveler"),
                ("I like to plan surprises or special events for the group.", "Event Planner"),
            ],
        ),
        (
            "The Casual Curator",
            [
                ("I like a mix of planned activities and free time.", "Balanced Planner"),
                ("I enjoy discovering local art and culture casually.", "Casual Explorer"),
                ("I’m open to spontaneous changes in plans.", "Flexible Traveler"),
            ],
        ),
        (
            "The Edgy Empath",
            [
                ("I’m drawn to destinations with a unique or alternative vibe.", "Alternative Explorer"),
                ("I enjoy connecting deeply with locals and their stories.", "Empathetic Traveler"),
                ("I’m open to experiences that challenge my perspectives.", "Perspective Challenger"),
            ],
        ),
        (
            "The Grounded Globetrotter",
            [
                ("I prefer destinations that are easy to navigate.", "Ease Seeker"),
                ("I enjoy learning about different cultures in a relaxed way.", "Relaxed Learner"),
                ("I like to have a comfortable base to return to after exploring.", "Comfort Base Traveler"),
            ],
        ),
        (
            "The Homebound Hustler",
            [
                ("I prefer staycations or local trips over long-distance travel.", "Local Explorer"),
                ("I enjoy discovering new things in my own city.", "Urban Adventurer"),
                ("I’m always looking for ways to make local experiences exciting.", "Experience Maximizer"),
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(persona, questions)| PersonaFollowups {
            persona: persona.to_string(),
            questions: questions
                .into_iter()
                .map(|(text, tag)| FollowupQuestion::new(text, tag))
                .collect(),
        })
        .collect()
}

/// Trip modifiers a user can toggle before requesting recommendations.
pub const DEFAULT_MODIFIERS: [&str; 25] = [
    "Adventure",
    "Relaxation",
    "Family-friendly",
    "Budget",
    "Luxury",
    "Cultural",
    "Beach",
    "Mountain",
    "City Break",
    "Rural Escape",
    "Foodie",
    "Wellness",
    "Eco-friendly",
    "Romantic",
    "Solo Travel",
    "Group Trip",
    "Historical",
    "Wildlife",
    "Sports",
    "Festival",
    "Shopping",
    "Nightlife",
    "Volunteer",
    "Educational",
    "Off-the-Grid",
];

/// The complete built-in question catalog.
pub fn default_question_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        default_core_questions(),
        default_followups(),
        DEFAULT_MODIFIERS.iter().map(|m| m.to_string()).collect(),
    )
}
