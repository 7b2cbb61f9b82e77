use lifepath_domain::{CareerSuggestion, ProfileTrait};

const AMBITION: [(&str, &str); 6] = [
    ("Founder / CEO", "Pulls resources together, takes risks and drives a team toward growth."),
    ("Corporate strategy consultant", "Designs growth paths and acquisitions; comfortable deciding under pressure."),
    ("Investment banking analyst", "Handles large deals and financial models at a fast pace."),
    ("Lawyer", "Combines law and persuasion to win the best outcome for clients in negotiation."),
    ("Sales manager", "Driven by targets and relationships; enjoys clear goals and a challenge."),
    ("Product manager", "Bridges technology and business to set a product's direction and rhythm."),
];

const CREATIVITY: [(&str, &str); 6] = [
    ("UX / UI designer", "Blends aesthetics and user psychology into playful interfaces."),
    ("Game designer", "Builds levels, stories and systems into a complete play experience."),
    ("Brand / visual designer", "Tells stories with colour and shape to give a brand its identity."),
    ("Architect", "Turns abstract ideas into real spaces with both imagination and structure."),
    ("Multimedia creator", "Expresses ideas through video, music and motion design."),
    ("Service designer", "Reworks whole service flows so the user's journey feels natural."),
];

const STABILITY: [(&str, &str); 6] = [
    ("Financial planner", "Helps people and families allocate assets for steady long-term growth."),
    ("Data analyst", "Organises data in a structured setting to support decisions."),
    ("Civil servant / administrator", "Prefers clear rules and a stable, well-defined process."),
    ("HR specialist", "Looks after the organisation and colleagues within a framework of rules."),
    ("Risk management specialist", "Thinks through the worst case ahead so the organisation stays safe."),
    ("Healthcare administrator", "Coordinates medical teams and resources for lasting quality of care."),
];

/// Career directions for a dominant onboarding trait.
pub fn career_suggestions(dominant: ProfileTrait) -> Vec<CareerSuggestion> {
    let table = match dominant {
        ProfileTrait::Ambition => &AMBITION,
        ProfileTrait::Creativity => &CREATIVITY,
        ProfileTrait::Stability => &STABILITY,
    };
    table
        .iter()
        .map(|(title, description)| CareerSuggestion::new(*title, *description))
        .collect()
}
