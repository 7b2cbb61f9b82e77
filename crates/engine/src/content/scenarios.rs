//! Default scenario catalog. Two or three scenarios per stage.

use lifepath_domain::{
    AttributeKey::*, LifeStatusKey::*, NarrativeTag, OptionEffect, OptionId, PersonalityTrait::*,
    Requirements, Scenario, ScenarioOption, StageId,
};

pub fn builtin_scenarios() -> Vec<Scenario> {
    let [childhood, school, early_career, midlife, legacy] = StageId::all();

    vec![
        // Stage 1
        Scenario::new(
            "s1-science-fair",
            childhood,
            "The Science Fair",
            "Your school announces a science fair. Everyone is talking about it.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Build a water rocket in the garage",
            OptionEffect::new()
                .with_attribute(Intellect, 4)
                .with_personality(Investigative, 3)
                .with_personality(Realistic, 1),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Paint a poster explaining the stars",
            OptionEffect::new()
                .with_attribute(Inspiration, 4)
                .with_personality(Artistic, 3),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Skip it and play football",
            OptionEffect::new()
                .with_attribute(Physical, 4)
                .with_life_status(Happiness, 3)
                .with_personality(Realistic, 2),
        )),
        Scenario::new(
            "s1-lemonade-stand",
            childhood,
            "Lemonade Stand",
            "A hot summer. The neighbours look thirsty.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Run the stand and count every coin",
            OptionEffect::new()
                .with_life_status(Money, 20)
                .with_personality(Enterprising, 3)
                .with_personality(Conventional, 1),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Give lemonade away to the tired mail carrier",
            OptionEffect::new()
                .with_life_status(Integrity, 4)
                .with_life_status(Happiness, 2)
                .with_personality(Social, 3),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Water down the lemonade to stretch the profit",
            OptionEffect::new()
                .with_life_status(Money, 35)
                .with_life_status(Integrity, -6)
                .with_personality(Enterprising, 2)
                .with_scandal_delta(5),
        )),
        Scenario::new(
            "s1-new-kid",
            childhood,
            "The New Kid",
            "A quiet new classmate sits alone at lunch.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Invite them to your table",
            OptionEffect::new()
                .with_life_status(Happiness, 3)
                .with_personality(Social, 4),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Keep reading your book",
            OptionEffect::new()
                .with_attribute(Intellect, 2)
                .with_personality(Investigative, 2),
        )),
        // Stage 2
        Scenario::new(
            "s2-olympiad",
            school,
            "Maths Olympiad",
            "Your maths coach offers you a place on the olympiad team.",
        )
        .with_option(
            ScenarioOption::new(
                OptionId::A,
                "Train every weekend",
                OptionEffect::new()
                    .with_attribute(Intellect, 8)
                    .with_life_status(Stress, 10)
                    .with_personality(Investigative, 4)
                    .with_consistency_weight(1.2),
            )
            .with_requirements(Requirements::new().min_attribute(Intellect, 12)),
        )
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Politely decline",
            OptionEffect::new().with_life_status(Happiness, 2),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Copy last year's answers from a senior",
            OptionEffect::new()
                .with_attribute(Intellect, 2)
                .with_life_status(Integrity, -10)
                .triggering_scandal(),
        )),
        Scenario::new(
            "s2-band",
            school,
            "Garage Band",
            "Friends need a singer for their garage band.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Join and write the songs",
            OptionEffect::new()
                .with_attribute(Inspiration, 6)
                .with_life_status(Happiness, 5)
                .with_personality(Artistic, 4),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Manage the band's gigs",
            OptionEffect::new()
                .with_life_status(Money, 30)
                .with_personality(Enterprising, 3)
                .with_personality(Social, 1),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Stay home and study",
            OptionEffect::new()
                .with_attribute(Intellect, 3)
                .with_personality(Conventional, 3)
                .with_consistency_weight(1.2),
        )),
        Scenario::new(
            "s2-gap-year",
            school,
            "Gap Year",
            "Graduation is close. A backpacking trip is tempting.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Travel across three continents",
            OptionEffect::new()
                .with_attribute(Inspiration, 5)
                .with_life_status(Money, -60)
                .with_life_status(Happiness, 8)
                .with_tag(NarrativeTag::Travel)
                .with_notes("Travel broadened your horizons"),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Go straight to university",
            OptionEffect::new()
                .with_attribute(Intellect, 4)
                .with_personality(Conventional, 2)
                .with_consistency_weight(1.2),
        )),
        // Stage 3
        Scenario::new(
            "s3-first-job",
            early_career,
            "First Job Offer",
            "Two offers arrive on the same day.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Join a hospital research lab",
            OptionEffect::new()
                .with_attribute(Intellect, 6)
                .with_life_status(Money, 200)
                .with_life_status(Stress, 8)
                .with_personality(Investigative, 4)
                .with_personality(Social, 2),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Take the start-up offer with equity",
            OptionEffect::new()
                .with_life_status(Money, 120)
                .with_life_status(Stress, 12)
                .with_personality(Enterprising, 5),
        ))
        .with_option(
            ScenarioOption::new(
                OptionId::C,
                "Open your own studio",
                OptionEffect::new()
                    .with_attribute(Inspiration, 8)
                    .with_life_status(Money, -80)
                    .with_personality(Artistic, 5),
            )
            .with_requirements(Requirements::new().min_life_status(Money, 150)),
        ),
        Scenario::new(
            "s3-reversal-island",
            early_career,
            "Reversal Island",
            "A stranger offers a spin of the roulette that could flip your life.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Bet everything on one spin",
            OptionEffect::new()
                .with_attribute(Luck, 10)
                .with_life_status(Stress, 15)
                .with_tag(NarrativeTag::ReversalRoulette)
                .with_notes("Reversal roulette spun"),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Walk away",
            OptionEffect::new()
                .with_life_status(Integrity, 3)
                .with_personality(Conventional, 2),
        )),
        // Stage 4
        Scenario::new(
            "s4-breakthrough",
            midlife,
            "The Breakthrough",
            "Years of work point to a result that could change your field.",
        )
        .with_option(
            ScenarioOption::new(
                OptionId::A,
                "Publish openly and found a research centre",
                OptionEffect::new()
                    .with_attribute(Intellect, 10)
                    .with_life_status(Integrity, 5)
                    .with_personality(Investigative, 5)
                    .triggering_legend(),
            )
            .with_requirements(Requirements::new().min_attribute(Intellect, 20)),
        )
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Sell the patent to the highest bidder",
            OptionEffect::new()
                .with_life_status(Money, 5000)
                .with_life_status(Happiness, -5)
                .with_personality(Enterprising, 4),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Inflate the data to get it out faster",
            OptionEffect::new()
                .with_life_status(Integrity, -15)
                .with_scandal_delta(30)
                .triggering_scandal(),
        )),
        Scenario::new(
            "s4-burnout",
            midlife,
            "Running on Empty",
            "You have not had a proper weekend in months.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Take a sabbatical",
            OptionEffect::new()
                .with_attribute(Physical, 5)
                .with_life_status(Stress, -20)
                .with_life_status(Money, -100),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Push through the quarter",
            OptionEffect::new()
                .with_attribute(Physical, -5)
                .with_life_status(Stress, 15)
                .with_life_status(Money, 300),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Coach a youth team on Saturdays",
            OptionEffect::new()
                .with_life_status(Happiness, 6)
                .with_personality(Social, 5)
                .with_consistency_weight(1.2),
        )),
        // Stage 5
        Scenario::new(
            "s5-legacy",
            legacy,
            "Passing the Torch",
            "Someone asks what you want to leave behind.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Fund scholarships for young scientists",
            OptionEffect::new()
                .with_life_status(Money, -200)
                .with_life_status(Happiness, 10)
                .with_personality(Social, 4)
                .with_personality(Investigative, 2),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Write a memoir",
            OptionEffect::new()
                .with_attribute(Inspiration, 5)
                .with_personality(Artistic, 3),
        ))
        .with_option(ScenarioOption::new(
            OptionId::C,
            "Keep the family business in order",
            OptionEffect::new()
                .with_life_status(Money, 150)
                .with_personality(Conventional, 4)
                .with_consistency_weight(1.5),
        )),
        Scenario::new(
            "s5-world-tour",
            legacy,
            "One Last Journey",
            "Your passport has a few empty pages left.",
        )
        .with_option(ScenarioOption::new(
            OptionId::A,
            "Travel the world with old friends",
            OptionEffect::new()
                .with_life_status(Happiness, 12)
                .with_life_status(Money, -150)
                .with_tag(NarrativeTag::Travel)
                .with_notes("Travel with old friends"),
        ))
        .with_option(ScenarioOption::new(
            OptionId::B,
            "Stay and tend the garden",
            OptionEffect::new()
                .with_life_status(Stress, -10)
                .with_attribute(Physical, 2),
        )),
    ]
}
