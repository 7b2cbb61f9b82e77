//! Lifepath simulator - plays one full run headlessly and prints the report.
//!
//! Usage: `lifepath-sim [catalog.json]`
//!
//! Set `LIFEPATH_PROFILE` to a profile JSON file to pick the recommended
//! dream card and include career suggestions in the report.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifepath_domain::{OptionId, Profile, NEUTRAL_SCENARIO_ID};
use lifepath_engine::content::select_dream_card;
use lifepath_engine::entities::ScenarioCatalog;
use lifepath_engine::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    config::EngineConfig,
    ports::RandomPort,
};
use lifepath_engine::RunSetup;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifepath_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();

    let random: Arc<dyn RandomPort> = match config.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(SystemRandom::new()),
    };

    let profile = match &config.profile_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?;
            let profile: Profile = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse profile {}", path.display()))?;
            tracing::info!(path = %path.display(), name = %profile.name, "Loaded player profile");
            Some(profile)
        }
        None => None,
    };

    let dream_card = select_dream_card(config.dream_card.as_deref(), profile.as_ref())?;

    let mut setup = RunSetup::new(dream_card).with_config(&config);
    if let Some(profile) = &profile {
        setup = setup.with_profile_bonus(profile);
    }
    if let Some(path) = std::env::args().nth(1) {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog {path}"))?;
        let catalog = ScenarioCatalog::from_json(&json)
            .with_context(|| format!("Failed to load catalog {path}"))?;
        tracing::info!(path = %path, scenarios = catalog.len(), "Loaded scenario catalog");
        setup = setup.with_catalog(catalog);
    }

    let mut engine = setup.start(random.clone(), Arc::new(SystemClock::new()));

    while let Some(scenario) = engine.next_scenario() {
        let roll = engine.spin_wheel();
        let unlocked: Vec<_> = scenario
            .options
            .iter()
            .filter(|option| !engine.is_option_locked(option))
            .map(|option| option.id)
            .collect();

        let (scenario_id, option_id) = if unlocked.is_empty() {
            (NEUTRAL_SCENARIO_ID.to_string(), OptionId::A)
        } else {
            let last = i32::try_from(unlocked.len() - 1).unwrap_or(i32::MAX);
            let index = usize::try_from(random.gen_range(0, last)).unwrap_or(0);
            (scenario.id.clone(), unlocked[index.min(unlocked.len() - 1)])
        };

        tracing::debug!(roll, scenario_id = %scenario_id, option_id = %option_id, "Auto-playing turn");
        engine.resolve_scenario(&scenario_id, option_id)?;
    }

    let report = engine.generate_report(profile.as_ref());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
