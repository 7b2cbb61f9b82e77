//! Engine configuration loaded from environment variables.
//!
//! Supported environment variables:
//! - LIFEPATH_TOTAL_TURNS: turns per run (positive integer, default 50)
//! - LIFEPATH_STAGE_SCALING: `fixed` or `proportional` (default `fixed`)
//! - LIFEPATH_SEED: u64 seed for reproducible runs (default: system randomness)
//! - LIFEPATH_NEUTRAL_CHOICE_HAPPINESS: happiness granted by choices that touch
//!   no visible stat (default 0, disabled)
//! - LIFEPATH_DREAM_CARD: dream card id to start with
//! - LIFEPATH_PROFILE: path to a JSON player profile (optional)

use std::path::PathBuf;
use std::str::FromStr;

use lifepath_domain::{StageScaling, DEFAULT_TOTAL_TURNS};

pub const ENV_TOTAL_TURNS: &str = "LIFEPATH_TOTAL_TURNS";
pub const ENV_STAGE_SCALING: &str = "LIFEPATH_STAGE_SCALING";
pub const ENV_SEED: &str = "LIFEPATH_SEED";
pub const ENV_NEUTRAL_CHOICE_HAPPINESS: &str = "LIFEPATH_NEUTRAL_CHOICE_HAPPINESS";
pub const ENV_DREAM_CARD: &str = "LIFEPATH_DREAM_CARD";
pub const ENV_PROFILE: &str = "LIFEPATH_PROFILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub total_turns: u32,
    pub stage_scaling: StageScaling,
    pub seed: Option<u64>,
    pub neutral_choice_happiness: i64,
    pub dream_card: Option<String>,
    pub profile_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            total_turns: DEFAULT_TOTAL_TURNS,
            stage_scaling: StageScaling::default(),
            seed: None,
            neutral_choice_happiness: 0,
            dream_card: None,
            profile_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Values that fail to parse are
    /// ignored with a warning and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(turns) = parse_var::<u32>(&lookup, ENV_TOTAL_TURNS) {
            if turns > 0 {
                config.total_turns = turns;
            } else {
                tracing::warn!(turns, "{} must be positive, ignoring", ENV_TOTAL_TURNS);
            }
        }

        if let Some(scaling) = parse_var::<StageScaling>(&lookup, ENV_STAGE_SCALING) {
            config.stage_scaling = scaling;
        }

        config.seed = parse_var::<u64>(&lookup, ENV_SEED);

        if let Some(happiness) = parse_var::<i64>(&lookup, ENV_NEUTRAL_CHOICE_HAPPINESS) {
            if happiness >= 0 {
                config.neutral_choice_happiness = happiness;
            } else {
                tracing::warn!(
                    happiness,
                    "{} cannot be negative, ignoring",
                    ENV_NEUTRAL_CHOICE_HAPPINESS
                );
            }
        }

        config.dream_card = lookup(ENV_DREAM_CARD)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        config.profile_path = lookup(ENV_PROFILE)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let val = lookup(key)?;
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(parsed) => {
            tracing::info!(key, val = %trimmed, "Applied environment override");
            Some(parsed)
        }
        Err(_) => {
            tracing::warn!(key, val = %trimmed, "Environment value is not valid, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = EngineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.total_turns, 50);
        assert_eq!(config.stage_scaling, StageScaling::Fixed);
        assert_eq!(config.neutral_choice_happiness, 0);
    }

    #[test]
    fn reads_every_override() {
        let config = EngineConfig::from_lookup(lookup(&[
            (ENV_TOTAL_TURNS, "30"),
            (ENV_STAGE_SCALING, "proportional"),
            (ENV_SEED, "1234"),
            (ENV_NEUTRAL_CHOICE_HAPPINESS, "5"),
            (ENV_DREAM_CARD, " founder "),
            (ENV_PROFILE, "profiles/ada.json"),
        ]));
        assert_eq!(config.total_turns, 30);
        assert_eq!(config.stage_scaling, StageScaling::Proportional);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.neutral_choice_happiness, 5);
        assert_eq!(config.dream_card.as_deref(), Some("founder"));
        assert_eq!(config.profile_path, Some(PathBuf::from("profiles/ada.json")));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[
            (ENV_TOTAL_TURNS, "0"),
            (ENV_STAGE_SCALING, "sideways"),
            (ENV_SEED, "not-a-number"),
            (ENV_NEUTRAL_CHOICE_HAPPINESS, "-3"),
            (ENV_DREAM_CARD, "   "),
            (ENV_PROFILE, ""),
        ]));
        assert_eq!(config, EngineConfig::default());
    }
}
