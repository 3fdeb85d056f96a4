// config.rs - Harness settings read from the environment

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// What to seed the field with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
    /// Catalog pattern by name. The glider in a 25x25 field lands on the reference cells.
    Pattern(String),
    /// `random_soup` with this seed value.
    Random(u64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub width: usize,
    pub height: usize,
    pub frames: u32,
    pub delay: Duration,
    pub seed: Seed,
    pub stop_on_cycle: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            frames: 5,
            delay: Duration::from_millis(33), // ~1/30 s
            seed: Seed::Pattern("glider".to_owned()),
            stop_on_cycle: false,
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            default
        }),
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source; missing or bad values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let pattern = lookup("LIFE_PATTERN").unwrap_or_else(|| "glider".to_owned());
        let seed = if pattern.trim().eq_ignore_ascii_case("random") {
            Seed::Random(parse_or(&lookup, "LIFE_SEED", 0))
        } else {
            Seed::Pattern(pattern.trim().to_owned())
        };

        Self {
            width: parse_or(&lookup, "LIFE_WIDTH", defaults.width),
            height: parse_or(&lookup, "LIFE_HEIGHT", defaults.height),
            frames: parse_or(&lookup, "LIFE_FRAMES", defaults.frames),
            delay: Duration::from_millis(parse_or(
                &lookup,
                "LIFE_DELAY_MS",
                defaults.delay.as_millis() as u64,
            )),
            seed,
            stop_on_cycle: parse_or(&lookup, "LIFE_STOP_ON_CYCLE", defaults.stop_on_cycle),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_reproduce_reference_run() {
        let config = HarnessConfig::from_lookup(lookup(&[]));
        assert_eq!(config, HarnessConfig::default());
        assert_eq!((config.width, config.height), (25, 25));
        assert_eq!(config.frames, 5);
        assert_eq!(config.seed, Seed::Pattern("glider".into()));
    }

    #[test]
    fn overrides() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("LIFE_WIDTH", "40"),
            ("LIFE_HEIGHT", " 30 "),
            ("LIFE_FRAMES", "100"),
            ("LIFE_DELAY_MS", "0"),
            ("LIFE_PATTERN", "Pulsar"),
            ("LIFE_STOP_ON_CYCLE", "true"),
        ]));
        assert_eq!((config.width, config.height), (40, 30));
        assert_eq!(config.frames, 100);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.seed, Seed::Pattern("Pulsar".into()));
        assert!(config.stop_on_cycle);
    }

    #[test]
    fn random_seed() {
        let config =
            HarnessConfig::from_lookup(lookup(&[("LIFE_PATTERN", "RANDOM"), ("LIFE_SEED", "42")]));
        assert_eq!(config.seed, Seed::Random(42));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("LIFE_WIDTH", "-3"),
            ("LIFE_FRAMES", "lots"),
        ]));
        assert_eq!(config.width, 25);
        assert_eq!(config.frames, 5);
    }
}
