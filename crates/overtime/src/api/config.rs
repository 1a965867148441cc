use serde::{Deserialize, Serialize};

/// Where the scheduler reads "now" from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// Milliseconds since the Unix epoch. Frame delta is ignored.
    #[default]
    Wall,
    /// Milliseconds accumulated from the host's frame delta.
    /// Deterministic: no progress while the host stops ticking.
    Frame,
}

/// Configuration for the scheduler, usually provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Time source for task start/end stamps (default: wall clock).
    pub clock: ClockMode,
    /// Initial capacity of each category registry (default: 64).
    pub registry_capacity: usize,
    /// Initial entity capacity of the hosted scene (default: 256).
    pub scene_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            clock: ClockMode::Wall,
            registry_capacity: 64,
            scene_capacity: 256,
        }
    }
}

impl SchedulerConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Config using the accumulated frame clock.
    pub fn frame_clock() -> Self {
        Self {
            clock: ClockMode::Frame,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let config = SchedulerConfig::from_json(r#"{ "clock": "frame" }"#).unwrap();
        assert_eq!(config.clock, ClockMode::Frame);
        assert_eq!(config.registry_capacity, 64);
        assert_eq!(config.scene_capacity, 256);
    }

    #[test]
    fn empty_object_is_default() {
        let config = SchedulerConfig::from_json("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn rejects_unknown_clock() {
        assert!(SchedulerConfig::from_json(r#"{ "clock": "sundial" }"#).is_err());
    }
}
