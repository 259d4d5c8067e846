use std::time::Duration;

/// How [`Playback`](crate::Playback) moves the cursor backward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeekStrategy {
    /// Restore the initial grid and replay batches up to the target.
    #[default]
    Rebuild,
    /// Undo batches in reverse, inferring each cell's previous kind with
    /// [`undo_kind`](crate::undo_kind). Used only for logs verified
    /// invertible at load time; other logs fall back to `Rebuild`.
    Incremental,
}

/// Configuration for a [`Playback`](crate::Playback).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    pub strategy: SeekStrategy,
    /// Split a log consisting of one multi-event batch into one batch per
    /// event, so stepping stays granular.
    pub subdivide_single_batch: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            strategy: SeekStrategy::Rebuild,
            subdivide_single_batch: true,
        }
    }
}

impl PlaybackConfig {
    pub fn with_strategy(mut self, strategy: SeekStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_subdivide_single_batch(mut self, subdivide: bool) -> Self {
        self.subdivide_single_batch = subdivide;
        self
    }
}

/// Timing for a [`Player`](crate::Player).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerConfig {
    /// Time per step at speed 1.
    pub step_interval: Duration,
    /// Longest elapsed time credited by a single `advance` call.
    pub max_frame_delta: Duration,
    /// Most steps a single `advance` call applies.
    pub max_steps_per_tick: usize,
    /// Highest speed multiplier.
    pub max_speed: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(50),
            max_frame_delta: Duration::from_millis(50),
            max_steps_per_tick: 100,
            max_speed: 20,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn player_config_round_trips() {
        let cfg = PlayerConfig {
            max_speed: 8,
            ..PlayerConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PlayerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn strategy_is_a_bare_name() {
        let json = serde_json::to_string(&SeekStrategy::Incremental).unwrap();
        assert_eq!(json, r#""Incremental""#);
    }
}
