//! Time-driven auto-play on top of a [`Playback`].

use std::time::Duration;

use mazetrace_core::{EventLog, Grid};

use crate::config::PlayerConfig;
use crate::engine::Playback;
use crate::error::LoadError;

/// Steps a [`Playback`] forward as time passes.
///
/// The caller feeds elapsed time through [`Player::advance`]; at speed `n`
/// one batch is applied every `step_interval / n`. Reaching the end pauses.
/// Manual seeks pause too.
#[derive(Debug, Clone)]
pub struct Player {
    playback: Playback,
    config: PlayerConfig,
    playing: bool,
    /// Speed multiplier (1 = normal, 2 = 2x, etc.)
    speed: u32,
    accumulated: Duration,
}

impl Player {
    pub fn new(playback: Playback, config: PlayerConfig) -> Self {
        Self {
            playback,
            config,
            playing: false,
            speed: 1,
            accumulated: Duration::ZERO,
        }
    }

    /// Load a new log, paused at the initial grid. Speed is kept.
    pub fn load(&mut self, grid: &Grid, log: EventLog) -> Result<(), LoadError> {
        self.playback.load(grid, log)?;
        self.playing = false;
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    /// Drop the loaded log and show `grid`, paused.
    pub fn clear(&mut self, grid: &Grid) {
        self.playback.clear(grid);
        self.pause();
    }

    #[inline]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn into_playback(self) -> Playback {
        self.playback
    }

    #[inline]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Start auto-play. At the end, playback restarts from the initial grid.
    /// Does nothing on an empty log.
    pub fn play(&mut self) {
        if self.playback.is_empty() {
            return;
        }
        if self.playback.is_at_end() {
            self.playback.reset();
        }
        self.playing = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the speed multiplier, clamped to `1..=max_speed`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(1, self.config.max_speed.max(1));
    }

    pub fn faster(&mut self) {
        self.set_speed(self.speed.saturating_mul(2));
    }

    pub fn slower(&mut self) {
        self.set_speed(self.speed / 2);
    }

    /// Time between steps at the current speed.
    pub fn step_duration(&self) -> Duration {
        self.config.step_interval / self.speed
    }

    /// Credit `elapsed` time and apply the steps it pays for. Returns the
    /// number of batches applied.
    ///
    /// `elapsed` is capped at `max_frame_delta` and at most
    /// `max_steps_per_tick` batches are applied per call.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.playing {
            return 0;
        }
        self.accumulated += elapsed.min(self.config.max_frame_delta);
        let per_step = self.step_duration();
        let remaining = self.playback.len() - (self.playback.cursor() + 1) as usize;
        let due = if per_step.is_zero() {
            remaining
        } else {
            let n = self.accumulated.as_nanos() / per_step.as_nanos();
            usize::try_from(n).unwrap_or(usize::MAX)
        };
        let steps = due.min(self.config.max_steps_per_tick).min(remaining);
        if steps > 0 {
            self.playback.seek(self.playback.cursor() + steps as isize);
            if per_step.is_zero() {
                self.accumulated = Duration::ZERO;
            } else {
                self.accumulated = self.accumulated.saturating_sub(per_step * steps as u32);
            }
        }
        if self.playback.is_at_end() {
            log::debug!("playback reached batch {}, pausing", self.playback.cursor());
            self.pause();
        } else if due > steps {
            // Drop time owed beyond the per-tick limit.
            self.accumulated = Duration::ZERO;
        }
        steps
    }

    /// Seek to `target` and pause.
    pub fn seek(&mut self, target: isize) {
        self.pause();
        self.playback.seek(target);
    }

    /// Step forward one batch and pause.
    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.playback.step_forward()
    }

    /// Step back one batch and pause.
    pub fn step_back(&mut self) -> bool {
        self.pause();
        self.playback.step_back()
    }

    /// Return to the initial grid and pause.
    pub fn reset(&mut self) {
        self.pause();
        self.playback.reset();
    }
}

impl From<Playback> for Player {
    fn from(playback: Playback) -> Self {
        Self::new(playback, PlayerConfig::default())
    }
}
