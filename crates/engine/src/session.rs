use tracing::{debug, info};

use crate::core::{clock_seed, mix_seed, SimpleRng, Stage, StageError, StageSnapshot};
use crate::types::StageAction;

/// Where reset seeds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// A fresh clock-derived seed for every stage.
    Clock,
    /// Deterministic: the first stage uses this seed, later resets draw their
    /// seeds from an LCG seeded with a scrambled copy of it.
    Fixed(u32),
}

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The character hopped and the score went up.
    Advanced,
    /// The stage was rebuilt and the score is back to zero.
    Reset,
}

#[derive(Debug, Clone)]
enum Seeds {
    Clock,
    Chain(SimpleRng),
}

impl Seeds {
    fn next(&mut self) -> u32 {
        match self {
            Seeds::Clock => clock_seed(),
            Seeds::Chain(rng) => rng.next_u32(),
        }
    }
}

/// One interactive run: owns the stage and turns user commands into
/// move-or-reset decisions.
#[derive(Debug, Clone)]
pub struct Session {
    stage: Stage,
    seeds: Seeds,
    /// Highest score reached in this process. Never persisted.
    best_score: u32,
}

impl Session {
    pub fn new(columns: usize, rows: usize, source: SeedSource) -> Result<Self, StageError> {
        let (first_seed, seeds) = match source {
            SeedSource::Clock => (clock_seed(), Seeds::Clock),
            SeedSource::Fixed(seed) => (seed, Seeds::Chain(SimpleRng::new(mix_seed(seed)))),
        };
        let stage = Stage::new(columns, rows, first_seed)?;
        Ok(Self {
            stage,
            seeds,
            best_score: 0,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn score(&self) -> u32 {
        self.stage.score()
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn snapshot(&self) -> StageSnapshot {
        self.stage.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut StageSnapshot) {
        self.stage.snapshot_into(out);
    }

    /// Apply a user command.
    ///
    /// A move is taken if it is legal; otherwise the stage restarts.
    pub fn apply_action(&mut self, action: StageAction) -> StepOutcome {
        let Some(direction) = action.direction() else {
            self.restart();
            return StepOutcome::Reset;
        };

        if self.stage.move_character(direction) {
            self.best_score = self.best_score.max(self.stage.score());
            return StepOutcome::Advanced;
        }

        info!(
            action = action.as_str(),
            score = self.stage.score(),
            best_score = self.best_score,
            episode_id = self.stage.episode_id(),
            "missed a platform, restarting"
        );
        self.restart();
        StepOutcome::Reset
    }

    /// Rebuild the stage with the next seed.
    pub fn restart(&mut self) {
        let seed = self.seeds.next();
        self.stage.reset_with_seed(seed);
        debug!(seed, episode_id = self.stage.episode_id(), "session restarted");
    }
}
