use crate::difficulty::{evaluators::SpeedEvaluator, object::OsuDifficultyObject};

use super::strain::{StrainSkill, StrainState};

/// The skill required to press keys in time with the speed at which
/// objects need to be hit.
#[derive(Clone, Default)]
pub struct Speed {
    state: StrainState,
}

impl StrainSkill for Speed {
    const SKILL_MULTIPLIER: f64 = 1400.0;
    const STRAIN_DECAY_BASE: f64 = 0.3;

    fn state(&self) -> &StrainState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StrainState {
        &mut self.state
    }

    fn into_state(self) -> StrainState {
        self.state
    }

    fn strain_value_of(curr: &OsuDifficultyObject) -> f64 {
        SpeedEvaluator::evaluate_diff_of(curr)
    }
}
