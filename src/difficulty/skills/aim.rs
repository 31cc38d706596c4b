use crate::difficulty::{evaluators::AimEvaluator, object::OsuDifficultyObject};

use super::strain::{StrainSkill, StrainState};

/// The skill required to correctly aim at every object with normalized
/// distances.
#[derive(Clone, Default)]
pub struct Aim {
    state: StrainState,
}

impl StrainSkill for Aim {
    const SKILL_MULTIPLIER: f64 = 26.25;
    const STRAIN_DECAY_BASE: f64 = 0.15;

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
        AimEvaluator::evaluate_diff_of(curr)
    }
}
