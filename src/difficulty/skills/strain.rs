use crate::difficulty::object::OsuDifficultyObject;

pub fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    f64::powf(strain_decay_base, ms / 1000.0)
}

/// Per-skill bookkeeping shared by every [`StrainSkill`] implementor.
#[derive(Clone, Default)]
pub struct StrainState {
    pub current_strain: f64,
    pub current_section_peak: f64,
    pub current_section_end: f64,
    pub prev_start_time: f64,
    pub strain_peaks: Vec<f64>,
    pub object_strains: Vec<f64>,
}

/// A skill whose difficulty is tracked as an exponentially decaying strain
/// value, sampled into fixed-length section peaks.
pub trait StrainSkill: Sized {
    const SKILL_MULTIPLIER: f64;
    const STRAIN_DECAY_BASE: f64;

    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LENGTH: f64 = 400.0;

    fn state(&self) -> &StrainState;
    fn state_mut(&mut self) -> &mut StrainState;
    fn into_state(self) -> StrainState;

    /// The raw, undecayed difficulty of a single object.
    fn strain_value_of(curr: &OsuDifficultyObject) -> f64;

    fn process(&mut self, curr: &OsuDifficultyObject) {
        // The first object of a map doesn't generate a strain, so we begin
        // with an incremented section end.
        if self.state().object_strains.is_empty() {
            self.state_mut().current_section_end =
                (curr.start_time / Self::SECTION_LENGTH).ceil() * Self::SECTION_LENGTH;
        }

        while curr.start_time > self.state().current_section_end {
            self.save_current_peak();
            let section_end = self.state().current_section_end;
            self.start_new_section_from(section_end);
            self.state_mut().current_section_end += Self::SECTION_LENGTH;
        }

        let strain = self.strain_value_at(curr);

        let state = self.state_mut();
        state.current_section_peak = strain.max(state.current_section_peak);
        state.object_strains.push(strain);
        state.prev_start_time = curr.start_time;
    }

    /// Decay-then-add transition applied once per record.
    fn strain_value_at(&mut self, curr: &OsuDifficultyObject) -> f64 {
        let strain_value = Self::strain_value_of(curr) * Self::SKILL_MULTIPLIER;

        let state = self.state_mut();
        state.current_strain *= strain_decay(curr.delta_time, Self::STRAIN_DECAY_BASE);
        state.current_strain += strain_value;

        state.current_strain
    }

    fn save_current_peak(&mut self) {
        let state = self.state_mut();
        state.strain_peaks.push(state.current_section_peak);
    }

    /// The peak of a fresh section starts at the strain carried over from
    /// the previous object, decayed to the section boundary.
    fn start_new_section_from(&mut self, time: f64) {
        let state = self.state_mut();
        state.current_section_peak = state.current_strain
            * strain_decay(time - state.prev_start_time, Self::STRAIN_DECAY_BASE);
    }

    fn object_strains(&self) -> &[f64] {
        &self.state().object_strains
    }

    fn into_object_strains(self) -> Vec<f64> {
        self.into_state().object_strains
    }

    /// Weighted sum of the highest section peaks, from highest to lowest.
    fn difficulty_value(self) -> f64 {
        let mut state = self.into_state();
        state.strain_peaks.push(state.current_section_peak);

        let mut peaks = state.strain_peaks;

        // Sections with 0 strain don't contribute and only slow the sort.
        peaks.retain(|&peak| peak > 0.0);
        peaks.sort_unstable_by(|a, b| b.total_cmp(a));

        let mut difficulty = 0.0;
        let mut weight = 1.0;

        for strain in peaks {
            difficulty += strain * weight;
            weight *= Self::DECAY_WEIGHT;
        }

        difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flat {
        state: StrainState,
    }

    impl StrainSkill for Flat {
        const SKILL_MULTIPLIER: f64 = 10.0;
        const STRAIN_DECAY_BASE: f64 = 0.5;

        fn state(&self) -> &StrainState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut StrainState {
            &mut self.state
        }

        fn into_state(self) -> StrainState {
            self.state
        }

        fn strain_value_of(_: &OsuDifficultyObject) -> f64 {
            1.0
        }
    }

    fn record(idx: usize, start_time: f64, delta_time: f64) -> OsuDifficultyObject {
        OsuDifficultyObject {
            idx,
            start_time,
            distance: 0.0,
            delta_time,
            jump_angle: None,
            time_until_hit: 0.0,
            true_density: 0,
            calculated_density: 0.0,
        }
    }

    #[test]
    fn decay_then_add_recurrence() {
        let mut skill = Flat::default();
        skill.process(&record(0, 500.0, 500.0));
        skill.process(&record(1, 1000.0, 500.0));

        let strains = skill.object_strains();
        assert!((strains[0] - 10.0).abs() < 1e-12);

        let expected = strains[0] * strain_decay(500.0, 0.5) + 10.0;
        assert!((strains[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn decay_halves_per_halving_interval() {
        // base 0.5 over 1000ms halves the carried strain exactly.
        assert!((strain_decay(1000.0, 0.5) - 0.5).abs() < 1e-12);
        assert!((strain_decay(0.0, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn section_peaks_are_weighted_descending() {
        let mut skill = Flat::default();
        // Two objects in one section, then a long gap into another.
        skill.process(&record(0, 100.0, 100.0));
        skill.process(&record(1, 200.0, 100.0));
        skill.process(&record(2, 1700.0, 1500.0));

        let n_sections = skill.state().strain_peaks.len();
        // Sections ending at 400, 800, 1200 and 1600 have been closed.
        assert_eq!(n_sections, 4);

        let mut peaks = skill.state().strain_peaks.clone();
        peaks.push(skill.state().current_section_peak);
        peaks.retain(|&p| p > 0.0);
        peaks.sort_unstable_by(|a, b| b.total_cmp(a));

        let expected: f64 = peaks
            .iter()
            .enumerate()
            .map(|(i, p)| p * 0.9f64.powi(i as i32))
            .sum();

        assert!((skill.difficulty_value() - expected).abs() < 1e-9);
    }
}
