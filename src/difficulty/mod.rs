use rosu_mods::GameModsLegacy;

use crate::model::OsuHitObject;

use self::{
    beatmap::OsuDifficultyBeatmap,
    skills::{OsuSkills, StrainSkill},
};

pub mod beatmap;
pub mod evaluators;
pub mod object;
pub mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.0675;

/// Difficulty calculator on a list of [`OsuHitObject`]s.
///
/// # Example
///
/// ```
/// use rosu_density::{Difficulty, model::OsuHitObject};
/// use rosu_map::util::Pos;
///
/// let objects: Vec<_> = (0..16)
///     .map(|i| OsuHitObject::circle(Pos::new(i as f32 * 60.0, 0.0), f64::from(i) * 250.0, 45.0, 600.0))
///     .collect();
///
/// let attrs = Difficulty::new().clock_rate(1.5).calculate(objects);
/// assert!(attrs.aim > 0.0 && attrs.speed > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameModsLegacy,
    clock_rate: Option<f64>,
}

impl Difficulty {
    pub const fn new() -> Self {
        Self {
            mods: GameModsLegacy::NoMod,
            clock_rate: None,
        }
    }

    /// Specify mods.
    pub const fn mods(self, mods: GameModsLegacy) -> Self {
        Self { mods, ..self }
    }

    /// Adjust the clock rate used in the calculation.
    ///
    /// If none is specified, it will take the clock rate based on the mods
    /// i.e. 1.5 for DT, 0.75 for HT and 1.0 otherwise.
    ///
    /// | Minimum | Maximum |
    /// | :-----: | :-----: |
    /// | 0.01    | 100     |
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate.clamp(0.01, 100.0)),
            ..self
        }
    }

    pub fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// Perform the difficulty calculation.
    pub fn calculate(&self, objects: Vec<OsuHitObject>) -> OsuDifficultyAttributes {
        DifficultyValues::calculate(self, objects).eval()
    }

    /// Perform the difficulty calculation but instead of evaluating strain
    /// values, return them as is.
    ///
    /// Suitable to plot the difficulty over time.
    pub fn strains(&self, objects: Vec<OsuHitObject>) -> OsuStrains {
        let DifficultyValues { skills } = DifficultyValues::calculate(self, objects);

        OsuStrains {
            aim: skills.aim.into_object_strains(),
            speed: skills.speed.into_object_strains(),
        }
    }

    /// The stream of derived, density-annotated records the skills are fed
    /// with, in emission order.
    pub fn objects(&self, objects: Vec<OsuHitObject>) -> OsuDifficultyBeatmap {
        OsuDifficultyBeatmap::new(objects, self.get_clock_rate())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a difficulty calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuDifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
}

/// The result of calculating the strains of a map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuStrains {
    /// Strain values of the aim skill.
    pub aim: Vec<f64>,
    /// Strain values of the speed skill.
    pub speed: Vec<f64>,
}

pub struct DifficultyValues {
    pub skills: OsuSkills,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, objects: Vec<OsuHitObject>) -> Self {
        let diff_objects = OsuDifficultyBeatmap::new(objects, difficulty.get_clock_rate());

        let mut skills = OsuSkills::default();

        for curr in diff_objects {
            skills.process(&curr);
        }

        Self { skills }
    }

    pub fn eval(self) -> OsuDifficultyAttributes {
        let Self { skills } = self;

        OsuDifficultyAttributes {
            aim: skills.aim.difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER,
            speed: skills.speed.difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER,
        }
    }
}
