pub use self::{
    aim::Aim,
    speed::Speed,
    strain::{StrainSkill, StrainState},
};

use super::object::OsuDifficultyObject;

mod aim;
mod speed;
pub(crate) mod strain;

/// All skills tracked for a map, fed from one shared record stream.
#[derive(Default)]
pub struct OsuSkills {
    pub aim: Aim,
    pub speed: Speed,
}

impl OsuSkills {
    pub fn process(&mut self, curr: &OsuDifficultyObject) {
        self.aim.process(curr);
        self.speed.process(curr);
    }
}
