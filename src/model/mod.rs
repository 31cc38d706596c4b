pub use self::{
    hit_object::{HitObjectKind, OsuHitObject, OsuSlider, SliderPath},
    path::CurvePath,
};

mod hit_object;
mod path;
