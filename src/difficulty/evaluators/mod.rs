pub use self::{aim::AimEvaluator, density::DensityEvaluator, speed::SpeedEvaluator};

mod aim;
mod density;
mod speed;
