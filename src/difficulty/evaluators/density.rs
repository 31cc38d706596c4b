use crate::difficulty::object::OsuDifficultyObject;

/// Scores the reading load a single on-screen object adds for a newly
/// appearing one.
pub struct DensityEvaluator;

impl DensityEvaluator {
    /// Objects closer than this are treated as a stack and carry no
    /// reading load.
    const STACK_DISTANCE: f64 = 52.0;
    /// Distances are capped here for the base term; further spacing does
    /// not make an object harder to notice.
    const BASE_DISTANCE_CAP: f64 = 208.0;
    const WIDE_ANGLE_THRESHOLD: f64 = 120.0;
    const OBTUSE_ANGLE_THRESHOLD: f64 = 90.0;
    const OBTUSE_DISTANCE_THRESHOLD: f64 = 312.0;

    /// The contribution of one object already on screen.
    ///
    /// Stacks add nothing; most linear patterns are read as a single
    /// object, so the angle term only kicks in for sharper turns.
    pub(crate) fn evaluate_load_of(h: &OsuDifficultyObject) -> f64 {
        if h.distance <= Self::STACK_DISTANCE {
            return 0.0;
        }

        let mut density =
            (h.distance.min(Self::BASE_DISTANCE_CAP) / Self::BASE_DISTANCE_CAP).powi(2);

        let Some(angle) = h.jump_angle else {
            return density;
        };

        let angle_factor =
            (Self::WIDE_ANGLE_THRESHOLD - angle).max(0.0) / Self::WIDE_ANGLE_THRESHOLD;
        let dist_factor = ((h.distance - 99.0).max(5.0) / 5.0).powi(3);
        density += (angle_factor * dist_factor).min(1.0);

        if angle > Self::OBTUSE_ANGLE_THRESHOLD && h.distance > Self::OBTUSE_DISTANCE_THRESHOLD {
            // `90.0 / 90.0` divides first. Kept as-is to stay zero-diff
            // with established output values.
            density += (angle - 90.0 / 90.0) * 0.2;
        }

        density
    }
}
