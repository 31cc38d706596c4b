use crate::difficulty::object::OsuDifficultyObject;

pub struct AimEvaluator;

impl AimEvaluator {
    const DISTANCE_EXPONENT: f64 = 0.99;
    const FLOW_ANGLE_THRESHOLD: f64 = 90.0;
    const SNAP_ANGLE_THRESHOLD: f64 = 120.0;
    const FLOW_DISTANCE_THRESHOLD: f64 = 39.0;

    pub(crate) fn evaluate_diff_of(curr: &OsuDifficultyObject) -> f64 {
        let mut distance = curr.distance.powf(Self::DISTANCE_EXPONENT);
        let mut time = curr.delta_time;

        match curr.jump_angle {
            // Fast notes with a flowable angle are harder than their raw
            // spacing suggests, so their effective time shrinks.
            Some(angle)
                if angle <= Self::FLOW_ANGLE_THRESHOLD
                    && distance > Self::FLOW_DISTANCE_THRESHOLD =>
            {
                time *= 0.67 + time.min(100.0) / 300.0;
            }
            // Sharp snap jumps scale harder with distance.
            Some(angle) if angle > Self::SNAP_ANGLE_THRESHOLD => {
                distance += curr.distance.powf(1.4) * ((angle - Self::SNAP_ANGLE_THRESHOLD) / 480.0);
            }
            _ => {}
        }

        distance / time
    }
}
