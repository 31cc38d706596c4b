use crate::difficulty::object::OsuDifficultyObject;

pub struct SpeedEvaluator;

impl SpeedEvaluator {
    const SINGLE_SPACING_THRESHOLD: f64 = 125.0;
    const STREAM_SPACING_THRESHOLD: f64 = 110.0;
    const ALMOST_DIAMETER: f64 = 90.0;

    pub(crate) fn evaluate_diff_of(curr: &OsuDifficultyObject) -> f64 {
        let distance = curr.distance;

        let speed_value = if distance > Self::SINGLE_SPACING_THRESHOLD {
            1.6
        } else if distance > Self::STREAM_SPACING_THRESHOLD {
            1.24 + 0.36 * (distance - Self::STREAM_SPACING_THRESHOLD)
                / (Self::SINGLE_SPACING_THRESHOLD - Self::STREAM_SPACING_THRESHOLD)
        } else if distance > Self::ALMOST_DIAMETER {
            1.08 + 0.16 * (distance - Self::ALMOST_DIAMETER)
                / (Self::STREAM_SPACING_THRESHOLD - Self::ALMOST_DIAMETER)
        } else if distance > Self::ALMOST_DIAMETER / 2.0 {
            1.0 + 0.08 * (distance - Self::ALMOST_DIAMETER / 2.0) / (Self::ALMOST_DIAMETER / 2.0)
        } else {
            1.0
        };

        speed_value / curr.delta_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(distance: f64, delta_time: f64) -> OsuDifficultyObject {
        OsuDifficultyObject {
            idx: 0,
            start_time: 0.0,
            distance,
            delta_time,
            jump_angle: None,
            time_until_hit: 600.0,
            true_density: 0,
            calculated_density: 0.0,
        }
    }

    #[test]
    fn saturates_above_single_spacing() {
        let v = SpeedEvaluator::evaluate_diff_of(&record(500.0, 100.0));
        assert!((v - 1.6 / 100.0).abs() < 1e-12);
    }

    #[test]
    fn floors_below_half_diameter() {
        let v = SpeedEvaluator::evaluate_diff_of(&record(10.0, 100.0));
        assert!((v - 1.0 / 100.0).abs() < 1e-12);
    }

    #[test]
    fn pieces_join_continuously() {
        for boundary in [45.0, 90.0, 110.0, 125.0] {
            let below = SpeedEvaluator::evaluate_diff_of(&record(boundary - 1e-9, 100.0));
            let above = SpeedEvaluator::evaluate_diff_of(&record(boundary + 1e-9, 100.0));
            assert!((below - above).abs() < 1e-9, "discontinuity at {boundary}");
        }
    }

    #[test]
    fn rewards_wider_spacing_monotonically() {
        let mut prev = 0.0;
        for dist in (0..=150).map(f64::from) {
            let v = SpeedEvaluator::evaluate_diff_of(&record(dist, 100.0));
            assert!(v >= prev, "not monotone at {dist}");
            prev = v;
        }
    }
}
