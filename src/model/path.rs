use rosu_map::{
    section::{
        general::GameMode,
        hit_objects::{Curve, CurveBuffers, PathControlPoint},
    },
    util::Pos,
};

use super::hit_object::SliderPath;

/// A [`SliderPath`] backed by a [`rosu_map`] curve.
///
/// Maps an absolute clock time onto curve progress, folding repeat spans
/// back and forth (odd spans run the curve in reverse).
pub struct CurvePath {
    head_pos: Pos,
    start_time: f64,
    duration: f64,
    span_count: f64,
    curve: Curve,
}

impl CurvePath {
    pub fn new(
        head_pos: Pos,
        start_time: f64,
        end_time: f64,
        span_count: usize,
        control_points: &[PathControlPoint],
        expected_dist: Option<f64>,
    ) -> Self {
        let mut bufs = CurveBuffers::default();
        let curve = Curve::new(GameMode::Osu, control_points, expected_dist, &mut bufs);

        Self {
            head_pos,
            start_time,
            duration: end_time - start_time,
            span_count: span_count.max(1) as f64,
            curve,
        }
    }
}

impl SliderPath for CurvePath {
    fn position_at(&self, time: f64) -> Pos {
        if self.duration <= 0.0 {
            return self.head_pos;
        }

        let progress = ((time - self.start_time) / self.duration).clamp(0.0, 1.0);

        let span_at = (progress * self.span_count) as i32;
        let span_progress = (progress * self.span_count) % 1.0;

        let curve_progress = if span_at % 2 == 1 {
            1.0 - span_progress
        } else {
            span_progress
        };

        self.head_pos + self.curve.position_at(curve_progress)
    }
}
