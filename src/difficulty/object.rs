use crate::{
    model::{HitObjectKind, OsuHitObject},
    util::float_ext::FloatExt,
};

/// A hit object enriched with the data required for difficulty calculation,
/// derived from the object itself and its one or two predecessors.
pub struct OsuDifficultyObject {
    /// Position in the derived stream, 0-based; the first object of the map
    /// produces no record.
    pub idx: usize,
    /// Clock-rate-adjusted start time in ms.
    pub start_time: f64,
    /// Normalized distance from the effective cursor position left behind by
    /// the previous object.
    pub distance: f64,
    /// Milliseconds elapsed since the previous object's start time, adjusted
    /// by the clock rate and floored at [`MIN_DELTA_TIME`].
    ///
    /// [`MIN_DELTA_TIME`]: Self::MIN_DELTA_TIME
    pub delta_time: f64,
    /// Inner angle in degrees (`[0, 180]`) formed at the previous object by
    /// the last three objects, or `None` when the geometry degenerates into
    /// a stack.
    pub jump_angle: Option<f64>,
    /// Milliseconds until the object has to be hit; counts down while the
    /// record sits in the on-screen window.
    pub time_until_hit: f64,
    /// Number of objects already on screen when this one appears.
    pub true_density: u32,
    /// The reading load of the objects the player must process when this
    /// one appears.
    pub calculated_density: f64,
}

impl OsuDifficultyObject {
    /// Distances are scaled so every object behaves as if it had this
    /// radius, regardless of the map's circle size.
    pub const NORMALIZED_RADIUS: f64 = 52.0;

    /// Floor for [`delta_time`] guarding against overlapping or malformed
    /// objects blowing up the `1 / time` terms.
    ///
    /// [`delta_time`]: Self::delta_time
    pub const MIN_DELTA_TIME: f64 = 50.0;

    const SMALL_CIRCLE_RADIUS: f64 = 30.0;
    const FOLLOW_RADIUS_FACTOR: f64 = 3.0;

    pub(crate) fn new(
        curr: &OsuHitObject,
        last: &OsuHitObject,
        last_last: &OsuHitObject,
        clock_rate: f64,
        idx: usize,
    ) -> Self {
        let delta_time =
            ((curr.start_time - last.start_time) / clock_rate).max(Self::MIN_DELTA_TIME);

        Self {
            idx,
            start_time: curr.start_time / clock_rate,
            distance: Self::normalized_distance(curr, last),
            delta_time,
            jump_angle: Self::jump_angle(curr, last, last_last),
            time_until_hit: curr.time_preempt,
            true_density: 0,
            calculated_density: 0.0,
        }
    }

    /// Travel distance from the previous object's effective cursor position,
    /// scaled to a uniform circle size.
    fn normalized_distance(curr: &OsuHitObject, last: &OsuHitObject) -> f64 {
        let mut scaling_factor = Self::NORMALIZED_RADIUS / curr.radius;

        if curr.radius < Self::SMALL_CIRCLE_RADIUS {
            let small_circle_bonus =
                (Self::SMALL_CIRCLE_RADIUS - curr.radius) / Self::SMALL_CIRCLE_RADIUS;
            scaling_factor *= 1.0 + small_circle_bonus;
        }

        let mut last_cursor_pos = last.pos;
        let mut last_travel_dist = 0.0;

        if let HitObjectKind::Slider(ref slider) = last.kind {
            last_cursor_pos = slider.lazy_end_pos().unwrap_or(last_cursor_pos);
            last_travel_dist = slider.lazy_travel_dist();
        }

        (last_travel_dist + f64::from((curr.pos - last_cursor_pos).length())) * scaling_factor
    }

    /// Inner angle at `last` formed by the vectors towards `last_last` and
    /// `curr`.
    ///
    /// Not defined when `last_last` and `last` are close enough to be a
    /// stack, or when `curr` sits exactly on top of `last`.
    fn jump_angle(curr: &OsuHitObject, last: &OsuHitObject, last_last: &OsuHitObject) -> Option<f64> {
        let v1 = last_last.pos - last.pos;
        let v2 = curr.pos - last.pos;

        if f64::from(v1.length()) < curr.radius / 2.0 || FloatExt::eq(v2.length(), 0.0) {
            return None;
        }

        let dot = f64::from(v1.dot(v2));
        let det = f64::from(v1.x * v2.y - v1.y * v2.x);

        Some(det.atan2(dot).abs().to_degrees())
    }

    /// Simulates the lazy follow circle over a slider's path and memoizes
    /// the resulting end position and travel distance on the slider.
    ///
    /// The follow circle only moves when the path strays further than its
    /// radius from the current center. Samples are taken at every nested
    /// object's time after the head and at the slider's end time. No-op for
    /// circles and for sliders whose cache is already filled.
    pub(crate) fn compute_slider_cursor_pos(h: &mut OsuHitObject) {
        let pos = h.pos;
        let radius = h.radius;

        let HitObjectKind::Slider(ref mut slider) = h.kind else {
            return;
        };

        if slider.lazy_end_pos().is_some() {
            return;
        }

        let approx_follow_circle_radius = radius * Self::FOLLOW_RADIUS_FACTOR;
        let end_time = slider.end_time;

        let mut curr_cursor_pos = pos;
        let mut travel_dist = 0.0;

        let sample_times = slider
            .nested_start_times()
            .iter()
            .copied()
            .skip(1)
            .chain(std::iter::once(end_time))
            .collect::<Vec<_>>();

        for time in sample_times {
            let diff = slider.position_at(time) - curr_cursor_pos;
            let mut dist = f64::from(diff.length());

            if dist > approx_follow_circle_radius {
                // The cursor would leave the follow circle, so it has to move.
                let direction = diff.normalize();
                dist -= approx_follow_circle_radius;
                curr_cursor_pos += direction * dist as f32;
                travel_dist += dist;
            }
        }

        slider.set_lazy_cache(curr_cursor_pos, travel_dist);
    }
}
