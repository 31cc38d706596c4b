use std::collections::VecDeque;

use crate::model::OsuHitObject;

use super::{evaluators::DensityEvaluator, object::OsuDifficultyObject};

/// Turns a list of [`OsuHitObject`]s into a stream of
/// [`OsuDifficultyObject`]s with their density values finalized.
///
/// The inner loop keeps deriving upcoming objects into the on-screen queue
/// until the front object would already have had to be hit; only then is it
/// released. Emission order always equals arrival order, the queue merely
/// delays a record until every object it coexists with has been seen, so
/// its density can be computed against exactly those objects.
pub struct OsuDifficultyBeatmap {
    objects: Box<[OsuHitObject]>,
    clock_rate: f64,
    idx: usize,
    on_screen: VecDeque<OsuDifficultyObject>,
}

impl OsuDifficultyBeatmap {
    pub fn new(mut objects: Vec<OsuHitObject>, clock_rate: f64) -> Self {
        // Upstream ordering is not guaranteed in some maps.
        objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        // Fill every slider's follow-circle cache up front so successors
        // can read it without mutating their predecessor mid-stream.
        for h in objects.iter_mut() {
            OsuDifficultyObject::compute_slider_cursor_pos(h);
        }

        Self {
            objects: objects.into_boxed_slice(),
            clock_rate,
            idx: 1,
            on_screen: VecDeque::new(),
        }
    }

    /// Derives the next raw object, or `None` once the map is exhausted.
    ///
    /// The first derived record duplicates the map's first object as its
    /// `last_last` to bootstrap the first angle computation; a map with
    /// fewer than two objects derives nothing.
    fn create_next(&mut self) -> Option<OsuDifficultyObject> {
        let curr = self.objects.get(self.idx)?;
        let last = &self.objects[self.idx - 1];
        let last_last = &self.objects[self.idx.saturating_sub(2)];

        let h = OsuDifficultyObject::new(curr, last, last_last, self.clock_rate, self.idx - 1);
        self.idx += 1;

        Some(h)
    }
}

impl Iterator for OsuDifficultyBeatmap {
    type Item = OsuDifficultyObject;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(mut latest) = self.create_next() else {
                // Nothing new can appear; drain what is still on screen.
                return self.on_screen.pop_front();
            };

            for h in self.on_screen.iter_mut() {
                h.time_until_hit -= latest.delta_time;

                latest.true_density += 1;
                latest.calculated_density += DensityEvaluator::evaluate_load_of(h);
            }

            self.on_screen.push_back(latest);

            // Keep pulling while there is still time before the front
            // object has to be hit.
            if self
                .on_screen
                .front()
                .is_some_and(|h| h.time_until_hit <= 0.0)
            {
                return self.on_screen.pop_front();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rosu_map::util::Pos;

    use super::*;

    fn circle(x: f32, y: f32, start_time: f64) -> OsuHitObject {
        OsuHitObject::circle(Pos::new(x, y), start_time, 50.0, 600.0)
    }

    #[test]
    fn fewer_than_two_objects_produce_nothing() {
        assert_eq!(OsuDifficultyBeatmap::new(Vec::new(), 1.0).count(), 0);
        assert_eq!(
            OsuDifficultyBeatmap::new(vec![circle(0.0, 0.0, 0.0)], 1.0).count(),
            0
        );
    }

    #[test]
    fn single_record_sees_an_empty_window() {
        let objects = vec![circle(0.0, 0.0, 0.0), circle(100.0, 0.0, 500.0)];
        let records: Vec<_> = OsuDifficultyBeatmap::new(objects, 1.0).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].true_density, 0);
        assert_eq!(records[0].calculated_density, 0.0);
    }

    #[test]
    fn emission_order_equals_arrival_order() {
        let objects: Vec<_> = (0..20)
            .map(|i| circle(i as f32 * 30.0, 0.0, f64::from(i) * 120.0))
            .collect();

        let indices: Vec<_> = OsuDifficultyBeatmap::new(objects, 1.0)
            .map(|h| h.idx)
            .collect();

        assert_eq!(indices, (0..19).collect::<Vec<_>>());
    }

    #[test]
    fn unsorted_input_is_sorted_before_processing() {
        let objects = vec![
            circle(200.0, 0.0, 1000.0),
            circle(0.0, 0.0, 0.0),
            circle(100.0, 0.0, 500.0),
        ];

        let records: Vec<_> = OsuDifficultyBeatmap::new(objects, 1.0).collect();

        assert_eq!(records.len(), 2);
        assert!(records[0].start_time <= records[1].start_time);
        assert!((records[0].delta_time - 500.0).abs() < 1e-9);
    }

    #[test]
    fn density_counts_coexisting_objects() {
        // 600ms preempt, 500ms spacing: when the second record appears,
        // the first is still on screen.
        let objects = vec![
            circle(0.0, 0.0, 0.0),
            circle(100.0, 0.0, 500.0),
            circle(200.0, 0.0, 1000.0),
        ];

        let records: Vec<_> = OsuDifficultyBeatmap::new(objects, 1.0).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].true_density, 0);
        assert_eq!(records[1].true_density, 1);

        // The first record's 104 unit jump contributes its base term; its
        // bootstrap angle is degenerate, so nothing more.
        let expected = (104.0f64 / 208.0).powi(2);
        assert!((records[1].calculated_density - expected).abs() < 1e-9);
    }

    #[test]
    fn dense_stream_accumulates_window_members() {
        // 120ms spacing against a 600ms preempt keeps several objects on
        // screen at once; density must grow accordingly.
        let objects: Vec<_> = (0..8)
            .map(|i| circle(i as f32 * 100.0, 0.0, f64::from(i) * 120.0))
            .collect();

        let records: Vec<_> = OsuDifficultyBeatmap::new(objects, 1.0).collect();

        assert_eq!(records[0].true_density, 0);
        assert_eq!(records[1].true_density, 1);
        assert_eq!(records[2].true_density, 2);
        assert_eq!(records[3].true_density, 3);
        assert_eq!(records[4].true_density, 4);
        // A record leaves the window after 600 / 120 = 5 arrivals.
        assert_eq!(records[5].true_density, 5);
        assert_eq!(records[6].true_density, 5);
    }
}
