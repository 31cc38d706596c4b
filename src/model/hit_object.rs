use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_map::util::Pos;

/// A timed, positioned target of a beatmap.
///
/// Positions are expected to be fully resolved (i.e. stacking already
/// applied); this crate does not shift them further.
#[derive(Debug)]
pub struct OsuHitObject {
    pub pos: Pos,
    pub start_time: f64,
    pub radius: f64,
    /// How long the object is visible before it must be hit.
    pub time_preempt: f64,
    pub kind: HitObjectKind,
}

impl OsuHitObject {
    pub fn circle(pos: Pos, start_time: f64, radius: f64, time_preempt: f64) -> Self {
        Self {
            pos,
            start_time,
            radius,
            time_preempt,
            kind: HitObjectKind::Circle,
        }
    }

    pub fn slider(
        pos: Pos,
        start_time: f64,
        radius: f64,
        time_preempt: f64,
        slider: OsuSlider,
    ) -> Self {
        Self {
            pos,
            start_time,
            radius,
            time_preempt,
            kind: HitObjectKind::Slider(slider),
        }
    }

    /// Whether the hitobject is a circle.
    pub const fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    /// Whether the hitobject is a slider.
    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider(_))
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitObjectKind::Circle => self.start_time,
            HitObjectKind::Slider(ref slider) => slider.end_time,
        }
    }
}

/// Additional data for an [`OsuHitObject`].
#[derive(Debug)]
pub enum HitObjectKind {
    Circle,
    Slider(OsuSlider),
}

/// The path of a slider, sampled at absolute clock time.
///
/// Implemented for plain closures so callers can plug in any sampling
/// scheme; [`CurvePath`] provides one built from control points.
///
/// [`CurvePath`]: crate::model::CurvePath
pub trait SliderPath: Send + Sync {
    /// The position of the follow point at the given absolute time.
    fn position_at(&self, time: f64) -> Pos;
}

impl<F: Fn(f64) -> Pos + Send + Sync> SliderPath for F {
    fn position_at(&self, time: f64) -> Pos {
        (self)(time)
    }
}

/// A slider.
pub struct OsuSlider {
    pub end_time: f64,
    nested_start_times: Box<[f64]>,
    path: Box<dyn SliderPath>,
    lazy_end_pos: Option<Pos>,
    lazy_travel_dist: f64,
}

impl OsuSlider {
    /// `nested_start_times` are the times of the slider's nested objects
    /// (head, ticks, repeats, tail) in chronological order, head included.
    pub fn new(
        end_time: f64,
        nested_start_times: impl Into<Box<[f64]>>,
        path: impl SliderPath + 'static,
    ) -> Self {
        Self {
            end_time,
            nested_start_times: nested_start_times.into(),
            path: Box::new(path),
            lazy_end_pos: None,
            lazy_travel_dist: 0.0,
        }
    }

    pub fn position_at(&self, time: f64) -> Pos {
        self.path.position_at(time)
    }

    pub fn nested_start_times(&self) -> &[f64] {
        &self.nested_start_times
    }

    /// The final position of the lazy follow circle.
    ///
    /// `None` until the slider has been processed as a predecessor; the
    /// cache is filled exactly once.
    pub const fn lazy_end_pos(&self) -> Option<Pos> {
        self.lazy_end_pos
    }

    /// The total distance the lazy follow circle was forced to travel.
    pub const fn lazy_travel_dist(&self) -> f64 {
        self.lazy_travel_dist
    }

    pub(crate) fn set_lazy_cache(&mut self, end_pos: Pos, travel_dist: f64) {
        debug_assert!(self.lazy_end_pos.is_none());

        self.lazy_end_pos = Some(end_pos);
        self.lazy_travel_dist = travel_dist;
    }
}

// The path is an opaque sampling function, so it is left out.
impl Debug for OsuSlider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OsuSlider")
            .field("end_time", &self.end_time)
            .field("nested_start_times", &self.nested_start_times)
            .field("lazy_end_pos", &self.lazy_end_pos)
            .field("lazy_travel_dist", &self.lazy_travel_dist)
            .finish_non_exhaustive()
    }
}
