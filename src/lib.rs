//! Library to calculate density-aware difficulty attributes for osu! maps.
//!
//! ## Description
//!
//! `rosu-density` derives per-object geometric and temporal features from a
//! list of hit objects, runs them through a lookahead window that scores how
//! many simultaneously visible objects a player has to read, and aggregates
//! per-skill strain values (aim and speed) with exponential decay into a
//! single difficulty number per skill.
//!
//! Beatmap decoding, stacking, and the combination of skill ratings into an
//! overall star rating are out of scope; objects enter this crate with their
//! positions fully resolved.
//!
//! ## Usage
//!
//! ```
//! use rosu_density::{Difficulty, model::OsuHitObject};
//! use rosu_map::util::Pos;
//! use rosu_mods::GameModsLegacy;
//!
//! // A short stream of circles.
//! let objects: Vec<_> = (0..32)
//!     .map(|i| {
//!         let pos = Pos::new(100.0 + (i % 2) as f32 * 110.0, 200.0);
//!         OsuHitObject::circle(pos, f64::from(i) * 150.0, 45.0, 600.0)
//!     })
//!     .collect();
//!
//! let attrs = Difficulty::new()
//!     .mods(GameModsLegacy::DoubleTime)
//!     .calculate(objects);
//!
//! println!("aim: {} | speed: {}", attrs.aim, attrs.speed);
//! ```
//!
//! Instead of a final rating, the per-object strain sequences can be
//! retrieved through [`Difficulty::strains`], e.g. to plot the difficulty
//! of a map over time, and the annotated record stream itself through
//! [`Difficulty::objects`].
//!
//! ## Features
//!
//! Sliders carry a path sampling function; [`model::CurvePath`] adapts a
//! [`rosu_map`] curve built from control points, but any
//! `Fn(f64) -> Pos` works, so synthetic paths are easy to construct in
//! tests.

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::difficulty::{Difficulty, OsuDifficultyAttributes, OsuStrains};

/// Types for the difficulty calculation itself.
pub mod difficulty;

/// Types describing the hit objects consumed by this crate.
pub mod model;

mod util;
