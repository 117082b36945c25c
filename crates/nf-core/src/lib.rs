//! Core types for Nextframe.
//!
//! Provides the seeded random source every generator draws from, the scene
//! description and renderer seam used to produce frame artifacts, and the
//! [`Question`] model returned to callers.

pub mod question;
pub mod render;
pub mod rng;
pub mod scene;

pub use question::{FRAME_COUNT, Letter, OPTION_COUNT, Question};
pub use render::{Renderer, SvgRenderer};
pub use rng::{PatternRng, create_random_source};
pub use scene::{CANVAS_SIZE, CENTER, Point, Scene, Shape, Style};
