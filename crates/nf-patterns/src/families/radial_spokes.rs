//! Rotating radial spokes.
//!
//! Spokes turn by a fixed angle per frame. Angular jitter and stroke width
//! are drawn once per spoke, so a spoke keeps its wobble as it rotates.

use nf_core::{CENTER, Point, Question, Scene, Shape, Style};

use crate::error::PatternResult;
use crate::family::{PatternContext, PatternFamily};
use crate::options::OptionSet;

const SPOKE_COUNTS: [(usize, f64); 4] = [(10, 0.2), (12, 0.4), (16, 0.25), (20, 0.15)];

/// Stalled at frame 3, rotating backwards, and rotating one step too far.
const NEAR_MISS_TURNS: [f64; 3] = [2.0, -3.0, 4.0];
/// Replacement rotations, in frames.
const SPARE_TURNS: [f64; 4] = [2.5, 3.5, 1.0, 5.0];
/// Rotations closer than this (degrees) to a whole spacing away from the
/// answer draw the same picture.
const ALIAS_TOLERANCE: f64 = 2.0;

/// The radial spokes family.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialSpokes;

#[derive(Debug, Clone)]
struct Params {
    count: usize,
    outer_r: f64,
    base_angle: f64,
    step: f64,
    /// (angle jitter in degrees, stroke width) per spoke.
    spokes: Vec<(f64, f64)>,
}

impl Params {
    fn draw(ctx: &mut PatternContext<'_>) -> PatternResult<Self> {
        let count = ctx.pick_weighted("spoke counts", &SPOKE_COUNTS)?;
        let outer_r = ctx.rng.uniform(60.0, 78.0);
        let base_angle = ctx.rng.uniform(0.0, 360.0);
        let creativity = ctx.rng.creativity();
        let step = ctx.rng.uniform(3.0, 12.0) * (1.0 + 0.3 * creativity);
        let width_variation = 0.5 + 2.0 * (creativity - 0.5).max(0.0);
        let spokes = (0..count)
            .map(|_| {
                let wobble = ctx.rng.jitter(3.0);
                let width = (2.0 + ctx.rng.jitter(width_variation)).max(1.0);
                (wobble, width)
            })
            .collect();
        Ok(Self {
            count,
            outer_r,
            base_angle,
            step,
            spokes,
        })
    }

    /// Rotation after `t` frames; fractional and negative counts allowed.
    fn angle(&self, t: f64) -> f64 {
        self.base_angle + t * self.step
    }

    /// Whether the rotation after `t` frames lands the spokes on the answer's
    /// positions, which happens when it is a whole spacing away.
    fn mimics_answer(&self, t: f64) -> bool {
        let spacing = 360.0 / self.count as f64;
        let offset = ((t - 3.0) * self.step).rem_euclid(spacing);
        offset < ALIAS_TOLERANCE || spacing - offset < ALIAS_TOLERANCE
    }

    fn spare_turns(&self) -> Vec<f64> {
        SPARE_TURNS
            .into_iter()
            .filter(|t| !self.mimics_answer(*t))
            .collect()
    }

    fn distractor_turns(&self) -> [f64; 3] {
        let mut spares = self.spare_turns().into_iter();
        NEAR_MISS_TURNS.map(|t| {
            if self.mimics_answer(t) {
                spares.next().unwrap_or(SPARE_TURNS[0])
            } else {
                t
            }
        })
    }

    fn scene(&self, angle: f64) -> Scene {
        let mut scene = Scene::new();
        for (i, (wobble, width)) in self.spokes.iter().enumerate() {
            let a = (angle + 360.0 * i as f64 / self.count as f64 + wobble).to_radians();
            let tip = Point::new(
                CENTER.x + self.outer_r * a.cos(),
                CENTER.y + self.outer_r * a.sin(),
            );
            scene.push(Shape::Line {
                from: CENTER,
                to: tip,
                style: Style::outline("#000", *width).with_opacity(0.95),
            });
        }
        scene
    }
}

impl PatternFamily for RadialSpokes {
    fn key(&self) -> &'static str {
        "radial_spokes"
    }

    fn rationale(&self) -> &str {
        "Spokes rotate by the same angle every frame."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        let p = Params::draw(ctx)?;
        let frames = [0.0, 1.0, 2.0].map(|t| ctx.render(&p.scene(p.angle(t))));
        let correct = ctx.render(&p.scene(p.angle(3.0)));

        let distractors = p
            .distractor_turns()
            .map(|t| ctx.render(&p.scene(p.angle(t))));

        let renderer = ctx.renderer;
        let spares = p.spare_turns();
        let set = OptionSet::assemble(ctx.rng, correct, distractors, |k| {
            let t = spares
                .get(k % spares.len().max(1))
                .copied()
                .unwrap_or(SPARE_TURNS[0]);
            renderer.render(&p.scene(p.angle(t)))
        });
        Ok(set.into_question(self, frames))
    }
}
