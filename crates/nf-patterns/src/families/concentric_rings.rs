//! Concentric rings with one dashed ring moving inward.

use nf_core::{CENTER, Question, Scene, Shape, Style};

use crate::error::PatternResult;
use crate::family::{PatternContext, PatternFamily};
use crate::options::OptionSet;

const RING_COUNTS: [(usize, f64); 4] = [(4, 0.35), (5, 0.35), (6, 0.2), (7, 0.1)];

/// Stroke factor of the "thin rings" distractor.
const THIN: f64 = 0.55;

/// The concentric rings family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcentricRings;

#[derive(Debug, Clone)]
struct Params {
    rings: usize,
    max_r: f64,
    ring_width: f64,
    dash: f64,
    start: usize,
    /// Centre offset per ring.
    offsets: Vec<(f64, f64)>,
}

impl Params {
    fn draw(ctx: &mut PatternContext<'_>) -> PatternResult<Self> {
        let rings = ctx.pick_weighted("ring counts", &RING_COUNTS)?;
        let max_r = ctx.rng.uniform(60.0, 78.0);
        let ring_width = max_r / (rings as f64 * ctx.rng.uniform(1.05, 1.25));
        let dash = ctx.rng.uniform(3.0, 8.0).floor();
        let start = ctx.rng.randrange(rings);
        let offsets = (0..rings)
            .map(|_| (ctx.rng.jitter(4.0), ctx.rng.jitter(4.0)))
            .collect();
        Ok(Self {
            rings,
            max_r,
            ring_width,
            dash,
            start,
            offsets,
        })
    }

    /// Index of the dashed ring after `moves` frames; 0 is the outermost.
    fn dashed(&self, moves: i64) -> usize {
        (self.start as i64 + moves).rem_euclid(self.rings as i64) as usize
    }

    fn scene(&self, dashed: usize, stroke_factor: f64) -> Scene {
        let mut scene = Scene::new();
        for (i, (dx, dy)) in self.offsets.iter().enumerate() {
            let radius = self.max_r - i as f64 * self.ring_width;
            let opacity = 1.0 - (i as f64 / self.rings as f64) * 0.6;
            let mut style = Style::outline("#000", self.ring_width * 0.9 * stroke_factor)
                .with_opacity(opacity);
            if i == dashed {
                let len = self.dash + i as f64;
                style = style.with_dash(len, len);
            }
            scene.push(Shape::Circle {
                center: CENTER.offset(*dx, *dy),
                radius,
                style,
            });
        }
        scene
    }
}

impl PatternFamily for ConcentricRings {
    fn key(&self) -> &'static str {
        "concentric_rings"
    }

    fn rationale(&self) -> &str {
        "The dashed ring moves one ring inward each frame, wrapping back to the outside."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        let p = Params::draw(ctx)?;
        let frames = [0, 1, 2].map(|t| ctx.render(&p.scene(p.dashed(t), 1.0)));
        let target = p.dashed(3);
        let correct = ctx.render(&p.scene(target, 1.0));

        let distractors = [
            p.scene(p.dashed(2), 1.0),
            p.scene(p.dashed(-3), 1.0),
            p.scene(target, THIN),
        ]
        .map(|scene| ctx.render(&scene));

        let renderer = ctx.renderer;
        let set = OptionSet::assemble(ctx.rng, correct, distractors, |k| {
            let scene = if k % 2 == 0 {
                p.scene(p.dashed(4 + k as i64 / 2), 1.0)
            } else {
                p.scene(p.dashed(2), THIN)
            };
            renderer.render(&scene)
        });
        Ok(set.into_question(self, frames))
    }
}
