//! Pentagon with a travelling triangle token.

use nf_core::scene::{regular_polygon, triangle};
use nf_core::{CENTER, Point, Question, Scene, Shape, Style};

use crate::error::PatternResult;
use crate::family::{PatternContext, PatternFamily};
use crate::options::OptionSet;

const SIDES: usize = 5;
const INNER_FILLS: [&str; 2] = ["#888", "#666"];

/// The pentagon-triangle family: the token moves one vertex clockwise per
/// frame and its triangle flips every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PentagonTriangle;

#[derive(Debug, Clone)]
struct Params {
    start: usize,
    up: bool,
    radius: f64,
    start_angle: f64,
    spoke_width: f64,
    inner_h: f64,
    inner_fill: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    token: usize,
    up: bool,
}

impl Params {
    fn draw(ctx: &mut PatternContext<'_>) -> PatternResult<Self> {
        Ok(Self {
            start: ctx.rng.randrange(SIDES),
            up: ctx.rng.coin(),
            radius: ctx.rng.uniform(56.0, 66.0),
            start_angle: ctx.rng.uniform(-100.0, -60.0),
            spoke_width: ctx.rng.uniform(2.4, 3.6),
            inner_h: ctx.rng.uniform(22.0, 30.0),
            inner_fill: ctx.pick("inner fills", &INNER_FILLS)?,
        })
    }

    fn vertex(&self, moves: i64) -> usize {
        (self.start as i64 + moves).rem_euclid(SIDES as i64) as usize
    }

    fn state(&self, t: usize) -> State {
        State {
            token: self.vertex(t as i64),
            up: self.up ^ (t % 2 == 1),
        }
    }

    fn scene(&self, state: State) -> Scene {
        let pent = regular_polygon(SIDES, CENTER, self.radius, self.start_angle);
        let stroke = "#000";
        let mut scene = Scene::new().with(Shape::Polygon {
            points: pent.clone(),
            style: Style::outline(stroke, self.spoke_width),
        });
        for v in &pent {
            scene.push(Shape::Line {
                from: CENTER,
                to: *v,
                style: Style::outline(stroke, self.spoke_width),
            });
        }
        let anchor: Point = pent[state.token].towards(CENTER, 0.42);
        scene.push(Shape::Polygon {
            points: triangle(anchor, self.inner_h, state.up),
            style: Style::filled("white").with_stroke(stroke, self.spoke_width),
        });
        scene.push(Shape::Polygon {
            points: triangle(anchor, self.inner_h / 2.0, state.up),
            style: Style::filled(self.inner_fill)
                .with_stroke(stroke, (self.spoke_width - 1.0).max(2.0)),
        });
        scene
    }
}

impl PatternFamily for PentagonTriangle {
    fn key(&self) -> &'static str {
        "pentagon_triangle"
    }

    fn rationale(&self) -> &str {
        "Token +1 CW each frame; inner triangle flips each frame."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        let p = Params::draw(ctx)?;
        let frames = [0, 1, 2].map(|t| ctx.render(&p.scene(p.state(t))));
        let target = p.state(3);
        let correct = ctx.render(&p.scene(target));

        let backwards = State {
            token: p.vertex(-3),
            up: target.up,
        };
        let unflipped = State {
            token: target.token,
            up: !target.up,
        };
        let overshoot = State {
            token: p.vertex(4),
            up: target.up,
        };
        let distractors = [backwards, unflipped, overshoot].map(|s| ctx.render(&p.scene(s)));

        let renderer = ctx.renderer;
        let set = OptionSet::assemble(ctx.rng, correct, distractors, |k| {
            let fallback = State {
                token: p.vertex(5 + k as i64 / 2),
                up: if k % 2 == 0 { !target.up } else { target.up },
            };
            renderer.render(&p.scene(fallback))
        });
        Ok(set.into_question(self, frames))
    }
}
