//! Checkerboard with a travelling accent column.
//!
//! An n x n board whose accent column advances a fixed number of columns per
//! frame (wrapping), while the two checker tones swap every frame. Per-cell
//! positional jitter is drawn once and applied identically to every rendering,
//! so only the state changes between frames.

use nf_core::{CANVAS_SIZE, PatternRng, Point, Question, Scene, Shape, Style};

use crate::error::PatternResult;
use crate::family::{PatternContext, PatternFamily};
use crate::options::OptionSet;

const SIZES: [usize; 3] = [4, 5, 6];
const DARKS: [&str; 3] = ["#333", "#222", "#444"];
const LIGHTS: [&str; 3] = ["#ddd", "#eee", "#ccc"];
const ACCENTS: [&str; 4] = ["#c0392b", "#2e86c1", "#28b463", "#d68910"];

/// The checkerboard family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checkerboard;

#[derive(Debug, Clone)]
struct Params {
    n: usize,
    cell: f64,
    start: usize,
    step: usize,
    parity: bool,
    dark: &'static str,
    light: &'static str,
    accent: &'static str,
    alt_accent: &'static str,
    /// (dx, dy, rotation) per cell, row-major.
    offsets: Vec<(f64, f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    accent_col: usize,
    parity: bool,
}

impl Params {
    fn draw(ctx: &mut PatternContext<'_>) -> PatternResult<Self> {
        let n = ctx.pick("sizes", &SIZES)?;
        let start = ctx.rng.randrange(n);
        let step = if ctx.rng.coin() { 1 } else { n - 1 };
        let parity = ctx.rng.coin();
        let dark = ctx.pick("darks", &DARKS)?;
        let light = ctx.pick("lights", &LIGHTS)?;
        let accent_idx = ctx.rng.randrange(ACCENTS.len());
        let jit = 0.04 + ctx.rng.creativity() * ctx.rng.uniform(0.08, 0.18);
        let cell = CANVAS_SIZE / n as f64;
        let offsets = (0..n * n)
            .map(|_| draw_offset(ctx.rng, jit, cell))
            .collect();
        Ok(Self {
            n,
            cell,
            start,
            step,
            parity,
            dark,
            light,
            accent: ACCENTS[accent_idx],
            alt_accent: ACCENTS[(accent_idx + 1) % ACCENTS.len()],
            offsets,
        })
    }

    /// Accent column after `moves` steps, where a negative count moves the
    /// opposite way.
    fn column(&self, moves: i64) -> usize {
        let n = self.n as i64;
        let shift = (moves * self.step as i64).rem_euclid(n);
        ((self.start as i64 + shift).rem_euclid(n)) as usize
    }

    fn state(&self, t: usize) -> State {
        State {
            accent_col: self.column(t as i64),
            parity: self.parity ^ (t % 2 == 1),
        }
    }

    fn scene(&self, state: State, accent: &str) -> Scene {
        let mut scene = Scene::new();
        for r in 0..self.n {
            for c in 0..self.n {
                let (dx, dy, rot) = self.offsets[r * self.n + c];
                let fill = if c == state.accent_col {
                    accent
                } else if ((r + c) % 2 == 0) ^ state.parity {
                    self.light
                } else {
                    self.dark
                };
                scene.push(Shape::Rect {
                    origin: Point::new(c as f64 * self.cell + dx, r as f64 * self.cell + dy),
                    width: self.cell,
                    height: self.cell,
                    rotation: rot,
                    style: Style::filled(fill).with_stroke("black", 1.0),
                });
            }
        }
        scene
    }
}

fn draw_offset(rng: &mut PatternRng, jit: f64, cell: f64) -> (f64, f64, f64) {
    let dx = rng.jitter(jit) * cell;
    let dy = rng.jitter(jit) * cell;
    let rot = rng.jitter(15.0);
    (dx, dy, rot)
}

impl PatternFamily for Checkerboard {
    fn key(&self) -> &'static str {
        "checkerboard"
    }

    fn rationale(&self) -> &str {
        "The accent column moves the same number of columns each frame while the checker tones swap every frame."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        let p = Params::draw(ctx)?;
        let states: Vec<State> = (0..4).map(|t| p.state(t)).collect();
        let frames = [0, 1, 2].map(|t| ctx.render(&p.scene(states[t], p.accent)));
        let target = states[3];
        let correct = ctx.render(&p.scene(target, p.accent));

        let repeat = states[2];
        let wrong_way = State {
            accent_col: p.column(-3),
            parity: target.parity,
        };
        let no_swap = State {
            accent_col: target.accent_col,
            parity: !target.parity,
        };
        let distractors = [repeat, wrong_way, no_swap].map(|s| ctx.render(&p.scene(s, p.accent)));

        let renderer = ctx.renderer;
        let set = OptionSet::assemble(ctx.rng, correct, distractors, |k| {
            let scene = if k % 2 == 0 {
                let overshoot = State {
                    accent_col: p.column(4 + (k / 2) as i64),
                    parity: target.parity,
                };
                p.scene(overshoot, p.accent)
            } else {
                p.scene(target, p.alt_accent)
            };
            renderer.render(&scene)
        });
        Ok(set.into_question(self, frames))
    }
}
