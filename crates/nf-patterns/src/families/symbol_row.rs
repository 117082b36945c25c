//! A row of four symbols that rotates and flips.

use nf_core::scene::triangle;
use nf_core::{CANVAS_SIZE, Point, Question, Scene, Shape, Style};

use crate::error::PatternResult;
use crate::family::{PatternContext, PatternFamily};
use crate::options::OptionSet;

const SLOTS: usize = 4;
const STROKES: [&str; 3] = ["black", "#111", "#222"];

/// The symbol-row family.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    HalfCircle { left: bool },
    Diamond { filled: bool },
    Triangle { up: bool },
    Cross,
}

/// Which of the per-frame rules to apply when advancing.
#[derive(Debug, Clone, Copy)]
struct Rules {
    flip: bool,
    toggle: bool,
}

const ALL_RULES: Rules = Rules {
    flip: true,
    toggle: true,
};

#[derive(Debug, Clone)]
struct Params {
    base: [Symbol; SLOTS],
    scale: f64,
    stroke: &'static str,
}

impl Params {
    fn draw(ctx: &mut PatternContext<'_>) -> PatternResult<Self> {
        let mut base = [
            Symbol::HalfCircle {
                left: ctx.rng.coin(),
            },
            Symbol::Diamond {
                filled: ctx.rng.coin(),
            },
            Symbol::Triangle { up: ctx.rng.coin() },
            Symbol::Cross,
        ];
        ctx.rng.shuffle(&mut base);
        Ok(Self {
            base,
            scale: ctx.rng.uniform(0.9, 1.2),
            stroke: ctx.pick("strokes", &STROKES)?,
        })
    }

    /// Row after `t` frames rotated by `shift` slots per frame.
    ///
    /// Half-circles and triangles flip on odd frames; diamonds toggle their
    /// fill on the third and fourth frames of every four.
    fn advance(&self, t: usize, shift: i64, rules: Rules) -> [Symbol; SLOTS] {
        let flip = rules.flip && t % 2 == 1;
        let toggle = rules.toggle && (t / 2) % 2 == 1;
        let moves = (t as i64 * shift).rem_euclid(SLOTS as i64) as usize;
        std::array::from_fn(|i| {
            let src = (i + SLOTS - moves) % SLOTS;
            match self.base[src] {
                Symbol::HalfCircle { left } => Symbol::HalfCircle { left: left ^ flip },
                Symbol::Triangle { up } => Symbol::Triangle { up: up ^ flip },
                Symbol::Diamond { filled } => Symbol::Diamond {
                    filled: filled ^ toggle,
                },
                Symbol::Cross => Symbol::Cross,
            }
        })
    }

    fn state(&self, t: usize) -> [Symbol; SLOTS] {
        self.advance(t, 1, ALL_RULES)
    }

    fn scene(&self, row: &[Symbol; SLOTS]) -> Scene {
        let spacing = CANVAS_SIZE / (SLOTS as f64 + 1.0);
        let y = CANVAS_SIZE / 2.0;
        let r = 12.0 * self.scale;
        let width = 3.0 * self.scale;
        let mut scene = Scene::new();
        for (i, symbol) in row.iter().enumerate() {
            let at = Point::new(spacing * (i as f64 + 1.0), y);
            match *symbol {
                Symbol::HalfCircle { left } => {
                    scene.push(Shape::Circle {
                        center: at,
                        radius: r,
                        style: Style::filled("white").with_stroke(self.stroke, width),
                    });
                    scene.push(Shape::HalfCircle {
                        center: at,
                        radius: r,
                        left,
                        style: Style::filled("#888"),
                    });
                }
                Symbol::Diamond { filled } => scene.push(Shape::Polygon {
                    points: vec![
                        at.offset(0.0, -r),
                        at.offset(r, 0.0),
                        at.offset(0.0, r),
                        at.offset(-r, 0.0),
                    ],
                    style: Style::filled(if filled { "#888" } else { "white" })
                        .with_stroke(self.stroke, width),
                }),
                Symbol::Triangle { up } => scene.push(Shape::Polygon {
                    points: triangle(at, r * 1.6, up),
                    style: Style::filled("white").with_stroke(self.stroke, width),
                }),
                Symbol::Cross => {
                    scene.push(Shape::Line {
                        from: at.offset(-r, -r),
                        to: at.offset(r, r),
                        style: Style::outline(self.stroke, width),
                    });
                    scene.push(Shape::Line {
                        from: at.offset(r, -r),
                        to: at.offset(-r, r),
                        style: Style::outline(self.stroke, width),
                    });
                }
            }
        }
        scene
    }
}

impl PatternFamily for SymbolRow {
    fn key(&self) -> &'static str {
        "symbol_row"
    }

    fn rationale(&self) -> &str {
        "Order rotates right; circle halves and triangles flip each frame; diamonds toggle every other frame."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        let p = Params::draw(ctx)?;
        let frames = [0, 1, 2].map(|t| ctx.render(&p.scene(&p.state(t))));
        let target = p.state(3);
        let correct = ctx.render(&p.scene(&target));

        let wrong_direction = p.advance(3, -1, ALL_RULES);
        let no_flip = p.advance(
            3,
            1,
            Rules {
                flip: false,
                toggle: true,
            },
        );
        let wrong_toggle = p.advance(
            3,
            1,
            Rules {
                flip: true,
                toggle: false,
            },
        );
        let distractors =
            [wrong_direction, no_flip, wrong_toggle].map(|row| ctx.render(&p.scene(&row)));

        let renderer = ctx.renderer;
        let set = OptionSet::assemble(ctx.rng, correct, distractors, |k| {
            renderer.render(&p.scene(&p.state(if k % 2 == 0 { 2 } else { 4 + k })))
        });
        Ok(set.into_question(self, frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::{PatternRng, Renderer, SvgRenderer};

    fn params(seed: &str) -> Params {
        let mut rng = PatternRng::new(Some(seed), 0.0);
        let renderer = SvgRenderer::new();
        let mut ctx = PatternContext::new(&mut rng, &renderer);
        Params::draw(&mut ctx).unwrap()
    }

    #[test]
    fn frame_zero_is_base_row() {
        let p = params("row");
        assert_eq!(p.state(0), p.base);
    }

    #[test]
    fn cross_moves_one_slot_right_per_frame() {
        let p = params("cross");
        let pos = |row: [Symbol; SLOTS]| row.iter().position(|s| *s == Symbol::Cross).unwrap();
        let start = pos(p.state(0));
        for t in 1..4 {
            assert_eq!(pos(p.state(t)), (start + t) % SLOTS);
        }
    }

    #[test]
    fn diamond_toggles_every_other_frame() {
        let p = params("diamond");
        let filled = |row: [Symbol; SLOTS]| {
            row.iter()
                .find_map(|s| match s {
                    Symbol::Diamond { filled } => Some(*filled),
                    _ => None,
                })
                .unwrap()
        };
        let f0 = filled(p.state(0));
        assert_eq!(filled(p.state(1)), f0);
        assert_eq!(filled(p.state(2)), !f0);
        assert_eq!(filled(p.state(3)), !f0);
    }

    #[test]
    fn correct_option_matches_state_three() {
        let renderer = SvgRenderer::new();
        for seed in 0..25u32 {
            let mut rng = PatternRng::from_seed_int(seed, 0.2);
            let mut replay = rng.clone();
            let q = {
                let mut ctx = PatternContext::new(&mut rng, &renderer);
                SymbolRow.generate(&mut ctx).unwrap()
            };
            assert!(q.options_are_unique());
            let mut ctx = PatternContext::new(&mut replay, &renderer);
            let p = Params::draw(&mut ctx).unwrap();
            assert_eq!(q.correct_option(), renderer.render(&p.scene(&p.state(3))));
        }
    }
}
