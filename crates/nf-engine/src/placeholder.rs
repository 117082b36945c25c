//! Stand-in generator for families that cannot produce a question.

use nf_core::{CANVAS_SIZE, CENTER, Letter, Point, Question, Scene, Shape, Style};
use nf_patterns::PatternContext;

/// Produces a neutral, always-valid question labelled with plain text.
#[derive(Debug, Clone)]
pub struct Placeholder {
    key: String,
}

impl Placeholder {
    /// A placeholder standing in for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The family key this placeholder stands in for.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Build the placeholder question. Draws nothing from the RNG; the
    /// correct letter comes from the derived seed.
    pub fn generate(&self, ctx: &mut PatternContext<'_>) -> Question {
        let frames = ["1", "2", "3"].map(|label| ctx.render(&card(label)));
        let options = Letter::ALL.map(|l| ctx.render(&card(&l.to_string())));
        let slot = (ctx.rng.seed_int() % 4) as usize;
        let correct = Letter::from_index(slot).unwrap_or(Letter::A);
        Question::new(
            self.key.clone(),
            format!("Pattern \"{}\" not loaded; showing placeholder.", self.key),
            frames,
            options,
            correct,
            "Placeholder generated because the requested pattern module was unavailable.",
        )
    }
}

fn card(label: &str) -> Scene {
    Scene::new()
        .with(Shape::Rect {
            origin: Point::new(0.0, 0.0),
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            rotation: 0.0,
            style: Style::filled("white").with_stroke("#ddd", 1.0),
        })
        .with(Shape::Text {
            at: CENTER,
            content: label.to_string(),
            size: 48.0,
            color: "#999".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::{PatternRng, SvgRenderer};

    #[test]
    fn placeholder_is_well_formed() {
        let mut rng = PatternRng::from_seed_int(6, 0.0);
        let renderer = SvgRenderer::new();
        let mut ctx = PatternContext::new(&mut rng, &renderer);
        let q = Placeholder::new("voronoi").generate(&mut ctx);
        assert_eq!(q.kind, "voronoi");
        assert!(q.question.contains("\"voronoi\" not loaded"));
        assert!(q.options_are_unique());
        assert_eq!(q.correct, Letter::C);
        assert!(q.correct_option().contains(">C</text>"));
        assert_eq!(q.frame_svgs[3], "");
        assert_eq!(rng.draws(), 0);
    }
}
