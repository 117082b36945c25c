//! The contract every pattern family implements.

use nf_core::{PatternRng, Question, Renderer, Scene};

use crate::error::{PatternError, PatternResult};

/// Prompt used by families that do not override [`PatternFamily::prompt`].
pub const DEFAULT_PROMPT: &str = "Choose the missing fourth frame.";

/// A pattern archetype that turns a random stream into a question.
///
/// Implementations draw every parameter from the context's RNG once, at the
/// start of [`generate`](PatternFamily::generate), build four states by a
/// deterministic recurrence, render the first three as preview frames and
/// the fourth as the correct option, and derive three distractors from the
/// fourth state by explicit rules. No state is kept between calls.
pub trait PatternFamily: std::fmt::Debug + Send + Sync {
    /// Registry key of this family.
    fn key(&self) -> &'static str;

    /// Prompt shown with the question.
    fn prompt(&self) -> &str {
        DEFAULT_PROMPT
    }

    /// Short description of the rule the frames follow.
    fn rationale(&self) -> &str;

    /// Generate one question from the live RNG cursor.
    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question>;
}

/// What a family gets to work with during one generation call.
pub struct PatternContext<'a> {
    /// The caller's random stream.
    pub rng: &'a mut PatternRng,
    /// Renderer producing artifacts from scenes.
    pub renderer: &'a dyn Renderer,
}

impl<'a> PatternContext<'a> {
    /// Bundle an RNG and a renderer.
    pub fn new(rng: &'a mut PatternRng, renderer: &'a dyn Renderer) -> Self {
        Self { rng, renderer }
    }

    /// Render a scene with the context's renderer.
    pub fn render(&self, scene: &Scene) -> String {
        self.renderer.render(scene)
    }

    /// Draw one element from a parameter table.
    pub fn pick<T: Clone>(&mut self, table: &'static str, items: &[T]) -> PatternResult<T> {
        self.rng
            .choice(items)
            .cloned()
            .ok_or(PatternError::EmptyTable(table))
    }

    /// Draw one element from a weighted parameter table.
    pub fn pick_weighted<T: Clone>(
        &mut self,
        table: &'static str,
        pairs: &[(T, f64)],
    ) -> PatternResult<T> {
        self.rng
            .weighted_choice(pairs)
            .cloned()
            .ok_or(PatternError::EmptyTable(table))
    }
}

impl std::fmt::Debug for PatternContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternContext")
            .field("seed_int", &self.rng.seed_int())
            .field("draws", &self.rng.draws())
            .field("renderer", &self.renderer)
            .finish()
    }
}
