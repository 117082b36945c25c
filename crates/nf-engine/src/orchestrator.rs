//! Family selection and the question generation loop.

use nf_core::{PatternRng, Question, Renderer, SvgRenderer};
use nf_patterns::PatternContext;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::placeholder::Placeholder;
use crate::registry::{Generator, Registry};
use crate::session::{RecencyWindow, Session};

/// Key selected when the registry is empty.
pub const PLACEHOLDER_KEY: &str = "placeholder";

/// Selection weights used at high creativity, favouring busier families.
pub const CREATIVE_WEIGHTS: &[(&str, f64)] = &[
    ("spiral_creative", 2.5),
    ("kaleidoscope", 1.8),
    ("moire", 1.5),
    ("lsystem_fractal", 1.4),
    ("pinwheel_spiral", 1.2),
    ("perlin_grid", 1.0),
    ("voronoi", 1.0),
    ("hex_mosaic", 0.9),
    ("concentric_rings", 0.8),
    ("radial_spokes", 0.8),
    ("checkerboard", 0.6),
    ("sierpinski", 0.5),
    ("sequence_stack", 0.5),
    ("scatter_symbols", 0.5),
    ("polygon_tokens", 1.0),
    ("symbol_row", 0.9),
    ("pentagon_triangle", 0.9),
    ("octagon_fusion", 0.9),
];

const UNLISTED_WEIGHT: f64 = 1.0;

/// Turns a random stream into a sequence of fresh questions.
///
/// Owns the registry, the renderer, and configuration. All per-user state
/// lives in the [`Session`] passed to each call, so one orchestrator can
/// serve any number of sessions.
#[derive(Debug)]
pub struct Orchestrator {
    registry: Registry,
    renderer: Box<dyn Renderer>,
    config: EngineConfig,
    creative_weights: Vec<(String, f64)>,
}

impl Orchestrator {
    /// Create an orchestrator over a registry and renderer.
    pub fn new(registry: Registry, renderer: Box<dyn Renderer>) -> Self {
        let creative_weights = creative_table(&registry);
        Self {
            registry,
            renderer,
            config: EngineConfig::default(),
            creative_weights,
        }
    }

    /// The built-in families rendered as SVG.
    pub fn standard() -> Self {
        Self::new(Registry::standard(), Box::new(SvgRenderer::new()))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The family registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A fresh session sized for this orchestrator's recency window.
    pub fn new_session(&self) -> Session {
        Session::with_recency_capacity(self.config.recency_capacity)
    }

    /// Registered family keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.registry.keys()
    }

    /// Owned copy of [`Orchestrator::keys`].
    pub fn list_families(&self) -> Vec<String> {
        self.keys().into_iter().map(str::to_string).collect()
    }

    /// The weighted table used at high creativity, restricted to registered
    /// keys.
    pub fn creative_weights(&self) -> &[(String, f64)] {
        &self.creative_weights
    }

    /// Creative weight of one key, if registered.
    pub fn creative_weight(&self, key: &str) -> Option<f64> {
        self.creative_weights
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, w)| *w)
    }

    /// The generator for `key`. Never fails.
    pub fn resolve(&self, key: &str) -> Generator<'_> {
        self.registry.resolve(key)
    }

    /// Pick the family for the next question and push it to the session's
    /// recency window.
    ///
    /// A registered `forced` key is used as is. Otherwise the family is drawn
    /// from the creative table or uniformly, rejecting recent keys for a
    /// bounded number of draws.
    pub fn select_family(
        &self,
        session: &mut Session,
        rng: &mut PatternRng,
        forced: Option<&str>,
    ) -> String {
        let chosen = match forced {
            Some(key) if self.registry.contains(key) => key.to_string(),
            other => {
                if let Some(key) = other {
                    warn!(family = key, "unknown family requested, selecting normally");
                }
                self.draw_family(session.recent(), rng)
            }
        };
        session.recent_mut().push(chosen.as_str());
        debug!(family = %chosen, forced = forced.is_some(), "family selected");
        chosen
    }

    fn draw_family(&self, recent: &RecencyWindow, rng: &mut PatternRng) -> String {
        let creative = rng.creativity() >= self.config.creative_threshold;
        let keys = self.registry.keys();
        let mut first_rejected: Option<&str> = None;
        for _ in 0..self.config.reselect_attempts.max(1) {
            let drawn = if creative {
                rng.weighted_choice(&self.creative_weights)
                    .map(String::as_str)
            } else {
                rng.choice(&keys).copied()
            };
            let Some(key) = drawn else {
                break;
            };
            if !recent.contains(key) {
                return key.to_string();
            }
            if first_rejected.is_none() {
                first_rejected = Some(key);
            }
        }
        first_rejected.map_or_else(|| PLACEHOLDER_KEY.to_string(), str::to_string)
    }

    /// Produce the next question for a session.
    ///
    /// Retries the selected family against the same stream until the
    /// options are distinct and the signature is new to the session. When
    /// the attempt budget runs out the last candidate is returned and the
    /// session's `exhausted` counter goes up. Always returns a question.
    pub fn generate_question(
        &self,
        session: &mut Session,
        rng: &mut PatternRng,
        forced: Option<&str>,
    ) -> Question {
        let key = self.select_family(session, rng, forced);
        let mut generator = self.registry.resolve(&key);
        if generator.is_placeholder() {
            warn!(family = %key, "family unavailable, using placeholder");
            session.stats_mut().placeholders += 1;
        }

        let budget = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let question = self.attempt(&mut generator, &key, session, rng);
            if question.options_are_unique() && session.record(question.signature()) {
                session.stats_mut().questions += 1;
                debug!(family = %key, attempt, "question accepted");
                return question;
            }
            if attempt >= budget {
                let stats = session.stats_mut();
                stats.questions += 1;
                stats.exhausted += 1;
                warn!(
                    family = %key,
                    attempts = budget,
                    "no fresh question found, returning last candidate"
                );
                return question;
            }
            attempt += 1;
        }
    }

    fn attempt(
        &self,
        generator: &mut Generator<'_>,
        key: &str,
        session: &mut Session,
        rng: &mut PatternRng,
    ) -> Question {
        session.stats_mut().attempts += 1;
        let mut ctx = PatternContext::new(rng, self.renderer.as_ref());
        let mut question = match generator.generate(&mut ctx) {
            Ok(question) => question,
            Err(err) => {
                warn!(family = %key, error = %err, "generator failed, using placeholder");
                session.stats_mut().placeholders += 1;
                let placeholder = Placeholder::new(key);
                let question = placeholder.generate(&mut ctx);
                *generator = Generator::Placeholder(placeholder);
                question
            }
        };
        if question.kind.trim().is_empty() {
            question.kind = key.to_string();
        }
        question.seed = rng.seed().map(str::to_string);
        question.seed_int = rng.seed_int();
        question.creativity = rng.creativity();
        question
    }
}

fn creative_table(registry: &Registry) -> Vec<(String, f64)> {
    let mut table: Vec<(String, f64)> = CREATIVE_WEIGHTS
        .iter()
        .filter(|(key, _)| registry.contains(key))
        .map(|(key, weight)| ((*key).to_string(), *weight))
        .collect();
    for key in registry.keys() {
        if !CREATIVE_WEIGHTS.iter().any(|(k, _)| *k == key) {
            table.push((key.to_string(), UNLISTED_WEIGHT));
        }
    }
    table
}
