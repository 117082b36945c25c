//! Integration tests.
use std::collections::HashSet;

use nf_core::{Letter, PatternRng, Question, SvgRenderer};
use nf_engine::{EngineConfig, Orchestrator, Registry};
use nf_patterns::{PatternContext, PatternError, PatternFamily, PatternResult};

/// Always produces the same question.
#[derive(Debug)]
struct Constant;

impl PatternFamily for Constant {
    fn key(&self) -> &'static str {
        "constant"
    }

    fn rationale(&self) -> &str {
        "Nothing changes."
    }

    fn generate(&self, ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        ctx.rng.next_float();
        Ok(Question::new(
            self.key(),
            "Same again.",
            ["<a/>".into(), "<b/>".into(), "<c/>".into()],
            ["<w/>".into(), "<x/>".into(), "<y/>".into(), "<z/>".into()],
            Letter::B,
            self.rationale(),
        ))
    }
}

/// Always fails.
#[derive(Debug)]
struct Broken;

impl PatternFamily for Broken {
    fn key(&self) -> &'static str {
        "broken"
    }

    fn rationale(&self) -> &str {
        "Never renders."
    }

    fn generate(&self, _ctx: &mut PatternContext<'_>) -> PatternResult<Question> {
        Err(PatternError::InvalidParameter {
            name: "anything",
            reason: "always out of range".into(),
        })
    }
}

fn only(family: impl PatternFamily + 'static) -> Orchestrator {
    Orchestrator::new(Registry::new().with(family), Box::new(SvgRenderer::new()))
}

fn run(seed: &str, creativity: f64, forced: Option<&str>, count: usize) -> Vec<Question> {
    let orch = Orchestrator::standard();
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some(seed), creativity);
    (0..count)
        .map(|_| orch.generate_question(&mut session, &mut rng, forced))
        .collect()
}

#[test]
fn same_seed_same_questions() {
    for creativity in [0.0, 0.3, 0.6, 1.0] {
        assert_eq!(
            run("abc", creativity, None, 8),
            run("abc", creativity, None, 8)
        );
    }
}

#[test]
fn forced_checkerboard_end_to_end() {
    let qs = run("1", 0.5, Some("checkerboard"), 1);
    let q = &qs[0];
    assert_eq!(q.kind, "checkerboard");
    assert!(q.options_are_unique());
    assert_eq!(q.frame_svgs.len(), 4);
    assert_eq!(q.frame_svgs[3], "");
    assert!(q.frames().iter().all(|f| f.starts_with("<svg")));
    assert_eq!(q.seed.as_deref(), Some("1"));
    assert_eq!(q.seed_int, 1);
    assert!((q.creativity - 0.5).abs() < f64::EPSILON);
}

#[test]
fn every_question_is_well_formed() {
    for q in run("wellformed", 0.8, None, 40) {
        assert!(q.options_are_unique(), "duplicate options in {}", q.kind);
        assert!(Letter::ALL.contains(&q.correct));
        assert!(!q.correct_option().is_empty());
        assert!(!q.rationale.is_empty());
    }
}

#[test]
fn no_family_three_times_in_a_row() {
    for (seed, creativity) in [("7", 0.2), ("7", 0.9), ("streak", 0.5)] {
        let orch = Orchestrator::standard();
        let mut session = orch.new_session();
        let mut rng = PatternRng::new(Some(seed), creativity);
        let picks: Vec<String> = (0..60)
            .map(|_| orch.select_family(&mut session, &mut rng, None))
            .collect();
        for w in picks.windows(3) {
            assert!(
                !(w[0] == w[1] && w[1] == w[2]),
                "{} picked three times running",
                w[0]
            );
        }
    }
}

#[test]
fn accepted_questions_are_never_repeated() {
    let orch = Orchestrator::standard();
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some("dedup"), 0.4);
    let mut seen = HashSet::new();
    for _ in 0..30 {
        let before = session.stats().exhausted;
        let q = orch.generate_question(&mut session, &mut rng, None);
        if session.stats().exhausted == before {
            assert!(seen.insert(q.signature()));
        }
    }
    assert_eq!(session.stats().questions, 30);
}

#[test]
fn same_seed_twice_in_one_session_gives_a_new_question() {
    let orch = Orchestrator::standard();
    let mut session = orch.new_session();
    let first = orch.generate_question(
        &mut session,
        &mut PatternRng::new(Some("1"), 0.5),
        Some("checkerboard"),
    );
    let second = orch.generate_question(
        &mut session,
        &mut PatternRng::new(Some("1"), 0.5),
        Some("checkerboard"),
    );
    assert_eq!(second.kind, "checkerboard");
    assert_ne!(first.signature(), second.signature());
    assert_eq!(session.stats().exhausted, 0);
    assert_eq!(session.stats().questions, 2);
    assert!(session.stats().attempts >= 3);
}

#[test]
fn orchestrator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Orchestrator>();

    let orch = Orchestrator::standard();
    let questions: Vec<Question> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    let mut session = orch.new_session();
                    let mut rng = PatternRng::new(Some("shared"), 0.5);
                    orch.generate_question(&mut session, &mut rng, None)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(questions[0], questions[1]);
}

#[test]
fn exhaustion_returns_last_candidate() {
    let orch = only(Constant);
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some("9"), 0.0);

    let first = orch.generate_question(&mut session, &mut rng, None);
    assert_eq!(session.stats().exhausted, 0);
    assert_eq!(session.stats().attempts, 1);

    let second = orch.generate_question(&mut session, &mut rng, None);
    assert_eq!(second.signature(), first.signature());
    let stats = session.stats();
    assert_eq!(stats.exhausted, 1);
    assert_eq!(stats.questions, 2);
    assert_eq!(stats.attempts, 1 + 32);
}

#[test]
fn attempt_budget_is_configurable() {
    let orch = only(Constant).with_config(EngineConfig::default().with_max_attempts(3));
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some("9"), 0.0);
    orch.generate_question(&mut session, &mut rng, None);
    orch.generate_question(&mut session, &mut rng, None);
    assert_eq!(session.stats().attempts, 1 + 3);
}

#[test]
fn separate_sessions_do_not_share_signatures() {
    let orch = only(Constant);
    let mut rng = PatternRng::new(Some("9"), 0.0);
    let mut a = orch.new_session();
    let mut b = orch.new_session();
    orch.generate_question(&mut a, &mut rng, None);
    orch.generate_question(&mut b, &mut rng, None);
    assert_eq!(a.stats().exhausted, 0);
    assert_eq!(b.stats().exhausted, 0);
}

#[test]
fn failing_family_degrades_to_placeholder() {
    let orch = only(Broken);
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some("13"), 0.5);
    let q = orch.generate_question(&mut session, &mut rng, None);
    assert_eq!(q.kind, "broken");
    assert_eq!(q.question, "Pattern \"broken\" not loaded; showing placeholder.");
    assert!(q.options_are_unique());
    assert_eq!(q.correct, Letter::B);
    assert_eq!(session.stats().placeholders, 1);
    assert_eq!(session.stats().exhausted, 0);
}

#[test]
fn declared_key_yields_placeholder() {
    let mut registry = Registry::standard();
    registry.declare("voronoi");
    let orch = Orchestrator::new(registry, Box::new(SvgRenderer::new()));
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(Some("6"), 0.5);
    let q = orch.generate_question(&mut session, &mut rng, Some("voronoi"));
    assert_eq!(q.kind, "voronoi");
    assert_eq!(q.correct, Letter::C);
    assert_eq!(q.seed_int, 6);
    assert_eq!(session.stats().placeholders, 1);
}

#[test]
fn unknown_forced_family_falls_back() {
    let orch = Orchestrator::standard();
    let keys = orch.list_families();
    for q in run("fallback", 0.3, Some("no_such_family"), 5) {
        assert!(keys.contains(&q.kind));
    }
}

#[test]
fn creativity_is_clamped() {
    assert_eq!(PatternRng::new(Some("1"), -5.0).creativity(), 0.0);
    assert_eq!(PatternRng::new(Some("1"), 99.0).creativity(), 1.0);
    let q = &run("1", 99.0, Some("radial_spokes"), 1)[0];
    assert_eq!(q.creativity, 1.0);
}

#[test]
fn numeric_and_text_seeds_differ() {
    let numeric = PatternRng::new(Some("42"), 0.5);
    let text = PatternRng::new(Some("forty-two"), 0.5);
    assert_eq!(numeric.seed_int(), 42);
    assert_ne!(numeric.seed_int(), text.seed_int());
    assert_eq!(
        run("forty-two", 0.5, None, 3),
        run("forty-two", 0.5, None, 3)
    );
    assert_ne!(run("42", 0.5, None, 3), run("forty-two", 0.5, None, 3));
}

#[test]
fn seedless_questions_carry_no_seed_text() {
    let orch = Orchestrator::standard();
    let mut session = orch.new_session();
    let mut rng = PatternRng::new(None, 0.5);
    let q = orch.generate_question(&mut session, &mut rng, None);
    assert_eq!(q.seed, None);
    assert_eq!(q.seed_int, rng.seed_int());
}
