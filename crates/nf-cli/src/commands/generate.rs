use std::fs;
use std::path::Path;

use colored::Colorize;
use nf_core::{Letter, PatternRng, Question};
use nf_engine::{Orchestrator, SessionStats};
use tracing::debug;

pub struct GenerateArgs<'a> {
    pub seed: Option<&'a str>,
    pub creativity: f64,
    pub family: Option<&'a str>,
    pub count: usize,
    pub json: bool,
    pub out_dir: Option<&'a Path>,
}

pub fn run(args: &GenerateArgs<'_>) -> Result<(), String> {
    if args.count == 0 {
        return Err("--count must be at least 1".into());
    }

    let orch = Orchestrator::standard();
    let forced = match args.family {
        Some(key) if !orch.registry().contains(key) => {
            eprintln!(
                "  {} unknown family \"{key}\", selecting normally (known: {})",
                "warning:".yellow().bold(),
                orch.keys().join(", ")
            );
            None
        }
        other => other,
    };

    let mut rng = PatternRng::new(args.seed, args.creativity);
    let mut session = orch.new_session();
    let questions: Vec<Question> = (0..args.count)
        .map(|_| orch.generate_question(&mut session, &mut rng, forced))
        .collect();

    if let Some(dir) = args.out_dir {
        write_artifacts(dir, &questions)?;
    }

    if args.json {
        let out = serde_json::to_string_pretty(&questions)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        print_summary(&questions, &rng, session.stats());
        if let Some(dir) = args.out_dir {
            println!("  Artifacts written to {}", dir.display());
        }
    }

    Ok(())
}

fn print_summary(questions: &[Question], rng: &PatternRng, stats: SessionStats) {
    let seed = rng
        .seed()
        .map_or_else(|| format!("random {}", rng.seed_int()), str::to_string);
    println!(
        "  {} {}",
        "Session".bold(),
        format!(
            "(seed={seed}, seed_int={}, creativity={:.2})",
            rng.seed_int(),
            rng.creativity()
        )
        .dimmed()
    );
    println!();

    for (i, q) in questions.iter().enumerate() {
        println!("  {} {}", format!("Q{}", i + 1).bold(), q.kind.cyan());
        println!("    {}", q.question);
        println!("    Answer: {}", q.correct.to_string().green().bold());
        println!("    {}", q.rationale.dimmed());
    }

    println!();
    println!(
        "  {} questions, {} attempts, {} exhausted, {} placeholders",
        stats.questions, stats.attempts, stats.exhausted, stats.placeholders
    );
}

fn write_artifacts(dir: &Path, questions: &[Question]) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

    for (i, q) in questions.iter().enumerate() {
        let n = i + 1;
        for (k, frame) in q.frames().iter().enumerate() {
            write_file(&dir.join(format!("q{n}_frame_{}.svg", k + 1)), frame)?;
        }
        for (letter, option) in Letter::ALL.iter().zip(&q.option_svgs) {
            write_file(&dir.join(format!("q{n}_option_{letter}.svg")), option)?;
        }
        let json = serde_json::to_string_pretty(q)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        write_file(&dir.join(format!("q{n}.json")), &json)?;
    }

    debug!(dir = %dir.display(), questions = questions.len(), "artifacts written");
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|e| format!("cannot write to {}: {e}", path.display()))
}
