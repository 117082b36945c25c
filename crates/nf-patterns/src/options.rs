//! Building the four answer options from a correct artifact and distractors.

use nf_core::{FRAME_COUNT, Letter, OPTION_COUNT, PatternRng, Question};
use tracing::debug;

use crate::family::PatternFamily;

/// How many fallback perturbations a family may substitute for collisions.
pub const MAX_SUBSTITUTIONS: usize = 4;

/// Four options in display order plus the slot of the correct one.
#[derive(Debug, Clone)]
pub struct OptionSet {
    /// Option artifacts in display order.
    pub options: [String; OPTION_COUNT],
    /// Letter of the correct option.
    pub correct: Letter,
    /// Number of fallback perturbations that were substituted.
    pub substitutions: usize,
    /// False if the substitution budget ran out before all options differed.
    pub complete: bool,
}

impl OptionSet {
    /// Deduplicate the candidates and shuffle them into display order.
    ///
    /// A distractor that collides (after trimming) with an earlier candidate
    /// is replaced by `fallback(k)` for `k = 0, 1, ...` until it is unique or
    /// [`MAX_SUBSTITUTIONS`] is spent; `fallback` must not draw from the RNG.
    /// The shuffle permutes slot indices, not the artifacts.
    pub fn assemble<F>(
        rng: &mut PatternRng,
        correct: String,
        distractors: [String; OPTION_COUNT - 1],
        mut fallback: F,
    ) -> Self
    where
        F: FnMut(usize) -> String,
    {
        let mut candidates: Vec<String> = Vec::with_capacity(OPTION_COUNT);
        candidates.push(correct);
        let mut substitutions = 0;
        let mut complete = true;

        for distractor in distractors {
            if is_fresh(&candidates, &distractor) {
                candidates.push(distractor);
                continue;
            }
            let mut replacement = None;
            while substitutions < MAX_SUBSTITUTIONS {
                let alt = fallback(substitutions);
                substitutions += 1;
                if is_fresh(&candidates, &alt) {
                    replacement = Some(alt);
                    break;
                }
            }
            match replacement {
                Some(alt) => candidates.push(alt),
                None => {
                    complete = false;
                    candidates.push(distractor);
                }
            }
        }

        if !complete {
            debug!(substitutions, "option substitutions exhausted");
        }

        let mut order: [usize; OPTION_COUNT] = [0, 1, 2, 3];
        rng.shuffle(&mut order);
        let slot = order.iter().position(|&i| i == 0).unwrap_or(0);
        let correct = Letter::from_index(slot).unwrap_or(Letter::A);

        let mut slots: Vec<Option<String>> = candidates.into_iter().map(Some).collect();
        let options = order.map(|i| slots[i].take().unwrap_or_default());

        Self {
            options,
            correct,
            substitutions,
            complete,
        }
    }

    /// Finish a question for `family` with these options.
    pub fn into_question<P>(self, family: &P, frames: [String; FRAME_COUNT]) -> Question
    where
        P: PatternFamily + ?Sized,
    {
        Question::new(
            family.key(),
            family.prompt(),
            frames,
            self.options,
            self.correct,
            family.rationale(),
        )
    }
}

fn is_fresh(existing: &[String], candidate: &str) -> bool {
    let c = candidate.trim();
    !c.is_empty() && existing.iter().all(|e| e.trim() != c)
}
