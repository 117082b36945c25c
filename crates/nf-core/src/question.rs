//! The question produced for one puzzle.

use serde::{Deserialize, Serialize};

/// Number of preview frames shown before the missing one.
pub const FRAME_COUNT: usize = 3;

/// Number of answer options.
pub const OPTION_COUNT: usize = 4;

/// Display label of an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    /// First option.
    A,
    /// Second option.
    B,
    /// Third option.
    C,
    /// Fourth option.
    D,
}

impl Letter {
    /// All letters in display order.
    pub const ALL: [Letter; OPTION_COUNT] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// The letter for a display slot, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The display slot of this letter.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// A finished "find the missing frame" puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Key of the pattern family that produced this question.
    #[serde(rename = "type")]
    pub kind: String,
    /// Prompt shown to the user.
    pub question: String,
    /// Three preview frames followed by an empty placeholder slot.
    pub frame_svgs: [String; FRAME_COUNT + 1],
    /// Answer options in display order.
    pub option_svgs: [String; OPTION_COUNT],
    /// Letter of the correct option.
    pub correct: Letter,
    /// Short description of the rule the sequence follows.
    pub rationale: String,
    /// Seed as the user supplied it.
    #[serde(default)]
    pub seed: Option<String>,
    /// Derived integer seed.
    #[serde(default)]
    pub seed_int: u32,
    /// Creativity value in effect.
    #[serde(default)]
    pub creativity: f64,
}

impl Question {
    /// Assemble a question from its family output. Seed annotations start
    /// empty and are filled in by the orchestrator.
    pub fn new(
        kind: impl Into<String>,
        prompt: impl Into<String>,
        frames: [String; FRAME_COUNT],
        options: [String; OPTION_COUNT],
        correct: Letter,
        rationale: impl Into<String>,
    ) -> Self {
        let [f0, f1, f2] = frames;
        Self {
            kind: kind.into(),
            question: prompt.into(),
            frame_svgs: [f0, f1, f2, String::new()],
            option_svgs: options,
            correct,
            rationale: rationale.into(),
            seed: None,
            seed_int: 0,
            creativity: 0.0,
        }
    }

    /// The three preview frames.
    pub fn frames(&self) -> &[String] {
        &self.frame_svgs[..FRAME_COUNT]
    }

    /// The artifact in the correct option slot.
    pub fn correct_option(&self) -> &str {
        &self.option_svgs[self.correct.index()]
    }

    /// Whether all options are non-empty and pairwise distinct after trimming.
    pub fn options_are_unique(&self) -> bool {
        let trimmed: Vec<&str> = self.option_svgs.iter().map(|s| s.trim()).collect();
        if trimmed.iter().any(|s| s.is_empty()) {
            return false;
        }
        trimmed
            .iter()
            .enumerate()
            .all(|(i, a)| trimmed[i + 1..].iter().all(|b| a != b))
    }

    /// Identity string used to detect repeats: kind, frames and the correct
    /// option, each trimmed, joined by `|`.
    pub fn signature(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(FRAME_COUNT + 2);
        parts.push(self.kind.trim());
        parts.extend(self.frames().iter().map(|s| s.trim()));
        parts.push(self.correct_option().trim());
        parts.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(options: [&str; 4]) -> Question {
        Question::new(
            "demo",
            "Pick one.",
            ["f0".into(), "f1".into(), "f2".into()],
            options.map(String::from),
            Letter::C,
            "rule",
        )
    }

    #[test]
    fn letter_index_round_trip() {
        for (i, l) in Letter::ALL.iter().enumerate() {
            assert_eq!(l.index(), i);
            assert_eq!(Letter::from_index(i), Some(*l));
        }
        assert_eq!(Letter::from_index(4), None);
    }

    #[test]
    fn placeholder_frame_slot_is_empty() {
        let q = sample(["a", "b", "c", "d"]);
        assert_eq!(q.frame_svgs.len(), 4);
        assert_eq!(q.frame_svgs[3], "");
        assert_eq!(q.frames().len(), 3);
    }

    #[test]
    fn correct_option_follows_letter() {
        let q = sample(["a", "b", "c", "d"]);
        assert_eq!(q.correct_option(), "c");
    }

    #[test]
    fn uniqueness_is_checked_after_trimming() {
        assert!(sample(["a", "b", "c", "d"]).options_are_unique());
        assert!(!sample(["a", " a ", "c", "d"]).options_are_unique());
        assert!(!sample(["a", "b", "   ", "d"]).options_are_unique());
    }

    #[test]
    fn signature_joins_trimmed_parts() {
        let q = sample(["a", "b", " c ", "d"]);
        assert_eq!(q.signature(), "demo|f0|f1|f2|c");
    }

    #[test]
    fn serializes_with_wire_names() {
        let q = sample(["a", "b", "c", "d"]);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "demo");
        assert_eq!(json["correct"], "C");
        assert_eq!(json["frame_svgs"][3], "");
        assert_eq!(json["option_svgs"].as_array().unwrap().len(), 4);
        assert!(json["seed"].is_null());
    }
}
