//! What the module's display shows: one prompt, three button labels, a tone.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::{Question, BUTTON_COUNT};

pub const CORRECT_TEXT: &str = "Correct!";
pub const INCORRECT_TEXT: &str = "Incorrect!";
pub const TIMEOUT_TEXT: &str = "Time Ran Out!";

/// Text colour of the display: yellow, green or red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Screen {
    pub prompt: String,
    pub labels: [String; BUTTON_COUNT],
    pub tone: Tone,
}

impl Screen {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Prompt and labels of `question`; label `i` belongs to button `i`.
    pub fn question(question: &Question) -> Self {
        Screen {
            prompt: question.prompt(),
            labels: question.choices.clone(),
            tone: Tone::Neutral,
        }
    }

    /// A status message with every label blanked.
    pub fn status(text: &str, tone: Tone) -> Self {
        Screen { prompt: text.to_string(), labels: Default::default(), tone }
    }

    pub fn correct() -> Self {
        Self::status(CORRECT_TEXT, Tone::Correct)
    }

    pub fn incorrect() -> Self {
        Self::status(INCORRECT_TEXT, Tone::Incorrect)
    }

    pub fn timed_out() -> Self {
        Self::status(TIMEOUT_TEXT, Tone::Incorrect)
    }

    pub fn is_blank(&self) -> bool {
        self.prompt.is_empty() && self.labels.iter().all(String::is_empty)
    }

    pub fn is_selectable(&self, button: usize) -> bool {
        self.labels.get(button).is_some_and(|l| !l.is_empty())
    }
}

/// Prompt on one line, for logs.
pub fn single_line(text: &str) -> String {
    text.split(['\n', '\r', '\t']).collect::<Vec<_>>().join(" ")
}
