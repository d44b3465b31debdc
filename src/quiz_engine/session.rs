use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::{Question, PLACEHOLDER_SLOT};

/// How a button press on the current question was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Right answer; `finished` once the last question has been answered.
    Correct { finished: bool },
    /// The empty middle slot of a two-choice question. Not an answer.
    Placeholder,
    Wrong,
}

/// One activation's worth of questions and progress through them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    input_enabled: bool,
}

impl Session {
    /// A session showing its first question, ready for input.
    pub fn new(questions: Vec<Question>) -> Self {
        Session { questions, current_index: 0, input_enabled: true }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn enable_input(&mut self) {
        self.input_enabled = self.current().is_some();
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Judge `button` against the current question.
    ///
    /// Input is closed after any real answer and stays open for a placeholder
    /// press. `None` when there is no question left to answer.
    pub fn judge(&mut self, button: usize) -> Option<Verdict> {
        let question = self.current()?;
        let verdict = if button == question.correct_index {
            Verdict::Correct { finished: self.current_index + 1 >= self.questions.len() }
        } else if button == PLACEHOLDER_SLOT && question.is_two_choice() {
            Verdict::Placeholder
        } else {
            Verdict::Wrong
        };

        match verdict {
            Verdict::Correct { .. } => {
                self.current_index += 1;
                self.input_enabled = false;
            }
            Verdict::Wrong => self.input_enabled = false,
            Verdict::Placeholder => {}
        }
        Some(verdict)
    }
}
