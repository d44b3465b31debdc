use std::collections::HashSet;

use crate::quiz_engine::models::QuestionToken;

/// Tokens of questions already asked.
///
/// Outlives sessions: a module keeps one of these for its whole lifetime and
/// only clears it when the generator can no longer find an unused question.
#[derive(Debug, Clone, Default)]
pub struct UsedQuestions {
    tokens: HashSet<QuestionToken>,
    resets: u32,
}

impl UsedQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: QuestionToken) -> bool {
        self.tokens.contains(&token)
    }

    /// Record `token`; returns false if it was already recorded.
    pub fn insert(&mut self, token: QuestionToken) -> bool {
        self.tokens.insert(token)
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.resets += 1;
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// How many times the memory has been wiped.
    pub fn resets(&self) -> u32 {
        self.resets
    }
}
