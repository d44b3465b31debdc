use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    error::ConfigError,
    families,
    helpers::{Draw, GenerationLimits},
    memory::UsedQuestions,
    models::{Question, QuestionFamily},
    snapshot::FactSnapshot,
};

/// Draws questions about a [`FactSnapshot`], avoiding anything already in
/// the caller's [`UsedQuestions`].
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = StdRng> {
    rng: R,
    limits: GenerationLimits,
}

impl QuestionGenerator<StdRng> {
    /// Seeded generator when `seed` is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>, limits: GenerationLimits) -> Result<Self, ConfigError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        QuestionGenerator::new(rng, limits)
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Fails when a cap is zero.
    pub fn new(rng: R, limits: GenerationLimits) -> Result<Self, ConfigError> {
        limits.validate()?;
        Ok(QuestionGenerator { rng, limits })
    }

    /// Always returns a question.
    ///
    /// Each attempt shuffles the scan order, then makes up to
    /// `trials_per_attempt` uniform family picks. If none of them finds an
    /// unused question the memory is wiped and a fresh attempt starts.
    /// Is-Present questions accept absent categories, so the attempt after a
    /// wipe can always succeed.
    pub fn generate(&mut self, facts: &FactSnapshot, used: &mut UsedQuestions) -> Question {
        loop {
            let mut draw = Draw::new(&mut self.rng, facts, self.limits);
            for _ in 0..self.limits.trials_per_attempt {
                let family = QuestionFamily::ALL[self.rng.gen_range(0..QuestionFamily::ALL.len())];
                if let Some(q) = families::generate(family, &mut self.rng, &mut draw, used) {
                    return q;
                }
            }
            tracing::warn!(tries = draw.steps, "used question list cleared");
            used.clear();
        }
    }

    /// One trial restricted to `family`. Never touches the memory beyond
    /// recording the returned question.
    pub fn generate_family(
        &mut self,
        family: QuestionFamily,
        facts: &FactSnapshot,
        used: &mut UsedQuestions,
    ) -> Option<Question> {
        let mut draw = Draw::new(&mut self.rng, facts, self.limits);
        families::generate(family, &mut self.rng, &mut draw, used)
    }

    /// `count` questions in a row, as asked during one activation.
    pub fn generate_batch(
        &mut self,
        count: usize,
        facts: &FactSnapshot,
        used: &mut UsedQuestions,
    ) -> Vec<Question> {
        (0..count).map(|_| self.generate(facts, used)).collect()
    }
}
