//! Shared builder functions for the question families.
//!
//! Every family does the same three things: scan a shuffled category list
//! for the first unused eligible entry, lay out three choice labels, and
//! record the token. These helpers keep the family files down to the rules
//! that make each family different.

use rand::Rng;

use crate::quiz_engine::{
    error::ConfigError,
    memory::UsedQuestions,
    models::{
        BatteryKind, Category, IndicatorLabel, PortKind, Question, QuestionFamily,
        QuestionToken, TotalKind, BUTTON_COUNT,
    },
    shuffle::{shuffle, shuffled},
    snapshot::FactSnapshot,
};

/// Caps on the bounded retry loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    pub trials_per_attempt: usize,
    pub serial_distractor_trials: usize,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        GenerationLimits { trials_per_attempt: 20, serial_distractor_trials: 20 }
    }
}

impl GenerationLimits {
    /// Both caps must allow at least one draw, or generation never finishes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials_per_attempt == 0 {
            return Err(ConfigError::ZeroTrialCap("trials_per_attempt"));
        }
        if self.serial_distractor_trials == 0 {
            return Err(ConfigError::ZeroTrialCap("serial_distractor_trials"));
        }
        Ok(())
    }
}

/// The order in which each category list is scanned during one generate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOrder {
    pub totals: Vec<TotalKind>,
    pub ports: Vec<PortKind>,
    pub batteries: Vec<BatteryKind>,
    pub indicators: Vec<IndicatorLabel>,
}

impl ScanOrder {
    /// Declaration order; useful when a test wants a predictable scan.
    pub fn canonical() -> Self {
        ScanOrder {
            totals: TotalKind::ALL.to_vec(),
            ports: PortKind::ALL.to_vec(),
            batteries: BatteryKind::ALL.to_vec(),
            indicators: IndicatorLabel::ALL.to_vec(),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ScanOrder {
            totals: shuffled(rng, &TotalKind::ALL),
            ports: shuffled(rng, &PortKind::ALL),
            batteries: shuffled(rng, &BatteryKind::ALL),
            indicators: shuffled(rng, &IndicatorLabel::ALL),
        }
    }

    pub fn categories(&self, group: CategoryGroup) -> Vec<Category> {
        match group {
            CategoryGroup::Totals     => self.totals.iter().map(|&k| Category::Total(k)).collect(),
            CategoryGroup::Ports      => self.ports.iter().map(|&k| Category::Port(k)).collect(),
            CategoryGroup::Batteries  => self.batteries.iter().map(|&k| Category::Battery(k)).collect(),
            CategoryGroup::Indicators => self.indicators.iter().map(|&l| Category::Indicator(l)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    Totals,
    Ports,
    Batteries,
    Indicators,
}

/// Everything a family needs for one trial.
///
/// `group_pick` (0..3) is drawn once per generate call and shared by the
/// How-Many and Is-Present families, each mapping it onto its own groups.
#[derive(Debug)]
pub struct Draw<'a> {
    pub facts: &'a FactSnapshot,
    pub order: ScanOrder,
    pub group_pick: usize,
    pub limits: GenerationLimits,
    /// Scan steps and sampling draws taken so far, reported when the memory resets.
    pub steps: usize,
}

impl<'a> Draw<'a> {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, facts: &'a FactSnapshot, limits: GenerationLimits) -> Self {
        let order = ScanOrder::shuffled(rng);
        let group_pick = rng.gen_range(0..3);
        Draw { facts, order, group_pick, limits, steps: 0 }
    }

    /// Scan `candidates` in order for the first entry whose token is unused
    /// and which passes `eligible`.
    pub fn first_unused<T: Copy>(
        &mut self,
        candidates: impl IntoIterator<Item = T>,
        used: &UsedQuestions,
        token_of: impl Fn(T) -> QuestionToken,
        eligible: impl Fn(T) -> bool,
    ) -> Option<T> {
        for candidate in candidates {
            self.steps += 1;
            if used.contains(token_of(candidate)) || !eligible(candidate) {
                continue;
            }
            return Some(candidate);
        }
        None
    }
}

/// Two-choice layout: `[negative, "", positive]`, answer at slot 0 or 2.
pub fn two_choice(negative: &str, positive: &str, answer_positive: bool) -> ([String; BUTTON_COUNT], usize) {
    let choices = [negative.to_string(), String::new(), positive.to_string()];
    (choices, if answer_positive { 2 } else { 0 })
}

/// Shuffle three distinct labels and report where `truth` ended up.
pub fn shuffle_choices<R: Rng + ?Sized>(
    rng: &mut R,
    mut choices: [String; BUTTON_COUNT],
    truth: &str,
) -> ([String; BUTTON_COUNT], usize) {
    shuffle(rng, &mut choices);
    let correct = choices.iter().position(|c| c == truth).unwrap_or_default();
    (choices, correct)
}

/// Record the token and assemble the final [`Question`].
pub fn question(
    used: &mut UsedQuestions,
    family: QuestionFamily,
    subject: impl Into<String>,
    choices: [String; BUTTON_COUNT],
    correct_index: usize,
    token: QuestionToken,
) -> Question {
    used.insert(token);
    Question { family, subject: subject.into(), choices, correct_index, token }
}
