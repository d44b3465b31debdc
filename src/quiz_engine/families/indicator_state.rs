use rand::Rng;

use crate::quiz_engine::{
    helpers::{question, two_choice, Draw},
    memory::UsedQuestions,
    models::{IndicatorLabel, Question, QuestionFamily, QuestionToken},
};

pub fn generate<R: Rng + ?Sized>(
    _rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
) -> Option<Question> {
    let facts = draw.facts;
    if !facts.has_indicators() {
        return None;
    }
    let labels = draw.order.indicators.clone();
    let label = draw.first_unused(labels, used, QuestionToken::IndicatorState, |l| {
        facts.indicator(l).is_present()
    })?;
    ask(draw, used, label)
}

/// Ask about `label`; `None` if that indicator is not on the puzzle.
pub fn ask(draw: &Draw<'_>, used: &mut UsedQuestions, label: IndicatorLabel) -> Option<Question> {
    let state = draw.facts.indicator(label);
    if !state.is_present() {
        return None;
    }
    // Unlit -> slot 0 ("Off"), Lit -> slot 2 ("On").
    let (choices, correct) = two_choice("Off", "On", state.value() == 2);
    debug_assert_eq!(correct as u32, (state.value() - 1) * 2);
    Some(question(
        used,
        QuestionFamily::IndicatorState,
        label.name(),
        choices,
        correct,
        QuestionToken::IndicatorState(label),
    ))
}
