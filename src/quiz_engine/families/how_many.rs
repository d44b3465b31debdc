use std::ops::Range;

use rand::Rng;

use crate::quiz_engine::{
    helpers::{question, shuffle_choices, CategoryGroup, Draw},
    memory::UsedQuestions,
    models::{Category, Question, QuestionFamily, QuestionToken, BUTTON_COUNT},
    shuffle::rand_range,
};

/// Category group for the per-call sub-kind pick.
pub fn group_for(pick: usize) -> CategoryGroup {
    match pick {
        0 => CategoryGroup::Totals,
        1 => CategoryGroup::Ports,
        _ => CategoryGroup::Batteries,
    }
}

fn suffix(category: Category) -> &'static str {
    match category {
        Category::Port(_)    => " ports",
        Category::Battery(_) => " batteries",
        _                    => "",
    }
}

/// Candidate distractor values around the true count `n`.
pub fn distractor_window(n: usize) -> Range<usize> {
    n.saturating_sub(2)..n + 3
}

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
) -> Option<Question> {
    let facts = draw.facts;
    let candidates = draw.order.categories(group_for(draw.group_pick));
    let category = draw.first_unused(candidates, used, QuestionToken::HowMany, |c| facts.count(c) > 0)?;
    Some(ask(rng, draw, used, category))
}

/// Ask for the count of `category`.
///
/// Distractors are redrawn until two new distinct values turn up. The window
/// always holds at least three values, so the loop has no cap.
pub fn ask<R: Rng + ?Sized>(
    rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
    category: Category,
) -> Question {
    let n = draw.facts.count(category) as usize;
    let truth = n.to_string();
    let window = distractor_window(n);

    let mut choices: [String; BUTTON_COUNT] = [truth.clone(), String::new(), String::new()];
    let mut filled = 1;
    while filled < BUTTON_COUNT {
        draw.steps += 1;
        let candidate = rand_range(rng, window.start, window.end).to_string();
        if !choices.contains(&candidate) {
            choices[filled] = candidate;
            filled += 1;
        }
    }

    let (choices, correct) = shuffle_choices(rng, choices, &truth);
    question(
        used,
        QuestionFamily::HowMany,
        format!("{}{}", category.name(), suffix(category)),
        choices,
        correct,
        QuestionToken::HowMany(category),
    )
}
