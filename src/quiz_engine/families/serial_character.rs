use std::ops::Range;

use rand::Rng;

use crate::quiz_engine::{
    helpers::{question, shuffle_choices, Draw},
    memory::UsedQuestions,
    models::{Question, QuestionFamily, QuestionToken, BUTTON_COUNT},
    shuffle::rand_range,
    snapshot::SERIAL_LENGTH,
};

pub const ORDINALS: [&str; SERIAL_LENGTH] = ["1st", "2nd", "3rd", "4th", "5th", "6th"];

/// Serial positions distractors for `position` are drawn from.
pub fn neighbour_window(position: usize) -> Range<usize> {
    position.saturating_sub(2)..(position + 3).min(SERIAL_LENGTH)
}

pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
) -> Option<Question> {
    let serial = *draw.facts.serial();
    let mut position = None;
    for _ in 0..SERIAL_LENGTH {
        draw.steps += 1;
        let candidate = rand_range(rng, 0, SERIAL_LENGTH);
        if !used.contains(QuestionToken::SerialCharacter(serial[candidate])) {
            position = Some(candidate);
            break;
        }
    }
    ask(rng, draw, used, position?)
}

/// Ask for the character at `position`.
///
/// Returns `None` without recording anything when the neighbourhood does not
/// yield two other distinct characters within the distractor cap.
pub fn ask<R: Rng + ?Sized>(
    rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
    position: usize,
) -> Option<Question> {
    let serial = *draw.facts.serial();
    let truth = serial[position];
    let window = neighbour_window(position);

    let mut picked: Vec<char> = Vec::with_capacity(BUTTON_COUNT);
    picked.push(truth);
    for _ in 0..draw.limits.serial_distractor_trials {
        if picked.len() == BUTTON_COUNT {
            break;
        }
        draw.steps += 1;
        let ch = serial[rand_range(rng, window.start, window.end)];
        if !picked.contains(&ch) {
            picked.push(ch);
        }
    }
    if picked.len() < BUTTON_COUNT {
        return None;
    }

    let choices = [picked[0].to_string(), picked[1].to_string(), picked[2].to_string()];
    let (choices, correct) = shuffle_choices(rng, choices, &truth.to_string());
    Some(question(
        used,
        QuestionFamily::SerialCharacter,
        ORDINALS[position],
        choices,
        correct,
        QuestionToken::SerialCharacter(truth),
    ))
}
