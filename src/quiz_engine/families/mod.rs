//! The four question families.
//!
//! Every family exposes the same pair of functions:
//!
//! ```ignore
//! // Scan the shuffled category list for the first unused eligible entry.
//! pub fn generate<R: Rng + ?Sized>(
//!     rng: &mut R,
//!     draw: &mut Draw<'_>,
//!     used: &mut UsedQuestions,
//! ) -> Option<Question>
//!
//! // Build the question for one given entry and record its token.
//! pub fn ask<R: Rng + ?Sized>(rng: &mut R, draw: &mut Draw<'_>, used: &mut UsedQuestions, ..) -> Option<Question>
//! ```
//!
//! `None` means the trial found nothing to ask; the generator then picks
//! another family.

use rand::Rng;

use crate::quiz_engine::{
    helpers::Draw,
    memory::UsedQuestions,
    models::{Question, QuestionFamily},
};

/// Template 0: "What is the state of the X indicator?"
pub mod indicator_state;
/// Template 1: "How many X are there?"
pub mod how_many;
/// Template 2: "Is there a X present?"
pub mod is_present;
/// Template 3: "What is the Nth character of the S.N.?"
pub mod serial_character;

/// Run one trial of `family`.
pub fn generate<R: Rng + ?Sized>(
    family: QuestionFamily,
    rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
) -> Option<Question> {
    match family {
        QuestionFamily::IndicatorState  => indicator_state::generate(rng, draw, used),
        QuestionFamily::HowMany         => how_many::generate(rng, draw, used),
        QuestionFamily::IsPresent       => is_present::generate(rng, draw, used),
        QuestionFamily::SerialCharacter => serial_character::generate(rng, draw, used),
    }
}
