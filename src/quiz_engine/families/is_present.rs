use rand::Rng;

use crate::quiz_engine::{
    helpers::{question, two_choice, CategoryGroup, Draw},
    memory::UsedQuestions,
    models::{Category, Question, QuestionFamily, QuestionToken},
};

/// Category group for the per-call sub-kind pick.
pub fn group_for(pick: usize) -> CategoryGroup {
    match pick {
        0 => CategoryGroup::Ports,
        1 => CategoryGroup::Batteries,
        _ => CategoryGroup::Indicators,
    }
}

fn suffix(category: Category) -> &'static str {
    match category {
        Category::Port(_)      => " port",
        Category::Battery(_)   => " battery",
        Category::Indicator(_) => " indicator",
        Category::Total(_)     => "",
    }
}

/// Absent categories are fair game here, so this family only runs dry once
/// every entry of the picked group has been asked.
pub fn generate<R: Rng + ?Sized>(
    _rng: &mut R,
    draw: &mut Draw<'_>,
    used: &mut UsedQuestions,
) -> Option<Question> {
    let candidates = draw.order.categories(group_for(draw.group_pick));
    let category = draw.first_unused(candidates, used, QuestionToken::IsPresent, |_| true)?;
    Some(ask(draw, used, category))
}

pub fn ask(draw: &Draw<'_>, used: &mut UsedQuestions, category: Category) -> Question {
    let present = draw.facts.count(category) > 0;
    let (choices, correct) = two_choice("No", "Yes", present);
    question(
        used,
        QuestionFamily::IsPresent,
        format!("{}{}", category.name(), suffix(category)),
        choices,
        correct,
        QuestionToken::IsPresent(category),
    )
}
