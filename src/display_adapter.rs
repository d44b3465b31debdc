use rand::Rng;
use serde_json::{json, Value};

use crate::quiz_engine::{
    module::{EdgeworkModule, ModuleState},
    presentation::{Screen, Tone},
};

/// Colour name the display collaborator paints the text with.
fn tone_colour(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral   => "yellow",
        Tone::Correct   => "green",
        Tone::Incorrect => "red",
    }
}

/// One button entry: its label and whether pressing it means anything.
fn button(index: usize, screen: &Screen) -> Value {
    json!({
        "index": index,
        "label": screen.labels[index],
        "selectable": screen.is_selectable(index),
    })
}

/// Map the module's current screen to a JSON object for an external display.
pub fn to_display_state<R: Rng>(module: &EdgeworkModule<R>) -> Value {
    let screen = module.screen();
    let (state, total) = match module.state() {
        ModuleState::Idle              => ("idle", 0),
        ModuleState::Active(session)   => ("active", session.questions().len()),
    };

    json!({
        "module_id": module.id(),
        "state": state,
        "question_number": module.question_number(),
        "question_count": total,
        "display": {
            "text": screen.prompt,
            "colour": tone_colour(screen.tone),
        },
        "buttons": (0..screen.labels.len()).map(|i| button(i, screen)).collect::<Vec<_>>(),
        "input_enabled": module.input_enabled(),
    })
}
