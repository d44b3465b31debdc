//! Plays a few sessions of the edgework quiz against a scripted host.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=edgework_quiz=debug` to see the module's own log lines.
//!
//! 1. **Perfect run**: every question answered correctly: one Pass.
//! 2. **Wrong answer**: a Strike and a Pass; the timeout that follows adds
//!    nothing.
//! 3. **Timeout**: the host's timer runs out mid-session: one Strike.
//! 4. **Families**: one question from each family, straight from the
//!    generator.
//!
//! Delayed display resets go through a `TaskQueue`, the way a host would
//! drive them from its own clock.

use edgework_quiz::{
    quiz_engine::presentation::single_line, to_display_state, BatteryKind, EdgeworkFacts,
    EdgeworkModule, FactSnapshot, GenerationLimits, IndicatorLabel, IndicatorState,
    ModuleConfig, PortKind, QuestionFamily, QuestionGenerator, Reaction, TaskQueue,
    UsedQuestions,
};
use tracing_subscriber::EnvFilter;

fn print_screen(module: &EdgeworkModule) {
    let screen = module.screen();
    println!("  ┌────────────────────────────");
    for line in screen.prompt.lines() {
        println!("  │ {line}");
    }
    let labels: Vec<String> = screen
        .labels
        .iter()
        .enumerate()
        .map(|(i, l)| if l.is_empty() { format!("[{}: -]", i + 1) } else { format!("[{}: {l}]", i + 1) })
        .collect();
    println!("  │ {}", labels.join(" "));
    println!("  └────────────────────────────");
}

fn settle(module: &mut EdgeworkModule, queue: &mut TaskQueue, reaction: Reaction) {
    for signal in &reaction.signals {
        println!("  → host receives {signal:?}");
    }
    queue.schedule_all(reaction.scheduled);
    while let Some(wait) = queue.next_due_in() {
        for task in queue.advance(wait) {
            let follow_up = module.fire(task);
            queue.schedule_all(follow_up.scheduled);
        }
        if module.input_enabled() {
            break;
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let facts = EdgeworkFacts::new("AB12C3")
        .with_port(PortKind::Serial, 1)
        .with_port(PortKind::Rj45, 2)
        .with_batteries(BatteryKind::AA, 2)
        .with_batteries(BatteryKind::D, 1)
        .with_indicator(IndicatorLabel::FRK, IndicatorState::Lit)
        .with_indicator(IndicatorLabel::CAR, IndicatorState::Unlit);

    let mut module = match EdgeworkModule::from_source(&facts, ModuleConfig::seeded(42)) {
        Ok(module) => module,
        Err(err) => {
            eprintln!("cannot build module: {err}");
            return;
        }
    };
    let mut queue = TaskQueue::new();

    println!("\n══ Perfect run ══\n");
    module.activate();
    while let Some(q) = module.current_question().cloned() {
        if !module.input_enabled() {
            break;
        }
        print_screen(&module);
        println!("  pressing button {} ({})", q.correct_index + 1, q.correct_choice());
        let reaction = module.press(q.correct_index).unwrap_or_default();
        settle(&mut module, &mut queue, reaction);
    }
    module.deactivate();

    println!("\n══ Wrong answer ══\n");
    module.activate();
    print_screen(&module);
    if let Some(q) = module.current_question().cloned() {
        let wrong = (0..3).find(|&b| b != q.correct_index && q.is_selectable(b)).unwrap_or(0);
        println!("  pressing button {} ({})", wrong + 1, q.choices[wrong]);
        let reaction = module.press(wrong).unwrap_or_default();
        print_screen(&module);
        let timeout = module.timer_expired();
        println!("  timer expired, strikes: {}", timeout.strikes());
        settle(&mut module, &mut queue, reaction);
    }
    module.deactivate();

    println!("\n══ Timeout ══\n");
    module.activate();
    print_screen(&module);
    let reaction = module.timer_expired();
    print_screen(&module);
    println!("  display state: {}", to_display_state(&module));
    settle(&mut module, &mut queue, reaction);

    println!("\n══ Families ══\n");
    let snapshot = match FactSnapshot::capture(&facts) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("cannot capture edgework: {err}");
            return;
        }
    };
    let mut generator = match QuestionGenerator::from_seed(Some(7), GenerationLimits::default()) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("cannot build generator: {err}");
            return;
        }
    };
    let mut used = UsedQuestions::new();
    for family in QuestionFamily::ALL {
        match generator.generate_family(family, &snapshot, &mut used) {
            Some(q) => println!(
                "  {:<16} {}  →  {}",
                q.token.to_string(),
                single_line(&q.prompt()),
                q.correct_choice()
            ),
            None => println!("  {family:?}: nothing to ask"),
        }
    }
}
