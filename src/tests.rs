//! Unit tests for the `edgework_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed and facts → identical question sets |
//! | Structural | Correct index points at a label; 2-choice layouts; distinct choices |
//! | Anti-repetition | Indicator coverage; no token reuse before a reset |
//! | Scenarios | Absent Parallel port; first serial character |
//! | State machine | Full pass; wrong answer; timeout; stale tasks; placeholder press; double taps |

use std::collections::HashSet;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::quiz_engine::{
    families::{how_many, is_present, serial_character},
    helpers::{Draw, GenerationLimits, ScanOrder},
    models::{BUTTON_COUNT, PLACEHOLDER_SLOT},
    presentation::Screen,
};
use crate::{
    BatteryKind, Category, EdgeworkFacts, EdgeworkModule, FactSnapshot, HostSignal,
    IndicatorLabel, IndicatorState, ModuleConfig, PortKind, Question, QuestionFamily,
    QuestionGenerator, Reaction, TaskQueue, UsedQuestions,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// A busy puzzle object with something in every category.
fn busy_facts() -> EdgeworkFacts {
    EdgeworkFacts::new("KQ3RT7")
        .with_port(PortKind::Serial, 1)
        .with_port(PortKind::DviD, 2)
        .with_port(PortKind::StereoRca, 1)
        .with_batteries(BatteryKind::AA, 2)
        .with_batteries(BatteryKind::D, 1)
        .with_indicator(IndicatorLabel::SND, IndicatorState::Lit)
        .with_indicator(IndicatorLabel::FRQ, IndicatorState::Unlit)
        .with_indicator(IndicatorLabel::BOB, IndicatorState::Lit)
        .with_indicator(IndicatorLabel::CLR, IndicatorState::Unlit)
}

fn snapshot(facts: &EdgeworkFacts) -> FactSnapshot {
    FactSnapshot::capture(facts).unwrap()
}

fn module(seed: u64) -> EdgeworkModule {
    EdgeworkModule::from_source(&busy_facts(), ModuleConfig::seeded(seed)).unwrap()
}

/// Draw context with the declaration-order scan, for scenario tests.
fn canonical_draw(facts: &FactSnapshot, group_pick: usize) -> Draw<'_> {
    Draw {
        facts,
        order: ScanOrder::canonical(),
        group_pick,
        limits: GenerationLimits::default(),
        steps: 0,
    }
}

fn wrong_button(q: &Question) -> usize {
    (0..BUTTON_COUNT)
        .find(|&b| b != q.correct_index && q.is_selectable(b))
        .expect("every question has a selectable wrong answer")
}

/// Host harness: collects signals and fires due tasks in order.
#[derive(Default)]
struct Host {
    queue: TaskQueue,
    signals: Vec<HostSignal>,
}

impl Host {
    fn take(&mut self, reaction: Reaction) {
        self.signals.extend(reaction.signals);
        self.queue.schedule_all(reaction.scheduled);
    }

    fn wait(&mut self, module: &mut EdgeworkModule, elapsed: Duration) {
        for task in self.queue.advance(elapsed) {
            let reaction = module.fire(task);
            self.take(reaction);
        }
    }

    fn count(&self, signal: HostSignal) -> usize {
        self.signals.iter().filter(|s| **s == signal).count()
    }
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_sessions() {
    for seed in SEEDS {
        let mut a = module(seed);
        let mut b = module(seed);
        a.activate();
        b.activate();
        assert_eq!(
            a.session().unwrap().questions(),
            b.session().unwrap().questions(),
            "question mismatch for seed={seed}"
        );
    }
}

#[test]
fn different_seeds_produce_varied_sessions() {
    let mut same = 0;
    for seed in 0..30u64 {
        let mut a = module(seed);
        let mut b = module(seed + 500);
        a.activate();
        b.activate();
        if a.session().unwrap().questions() == b.session().unwrap().questions() {
            same += 1;
        }
    }
    assert!(same < 5, "too many identical sessions across seeds ({same}/30)");
}

#[test]
fn entropy_seed_produces_a_valid_session() {
    let mut m = EdgeworkModule::from_source(&busy_facts(), ModuleConfig::default()).unwrap();
    m.activate();
    assert_eq!(m.session().unwrap().questions().len(), 3);
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn every_question_points_at_a_real_choice() {
    let facts = snapshot(&busy_facts());
    let mut gen = QuestionGenerator::from_seed(Some(31), GenerationLimits::default()).unwrap();
    let mut used = UsedQuestions::new();
    for q in gen.generate_batch(300, &facts, &mut used) {
        assert!(q.is_selectable(q.correct_index), "{q:?}");
        match q.family {
            QuestionFamily::IndicatorState | QuestionFamily::IsPresent => {
                assert!(q.is_two_choice());
                assert_ne!(q.correct_index, PLACEHOLDER_SLOT);
            }
            QuestionFamily::HowMany | QuestionFamily::SerialCharacter => {
                let distinct: HashSet<&String> = q.choices.iter().collect();
                assert_eq!(distinct.len(), 3, "{q:?}");
                assert!(q.choices.iter().all(|c| !c.is_empty()));
            }
        }
    }
}

#[test]
fn every_family_shows_up() {
    let facts = snapshot(&busy_facts());
    let mut gen = QuestionGenerator::from_seed(Some(8), GenerationLimits::default()).unwrap();
    let mut used = UsedQuestions::new();
    let families: HashSet<QuestionFamily> = gen
        .generate_batch(100, &facts, &mut used)
        .into_iter()
        .map(|q| q.family)
        .collect();
    assert_eq!(families.len(), 4);
}

#[test]
fn answers_match_the_edgework() {
    let facts = snapshot(&busy_facts());
    let mut gen = QuestionGenerator::from_seed(Some(64), GenerationLimits::default()).unwrap();
    let mut used = UsedQuestions::new();
    for q in gen.generate_batch(200, &facts, &mut used) {
        match q.token {
            crate::QuestionToken::IndicatorState(label) => {
                let lit = facts.indicator(label) == IndicatorState::Lit;
                assert_eq!(q.correct_choice(), if lit { "On" } else { "Off" });
            }
            crate::QuestionToken::HowMany(category) => {
                assert_eq!(q.correct_choice(), facts.count(category).to_string());
            }
            crate::QuestionToken::IsPresent(category) => {
                let present = facts.count(category) > 0;
                assert_eq!(q.correct_choice(), if present { "Yes" } else { "No" });
            }
            crate::QuestionToken::SerialCharacter(ch) => {
                let position = serial_character::ORDINALS
                    .iter()
                    .position(|o| *o == q.subject)
                    .unwrap();
                assert_eq!(facts.serial()[position], ch);
                assert_eq!(q.correct_choice(), ch.to_string());
            }
        }
    }
}

// ── anti-repetition ──────────────────────────────────────────────────────────

#[test]
fn indicator_questions_cover_every_present_indicator_before_repeating() {
    let facts = snapshot(&busy_facts());
    for seed in SEEDS {
        let mut gen = QuestionGenerator::from_seed(Some(seed), GenerationLimits::default()).unwrap();
        let mut used = UsedQuestions::new();
        let mut asked = Vec::new();
        while let Some(q) = gen.generate_family(QuestionFamily::IndicatorState, &facts, &mut used) {
            asked.push(q.subject);
        }
        asked.sort();
        assert_eq!(asked, ["BOB", "CLR", "FRQ", "SND"], "seed={seed}");
    }
}

#[test]
fn tokens_do_not_repeat_between_resets() {
    let facts = snapshot(&busy_facts());
    let mut gen = QuestionGenerator::from_seed(Some(2024), GenerationLimits::default()).unwrap();
    let mut used = UsedQuestions::new();
    let mut since_reset = HashSet::new();
    for _ in 0..500 {
        let resets = used.resets();
        let q = gen.generate(&facts, &mut used);
        if used.resets() != resets {
            since_reset.clear();
        }
        assert!(since_reset.insert(q.token), "{} repeated", q.token);
    }
}

#[test]
fn memory_survives_across_activations() {
    let mut m = module(17);
    m.activate();
    let first: HashSet<_> = m.session().unwrap().questions().iter().map(|q| q.token).collect();
    m.deactivate();
    m.activate();
    if m.used_questions().resets() == 0 {
        for q in m.session().unwrap().questions() {
            assert!(!first.contains(&q.token), "{} asked again", q.token);
        }
    }
    assert!(m.used_questions().len() >= 3);
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn absent_parallel_port_is_a_no() {
    let facts = snapshot(&EdgeworkFacts::new("AB12C3").with_port(PortKind::Serial, 1));
    let mut used = UsedQuestions::new();
    let q = is_present::ask(
        &canonical_draw(&facts, 0),
        &mut used,
        Category::Port(PortKind::Parallel),
    );
    assert_eq!(q.family, QuestionFamily::IsPresent);
    assert_eq!(q.choices, ["No".to_string(), String::new(), "Yes".to_string()]);
    assert_eq!(q.correct_index, 0);
}

#[test]
fn first_serial_character_scenario() {
    let facts = snapshot(&EdgeworkFacts::new("AB12C3"));
    let mut rng = StdRng::seed_from_u64(99);
    let mut used = UsedQuestions::new();
    let mut draw = canonical_draw(&facts, 0);
    draw.limits.serial_distractor_trials = 500;
    let q = serial_character::ask(&mut rng, &mut draw, &mut used, 0).unwrap();
    assert_eq!(q.subject, "1st");
    assert_eq!(q.correct_choice(), "A");
    assert!(q.choices.iter().all(|c| ["A", "B", "1"].contains(&c.as_str())));
}

#[test]
fn how_many_batteries_scenario() {
    let facts = snapshot(&busy_facts());
    let mut rng = StdRng::seed_from_u64(5);
    let mut used = UsedQuestions::new();
    let mut draw = canonical_draw(&facts, 2);
    let q = how_many::generate(&mut rng, &mut draw, &mut used).unwrap();
    assert_eq!(q.subject, "AA batteries");
    assert_eq!(q.correct_choice(), "2");
    assert_eq!(q.prompt(), "How many\nAA batteries\nare there?");
}

// ── state machine ────────────────────────────────────────────────────────────

#[test]
fn answering_everything_correctly_passes_once() {
    for seed in SEEDS {
        let mut m = module(seed);
        let mut host = Host::default();
        host.take(m.activate());
        for _ in 0..3 {
            let q = m.current_question().unwrap().clone();
            host.take(m.press(q.correct_index).unwrap());
            host.wait(&mut m, Duration::from_secs(1));
        }
        assert_eq!(host.count(HostSignal::Pass), 1, "seed={seed}");
        assert_eq!(host.count(HostSignal::Strike), 0, "seed={seed}");
        assert!(!m.is_active());
        assert!(m.screen().is_blank());
    }
}

#[test]
fn wrong_answer_then_timeout_strikes_once() {
    let mut m = module(11);
    let mut host = Host::default();
    host.take(m.activate());
    let q = m.current_question().unwrap().clone();
    host.take(m.press(q.correct_index).unwrap());
    host.wait(&mut m, Duration::from_millis(750));

    let q = m.current_question().unwrap().clone();
    host.take(m.press(wrong_button(&q)).unwrap());
    assert_eq!(m.screen(), &Screen::incorrect());
    host.take(m.timer_expired());

    assert_eq!(host.count(HostSignal::Strike), 1);
    assert_eq!(host.count(HostSignal::Pass), 1);
}

#[test]
fn double_tap_on_correct_answer_cannot_pass_twice() {
    for seed in SEEDS {
        let mut m = module(seed);
        let mut host = Host::default();
        host.take(m.activate());
        let q = m.current_question().unwrap().clone();
        host.take(m.press(q.correct_index).unwrap());
        host.take(m.press(q.correct_index).unwrap());
        host.wait(&mut m, Duration::from_secs(1));

        assert!(!m.is_active(), "seed={seed}");
        assert!(!m.input_enabled(), "seed={seed}");
        for button in 0..BUTTON_COUNT {
            host.take(m.press(button).unwrap());
        }
        host.take(m.timer_expired());
        assert_eq!(host.count(HostSignal::Pass), 1, "seed={seed}");
        assert_eq!(host.count(HostSignal::Strike), 1, "seed={seed}");
    }
}

#[test]
fn double_tap_on_wrong_answer_strikes_once() {
    let mut m = module(15);
    let mut host = Host::default();
    host.take(m.activate());
    let q = m.current_question().unwrap().clone();
    host.take(m.press(wrong_button(&q)).unwrap());
    host.take(m.press(wrong_button(&q)).unwrap());
    host.wait(&mut m, Duration::from_millis(500));
    host.take(m.press(q.correct_index).unwrap());
    host.wait(&mut m, Duration::from_secs(1));

    assert_eq!(host.signals, vec![HostSignal::Strike, HostSignal::Pass]);
    assert!(m.screen().is_blank());
}

#[test]
fn presses_after_final_pass_do_nothing() {
    let mut m = module(16);
    let mut host = Host::default();
    host.take(m.activate());
    for _ in 0..3 {
        let q = m.current_question().unwrap().clone();
        host.take(m.press(q.correct_index).unwrap());
        host.wait(&mut m, Duration::from_secs(1));
    }
    for button in 0..BUTTON_COUNT {
        host.take(m.press(button).unwrap());
    }
    assert_eq!(host.signals, vec![HostSignal::Pass]);
    assert!(!m.strike_issued());
}

#[test]
fn placeholder_press_is_ignored() {
    // Find a seed whose first question uses the two-choice layout.
    for seed in 0..200u64 {
        let mut m = module(seed);
        m.activate();
        let q = m.current_question().unwrap().clone();
        if !q.is_two_choice() {
            continue;
        }
        let r = m.press(PLACEHOLDER_SLOT).unwrap();
        assert_eq!(r, Reaction::none());
        assert!(m.input_enabled());
        assert_eq!(m.screen(), &Screen::question(&q));
        return;
    }
    panic!("no two-choice opening question in 200 seeds");
}

#[test]
fn timeout_alone_strikes_once_and_clears() {
    let mut m = module(12);
    let mut host = Host::default();
    host.take(m.activate());
    host.take(m.timer_expired());
    assert_eq!(m.screen().prompt, "Time Ran Out!");
    host.wait(&mut m, Duration::from_millis(1999));
    assert!(!m.screen().is_blank());
    host.wait(&mut m, Duration::from_millis(1));
    assert!(m.screen().is_blank());
    assert_eq!(host.signals, vec![HostSignal::Strike]);
}

#[test]
fn stale_tasks_do_not_touch_a_new_session() {
    let mut m = module(13);
    let mut host = Host::default();
    host.take(m.activate());
    let q = m.current_question().unwrap().clone();
    host.take(m.press(wrong_button(&q)).unwrap());
    // Reactivated before the "Incorrect!" clear fires.
    host.take(m.deactivate());
    host.take(m.activate());
    let fresh = m.current_question().unwrap().clone();
    host.wait(&mut m, Duration::from_secs(5));
    assert_eq!(m.screen(), &Screen::question(&fresh));
    assert!(m.input_enabled());
    assert!(!m.strike_issued());
}

#[test]
fn deactivation_has_no_penalty() {
    let mut m = module(14);
    let mut host = Host::default();
    host.take(m.activate());
    host.take(m.deactivate());
    assert!(host.signals.is_empty());
    assert!(m.screen().is_blank());
    assert!(!m.is_active());
}

#[test]
fn longer_sessions_follow_config() {
    let config = ModuleConfig { max_questions: 5, ..ModuleConfig::seeded(3) };
    let mut m = EdgeworkModule::from_source(&busy_facts(), config).unwrap();
    let mut host = Host::default();
    host.take(m.activate());
    assert_eq!(m.session().unwrap().questions().len(), 5);
    for _ in 0..5 {
        let q = m.current_question().unwrap().clone();
        host.take(m.press(q.correct_index).unwrap());
        host.wait(&mut m, Duration::from_secs(1));
    }
    assert_eq!(host.signals, vec![HostSignal::Pass]);
}

#[test]
fn invalid_serial_is_rejected() {
    let err = EdgeworkModule::from_source(&EdgeworkFacts::new("SHORT"), ModuleConfig::default())
        .unwrap_err();
    assert!(matches!(err, crate::Error::Snapshot(_)));
}
