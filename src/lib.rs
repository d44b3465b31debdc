//! # edgework_quiz
//!
//! Logic core of a timed trivia puzzle module that quizzes the player about
//! the *edgework* of a larger puzzle object: its ports, batteries,
//! indicators and serial number.
//!
//! ## How it works
//!
//! 1. The host describes the edgework through [`EdgeworkSource`] (or an
//!    [`EdgeworkFacts`] record). It is captured once into a [`FactSnapshot`].
//! 2. On [`EdgeworkModule::activate`] the [`QuestionGenerator`] draws three
//!    multiple-choice questions from four families (indicator state, how
//!    many, is present, serial character), never repeating a question until
//!    it has run out of fresh ones.
//! 3. Button presses walk through the questions. All correct → Pass. One
//!    wrong answer → Strike and Pass. Timer running out → Strike (once).
//! 4. Display resets that should happen "a moment later" come back as
//!    [`ScheduledTask`]s the host fires when due; tasks from an older
//!    activation are ignored.
//!
//! ## Quick start
//!
//! ```rust
//! use edgework_quiz::{
//!     EdgeworkFacts, EdgeworkModule, HostSignal, IndicatorLabel, IndicatorState,
//!     ModuleConfig, PortKind,
//! };
//!
//! let facts = EdgeworkFacts::new("AB12C3")
//!     .with_port(PortKind::Serial, 1)
//!     .with_indicator(IndicatorLabel::FRK, IndicatorState::Lit);
//! let mut module = EdgeworkModule::from_source(&facts, ModuleConfig::seeded(42)).unwrap();
//!
//! module.activate();
//! println!("{}", module.screen().prompt);
//!
//! let correct = module.current_question().unwrap().correct_index;
//! let reaction = module.press(correct).unwrap();
//! assert!(!reaction.signals.contains(&HostSignal::Strike));
//! for task in reaction.scheduled {
//!     module.fire(task);
//! }
//! ```

pub mod display_adapter;
pub mod quiz_engine;

// Convenience re-exports so callers can use `edgework_quiz::EdgeworkModule`
// directly without reaching into `quiz_engine::`.
pub use display_adapter::to_display_state;
pub use quiz_engine::{
    BatteryKind, Category, ConfigError, DeferredAction, EdgeworkFacts, EdgeworkModule,
    EdgeworkSource, Error, FactSnapshot, GenerationLimits, HostSignal, IndicatorLabel,
    IndicatorState, ModuleConfig, ModuleState, PortKind, Question, QuestionFamily,
    QuestionGenerator, QuestionToken, Reaction, ScheduledTask, Screen, Session, SessionError,
    SnapshotError, TaskQueue, Tone, TotalKind, UsedQuestions, Verdict,
};

#[cfg(test)]
mod tests;
