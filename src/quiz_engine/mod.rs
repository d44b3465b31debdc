//! Core quiz engine: edgework capture, question generation, and the
//! session state machine.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: edgework categories, question families, tokens, questions |
//! | `snapshot`     | Host query trait and the immutable fact snapshot |
//! | `shuffle`      | Fisher-Yates shuffle and the uniform range sampler |
//! | `memory`       | Tokens of already-asked questions |
//! | `helpers`      | Scan order, per-call draw context, choice layout builders |
//! | `families`     | The four question families |
//! | `generator`    | `QuestionGenerator::generate()`: trials, family dispatch, memory reset |
//! | `session`      | Progress through one activation's questions |
//! | `module`       | Host events → Strike/Pass signals and deferred display tasks |
//! | `scheduler`    | Generation-tagged delayed tasks and a virtual-clock queue |
//! | `presentation` | Screen contents: prompt, button labels, tone |
//! | `config`       | Per-module tunables |
//! | `error`        | Error types |

pub mod config;
pub mod error;
pub mod families;
pub mod generator;
pub mod helpers;
pub mod memory;
pub mod models;
pub mod module;
pub mod presentation;
pub mod scheduler;
pub mod session;
pub mod shuffle;
pub mod snapshot;

// Re-export the public API surface so callers can use
// `quiz_engine::EdgeworkModule` without reaching into sub-modules.
pub use config::ModuleConfig;
pub use error::{ConfigError, Error, SessionError, SnapshotError};
pub use generator::QuestionGenerator;
pub use helpers::GenerationLimits;
pub use memory::UsedQuestions;
pub use models::{
    BatteryKind, Category, IndicatorLabel, IndicatorState, PortKind, Question,
    QuestionFamily, QuestionToken, TotalKind,
};
pub use module::{EdgeworkModule, HostSignal, ModuleState, Reaction};
pub use presentation::{Screen, Tone};
pub use scheduler::{DeferredAction, ScheduledTask, TaskQueue};
pub use session::{Session, Verdict};
pub use snapshot::{EdgeworkFacts, EdgeworkSource, FactSnapshot};
