//! The needy module: host events in, Strike/Pass signals and delayed display
//! work out.
//!
//! ## Lifecycle
//!
//! ```text
//!            activate                 last correct answer / wrong answer / timeout
//!   Idle ─────────────────▶ Active ─────────────────────────────────────────────▶ Idle
//!     ▲                        │
//!     └──────── deactivate ────┘
//! ```
//!
//! A single wrong answer ends the session with a Strike *and* a Pass, and so
//! does a press that lands while input is closed mid-session. Presses with no
//! session running are ignored. The strike flag outlives the session so a
//! timeout right after a wrong answer does not strike twice.

use std::sync::atomic::{AtomicU32, Ordering};

use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Span};

use crate::quiz_engine::{
    config::ModuleConfig,
    error::{Error, SessionError},
    generator::QuestionGenerator,
    memory::UsedQuestions,
    models::{Question, BUTTON_COUNT},
    presentation::{single_line, Screen},
    scheduler::{DeferredAction, ScheduledTask},
    session::{Session, Verdict},
    snapshot::{EdgeworkSource, FactSnapshot},
};

static NEXT_MODULE_ID: AtomicU32 = AtomicU32::new(1);

/// Signals sent back to the host puzzle framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostSignal {
    Strike,
    Pass,
}

/// Everything an event produced: signals for the host right now, and
/// display work for later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub signals: Vec<HostSignal>,
    pub scheduled: Vec<ScheduledTask>,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn strikes(&self) -> usize {
        self.signals.iter().filter(|s| **s == HostSignal::Strike).count()
    }

    pub fn passes(&self) -> usize {
        self.signals.iter().filter(|s| **s == HostSignal::Pass).count()
    }

    fn signal(mut self, signal: HostSignal) -> Self {
        self.signals.push(signal);
        self
    }

    fn schedule(mut self, task: ScheduledTask) -> Self {
        self.scheduled.push(task);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState {
    Idle,
    Active(Session),
}

#[derive(Debug)]
pub struct EdgeworkModule<R = StdRng> {
    id: u32,
    config: ModuleConfig,
    facts: FactSnapshot,
    used: UsedQuestions,
    generator: QuestionGenerator<R>,
    state: ModuleState,
    strike_issued: bool,
    generation: u64,
    screen: Screen,
    span: Span,
}

impl EdgeworkModule<StdRng> {
    /// Capture the edgework from `source` and build an idle module.
    pub fn from_source(source: &impl EdgeworkSource, config: ModuleConfig) -> Result<Self, Error> {
        let facts = FactSnapshot::capture(source)?;
        Self::new(facts, config)
    }

    pub fn new(facts: FactSnapshot, config: ModuleConfig) -> Result<Self, Error> {
        let generator = QuestionGenerator::from_seed(config.rng_seed, config.limits())?;
        Self::with_parts(facts, config, generator, UsedQuestions::new())
    }
}

impl<R: Rng> EdgeworkModule<R> {
    /// Build from explicit parts; lets callers supply their own RNG or a
    /// pre-filled question memory.
    pub fn with_parts(
        facts: FactSnapshot,
        config: ModuleConfig,
        generator: QuestionGenerator<R>,
        used: UsedQuestions,
    ) -> Result<Self, Error> {
        config.validate()?;
        let id = NEXT_MODULE_ID.fetch_add(1, Ordering::Relaxed);
        Ok(EdgeworkModule {
            id,
            config,
            facts,
            used,
            generator,
            state: ModuleState::Idle,
            strike_issued: false,
            generation: 0,
            screen: Screen::blank(),
            span: tracing::info_span!("edgework", module_id = id),
        })
    }

    // ── accessors ────────────────────────────────────────────────────────────

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    pub fn facts(&self) -> &FactSnapshot {
        &self.facts
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ModuleState::Active(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            ModuleState::Active(s) => Some(s),
            ModuleState::Idle      => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session().and_then(Session::current)
    }

    pub fn input_enabled(&self) -> bool {
        self.session().is_some_and(Session::input_enabled)
    }

    pub fn strike_issued(&self) -> bool {
        self.strike_issued
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn used_questions(&self) -> &UsedQuestions {
        &self.used
    }

    /// 1-based number of the question on screen, for logs.
    pub fn question_number(&self) -> usize {
        self.session().map_or(0, |s| s.current_index() + 1)
    }

    fn task(&self, delay: std::time::Duration, action: DeferredAction) -> ScheduledTask {
        ScheduledTask { generation: self.generation, delay, action }
    }

    // ── host events ──────────────────────────────────────────────────────────

    /// Start a session: fresh questions, first one on screen, input open.
    pub fn activate(&mut self) -> Reaction {
        let span = self.span.clone();
        let _enter = span.enter();

        self.generation += 1;
        self.strike_issued = false;
        let count = self.config.max_questions;
        info!(questions = count, "module activated");

        let questions = self.generator.generate_batch(count, &self.facts, &mut self.used);
        for (i, q) in questions.iter().enumerate() {
            info!(
                number = i + 1,
                question = %single_line(&q.prompt()),
                answer = q.correct_choice(),
                buttons = ?q.choices,
                "question generated"
            );
        }

        let session = Session::new(questions);
        self.screen = session.current().map(Screen::question).unwrap_or_default();
        self.state = ModuleState::Active(session);
        Reaction::none()
    }

    /// End the session without penalty. Pending display work goes stale.
    pub fn deactivate(&mut self) -> Reaction {
        let span = self.span.clone();
        let _enter = span.enter();

        info!(question = self.question_number(), "module deactivated");
        self.generation += 1;
        self.state = ModuleState::Idle;
        self.strike_issued = false;
        self.screen = Screen::blank();
        Reaction::none()
    }

    pub fn press(&mut self, button: usize) -> Result<Reaction, SessionError> {
        if button >= BUTTON_COUNT {
            return Err(SessionError::InvalidButton(button));
        }
        let span = self.span.clone();
        let _enter = span.enter();

        let verdict = match &mut self.state {
            ModuleState::Active(session) if session.input_enabled() => session.judge(button),
            ModuleState::Active(_) => None,
            ModuleState::Idle => {
                debug!(button = button + 1, "press with no session running");
                return Ok(Reaction::none());
            }
        };

        let reaction = match verdict {
            Some(Verdict::Correct { finished: true }) => {
                info!(button = button + 1, "button pressed correctly, module passed");
                self.screen = Screen::correct();
                self.state = ModuleState::Idle;
                Reaction::none()
                    .signal(HostSignal::Pass)
                    .schedule(self.task(self.config.pass_clear_delay(), DeferredAction::ClearScreen))
            }
            Some(Verdict::Correct { finished: false }) => {
                info!(button = button + 1, "button pressed correctly");
                self.screen = Screen::correct();
                Reaction::none()
                    .schedule(self.task(self.config.correct_delay(), DeferredAction::ShowQuestion))
            }
            Some(Verdict::Placeholder) => {
                debug!(button = button + 1, "empty slot pressed");
                Reaction::none()
            }
            Some(Verdict::Wrong) => {
                info!(button = button + 1, "button pressed incorrectly");
                self.strike_issued = true;
                self.screen = Screen::incorrect();
                self.state = ModuleState::Idle;
                Reaction::none()
                    .signal(HostSignal::Strike)
                    .signal(HostSignal::Pass)
                    .schedule(self.task(self.config.incorrect_clear_delay(), DeferredAction::ClearScreen))
            }
            None => {
                // Session is mid-transition: end it here so the pending
                // ShowQuestion goes stale and no second Pass can follow.
                warn!(button = button + 1, "button pressed while input was closed");
                self.generation += 1;
                self.strike_issued = true;
                self.screen = Screen::incorrect();
                self.state = ModuleState::Idle;
                Reaction::none()
                    .signal(HostSignal::Strike)
                    .signal(HostSignal::Pass)
                    .schedule(self.task(self.config.incorrect_clear_delay(), DeferredAction::ClearScreen))
            }
        };
        Ok(reaction)
    }

    /// The host's needy timer ran out. Strikes unless a strike was already
    /// given this session; never passes.
    pub fn timer_expired(&mut self) -> Reaction {
        let span = self.span.clone();
        let _enter = span.enter();

        let mut reaction = Reaction::none();
        if !self.strike_issued {
            reaction = reaction.signal(HostSignal::Strike);
        }
        self.strike_issued = false;
        info!(question = self.question_number(), "time ran out");
        self.state = ModuleState::Idle;
        self.screen = Screen::timed_out();
        reaction.schedule(self.task(self.config.timeout_clear_delay(), DeferredAction::ClearScreen))
    }

    /// Run a task returned by an earlier event. Tasks from an older
    /// generation are dropped.
    pub fn fire(&mut self, task: ScheduledTask) -> Reaction {
        let span = self.span.clone();
        let _enter = span.enter();

        if task.generation != self.generation {
            debug!(task = ?task.action, task_generation = task.generation, "stale task ignored");
            return Reaction::none();
        }
        match task.action {
            DeferredAction::ShowQuestion => match &mut self.state {
                ModuleState::Active(session) => {
                    if let Some(q) = session.current() {
                        self.screen = Screen::question(q);
                    }
                    session.enable_input();
                }
                ModuleState::Idle => debug!("no session to show"),
            },
            DeferredAction::ClearScreen => self.screen = Screen::blank(),
        }
        Reaction::none()
    }
}
