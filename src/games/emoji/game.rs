//! The assembled emoji quiz: engine, timer, and history wired together.
//!
//! [`EmojiQuiz`] plays the role of the game screen's controller: it loads
//! questions, takes answers, drives the countdown, and records finished
//! timed runs to the injected [`HistoryStore`]. Hosts render what it
//! returns and forward player input back in; they never touch the engine
//! or the timer directly.
//!
//! ## Control flow
//!
//! ```text
//! build() ──▶ round() ──▶ answer(choice) ──▶ advance() ──▶ round() ...
//!                │                              │
//!   tick() every second                         └─ Ok(None) once over
//!                └─ Expired finalizes the run (expiry beats any answer)
//! ```

use crate::catalog::{CategoryRegistry, Symbol};
use crate::core::{GameMode, QuizConfig, QuizError, Session};
use crate::history::{HistoryEntry, HistoryStore, InMemoryHistory};
use crate::round::{Round, RoundEngine};
use crate::timer::{SessionTimer, TimerEvent, TimerStatus};

use super::categories::builtin_categories;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The countdown hit zero.
    TimeExpired,
    /// The active category ran out of questions.
    QuestionsExhausted,
    /// The player quit.
    Quit,
}

/// What the host shows after an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Whether the pick was right.
    pub correct: bool,

    /// The correct symbol, for "Wrong! The correct emoji is …" rendering.
    pub answer: Symbol,

    /// Score after this answer.
    pub score: u32,

    /// Whether another question remains. `false` means the run just ended.
    pub more_questions: bool,
}

/// Builder for an [`EmojiQuiz`].
pub struct EmojiQuizBuilder {
    mode: GameMode,
    config: QuizConfig,
    categories: Option<CategoryRegistry>,
    history: Option<Box<dyn HistoryStore>>,
    seed: Option<u64>,
}

impl Default for EmojiQuizBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Timed,
            config: QuizConfig::default(),
            categories: None,
            history: None,
            seed: None,
        }
    }
}

impl EmojiQuizBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play mode. Defaults to Timed.
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rule configuration. Defaults to the standard rules.
    pub fn config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Question bank. Defaults to [`builtin_categories`].
    pub fn categories(mut self, categories: CategoryRegistry) -> Self {
        self.categories = Some(categories);
        self
    }

    /// History store for finished timed runs. Defaults to in-memory.
    pub fn history(mut self, store: impl HistoryStore + 'static) -> Self {
        self.history = Some(Box::new(store));
        self
    }

    /// Fix the RNG seed, for replays and tests.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the game: create the session, load the first question, and
    /// (in timed mode) start the countdown.
    ///
    /// # Errors
    ///
    /// Fails if the first question cannot be loaded, which means the
    /// category data cannot satisfy the configured candidate-set size.
    pub fn build(self) -> Result<EmojiQuiz, QuizError> {
        let registry = self.categories.unwrap_or_else(builtin_categories);
        let engine = RoundEngine::new(registry).with_config(self.config);

        let mut session = match self.seed {
            Some(seed) => engine.new_session_seeded(self.mode, seed),
            None => engine.new_session(self.mode),
        };

        engine.load_question(&mut session)?;

        let mut timer = SessionTimer::new();
        if self.mode.is_timed() {
            timer.start(session.remaining_seconds());
        }

        Ok(EmojiQuiz {
            engine,
            session,
            timer,
            history: self
                .history
                .unwrap_or_else(|| Box::new(InMemoryHistory::new())),
            over: None,
        })
    }
}

/// One playable emoji quiz.
///
/// ## Example
///
/// ```
/// use emoji_quiz::games::emoji::EmojiQuizBuilder;
/// use emoji_quiz::GameMode;
///
/// let mut quiz = EmojiQuizBuilder::new()
///     .mode(GameMode::Timed)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let choice = quiz.round().unwrap().candidates()[0].clone();
/// let feedback = quiz.answer(&choice).unwrap();
/// assert_eq!(feedback.score, if feedback.correct { 10 } else { 0 });
/// ```
pub struct EmojiQuiz {
    engine: RoundEngine,
    session: Session,
    timer: SessionTimer,
    history: Box<dyn HistoryStore>,
    over: Option<EndReason>,
}

impl EmojiQuiz {
    // === Play ===

    /// The question on display, or `None` once the run is over.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        if self.over.is_some() {
            return None;
        }
        self.session.round()
    }

    /// Submit the player's pick for the current round.
    ///
    /// Returns `None` when the run is already over (expiry wins any race
    /// with a late tap) or no round is on display. When the answered
    /// question was the category's last, the run finalizes here with
    /// [`EndReason::QuestionsExhausted`].
    pub fn answer(&mut self, chosen: &Symbol) -> Option<AnswerFeedback> {
        if self.over.is_some() {
            return None;
        }
        let answer = self.session.round()?.answer().clone();

        let outcome = self.engine.submit_answer(&mut self.session, chosen, &answer);
        let more_questions = self.engine.has_more_questions(&self.session);
        if !more_questions {
            self.finalize(EndReason::QuestionsExhausted);
        }

        Some(AnswerFeedback {
            correct: outcome.correct,
            answer,
            score: outcome.score,
            more_questions,
        })
    }

    /// Load the next question after feedback has been shown.
    ///
    /// `Ok(None)` once the run is over. An `Err` means the load rolled a
    /// category the current index has outgrown (possible when category
    /// lengths differ); the host may retry or quit.
    pub fn advance(&mut self) -> Result<Option<&Round>, QuizError> {
        if self.over.is_some() {
            return Ok(None);
        }
        self.engine.load_question(&mut self.session)?;
        Ok(self.session.round())
    }

    /// Advance the countdown by one second. Call once per second from the
    /// host's scheduler; a no-op in endless mode (the timer never runs).
    ///
    /// Expiry finalizes the run with [`EndReason::TimeExpired`].
    pub fn tick(&mut self) -> Option<TimerEvent> {
        let event = self.timer.tick();
        match event {
            Some(TimerEvent::Tick { remaining }) => {
                self.session.set_remaining_seconds(remaining);
            }
            Some(TimerEvent::Expired) => {
                self.session.set_remaining_seconds(0);
                self.finalize(EndReason::TimeExpired);
            }
            None => {}
        }
        event
    }

    /// End the run now, recording the score so far.
    pub fn quit(&mut self) {
        self.finalize(EndReason::Quit);
    }

    /// Start a fresh run with the same mode, rules, and history: progress
    /// resets, the first question loads, and (timed) the countdown rearms.
    ///
    /// # Errors
    ///
    /// Fails if the first question cannot be loaded; the timer is left
    /// unstarted in that case.
    pub fn play_again(&mut self) -> Result<(), QuizError> {
        self.engine.reset_session(&mut self.session);
        self.over = None;
        self.engine.load_question(&mut self.session)?;
        if self.session.mode().is_timed() {
            self.timer.start(self.session.remaining_seconds());
        }
        Ok(())
    }

    // === Accessors ===

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds()
    }

    /// Seconds spent in the current run.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.session.elapsed_seconds()
    }

    /// Play mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.session.mode()
    }

    /// Why the run ended, or `None` while in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<EndReason> {
        self.over
    }

    /// The countdown's lifecycle state.
    #[must_use]
    pub fn timer_status(&self) -> TimerStatus {
        self.timer.status()
    }

    /// The underlying session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The history store, for reading past results.
    #[must_use]
    pub fn history(&self) -> &dyn HistoryStore {
        self.history.as_ref()
    }

    // === Internal ===

    /// End the run: stop the clock and, for timed runs, append the result
    /// to history. Runs at most once; later calls are no-ops.
    fn finalize(&mut self, reason: EndReason) {
        if self.over.is_some() {
            return;
        }
        self.over = Some(reason);
        self.timer.stop();

        log::debug!(
            "session over ({:?}): score {}, {}s elapsed",
            reason,
            self.session.score(),
            self.session.elapsed_seconds()
        );

        if self.session.mode().is_timed() {
            let entry = HistoryEntry::new(self.session.score(), self.session.elapsed_seconds());
            if let Err(err) = self.history.append(entry) {
                // Losing the record is not worth losing the session over.
                log::warn!("failed to record session history: {err}");
            }
        }
    }
}
