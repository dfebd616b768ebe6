//! Round engine: question selection, candidate building, answer scoring.
//!
//! The engine owns the category registry and the rule configuration, and
//! drives [`Session`] values through play:
//!
//! 1. `new_session` mints fresh state.
//! 2. `load_question` rolls a category, builds a candidate set, and
//!    installs a [`Round`].
//! 3. `submit_answer` scores the pick and advances the index.
//! 4. `has_more_questions` says whether another load should be attempted.
//!
//! ## Category rerolls
//!
//! The category is rerolled uniformly on *every* load, while the question
//! index advances across the whole session. `has_more_questions` compares
//! the index against the most recently loaded category, so with categories
//! of unequal length a session can end early against a short category or
//! outlive one and then fail the next load. That is the game as shipped;
//! the engine reproduces it rather than quietly straightening it out.

use smallvec::SmallVec;

use super::round::Round;
use crate::catalog::{CategoryRegistry, Symbol};
use crate::core::{AnswerRecord, GameMode, QuizConfig, QuizError, QuizRng, Session};

/// Result of one answer submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the pick matched the answer.
    pub correct: bool,

    /// Session score after this submission.
    pub score: u32,
}

/// The quiz rules engine.
///
/// ## Example
///
/// ```
/// use emoji_quiz::{GameMode, RoundEngine};
/// use emoji_quiz::games::emoji::builtin_categories;
///
/// let engine = RoundEngine::new(builtin_categories());
/// let mut session = engine.new_session_seeded(GameMode::Timed, 7);
///
/// let round = engine.load_question(&mut session).unwrap();
/// assert_eq!(round.candidates().len(), 4);
///
/// let answer = round.answer().clone();
/// let outcome = engine.submit_answer(&mut session, &answer, &answer);
/// assert!(outcome.correct);
/// assert_eq!(outcome.score, 10);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    registry: CategoryRegistry,
    config: QuizConfig,
}

impl RoundEngine {
    /// Create an engine over a category registry, with standard rules.
    ///
    /// # Panics
    ///
    /// Panics if the registry is empty - there would be nothing to quiz.
    #[must_use]
    pub fn new(registry: CategoryRegistry) -> Self {
        assert!(!registry.is_empty(), "Must register at least one category");
        Self {
            registry,
            config: QuizConfig::default(),
        }
    }

    /// Replace the rule configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// The rule configuration in force.
    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The category registry.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    // === Session Lifecycle ===

    /// Start a fresh session seeded from OS entropy.
    #[must_use]
    pub fn new_session(&self, mode: GameMode) -> Session {
        Session::new(mode, self.config.starting_seconds, QuizRng::from_entropy())
    }

    /// Start a fresh session with a fixed seed, for replay and tests.
    #[must_use]
    pub fn new_session_seeded(&self, mode: GameMode, seed: u64) -> Session {
        Session::new(mode, self.config.starting_seconds, QuizRng::new(seed))
    }

    /// Reset a session for another run: score, index, round, answers, and
    /// countdown return to their starting values. Mode is preserved, and
    /// the RNG stream continues rather than repeating the opening draws.
    pub fn reset_session(&self, session: &mut Session) {
        session.reset();
    }

    // === Play ===

    /// Roll a category and build the round for the session's current index.
    ///
    /// The round is installed as the session's current round and also
    /// returned for the host to render.
    ///
    /// # Errors
    ///
    /// - [`QuizError::IndexOutOfRange`] if the index is past the end of the
    ///   rolled category. The roll still consumes one RNG draw.
    /// - [`QuizError::InsufficientChoices`] if the rolled category is too
    ///   small to fill a candidate set.
    pub fn load_question(&self, session: &mut Session) -> Result<Round, QuizError> {
        let category_id = *session
            .rng
            .choose(self.registry.ids())
            .expect("Registry holds at least one category");
        let category = self.registry.get_unchecked(category_id);

        // The index is checked against the category rolled *now*, not the
        // one `has_more_questions` saw. With unequal category lengths the
        // two can disagree; see the module docs.
        let index = session.question_index();
        if index >= category.question_count() {
            return Err(QuizError::IndexOutOfRange {
                category: category.name.clone(),
                index,
                question_count: category.question_count(),
            });
        }

        if category.question_count() < self.config.choice_count {
            return Err(QuizError::InsufficientChoices {
                category: category.name.clone(),
                available: category.question_count(),
                required: self.config.choice_count,
            });
        }

        let question = &category.questions()[index];
        let answer = question.symbol.clone();

        // Decoys: the category's other symbols, shuffled, first N taken.
        // One more shuffle at the end hides the answer's position.
        let mut pool: Vec<&Symbol> = category.symbols().filter(|s| **s != answer).collect();
        session.rng.shuffle(&mut pool);

        let mut candidates: SmallVec<[Symbol; 4]> =
            SmallVec::with_capacity(self.config.choice_count);
        candidates.push(answer.clone());
        candidates.extend(pool.into_iter().take(self.config.decoy_count()).cloned());
        session.rng.shuffle(&mut candidates);

        let round = Round::new(category_id, index, question.hint.clone(), candidates, answer);
        session.set_round(round.clone());
        Ok(round)
    }

    /// Score a submitted answer and advance the index.
    ///
    /// The index advances whether or not the pick was right; only a correct
    /// pick moves the score. This is the only operation that touches either.
    pub fn submit_answer(
        &self,
        session: &mut Session,
        chosen: &Symbol,
        answer: &Symbol,
    ) -> AnswerOutcome {
        let correct = chosen == answer;
        if correct {
            session.add_score(self.config.points_per_correct);
        }

        session.record_answer(AnswerRecord {
            question_index: session.question_index(),
            category: session.round().map(|r| r.category),
            answer: answer.clone(),
            chosen: chosen.clone(),
            correct,
        });
        session.advance_index();

        AnswerOutcome {
            correct,
            score: session.score(),
        }
    }

    /// Whether another question can be loaded.
    ///
    /// True before the first load. Afterwards the index is compared against
    /// the length of the most recently loaded category - whichever category
    /// the next load rolls may disagree (see the module docs).
    #[must_use]
    pub fn has_more_questions(&self, session: &Session) -> bool {
        match session.round() {
            Some(round) => {
                let category = self.registry.get_unchecked(round.category);
                session.question_index() < category.question_count()
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CategoryId};

    /// Two categories, four questions each, so the default config's
    /// candidate set uses every symbol of whichever category is rolled.
    fn registry() -> CategoryRegistry {
        let mut registry = CategoryRegistry::new();
        registry.register(
            Category::new(CategoryId::new(0), "Fruits")
                .with_question("🍎", "A red or green fruit, often used for pies")
                .with_question("🍌", "A long, yellow fruit, often eaten as a snack")
                .with_question("🍇", "A bunch of small, round, purple fruits")
                .with_question("🍓", "A small red fruit with tiny seeds on the outside"),
        );
        registry.register(
            Category::new(CategoryId::new(1), "Sports")
                .with_question("⚽", "A ball game played by two teams of eleven players each")
                .with_question("🏀", "A game where players score by shooting through a hoop")
                .with_question("🎾", "A sport where players hit a ball over a net with rackets")
                .with_question("🏈", "A team sport played with an oval-shaped ball"),
        );
        registry
    }

    fn engine() -> RoundEngine {
        RoundEngine::new(registry())
    }

    #[test]
    #[should_panic(expected = "at least one category")]
    fn test_empty_registry_panics() {
        let _ = RoundEngine::new(CategoryRegistry::new());
    }

    #[test]
    fn test_new_session_uses_config() {
        let engine = engine().with_config(QuizConfig::default().with_starting_seconds(60));
        let session = engine.new_session_seeded(GameMode::Timed, 1);

        assert_eq!(session.starting_seconds(), 60);
        assert_eq!(session.remaining_seconds(), 60);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let engine = engine();
        let mut a = engine.new_session_seeded(GameMode::Timed, 42);
        let mut b = engine.new_session_seeded(GameMode::Timed, 42);

        for _ in 0..10 {
            let ra = engine.load_question(&mut a).unwrap();
            let rb = engine.load_question(&mut b).unwrap();
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn test_candidate_set_shape() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 7);

        // Loading without submitting rerolls the same index repeatedly.
        for _ in 0..100 {
            let round = engine.load_question(&mut session).unwrap();

            assert_eq!(round.candidates().len(), 4);
            let answer_hits = round
                .candidates()
                .iter()
                .filter(|c| *c == round.answer())
                .count();
            assert_eq!(answer_hits, 1);

            for i in 0..round.candidates().len() {
                for j in (i + 1)..round.candidates().len() {
                    assert_ne!(round.candidates()[i], round.candidates()[j]);
                }
            }
        }
    }

    #[test]
    fn test_candidates_come_from_rolled_category() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 11);

        for _ in 0..50 {
            let round = engine.load_question(&mut session).unwrap();
            let category = engine.registry().get(round.category).unwrap();
            for candidate in round.candidates() {
                assert!(category.contains_symbol(candidate));
            }
        }
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 3);

        let round = engine.load_question(&mut session).unwrap();
        let answer = round.answer().clone();
        let outcome = engine.submit_answer(&mut session, &answer, &answer);

        assert!(outcome.correct);
        assert_eq!(outcome.score, 10);
        assert_eq!(session.score(), 10);
        assert_eq!(session.question_index(), 1);
    }

    #[test]
    fn test_wrong_answer_advances_without_scoring() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 3);

        let round = engine.load_question(&mut session).unwrap();
        let answer = round.answer().clone();
        let wrong = round
            .candidates()
            .iter()
            .find(|c| *c != &answer)
            .unwrap()
            .clone();
        let outcome = engine.submit_answer(&mut session, &wrong, &answer);

        assert!(!outcome.correct);
        assert_eq!(outcome.score, 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.question_index(), 1);
    }

    #[test]
    fn test_answers_are_logged() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 5);

        let round = engine.load_question(&mut session).unwrap();
        let answer = round.answer().clone();
        let category = round.category;
        engine.submit_answer(&mut session, &answer, &answer);

        assert_eq!(session.answers().len(), 1);
        let record = &session.answers()[0];
        assert_eq!(record.question_index, 0);
        assert_eq!(record.category, Some(category));
        assert_eq!(record.chosen, answer);
        assert!(record.correct);
    }

    #[test]
    fn test_has_more_questions_before_first_load() {
        let engine = engine();
        let session = engine.new_session_seeded(GameMode::Timed, 1);
        assert!(engine.has_more_questions(&session));
    }

    #[test]
    fn test_has_more_questions_flips_at_category_length() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Timed, 9);

        // Both fixture categories hold 4 questions, so the flip point is
        // the same whichever one each load rolls.
        for turn in 0..4 {
            assert!(engine.has_more_questions(&session), "turn {}", turn);
            let round = engine.load_question(&mut session).unwrap();
            let answer = round.answer().clone();
            engine.submit_answer(&mut session, &answer, &answer);
        }

        assert!(!engine.has_more_questions(&session));
        assert_eq!(session.score(), 40);
    }

    #[test]
    fn test_index_out_of_range_error() {
        let mut registry = CategoryRegistry::new();
        registry.register(
            Category::new(CategoryId::new(0), "Fruits")
                .with_question("🍎", "apple")
                .with_question("🍌", "banana")
                .with_question("🍇", "grapes")
                .with_question("🍓", "strawberry"),
        );
        let engine = RoundEngine::new(registry);
        let mut session = engine.new_session_seeded(GameMode::Timed, 2);

        for _ in 0..4 {
            let round = engine.load_question(&mut session).unwrap();
            let answer = round.answer().clone();
            engine.submit_answer(&mut session, &answer, &answer);
        }
        assert!(!engine.has_more_questions(&session));

        let err = engine.load_question(&mut session).unwrap_err();
        assert_eq!(
            err,
            QuizError::IndexOutOfRange {
                category: "Fruits".to_string(),
                index: 4,
                question_count: 4,
            }
        );
    }

    #[test]
    fn test_insufficient_choices_error() {
        let mut registry = CategoryRegistry::new();
        registry.register(
            Category::new(CategoryId::new(0), "Tiny")
                .with_question("🍎", "apple")
                .with_question("🍌", "banana"),
        );
        let engine = RoundEngine::new(registry);
        let mut session = engine.new_session_seeded(GameMode::Timed, 2);

        let err = engine.load_question(&mut session).unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientChoices {
                category: "Tiny".to_string(),
                available: 2,
                required: 4,
            }
        );
    }

    #[test]
    fn test_unequal_category_lengths_end_sessions_early() {
        // The shipped game's quirk: the index survives category rerolls, so
        // once it passes a short category's length, loads that roll the
        // short category fail while loads that roll the long one succeed.
        let mut registry = CategoryRegistry::new();
        registry.register(
            Category::new(CategoryId::new(0), "Short")
                .with_question("🍎", "apple")
                .with_question("🍌", "banana"),
        );
        registry.register(
            Category::new(CategoryId::new(1), "Long")
                .with_question("⚽", "soccer")
                .with_question("🏀", "basketball")
                .with_question("🎾", "tennis")
                .with_question("🏈", "football")
                .with_question("🏓", "table tennis")
                .with_question("🏸", "badminton"),
        );
        let engine =
            RoundEngine::new(registry).with_config(QuizConfig::default().with_choice_count(2));
        let mut session = engine.new_session_seeded(GameMode::Timed, 13);

        // Drive the index past the short category's length.
        while session.question_index() < 2 {
            if let Ok(round) = engine.load_question(&mut session) {
                let answer = round.answer().clone();
                engine.submit_answer(&mut session, &answer, &answer);
            }
        }

        let mut successes = 0;
        let mut short_failures = 0;
        for _ in 0..50 {
            match engine.load_question(&mut session) {
                Ok(round) => {
                    assert_eq!(round.category, CategoryId::new(1));
                    successes += 1;
                }
                Err(QuizError::IndexOutOfRange {
                    category,
                    index,
                    question_count,
                }) => {
                    assert_eq!(category, "Short");
                    assert_eq!(index, 2);
                    assert_eq!(question_count, 2);
                    short_failures += 1;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        // Fifty rolls over two categories hit both sides.
        assert!(successes > 0);
        assert!(short_failures > 0);
    }

    #[test]
    fn test_failed_load_still_consumes_a_category_roll() {
        let mut registry = CategoryRegistry::new();
        registry.register(
            Category::new(CategoryId::new(0), "Only")
                .with_question("🍎", "apple")
                .with_question("🍌", "banana")
                .with_question("🍇", "grapes")
                .with_question("🍓", "strawberry"),
        );
        let engine = RoundEngine::new(registry);

        // Session A fails one load before playing; session B plays straight
        // through. Their rounds diverge because A's failed roll advanced
        // its RNG.
        let mut a = engine.new_session_seeded(GameMode::Timed, 21);
        let mut b = engine.new_session_seeded(GameMode::Timed, 21);

        for _ in 0..4 {
            let round = engine.load_question(&mut a).unwrap();
            let answer = round.answer().clone();
            engine.submit_answer(&mut a, &answer, &answer);
        }
        assert!(engine.load_question(&mut a).is_err());
        engine.reset_session(&mut a);

        for _ in 0..4 {
            let round = engine.load_question(&mut b).unwrap();
            let answer = round.answer().clone();
            engine.submit_answer(&mut b, &answer, &answer);
        }
        engine.reset_session(&mut b);

        assert_ne!(a.rng.state(), b.rng.state());
    }

    #[test]
    fn test_reset_session() {
        let engine = engine();
        let mut session = engine.new_session_seeded(GameMode::Endless, 4);

        for _ in 0..3 {
            let round = engine.load_question(&mut session).unwrap();
            let answer = round.answer().clone();
            engine.submit_answer(&mut session, &answer, &answer);
        }
        session.set_remaining_seconds(10);

        engine.reset_session(&mut session);

        assert_eq!(session.score(), 0);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.remaining_seconds(), 40);
        assert_eq!(session.mode(), GameMode::Endless);
        assert!(session.round().is_none());
        assert!(session.answers().is_empty());
        assert!(engine.has_more_questions(&session));
    }
}
