//! Game state module - manages the complete game state
//!
//! This module ties together the dictionary, the round in play, scoring, the
//! per-word timer, and the hint and wrong-click state. It exposes a per-frame
//! update ([`GameState::advance_time`]) and a per-click update
//! ([`GameState::resolve_click`]); everything else is read-only accessors the
//! presentation layer polls between frames.

use crate::dictionary::Dictionary;
use crate::error::{DictionaryError, RoundError};
use crate::feedback::{HintState, WrongClickFeedback};
use crate::rng::{RandomSource, SimpleRng};
use crate::round::Round;
use crate::scoring::{apply_score, is_won, ScoreEvent, ScoreResult};
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    dictionary: Dictionary,
    rng: R,
    round: Round,
    /// Dictionary index of the word in play (None for an injected word not in the list).
    word_index: Option<usize>,
    /// Monotonic game id (increments on restart).
    game_id: u32,
    /// Monotonic id for rounds (increments every time a word is dealt).
    round_id: u32,
    score: i32,
    time_remaining_ms: u32,
    hint: HintState,
    wrong_click: WrongClickFeedback,
    last_outcome: Option<ClickOutcome>,
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game and deal the first word.
    pub fn new(dictionary: Dictionary, rng: R) -> Self {
        let mut state = Self::blank(dictionary, rng, Round::empty());
        state.start_round();
        state
    }

    /// Create a new game from raw words.
    ///
    /// Fails when no entry is playable.
    pub fn from_words<I, S>(words: I, rng: R) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Dictionary::from_words(words)?, rng))
    }

    /// Create a game whose first round is `round` instead of a random deal.
    ///
    /// Later rounds are drawn from `dictionary` as usual. A round with no
    /// letters left is rejected.
    pub fn with_round(dictionary: Dictionary, rng: R, round: Round) -> Result<Self, RoundError> {
        if round.is_empty() {
            return Err(RoundError::EmptyWord);
        }
        let word_index = dictionary.position(round.full_word());
        let mut state = Self::blank(dictionary, rng, round);
        state.word_index = word_index;
        state.round_id = 1;
        Ok(state)
    }

    fn blank(dictionary: Dictionary, rng: R, round: Round) -> Self {
        Self {
            dictionary,
            rng,
            round,
            word_index: None,
            game_id: 0,
            round_id: 0,
            score: 0,
            time_remaining_ms: ROUND_TIME_MS,
            hint: HintState::default(),
            wrong_click: WrongClickFeedback::default(),
            last_outcome: None,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Letters of the current word still to be clicked.
    pub fn word(&self) -> &str {
        self.round.word()
    }

    /// Positions of the remaining letters, in click order.
    pub fn positions(&self) -> &[Position] {
        self.round.positions()
    }

    pub fn word_index(&self) -> Option<usize> {
        self.word_index
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    pub fn hint_button_position(&self) -> Position {
        HINT_BUTTON_POSITION
    }

    pub fn hint_active(&self) -> bool {
        self.hint.active()
    }

    pub fn hint_position(&self) -> Option<Position> {
        self.hint.position()
    }

    pub fn wrong_click_position(&self) -> Option<Position> {
        self.wrong_click.target()
    }

    pub fn wrong_click_elapsed_ms(&self) -> u32 {
        self.wrong_click.elapsed_ms()
    }

    /// Outcome of the most recent click, if any.
    pub fn last_outcome(&self) -> Option<ClickOutcome> {
        self.last_outcome
    }

    /// The score has reached the win threshold; no new words are dealt.
    pub fn is_game_over(&self) -> bool {
        is_won(self.score)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Advance the clock by `dt_ms` milliseconds.
    ///
    /// When the word's time runs out a new word is dealt with no penalty,
    /// unless the game is already won. The wrong-click highlight runs on its
    /// own clock and is unaffected by round changes.
    pub fn advance_time(&mut self, dt_ms: u32) {
        self.time_remaining_ms = self.time_remaining_ms.saturating_sub(dt_ms);

        if self.time_remaining_ms == 0 && !self.is_game_over() {
            log::debug!(
                "round {} timed out with {} letters left",
                self.round_id,
                self.round.len()
            );
            self.start_round();
        }

        self.wrong_click.advance(dt_ms);
    }

    /// Resolve a click on board cell `p`.
    ///
    /// 1. Any active hint is consumed; clicking the hint button takes a new one.
    /// 2. Clicking the next letter consumes it and scores; finishing the word
    ///    deals a new one while the game is running.
    /// 3. Clicking a later remaining letter costs points and flags that tile.
    /// 4. Anything else is absorbed.
    pub fn resolve_click(&mut self, p: Position) -> ClickOutcome {
        let hint_clicked = self.check_hint(p);

        let outcome = if self.round.next_position() == Some(p) {
            self.round.advance();
            let finished = self.round.is_empty();
            self.award(if finished {
                ScoreEvent::WordComplete
            } else {
                ScoreEvent::Correct
            });

            if finished && !self.is_game_over() {
                self.start_round();
            }

            if finished {
                ClickOutcome::WordComplete
            } else {
                ClickOutcome::Correct
            }
        } else if self.round.is_out_of_order(p) {
            self.award(ScoreEvent::Wrong);
            self.wrong_click.flag(p);
            ClickOutcome::Wrong
        } else if hint_clicked {
            ClickOutcome::Hint
        } else {
            ClickOutcome::Miss
        };

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Extend the current word's timer. Ignored once the game is won.
    pub fn add_time(&mut self, ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.time_remaining_ms = self.time_remaining_ms.saturating_add(ms);
        true
    }

    /// Start over with the same dictionary, continuing the RNG stream.
    pub fn restart(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.score = 0;
        self.hint = HintState::default();
        self.wrong_click = WrongClickFeedback::default();
        self.last_outcome = None;
        self.start_round();
        log::info!("game {} started", self.game_id);
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(p) => self.resolve_click(p) != ClickOutcome::Miss,
            GameAction::AddTime => self.add_time(BONUS_TIME_MS),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill an existing snapshot in place.
    ///
    /// Does not allocate: tiles live in a fixed-capacity buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        for (letter, position) in self.round.tiles() {
            out.tiles.push(TileSnapshot { letter, position });
        }
        out.hint_button = HINT_BUTTON_POSITION;
        out.hint_active = self.hint.active();
        out.hint_position = self.hint.position();
        out.wrong_click = self.wrong_click.target();
        out.wrong_click_elapsed_ms = self.wrong_click.elapsed_ms();
        out.score = self.score;
        out.win_score = WIN_SCORE;
        out.time_remaining_ms = self.time_remaining_ms;
        out.game_id = self.game_id;
        out.round_id = self.round_id;
        out.game_over = self.is_game_over();
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Deal a random word at fresh positions and reset the timer.
    fn start_round(&mut self) {
        let index = self.rng.next_below(self.dictionary.len() as u32) as usize;
        let word = &self.dictionary.words()[index];
        self.round.regenerate(word, &mut self.rng);

        self.word_index = Some(index);
        self.time_remaining_ms = ROUND_TIME_MS;
        self.round_id = self.round_id.wrapping_add(1);

        log::debug!(
            "round {} dealt: {} letters (word #{})",
            self.round_id,
            self.round.len(),
            index
        );
    }

    /// Consume any active hint, then take a new one if `p` is the hint button.
    fn check_hint(&mut self, p: Position) -> bool {
        self.hint.consume();
        if p == HINT_BUTTON_POSITION {
            self.hint.activate(self.round.next_position());
            return true;
        }
        false
    }

    fn award(&mut self, event: ScoreEvent) {
        match apply_score(self.score, event) {
            ScoreResult::Awarded(points) => {
                self.score += points;
                if is_won(self.score) {
                    log::info!("win threshold reached with {} points", self.score);
                }
            }
            ScoreResult::GameOver => self.round.clear(),
        }
    }
}

impl GameState<SimpleRng> {
    /// Create a new game driven by the built-in LCG.
    pub fn seeded(dictionary: Dictionary, seed: u32) -> Self {
        Self::new(dictionary, SimpleRng::new(seed))
    }
}
