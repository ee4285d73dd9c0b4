//! Round module - the word in play and where its letters sit
//!
//! A round keeps the full word, one board position per letter, and a cursor
//! counting the letters already clicked. The remaining word and the remaining
//! positions are both slices from that cursor, so they always have the same
//! length.

use crate::error::RoundError;
use crate::rng::RandomSource;
use crate::types::{Position, GRID_COLUMNS, GRID_ROWS, HINT_BUTTON_POSITION, MAX_WORD_LEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Full lowercase ASCII word.
    word: String,
    /// `positions[i]` is where `word[i]` must be clicked.
    positions: Vec<Position>,
    /// Letters already clicked.
    solved: usize,
}

impl Round {
    /// Build a round from an explicit word and layout.
    ///
    /// Validates everything a generated round guarantees: a non-empty ASCII
    /// word, one on-board position per letter, no duplicates, and no letter on
    /// the hint button.
    pub fn new(word: impl Into<String>, positions: Vec<Position>) -> Result<Self, RoundError> {
        let word = word.into();

        if word.is_empty() {
            return Err(RoundError::EmptyWord);
        }
        if word.len() > MAX_WORD_LEN {
            return Err(RoundError::WordTooLong {
                len: word.len(),
                max: MAX_WORD_LEN,
            });
        }
        if let Some(ch) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(RoundError::InvalidCharacter { ch });
        }
        if word.len() != positions.len() {
            return Err(RoundError::LengthMismatch {
                letters: word.len(),
                positions: positions.len(),
            });
        }
        for (i, &p) in positions.iter().enumerate() {
            if !p.in_grid() {
                return Err(RoundError::OutOfBounds(p));
            }
            if p == HINT_BUTTON_POSITION {
                return Err(RoundError::HintButtonCollision(p));
            }
            if positions[..i].contains(&p) {
                return Err(RoundError::DuplicatePosition(p));
            }
        }

        Ok(Self {
            word: word.to_ascii_lowercase(),
            positions,
            solved: 0,
        })
    }

    /// Round with no letters; a placeholder until the first word is dealt.
    pub(crate) fn empty() -> Self {
        Self {
            word: String::new(),
            positions: Vec::new(),
            solved: 0,
        }
    }

    /// Replace this round with `word` at fresh random positions.
    ///
    /// `word` must be a dictionary word (ASCII letters, at most `MAX_WORD_LEN`).
    /// Reuses the existing buffers, so steady-state play does not allocate.
    pub(crate) fn regenerate<R: RandomSource>(&mut self, word: &str, rng: &mut R) {
        debug_assert!(word.len() <= MAX_WORD_LEN);
        debug_assert!(word.bytes().all(|b| b.is_ascii_alphabetic()));
        self.word.clear();
        self.word.push_str(word);
        scatter_positions(word.len(), rng, &mut self.positions);
        self.solved = 0;
    }

    /// Letters still to be clicked.
    pub fn word(&self) -> &str {
        &self.word[self.solved..]
    }

    /// The word as it was dealt.
    pub fn full_word(&self) -> &str {
        &self.word
    }

    /// Positions of the letters still to be clicked, in click order.
    pub fn positions(&self) -> &[Position] {
        &self.positions[self.solved..]
    }

    /// Where the next letter must be clicked.
    pub fn next_position(&self) -> Option<Position> {
        self.positions().first().copied()
    }

    /// Remaining letters.
    pub fn len(&self) -> usize {
        self.word.len() - self.solved
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` holds a remaining letter other than the next one.
    pub fn is_out_of_order(&self, p: Position) -> bool {
        self.positions().iter().skip(1).any(|&q| q == p)
    }

    /// Remaining letters paired with their positions.
    pub fn tiles(&self) -> impl Iterator<Item = (char, Position)> + '_ {
        self.word()
            .chars()
            .zip(self.positions().iter().copied())
    }

    /// Consume the next letter. Returns false when nothing is left.
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.solved += 1;
        true
    }

    /// Drop every remaining letter.
    pub(crate) fn clear(&mut self) {
        self.word.clear();
        self.positions.clear();
        self.solved = 0;
    }
}

/// Sample one cell uniformly from the board.
pub fn random_position<R: RandomSource>(rng: &mut R) -> Position {
    let x = rng.next_below(GRID_COLUMNS as u32) as i16;
    let y = rng.next_below(GRID_ROWS as u32) as i16;
    Position::new(x, y)
}

/// Fill `out` with `count` distinct random cells, none on the hint button.
///
/// Rejection sampling: a draw that repeats an accepted cell or lands on the
/// hint button is discarded and redrawn. `count` must not exceed
/// `MAX_WORD_LEN`, or no layout exists.
pub fn scatter_positions<R: RandomSource>(count: usize, rng: &mut R, out: &mut Vec<Position>) {
    assert!(count <= MAX_WORD_LEN, "{count} letters cannot fit on the board");
    out.clear();
    while out.len() < count {
        let p = random_position(rng);
        if p != HINT_BUTTON_POSITION && !out.contains(&p) {
            out.push(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimpleRng};

    fn cats() -> Round {
        Round::new(
            "cats",
            vec![
                Position::new(1, 4),
                Position::new(3, 7),
                Position::new(4, 4),
                Position::new(2, 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_round_exposes_word_and_positions() {
        let round = cats();
        assert_eq!(round.word(), "cats");
        assert_eq!(round.len(), 4);
        assert_eq!(round.next_position(), Some(Position::new(1, 4)));
        assert_eq!(
            round.tiles().collect::<Vec<_>>(),
            vec![
                ('c', Position::new(1, 4)),
                ('a', Position::new(3, 7)),
                ('t', Position::new(4, 4)),
                ('s', Position::new(2, 5)),
            ]
        );
    }

    #[test]
    fn test_advance_keeps_word_and_positions_aligned() {
        let mut round = cats();
        assert!(round.advance());
        assert_eq!(round.word(), "ats");
        assert_eq!(round.positions().len(), 3);
        assert_eq!(round.full_word(), "cats");

        while round.advance() {}
        assert!(round.is_empty());
        assert_eq!(round.word(), "");
        assert!(round.positions().is_empty());
        assert_eq!(round.next_position(), None);
    }

    #[test]
    fn test_out_of_order_ignores_next_and_vacated_cells() {
        let mut round = cats();
        assert!(!round.is_out_of_order(Position::new(1, 4)));
        assert!(round.is_out_of_order(Position::new(2, 5)));
        assert!(!round.is_out_of_order(Position::new(9, 9)));

        round.advance();
        // (1, 4) was vacated and no longer counts.
        assert!(!round.is_out_of_order(Position::new(1, 4)));
    }

    #[test]
    fn test_new_rejects_bad_layouts() {
        assert_eq!(Round::new("", vec![]), Err(RoundError::EmptyWord));
        assert_eq!(
            Round::new("ab", vec![Position::new(0, 0)]),
            Err(RoundError::LengthMismatch {
                letters: 2,
                positions: 1
            })
        );
        assert_eq!(
            Round::new("ab", vec![Position::new(0, 0), Position::new(0, 0)]),
            Err(RoundError::DuplicatePosition(Position::new(0, 0)))
        );
        assert_eq!(
            Round::new("ab", vec![Position::new(0, 0), Position::new(15, 0)]),
            Err(RoundError::OutOfBounds(Position::new(15, 0)))
        );
        assert_eq!(
            Round::new("ab", vec![Position::new(0, 0), HINT_BUTTON_POSITION]),
            Err(RoundError::HintButtonCollision(HINT_BUTTON_POSITION))
        );
        assert_eq!(
            Round::new("a1", vec![Position::new(0, 0), Position::new(1, 0)]),
            Err(RoundError::InvalidCharacter { ch: '1' })
        );
    }

    #[test]
    fn test_new_rejects_multibyte_letters() {
        let positions = vec![Position::new(0, 0), Position::new(1, 0)];
        assert_eq!(
            Round::new("éa", positions.clone()),
            Err(RoundError::InvalidCharacter { ch: 'é' })
        );
        assert!(Round::new("ea", positions).is_ok());
    }

    #[test]
    fn test_regenerate_reuses_round() {
        let mut rng = SimpleRng::new(9);
        let mut round = cats();
        round.advance();
        round.regenerate("fleabag", &mut rng);
        assert_eq!(round.word(), "fleabag");
        assert_eq!(round.positions().len(), 7);
        assert_eq!(round.next_position(), round.positions().first().copied());
    }

    #[test]
    fn test_new_lowercases_word() {
        let round = Round::new("Hi", vec![Position::new(0, 0), Position::new(1, 0)]).unwrap();
        assert_eq!(round.word(), "hi");
    }

    #[test]
    fn test_scatter_rejects_duplicates_and_hint_button() {
        // Draws: (2,3) accepted, (2,3) duplicate, (14,10) hint button, (5,6) accepted.
        let mut rng = ScriptedRng::new(vec![2, 3, 2, 3, 14, 10, 5, 6]);
        let mut out = Vec::new();
        scatter_positions(2, &mut rng, &mut out);
        assert_eq!(out, vec![Position::new(2, 3), Position::new(5, 6)]);
        assert_eq!(rng.draws(), 8);
    }

    #[test]
    fn test_generated_rounds_hold_invariants() {
        let mut rng = SimpleRng::new(4242);
        for word in ["a", "cats", "fleabag", "carrington"] {
            for _ in 0..50 {
                let mut round = Round::empty();
                round.regenerate(word, &mut rng);
                assert_eq!(round.word(), word);
                assert_eq!(round.positions().len(), word.len());
                for (i, p) in round.positions().iter().enumerate() {
                    assert!(p.in_grid());
                    assert_ne!(*p, HINT_BUTTON_POSITION);
                    assert!(!round.positions()[..i].contains(p));
                }
            }
        }
    }

    #[test]
    fn test_scatter_can_fill_the_whole_board() {
        let mut rng = SimpleRng::new(1);
        let mut out = Vec::new();
        scatter_positions(MAX_WORD_LEN, &mut rng, &mut out);
        assert_eq!(out.len(), MAX_WORD_LEN);
        assert!(!out.contains(&HINT_BUTTON_POSITION));
    }

    #[test]
    fn test_clear_empties_round() {
        let mut round = cats();
        round.advance();
        round.clear();
        assert!(round.is_empty());
        assert_eq!(round.word(), "");
        assert!(round.positions().is_empty());
    }
}
