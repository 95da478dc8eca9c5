//! Random boards from a bag of letter dice.
//!
//! This is a convenience for callers that want a fresh board; the search engine
//! itself never needs it.

use crate::board::Board;
use crate::config::validate_dimensions;
use crate::errors::BoardError;
use rand::seq::SliceRandom;
use rand::Rng;

/// One six-sided letter die.
pub type Die = [&'static str; 6];

/// The sixteen dice of the classic 4x4 game.
pub const CLASSIC_DICE: [Die; 16] = [
    ["A", "O", "B", "B", "O", "J"],
    ["W", "H", "G", "E", "E", "N"],
    ["N", "R", "N", "Z", "H", "L"],
    ["N", "A", "E", "A", "G", "E"],
    ["D", "I", "Y", "S", "T", "T"],
    ["I", "E", "S", "T", "S", "O"],
    ["A", "O", "T", "T", "W", "O"],
    ["H", "Qu", "U", "M", "N", "I"],
    ["R", "Y", "T", "L", "T", "E"],
    ["P", "O", "H", "C", "S", "A"],
    ["L", "R", "E", "V", "Y", "D"],
    ["E", "X", "L", "D", "I", "R"],
    ["I", "E", "N", "S", "U", "E"],
    ["S", "F", "F", "K", "A", "P"],
    ["I", "O", "T", "M", "U", "C"],
    ["E", "H", "W", "V", "T", "R"],
];

/// A fixed multiset of dice to roll boards from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceBag {
    dice: Vec<Die>,
}

impl DiceBag {
    /// # Panics
    /// Panics if `dice` is empty.
    #[must_use]
    pub fn new(dice: Vec<Die>) -> Self {
        assert!(!dice.is_empty(), "a dice bag needs at least one die");
        Self { dice }
    }

    #[must_use]
    pub fn classic() -> Self {
        Self::new(CLASSIC_DICE.to_vec())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll a `rows` x `cols` board.
    ///
    /// Cells are filled row-major. The bag is shuffled before the first cell and
    /// again each time it runs out, so boards bigger than the bag reuse dice.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] if `rows` or `cols` is zero, or if the board
    /// would have more tiles than `usize` can count.
    pub fn roll<R: Rng + ?Sized>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Board, BoardError> {
        let cell_count = validate_dimensions(rows, cols)?;
        let mut order: Vec<&Die> = self.dice.iter().collect();
        let faces: Vec<&str> = (0..cell_count)
            .map(|i| {
                if i % order.len() == 0 {
                    order.shuffle(&mut *rng);
                }
                let die = order[i % order.len()];
                die[rng.gen_range(0..die.len())]
            })
            .collect();

        Board::new(&faces, rows, cols)
    }
}

impl Default for DiceBag {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::errors::ConfigError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn classic_faces() -> Vec<String> {
        CLASSIC_DICE.iter().flatten().map(|f| f.to_lowercase()).collect()
    }

    #[test]
    fn test_roll_classic_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = DiceBag::classic().roll(4, 4, &mut rng).unwrap();
        assert_eq!(board.cell_count(), 16);
        let faces = classic_faces();
        assert!(board.cells().all(|c| faces.iter().any(|f| f == c.face)));
    }

    #[test]
    fn test_each_die_used_once_per_pass() {
        let bag = DiceBag::new(vec![["A"; 6], ["B"; 6], ["C"; 6], ["D"; 6]]);
        let board = bag.roll(2, 2, &mut StdRng::seed_from_u64(11)).unwrap();
        let mut faces: Vec<&str> = board.cells().map(|c| c.face).collect();
        faces.sort_unstable();
        assert_eq!(faces, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_same_seed_same_board() {
        let bag = DiceBag::classic();
        let a = bag.roll(5, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = bag.roll(5, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bigger_than_bag() {
        let bag = DiceBag::new(vec![["X"; 6], ["Y"; 6]]);
        let board = bag.roll(3, 3, &mut StdRng::seed_from_u64(1)).unwrap();
        // every pair of cells (0,1), (2,3), ... holds one of each die
        let faces: Vec<&str> = board.cells().map(|c| c.face).collect();
        for pair in faces.chunks(2).filter(|c| c.len() == 2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert_eq!(board.face_at(Position::new(2, 2)).len(), 1);
    }

    #[test]
    fn test_zero_dimensions() {
        let err = DiceBag::classic().roll(0, 4, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, BoardError::Config(ConfigError::InvalidDimensions { rows: 0, cols: 4 }));
    }

    #[test]
    fn test_overflowing_dimensions() {
        let huge = 1usize << (usize::BITS - 1);
        let err = DiceBag::classic().roll(huge, 2, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, BoardError::Config(ConfigError::BoardTooLarge { rows: huge, cols: 2 }));
    }
}
