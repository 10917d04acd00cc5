use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use chess::{Piece, NUM_PIECES};

pub mod score_tables;

pub const PAWN_COST: Centipawns = Centipawns(100);
pub const KNIGHT_COST: Centipawns = Centipawns(320);
pub const BISHOP_COST: Centipawns = Centipawns(330);
pub const ROOK_COST: Centipawns = Centipawns(500);
pub const QUEEN_COST: Centipawns = Centipawns(900);
pub const KING_COST: Centipawns = Centipawns(20_000);

// Corresponds to Chess::ALL_PIECES
pub const PIECE_EVALUATIONS: [Centipawns; NUM_PIECES] = [
    PAWN_COST,
    KNIGHT_COST,
    BISHOP_COST,
    ROOK_COST,
    QUEEN_COST,
    KING_COST,
];

#[inline]
pub fn piece_value(piece: Piece) -> Centipawns {
    PIECE_EVALUATIONS[piece.to_index()]
}

/// Used for board evaluation, scored in 100ths of a pawn.
/// Positive evaluations mean White is estimated to be ahead.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
pub struct Centipawns(pub i32);

impl Centipawns {
    /// Search bound standing in for +∞. No reachable evaluation comes close.
    pub const INFINITY: Centipawns = Centipawns(i32::MAX);
    /// Search bound standing in for -∞. Kept symmetric so negation can't overflow.
    pub const NEG_INFINITY: Centipawns = Centipawns(-i32::MAX);
    pub const ZERO: Centipawns = Centipawns(0);

    pub const fn new(val: i32) -> Centipawns {
        Centipawns(val)
    }
}

impl Neg for Centipawns {
    type Output = Centipawns;

    fn neg(self) -> Self::Output {
        Centipawns::new(-self.0)
    }
}

impl Add for Centipawns {
    type Output = Centipawns;

    fn add(self, rhs: Self) -> Self::Output {
        Centipawns(self.0 + rhs.0)
    }
}

impl AddAssign for Centipawns {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Centipawns {
    type Output = Centipawns;

    fn sub(self, rhs: Self) -> Self::Output {
        Centipawns(self.0 - rhs.0)
    }
}

impl SubAssign for Centipawns {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Display for Centipawns {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::INFINITY => write!(f, "+inf"),
            Self::NEG_INFINITY => write!(f, "-inf"),
            Centipawns(x) if x > 0 => write!(f, "+{}", x),
            Centipawns(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use chess::Piece;
    use super::{piece_value, Centipawns, KING_COST};

    #[test]
    fn check_infinity_negates() {
        assert_eq!(-Centipawns::INFINITY, Centipawns::NEG_INFINITY);
        assert_eq!(-Centipawns::NEG_INFINITY, Centipawns::INFINITY);
    }

    #[test]
    fn check_piece_values() {
        assert_eq!(piece_value(Piece::Pawn), Centipawns::new(100));
        assert_eq!(piece_value(Piece::Bishop), Centipawns::new(330));
        assert_eq!(piece_value(Piece::King), KING_COST);
    }

    #[test]
    fn check_display() {
        assert_eq!(Centipawns::new(35).to_string(), "+35");
        assert_eq!(Centipawns::new(-120).to_string(), "-120");
        assert_eq!(Centipawns::INFINITY.to_string(), "+inf");
    }
}
