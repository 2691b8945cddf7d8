//! Error types for position decoding and move parsing.

use std::fmt;

use super::Color;

/// Error type for FEN decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewFields { found: usize },
    /// Placement field does not have 8 ranks
    InvalidRankCount { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Empty-square count is 0, above 8, or follows another count
    InvalidEmptyCount { rank: usize, char: char },
    /// A rank does not describe exactly 8 files
    BadRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove or fullmove field is not a number
    InvalidClock { found: String },
    /// A side has no king
    MissingKing { color: Color },
    /// A side has more than one king
    TooManyKings { color: Color },
    /// A pawn stands on the first or eighth rank
    PawnOnBackRank { square: String },
    /// The side that just moved is left in check
    OpponentInCheck,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidEmptyCount { rank, char } => {
                write!(f, "Invalid empty-square count '{char}' on rank {rank}")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
            FenError::MissingKing { color } => write!(f, "No {color} king on the board"),
            FenError::TooManyKings { color } => write!(f, "More than one {color} king"),
            FenError::PawnOnBackRank { square } => write!(f, "Pawn on back rank at {square}"),
            FenError::OpponentInCheck => {
                write!(f, "Side not to move is in check")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for coordinate move parsing (`e2e4`, `e7e8q`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be 4 or 5 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare(SquareError),
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare(err) => write!(f, "{err}"),
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        MoveParseError::InvalidSquare(err)
    }
}

/// Error type for resolving a move label such as `Nbd2` or `O-O`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty input
    Empty,
    /// No legal move carries this label
    NoMatchingMove { name: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty move name"),
            SanError::NoMatchingMove { name } => write!(f, "No legal move named '{name}'"),
        }
    }
}

impl std::error::Error for SanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_too_few_fields() {
        let err = FenError::TooFewFields { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_missing_king_names_color() {
        let err = FenError::MissingKing {
            color: Color::Black,
        };
        assert_eq!(err.to_string(), "No black king on the board");
    }

    #[test]
    fn test_move_parse_error_wraps_square_error() {
        let err: MoveParseError = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'z9'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_san_error_display() {
        let err = SanError::NoMatchingMove {
            name: "Qh9".to_string(),
        };
        assert!(err.to_string().contains("'Qh9'"));
    }
}
