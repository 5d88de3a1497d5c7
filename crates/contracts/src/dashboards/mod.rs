pub mod d100_performance;
