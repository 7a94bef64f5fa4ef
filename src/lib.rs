pub mod alpha_beta_searcher;
pub mod board;
pub mod game;
pub mod input_handler;
pub mod tictactoe_search;
