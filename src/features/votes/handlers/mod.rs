mod vote_handler;

pub use vote_handler::*;
