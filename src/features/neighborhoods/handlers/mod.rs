mod neighborhood_handler;

pub use neighborhood_handler::*;
