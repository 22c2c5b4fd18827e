mod safety_handler;

pub use safety_handler::*;
