mod neighborhood;

pub use neighborhood::Neighborhood;
