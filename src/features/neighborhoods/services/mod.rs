mod neighborhood_service;

pub use neighborhood_service::NeighborhoodService;
