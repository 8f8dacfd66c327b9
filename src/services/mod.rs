pub mod policies;
pub mod report_service;
pub mod simulation_service;
