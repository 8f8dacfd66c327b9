pub mod csv_models;
pub mod depreciation;
pub mod identifiers;
pub mod parameters;
pub mod report;
pub mod truck;
