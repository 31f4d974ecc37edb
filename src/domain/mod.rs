// Domain layer - Core data models
pub mod dashboard;
pub mod dataset;
