pub mod errors;
pub mod milestones;
