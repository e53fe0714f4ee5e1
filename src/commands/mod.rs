//! Command implementations

pub mod simple;
pub mod solve;
pub mod sources;
pub mod survey;

pub use simple::run_simple;
pub use solve::{SolveReport, solve_puzzle};
pub use sources::GameSources;
pub use survey::{SurveyReport, run_survey};
