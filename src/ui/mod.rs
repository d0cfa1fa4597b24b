pub mod mvi;
pub mod planner;
pub mod provider;
