//! Client-side ingredient and meal state for a meal-planning app.
//!
//! State lives in a [`ui::provider::GlobalProvider`]; components receive a
//! [`ui::provider::GlobalScope`] and call [`ui::provider::use_global_state`]
//! to read the current snapshot and dispatch [`ui::planner::PlannerIntent`]s.

pub mod config;
pub mod logging;
pub mod script;
pub mod ui;
