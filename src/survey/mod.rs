//! Instrument data: questions, answer tables, the aggregation hierarchy,
//! and tier recommendations.

pub mod answers;
pub mod hierarchy;
pub mod questions;
pub mod recommend;
