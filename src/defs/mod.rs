//! Shared data model of the criteria evaluation core.

pub mod criteria;
pub mod facts;
pub mod gene;
pub mod pvs1;
pub mod variant;
