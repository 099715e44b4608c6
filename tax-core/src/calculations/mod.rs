//! Shared arithmetic for form line computations.
//!
//! This module provides the aggregation, capping, rounding, and bracket tax
//! helpers every jurisdiction's forms are written in terms of.

pub mod brackets;
pub mod common;

pub use brackets::{bracket_tax, progressive_tax};
pub use common::{cap, max, not_less_than_zero, round_half_up, round_to_dollar, sum, sum_present};
