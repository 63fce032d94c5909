// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod breaks;
mod error;
mod optimize;
mod stats;
mod strategy;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocator::{Allocation, Allocator, AllocatorState, Commitment};
pub use breaks::{
    Break, BreakCategory, BreakLengthBounds, DEFAULT_LONG_WEEKEND_MAX, DEFAULT_MINI_BREAK_MAX,
    DEFAULT_WEEK_LONG_MAX, MIN_BREAK_LENGTH, count_extended_weekends, find_breaks,
    find_breaks_with, mark_breaks,
};
pub use error::CoreError;
pub use optimize::{OptimizationParams, OptimizationResult, optimize};
pub use stats::{OptimizationStats, aggregate};
pub use strategy::{OptimizationStrategy, Scorer, StrategyWeights, score};
