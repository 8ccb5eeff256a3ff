// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. The scorer knows how good one document is;
//! the engine decides which documents to ask about, in what order, when to
//! stop, and what to try when nothing matches.

pub mod dedup;
mod engine;
pub mod highlight;
pub mod typo;

pub use engine::{smart_options, SearchEngine, FAST_PATH_LEN};
