// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The scorer is a ladder. Cheap, confident strategies run first and
//! short-circuit (an identical title is 1.0, a title prefix is 0.9). Only
//! documents the cheap strategies can't place fall through to word-order,
//! jargon, abbreviation, synonym, phonetic and semantic matching. Every score
//! is clamped into `[0, 1]`.

mod core;
mod strategies;
pub mod ranking;

pub use self::core::*;
pub use strategies::StrategyHit;
