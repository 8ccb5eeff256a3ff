// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String metrics: how "close" two strings are.
//!
//! Three families live here. Edit distance for typos ("sercah" vs "search"),
//! character n-grams for partial overlap that edit distance punishes too hard,
//! and phonetic codes for words that are spelled differently but sound alike.
//! Everything is a pure function over `&str`.

mod levenshtein;
mod ngram;
mod phonetic;

pub use levenshtein::*;
pub use ngram::*;
pub use phonetic::*;
