// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrap matched parts of a title in `<mark>` tags.

use crate::utils::{char_len, find_case_insensitive, tokenize};

const OPEN: &str = "<mark>";
const CLOSE: &str = "</mark>";

/// Highlight `query` inside `title`, or `None` if nothing matches literally.
///
/// The whole query is tried first. If it doesn't occur, each query token of
/// two or more characters is marked on its own. Overlapping ranges merge.
pub fn highlight(title: &str, query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut ranges = find_case_insensitive(title, trimmed);
    if ranges.is_empty() {
        for token in tokenize(trimmed).iter().filter(|t| char_len(t) >= 2) {
            ranges.extend(find_case_insensitive(title, token));
        }
    }
    if ranges.is_empty() {
        return None;
    }

    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(title.len() + merged.len() * (OPEN.len() + CLOSE.len()));
    let mut cursor = 0;
    for (start, end) in merged {
        out.push_str(&title[cursor..start]);
        out.push_str(OPEN);
        out.push_str(&title[start..end]);
        out.push_str(CLOSE);
        cursor = end;
    }
    out.push_str(&title[cursor..]);
    Some(out)
}
