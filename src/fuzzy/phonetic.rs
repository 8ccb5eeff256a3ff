// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phonetic codes: Soundex and a simplified Metaphone.
//!
//! Soundex is the textbook algorithm. The Metaphone here is a single-pass
//! approximation of Double Metaphone: it handles the common English digraphs
//! and consonant shifts but never diverges into a real secondary code, so
//! primary and secondary are always equal. Treat the exact output as pinned
//! by the fixtures in the tests below, not by the reference algorithm.
//!
//! Only ASCII letters take part. Everything else is skipped, so a word with
//! no letters encodes to empty strings.

use serde::Serialize;

/// Both encodings of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticCodes {
    pub soundex: String,
    /// (primary, secondary)
    pub metaphone: (String, String),
}

impl PhoneticCodes {
    /// Do two words sound alike under both encodings?
    ///
    /// Requiring agreement from both cuts the false positives Soundex alone
    /// produces ("sercah" and "search" share a Soundex code but not a
    /// Metaphone one).
    pub fn sounds_like(&self, other: &PhoneticCodes) -> bool {
        !self.soundex.is_empty()
            && self.soundex == other.soundex
            && self.metaphone.0 == other.metaphone.0
    }
}

/// Compute Soundex and Metaphone codes for a word.
pub fn phonetic_code(word: &str) -> PhoneticCodes {
    let letters = ascii_letters(word);
    let metaphone = metaphone_letters(&letters);
    PhoneticCodes {
        soundex: soundex_letters(&letters),
        metaphone: (metaphone.clone(), metaphone),
    }
}

/// Soundex code: first letter plus three digits, zero-padded.
pub fn soundex(word: &str) -> String {
    soundex_letters(&ascii_letters(word))
}

/// Simplified Metaphone primary code, at most 4 characters.
pub fn metaphone(word: &str) -> String {
    metaphone_letters(&ascii_letters(word))
}

fn ascii_letters(word: &str) -> Vec<char> {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn soundex_digit(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

fn soundex_letters(letters: &[char]) -> String {
    let Some(&first) = letters.first() else {
        return String::new();
    };

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut last = soundex_digit(first);

    for &c in &letters[1..] {
        if code.len() == 4 {
            break;
        }
        match soundex_digit(c) {
            Some(digit) => {
                if last != Some(digit) {
                    code.push(digit);
                }
                last = Some(digit);
            }
            // H and W don't separate same-coded consonants; vowels do.
            None if matches!(c, 'H' | 'W') => {}
            None => last = None,
        }
    }

    while code.len() < 4 {
        code.push('0');
    }
    code
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

fn is_front_vowel(c: Option<char>) -> bool {
    matches!(c, Some('E' | 'I' | 'Y'))
}

fn metaphone_letters(letters: &[char]) -> String {
    let mut code = String::with_capacity(6);
    let n = letters.len();
    let mut i = 0;

    while i < n && code.len() < 4 {
        let c = letters[i];
        let prev = i.checked_sub(1).map(|p| letters[p]);
        let next = letters.get(i + 1).copied();
        let next_is_vowel = next.is_some_and(is_vowel);

        // Doubled letters sound once ("ff", "ll"), except "cc" as in "accent"
        if prev == Some(c) && c != 'C' {
            i += 1;
            continue;
        }

        let mut step = 1;
        match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == 0 {
                    code.push(c);
                }
            }
            'C' => match next {
                Some('H') => {
                    code.push('X');
                    step = 2;
                }
                Some('K') => {
                    code.push('K');
                    step = 2;
                }
                _ if is_front_vowel(next) => code.push('S'),
                _ => code.push('K'),
            },
            'D' => {
                if next == Some('G') {
                    code.push('J');
                    step = 2;
                } else {
                    code.push('T');
                }
            }
            'G' => {
                if next == Some('H') {
                    // "tough" ends in F; "knight" has a silent GH
                    if i + 2 == n {
                        code.push('F');
                    }
                    step = 2;
                } else if is_front_vowel(next) {
                    code.push('J');
                } else {
                    code.push('K');
                }
            }
            'H' => {
                let after_vowel = prev.is_some_and(is_vowel);
                if next_is_vowel && !after_vowel {
                    code.push('H');
                }
            }
            'P' => {
                if next == Some('H') {
                    code.push('F');
                    step = 2;
                } else {
                    code.push('P');
                }
            }
            'S' => {
                if next == Some('H') {
                    code.push('X');
                    step = 2;
                } else {
                    code.push('S');
                }
            }
            'T' => {
                if next == Some('H') {
                    code.push('0');
                    step = 2;
                } else {
                    code.push('T');
                }
            }
            'W' | 'Y' => {
                if next_is_vowel {
                    code.push(c);
                }
            }
            'Q' => code.push('K'),
            'V' => code.push('F'),
            'X' => code.push_str("KS"),
            'Z' => code.push('S'),
            other => code.push(other),
        }
        i += step;
    }

    code.truncate(4);
    code
}
