// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Pairwise sequence scores. All functions compare raw bytes, so they work equally on DNA,
// protein, or any other ASCII sequence.

use std::collections::HashSet;

pub const DEFAULT_WINDOW: usize = 5;

/// Levenshtein (edit) distance: a dissimilarity, 0 iff the sequences are equal.
pub fn levenshtein(s1: &[u8], s2: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=s2.len()).collect();
    let mut cur: Vec<usize> = vec![0; s2.len() + 1];

    for (i, &a) in s1.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &b) in s2.iter().enumerate() {
            let subst = prev[j] + usize::from(a != b);
            cur[j + 1] = subst.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[s2.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NwScores {
    pub match_score: f64,
    pub mismatch: f64,
    pub gap: f64,
}

// With these, the score is the length of the longest common subsequence.
impl Default for NwScores {
    fn default() -> Self {
        NwScores {
            match_score: 1.0,
            mismatch: 0.0,
            gap: 0.0,
        }
    }
}

/// Needleman-Wunsch global alignment score (a similarity: higher is closer).
pub fn needleman_wunsch(s1: &[u8], s2: &[u8], scores: &NwScores) -> f64 {
    let mut prev: Vec<f64> = (0..=s2.len()).map(|j| j as f64 * scores.gap).collect();
    let mut cur: Vec<f64> = vec![0.0; s2.len() + 1];

    for &a in s1 {
        cur[0] = prev[0] + scores.gap;
        for (j, &b) in s2.iter().enumerate() {
            let diag = prev[j] + if a == b { scores.match_score } else { scores.mismatch };
            let up = prev[j + 1] + scores.gap;
            let left = cur[j] + scores.gap;
            cur[j + 1] = diag.max(up).max(left);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[s2.len()]
}

fn window_set(s: &[u8], window: usize) -> HashSet<&[u8]> {
    if window == 0 {
        return HashSet::new();
    }
    s.windows(window).collect()
}

/// White similarity (Dice coefficient over distinct `window`-mers), scaled to 0..=100.
pub fn white_similarity(s1: &[u8], s2: &[u8], window: usize) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return 100.0;
    }
    let kmers1 = window_set(s1, window);
    let kmers2 = window_set(s2, window);
    let total = kmers1.len() + kmers2.len();
    if total == 0 {
        // Both shorter than the window.
        return 0.0;
    }
    let shared = kmers2.iter().filter(|kmer| kmers1.contains(*kmer)).count();
    (shared as f64 * 2.0 / total as f64) * 100.0
}

// Longest proper prefix of pattern[..=i] that is also a suffix of it.
fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = table[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        table[i] = k;
    }
    table
}

// Overlapping occurrences of `pattern` in `text`.
fn count_occurrences(pattern: &[u8], text: &[u8]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let table = prefix_table(pattern);
    let mut count = 0;
    let mut k = 0;
    for &c in text {
        while k > 0 && c != pattern[k] {
            k = table[k - 1];
        }
        if c == pattern[k] {
            k += 1;
        }
        if k == pattern.len() {
            count += 1;
            k = table[k - 1];
        }
    }
    count
}

/// Sum, over every `window`-mer of `s1` (repeats included), of its occurrence count in `s2`.
/// Not symmetric.
pub fn kmp_score(s1: &[u8], s2: &[u8], window: usize) -> usize {
    if window == 0 || s1.is_empty() || s2.is_empty() || s1.len() < window {
        return 0;
    }
    s1.windows(window)
        .map(|kmer| count_occurrences(kmer, s2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_levenshtein_kitten() {
        assert_eq!(3, levenshtein(b"kitten", b"sitting"));
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(0, levenshtein(b"", b""));
        assert_eq!(3, levenshtein(b"", b"abc"));
        assert_eq!(4, levenshtein(b"ACGT", b""));
    }

    #[test]
    fn test_levenshtein_symmetric() {
        assert_eq!(
            levenshtein(b"GAATTC", b"GATTACA"),
            levenshtein(b"GATTACA", b"GAATTC")
        );
    }

    #[test]
    fn test_needleman_wunsch_default_is_lcs() {
        let scores = NwScores::default();
        assert_relative_eq!(4.0, needleman_wunsch(b"ACGT", b"ACGT", &scores));
        assert_relative_eq!(3.0, needleman_wunsch(b"ACGT", b"AGT", &scores));
        assert_relative_eq!(0.0, needleman_wunsch(b"", b"AGT", &scores));
    }

    #[test]
    fn test_needleman_wunsch_penalties() {
        let scores = NwScores {
            match_score: 1.0,
            mismatch: -1.0,
            gap: -1.0,
        };
        // A-A, C-gap, G-G, T-T
        assert_relative_eq!(2.0, needleman_wunsch(b"ACGT", b"AGT", &scores));
        // all gaps
        assert_relative_eq!(-3.0, needleman_wunsch(b"", b"AGT", &scores));
    }

    #[test]
    fn test_white_similarity_identical() {
        assert_relative_eq!(100.0, white_similarity(b"AC", b"AC", DEFAULT_WINDOW));
    }

    #[test]
    fn test_white_similarity_partial() {
        // {ACG, CGT, GTA, TAC} vs {ACG, CGT, GTA, TAA, AAA}: 3 shared of 9
        let sim = white_similarity(b"ACGTACGT", b"ACGTAAAA", 3);
        assert_relative_eq!(200.0 / 3.0, sim, epsilon = 1e-9);
    }

    #[test]
    fn test_white_similarity_degenerate() {
        assert_relative_eq!(0.0, white_similarity(b"", b"ACGT", 3));
        // Both shorter than the window
        assert_relative_eq!(0.0, white_similarity(b"AC", b"GT", 5));
        assert_relative_eq!(0.0, white_similarity(b"AAAA", b"CCCC", 2));
    }

    #[test]
    fn test_prefix_table() {
        assert_eq!(vec![0, 0, 1, 2, 0], prefix_table(b"ABABC"));
        assert_eq!(vec![0, 1, 2, 3], prefix_table(b"AAAA"));
    }

    #[test]
    fn test_count_occurrences_overlapping() {
        assert_eq!(3, count_occurrences(b"AAAAA", b"AAAAAAA"));
        assert_eq!(2, count_occurrences(b"ABA", b"ABABA"));
        assert_eq!(0, count_occurrences(b"GATTACA", b"GATTAC"));
    }

    #[test]
    fn test_kmp_score() {
        assert_eq!(6, kmp_score(b"AAAAAA", b"AAAAAAA", 5));
        assert_eq!(0, kmp_score(b"ACG", b"ACGACG", 5));
        assert_eq!(0, kmp_score(b"", b"ACGACG", 1));
        // ACG occurs twice, CGA once, GAC once
        assert_eq!(4, kmp_score(b"ACGAC", b"ACGACG", 3));
    }
}
