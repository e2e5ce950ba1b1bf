//! Pattern tables for line evaluation
//!
//! Patterns are written from one side's point of view: `1` own stone, `0`
//! empty, `-1` opponent stone or blocked end. Each table is compiled into a
//! dense array indexed by the base-3 encoding of the pattern, so lookups are a
//! single index and anything not listed scores 0.

/// Pattern scores and the bounds built on them
pub struct PatternScore;

impl PatternScore {
    /// Open four: `_OOOO_`
    pub const OPEN_FOUR: i32 = 100;
    /// Semi-open four, open three, split four
    pub const FOUR: i32 = 50;
    /// Closed or broken three, open two
    pub const THREE: i32 = 25;

    /// Line already holds a forced win (positive for Player One)
    pub const FORCED_WIN: i32 = 10_000;

    /// Alpha-beta sentinel returned by pruned nodes. Outside the range of any
    /// single line score.
    pub const PRUNE_BOUND: i32 = 100_000;
}

/// Six-cell window patterns
pub const SIX_CELL_PATTERNS: [([i8; 6], i32); 18] = [
    ([-1, 1, 1, 1, 1, 0], PatternScore::FOUR),
    ([-1, 0, 1, 1, 1, 0], PatternScore::FOUR),
    ([-1, 0, 1, 1, 0, 0], PatternScore::THREE),
    ([-1, 1, 1, 1, 0, 0], PatternScore::THREE),
    ([-1, 1, 1, 0, 1, 0], PatternScore::THREE),
    ([-1, 1, 0, 1, 1, 0], PatternScore::THREE),
    ([0, 1, 1, 1, 1, 0], PatternScore::OPEN_FOUR),
    ([0, 0, 1, 1, 1, 0], PatternScore::FOUR),
    ([0, 1, 1, 1, 0, 0], PatternScore::FOUR),
    ([0, 1, 1, 0, 1, 0], PatternScore::FOUR),
    ([0, 1, 0, 1, 1, 0], PatternScore::FOUR),
    ([0, 0, 1, 1, 0, 0], PatternScore::THREE),
    ([0, 1, 1, 1, 1, -1], PatternScore::FOUR),
    ([0, 1, 1, 1, 0, -1], PatternScore::FOUR),
    ([0, 0, 1, 1, 0, -1], PatternScore::THREE),
    ([0, 0, 1, 1, 1, -1], PatternScore::THREE),
    ([0, 1, 0, 1, 1, -1], PatternScore::THREE),
    ([0, 1, 1, 0, 1, -1], PatternScore::THREE),
];

/// Split fours the six-cell table does not express
pub const FIVE_CELL_PATTERNS: [([i8; 5], i32); 3] = [
    ([1, 1, 0, 1, 1], PatternScore::FOUR),
    ([1, 0, 1, 1, 1], PatternScore::FOUR),
    ([1, 1, 1, 0, 1], PatternScore::FOUR),
];

const SIX_TABLE_LEN: usize = 729; // 3^6
const FIVE_TABLE_LEN: usize = 243; // 3^5

const fn encode(cells: &[i8]) -> usize {
    let mut code = 0;
    let mut i = 0;
    while i < cells.len() {
        code = code * 3 + (cells[i] + 1) as usize;
        i += 1;
    }
    code
}

const fn build_six_table() -> [i32; SIX_TABLE_LEN] {
    let mut table = [0; SIX_TABLE_LEN];
    let mut i = 0;
    while i < SIX_CELL_PATTERNS.len() {
        let (pattern, score) = SIX_CELL_PATTERNS[i];
        table[encode(&pattern)] = score;
        i += 1;
    }
    table
}

const fn build_five_table() -> [i32; FIVE_TABLE_LEN] {
    let mut table = [0; FIVE_TABLE_LEN];
    let mut i = 0;
    while i < FIVE_CELL_PATTERNS.len() {
        let (pattern, score) = FIVE_CELL_PATTERNS[i];
        table[encode(&pattern)] = score;
        i += 1;
    }
    table
}

static SIX_TABLE: [i32; SIX_TABLE_LEN] = build_six_table();
static FIVE_TABLE: [i32; FIVE_TABLE_LEN] = build_five_table();

#[inline]
fn is_normalized(window: &[i8]) -> bool {
    window.iter().all(|&v| (-1..=1).contains(&v))
}

/// Score of a six-cell window, 0 if the pattern is not listed
#[inline]
pub fn six_cell_score(window: &[i8]) -> i32 {
    if window.len() != 6 || !is_normalized(window) {
        return 0;
    }
    SIX_TABLE[encode(window)]
}

/// Score of a five-cell window, 0 if the pattern is not listed
#[inline]
pub fn five_cell_score(window: &[i8]) -> i32 {
    if window.len() != 5 || !is_normalized(window) {
        return 0;
    }
    FIVE_TABLE[encode(window)]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest number of empty cells that must be filled to make a
    /// contiguous run of five own stones inside the window, if possible.
    fn fills_to_five(window: &[i8]) -> Option<usize> {
        window
            .windows(5)
            .filter(|run| run.iter().all(|&v| v >= 0))
            .map(|run| run.iter().filter(|&&v| v == 0).count())
            .min()
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::PRUNE_BOUND > PatternScore::FORCED_WIN);
        assert!(PatternScore::FORCED_WIN > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::FOUR);
        assert!(PatternScore::FOUR > PatternScore::THREE);
    }

    #[test]
    fn test_listed_patterns_found() {
        for (pattern, score) in SIX_CELL_PATTERNS {
            assert_eq!(six_cell_score(&pattern), score, "{pattern:?}");
        }
        for (pattern, score) in FIVE_CELL_PATTERNS {
            assert_eq!(five_cell_score(&pattern), score, "{pattern:?}");
        }
    }

    #[test]
    fn test_table_has_no_extra_entries() {
        assert_eq!(SIX_TABLE.iter().filter(|&&s| s != 0).count(), SIX_CELL_PATTERNS.len());
        assert_eq!(FIVE_TABLE.iter().filter(|&&s| s != 0).count(), FIVE_CELL_PATTERNS.len());
    }

    #[test]
    fn test_unlisted_pattern_scores_zero() {
        assert_eq!(six_cell_score(&[0, 0, 0, 0, 0, 0]), 0);
        assert_eq!(six_cell_score(&[1, 1, 1, 1, 1, 1]), 0);
        assert_eq!(six_cell_score(&[-1, 1, 1, 1, 1, -1]), 0);
        assert_eq!(five_cell_score(&[1, 1, 1, 1, 0]), 0);
    }

    #[test]
    fn test_unnormalized_input_scores_zero() {
        assert_eq!(six_cell_score(&[2, 1, 1, 1, 1, 0]), 0);
        assert_eq!(six_cell_score(&[0, 1, 1, 1, 1]), 0);
    }

    #[test]
    fn test_only_open_four_scores_open_four() {
        let open: Vec<_> = SIX_CELL_PATTERNS
            .iter()
            .filter(|(_, score)| *score == PatternScore::OPEN_FOUR)
            .collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].0, [0, 1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_strong_patterns_can_complete_five() {
        // Any pattern able to saturate a line score must be at most two
        // placements away from a real five inside its own window.
        for (pattern, score) in SIX_CELL_PATTERNS {
            if score >= PatternScore::FOUR {
                let fills = fills_to_five(&pattern);
                assert!(
                    matches!(fills, Some(n) if n <= 2),
                    "{pattern:?} scores {score} but needs {fills:?} fills"
                );
            }
        }
        for (pattern, _) in FIVE_CELL_PATTERNS {
            assert_eq!(fills_to_five(&pattern), Some(1), "{pattern:?}");
        }
    }

    #[test]
    fn test_open_four_has_two_completions() {
        let pattern = [0i8, 1, 1, 1, 1, 0];
        let completions = (0..6)
            .filter(|&i| pattern[i] == 0)
            .filter(|&i| {
                let mut filled = pattern;
                filled[i] = 1;
                fills_to_five(&filled) == Some(0)
            })
            .count();
        assert_eq!(completions, 2);
    }

    #[test]
    fn test_patterns_never_match_both_sides() {
        for (pattern, _) in SIX_CELL_PATTERNS {
            let flipped: Vec<i8> = pattern.iter().map(|v| -v).collect();
            assert_eq!(six_cell_score(&flipped), 0, "{pattern:?} matches from both sides");
        }
    }
}
