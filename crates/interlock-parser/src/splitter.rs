//! Substring-location primitives
//!
//! The condition grammar is decomposed by locating delimiters from the right
//! instead of tokenizing. These helpers do the locating; all offsets are byte
//! offsets into the slice they were given.

/// Result of splitting at a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSplit<'a> {
    pub before: &'a str,
    pub after: &'a str,
    /// Byte offset of the token
    pub token_at: usize,
    /// Byte offset of `after`
    pub after_at: usize,
}

/// Result of splitting around an opener/closer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSplit<'a> {
    pub before: &'a str,
    pub between: &'a str,
    pub after: &'a str,
    /// Byte offset of the opener
    pub open_at: usize,
    /// Byte offset of `between`
    pub between_at: usize,
    /// Byte offset of the closer
    pub close_at: usize,
    /// Byte offset of `after`
    pub after_at: usize,
}

impl<'a> PairSplit<'a> {
    fn new(input: &'a str, open_at: usize, open_len: usize, close_at: usize, close_len: usize) -> Self {
        let between_at = open_at + open_len;
        let after_at = close_at + close_len;
        Self {
            before: &input[..open_at],
            between: &input[between_at..close_at],
            after: &input[after_at..],
            open_at,
            between_at,
            close_at,
            after_at,
        }
    }
}

/// Return the candidate whose last occurrence lies furthest right
///
/// Candidates found at the same offset resolve to the first listed one.
pub fn rightmost_delimiter<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let mut best: Option<(usize, &'c str)> = None;

    for &candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if let Some(pos) = input.rfind(candidate) {
            if best.map_or(true, |(best_pos, _)| pos > best_pos) {
                best = Some((pos, candidate));
            }
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// Count contiguous repetitions of `token` ending at its last occurrence
///
/// `"a]]]"` with `"]"` gives 3. Returns 0 when `token` does not occur.
pub fn trailing_repeat_count(input: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    let Some(mut start) = input.rfind(token) else {
        return 0;
    };

    let mut count = 1;
    while input[..start].ends_with(token) {
        start -= token.len();
        count += 1;
    }
    count
}

/// Split at the last occurrence of `token`
pub fn split_at_last_token<'a>(input: &'a str, token: &str) -> Option<TokenSplit<'a>> {
    if token.is_empty() {
        return None;
    }
    let token_at = input.rfind(token)?;
    let after_at = token_at + token.len();

    Some(TokenSplit {
        before: &input[..token_at],
        after: &input[after_at..],
        token_at,
        after_at,
    })
}

/// Split around the last `close` and the nearest `open` to its left
///
/// This is positional, not balanced matching: the opener is the last
/// occurrence of `open` that ends at or before the closer starts. Returns
/// `None` when either side is missing.
pub fn split_between_last_pair<'a>(input: &'a str, open: &str, close: &str) -> Option<PairSplit<'a>> {
    if open.is_empty() || close.is_empty() {
        return None;
    }
    let close_at = input.rfind(close)?;
    let open_at = input[..close_at].rfind(open)?;

    Some(PairSplit::new(input, open_at, open.len(), close_at, close.len()))
}

/// Split around the last run of `n` closers and a run of exactly `n` openers
///
/// Repeated brackets encode depth (`[[..]]` is depth 2), so a run of `n`
/// openers only pairs with a run of `n` closers. The opener is the rightmost
/// maximal run of exactly `n` `open_unit`s before the closer; longer or
/// shorter runs are skipped.
pub fn split_between_last_run<'a>(
    input: &'a str,
    open_unit: &str,
    close_unit: &str,
    n: usize,
) -> Option<PairSplit<'a>> {
    if n == 0 || open_unit.is_empty() || close_unit.is_empty() {
        return None;
    }
    let open = open_unit.repeat(n);
    let close = close_unit.repeat(n);

    let close_at = input.rfind(&close)?;
    let head = &input[..close_at];

    let mut search_end = head.len();
    while let Some(pos) = head[..search_end].rfind(&open) {
        let mut run_start = pos;
        while head[..run_start].ends_with(open_unit) {
            run_start -= open_unit.len();
        }
        let mut run_end = pos + open.len();
        while head[run_end..].starts_with(open_unit) {
            run_end += open_unit.len();
        }

        if run_end - run_start == open.len() {
            return Some(PairSplit::new(input, pos, open.len(), close_at, close.len()));
        }
        search_end = run_start;
    }

    None
}

/// Split on every occurrence of `separator`, keeping each segment's offset
pub fn segments<'a>(input: &'a str, separator: &str) -> Vec<(usize, &'a str)> {
    let mut result = Vec::new();
    let mut offset = 0;
    for segment in input.split(separator) {
        result.push((offset, segment));
        offset += segment.len() + separator.len();
    }
    result
}

/// Remove `open` from the front and `close` from the back, if both are there
pub fn strip_wrapping<'a>(input: &'a str, open: &str, close: &str) -> Option<&'a str> {
    input.strip_prefix(open)?.strip_suffix(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rightmost_delimiter() {
        assert_eq!(rightmost_delimiter("A}B]C", &["}", "]", "但"]), Some("]"));
        assert_eq!(rightmost_delimiter("A]B但C}D", &["}", "]", "但"]), Some("}"));
        assert_eq!(rightmost_delimiter("A但B", &["}", "]", "但"]), Some("但"));
        assert_eq!(rightmost_delimiter("AB", &["}", "]", "但"]), None);
    }

    #[test]
    fn test_rightmost_delimiter_tie_prefers_first() {
        assert_eq!(rightmost_delimiter("xab", &["ab", "a"]), Some("ab"));
        assert_eq!(rightmost_delimiter("xab", &["a", "ab"]), Some("a"));
    }

    #[test]
    fn test_trailing_repeat_count() {
        assert_eq!(trailing_repeat_count("X]]]", "]"), 3);
        assert_eq!(trailing_repeat_count("X]]Y]", "]"), 1);
        assert_eq!(trailing_repeat_count("(A)((B))", "("), 2);
        assert_eq!(trailing_repeat_count("ABC", "]"), 0);
    }

    #[test]
    fn test_split_at_last_token() {
        let split = split_at_last_token("A但B但C", "但").unwrap();
        assert_eq!(split.before, "A但B");
        assert_eq!(split.after, "C");
        assert_eq!(split.token_at, "A但B".len());
        assert!(split_at_last_token("ABC", "但").is_none());
    }

    #[test]
    fn test_split_between_last_pair() {
        let split = split_between_last_pair("A{B}C", "{", "}").unwrap();
        assert_eq!((split.before, split.between, split.after), ("A", "B", "C"));
        assert_eq!(split.open_at, 1);
        assert_eq!(split.between_at, 2);
        assert_eq!(split.close_at, 3);
        assert_eq!(split.after_at, 4);

        assert!(split_between_last_pair("AB}C", "{", "}").is_none());
        assert!(split_between_last_pair("A}B{", "{", "}").is_none());
    }

    #[test]
    fn test_split_between_last_pair_is_positional() {
        // Nearest opener wins, not the balanced one.
        let split = split_between_last_pair("<A<B>C>", "<", ">").unwrap();
        assert_eq!((split.before, split.between, split.after), ("<A", "B>C", ""));
    }

    #[test]
    fn test_split_between_last_run_skips_other_depths() {
        let split = split_between_last_run("X[Y[[Z]]W]V", "[", "]", 1).unwrap();
        assert_eq!((split.before, split.between, split.after), ("X", "Y[[Z]]W", "V"));

        let split = split_between_last_run("Y[[Z]]W", "[", "]", 2).unwrap();
        assert_eq!((split.before, split.between, split.after), ("Y", "Z", "W"));

        assert!(split_between_last_run("X[B[A]]", "[", "]", 2).is_none());
    }

    #[test]
    fn test_segments_offsets() {
        let parts = segments("A又はBB又はC", "又は");
        assert_eq!(parts, vec![(0, "A"), (7, "BB"), (15, "C")]);
    }

    #[test]
    fn test_strip_wrapping() {
        assert_eq!(strip_wrapping("((P2))", "((", "))"), Some("P2"));
        assert_eq!(strip_wrapping("(P1)", "((", "))"), None);
        assert_eq!(strip_wrapping("(P1)", "(", ")"), Some("P1"));
    }
}
