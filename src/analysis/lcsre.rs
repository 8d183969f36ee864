// ============================================================================
// Longest Repeated Non-overlapping Substring
// Quadratic DP used to spot repeated digit patterns in CSD strings
// ============================================================================

/// Find the longest substring occurring at least twice without overlap.
///
/// Two occurrences count as non-overlapping when their start positions
/// differ by at least the substring's length. Returns the empty string when
/// no character repeats under that constraint.
///
/// `table[i][j]` holds the length of the longest common suffix of the
/// prefixes ending at positions `i` and `j` (1-indexed), zeroed whenever
/// extending the suffix would make the occurrences overlap
/// (`table[i-1][j-1] >= j - i`). Among equal-length candidates the match
/// with the larger ending row index wins.
///
/// The algorithm has no CSD semantics; it applies to any string. It is
/// useful on CSD input because a long repeated digit pattern marks a
/// sub-expression a multiplier implementation can factor out and reuse.
/// Time and space are `O(n²)`, so callers needing bounded latency should
/// cap the input length.
///
/// # Example
/// ```
/// use csdigit::analysis::longest_repeated_substring;
///
/// assert_eq!(longest_repeated_substring("+-00+-00+-00+-0"), "+-00+-0");
/// assert_eq!(longest_repeated_substring("banana"), "an");
/// assert_eq!(longest_repeated_substring("abcdefgh"), "");
/// ```
pub fn longest_repeated_substring(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut table = vec![vec![0usize; n + 1]; n + 1];

    let mut result_length = 0usize;
    let mut end_index = 0usize;

    for i in 1..=n {
        for j in (i + 1)..=n {
            if chars[i - 1] == chars[j - 1] && table[i - 1][j - 1] < (j - i) {
                table[i][j] = table[i - 1][j - 1] + 1;
                if table[i][j] > result_length {
                    result_length = table[i][j];
                    end_index = i.max(end_index);
                }
            } else {
                table[i][j] = 0;
            }
        }
    }

    if result_length > 0 {
        chars[end_index - result_length..end_index].iter().collect()
    } else {
        String::new()
    }
}
