//! Substring search over cleared article text.
//!
//! Hits are byte ranges into the string that was searched, normally the
//! output of [`crate::clear`]. [`group_by_bounds`] buckets them per
//! element using [`crate::Document::plain_bounds`].

/// Start offsets of every occurrence of `needle` in `haystack`, overlapping
/// occurrences included. An empty needle or haystack finds nothing.
pub fn indexes_of(haystack: &str, needle: &str, ignore_case: bool) -> Vec<usize> {
    find_all(haystack, needle, ignore_case)
        .into_iter()
        .map(|(start, _)| start)
        .collect()
}

/// Case-insensitive hits of `query` as `(start, end)` byte ranges.
pub fn search(haystack: &str, query: &str) -> Vec<(usize, usize)> {
    find_all(haystack, query, true)
}

/// For each `(lo, hi)` bound, the results lying entirely inside it.
pub fn group_by_bounds(
    results: &[(usize, usize)],
    bounds: &[(usize, usize)],
) -> Vec<Vec<(usize, usize)>> {
    bounds
        .iter()
        .map(|&(lo, hi)| {
            results
                .iter()
                .copied()
                .filter(|&(start, end)| (lo..=hi).contains(&start) && (lo..=hi).contains(&end))
                .collect()
        })
        .collect()
}

fn find_all(haystack: &str, needle: &str, ignore_case: bool) -> Vec<(usize, usize)> {
    if needle.is_empty() || haystack.is_empty() {
        return Vec::new();
    }
    haystack
        .char_indices()
        .filter_map(|(start, _)| {
            match_len(&haystack[start..], needle, ignore_case).map(|len| (start, start + len))
        })
        .collect()
}

/// Byte length of the prefix of `hay` matching `needle`, if it matches.
///
/// Compares char by char so a case-folded match may span a different
/// number of bytes than `needle`.
fn match_len(hay: &str, needle: &str, ignore_case: bool) -> Option<usize> {
    let mut chars = hay.char_indices();
    for n in needle.chars() {
        let (_, h) = chars.next()?;
        let same = if ignore_case {
            h == n || h.to_lowercase().eq(n.to_lowercase())
        } else {
            h == n
        };
        if !same {
            return None;
        }
    }
    Some(chars.offset())
}
