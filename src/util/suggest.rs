/// Computes the Levenshtein distance between two strings.
///
/// Insertions, removals and replacements all cost one. The computation keeps a
/// single row of the distance table.
///
/// ## Example
/// ```
/// use tally::util::suggest::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let replace = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = replace.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

/// Finds the candidates closest to `word`.
///
/// An exact match is returned as is. Otherwise every candidate at the minimum
/// distance is returned, sorted and joined with `", "`. Returns `None` for an
/// empty candidate list.
///
/// ## Example
/// ```
/// use tally::util::suggest::closest_match;
///
/// let words = ["cherry", "peach", "pineapple", "melon", "strawberry"];
/// assert_eq!(closest_match("berry", words).as_deref(), Some("cherry"));
/// assert_eq!(closest_match("melon", words).as_deref(), Some("melon"));
/// ```
pub fn closest_match<'a, I>(word: &str, candidates: I) -> Option<String>
    where I: IntoIterator<Item = &'a str>
{
    closest_match_within(word, candidates, usize::MAX)
}

/// Like [`closest_match`], but ignores candidates further than `max_distance`
/// edits away.
pub fn closest_match_within<'a, I>(word: &str, candidates: I, max_distance: usize) -> Option<String>
    where I: IntoIterator<Item = &'a str>
{
    let mut best = max_distance;
    let mut matches: Vec<&str> = Vec::new();

    for candidate in candidates {
        let distance = levenshtein(word, candidate);
        if distance == 0 {
            return Some(candidate.to_owned());
        }
        if distance < best {
            best = distance;
            matches.clear();
        }
        if distance == best {
            matches.push(candidate);
        }
    }

    if matches.is_empty() {
        return None;
    }
    matches.sort_unstable();
    matches.dedup();
    Some(matches.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_equal() {
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("lawn", "flaw"), 2);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn ties_are_all_reported() {
        let words = ["stars", "mars", "wars", "codec", "codewars"];
        assert_eq!(closest_match("coddwars", words).as_deref(), Some("codewars"));
        assert_eq!(closest_match("bars", ["mars", "wars"]).as_deref(), Some("mars, wars"));
    }

    #[test]
    fn spelling_corrections() {
        let words = ["javascript", "java", "ruby", "php", "python", "coffeescript"];
        assert_eq!(closest_match("heaven", words).as_deref(), Some("java"));
        assert_eq!(closest_match("javascript", words).as_deref(), Some("javascript"));
        assert_eq!(closest_match("pyhthon", words).as_deref(), Some("python"));
    }

    #[test]
    fn no_candidates_means_no_match() {
        assert_eq!(closest_match("x", std::iter::empty()), None);
    }

    #[test]
    fn distance_limit_filters_candidates() {
        assert_eq!(closest_match_within("x", ["velocity"], 2), None);
        assert_eq!(closest_match_within("velocty", ["velocity"], 2).as_deref(),
                   Some("velocity"));
    }
}
