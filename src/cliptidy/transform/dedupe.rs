use std::collections::HashSet;

/// Removes blank and duplicate lines, keeping the first occurrence of each.
///
/// Lines are compared by their trimmed form and the trimmed form is what ends
/// up in the output, so `" a"` and `"a "` collapse into a single `"a"`.
pub fn remove_duplicates(text: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();

    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n")
}
