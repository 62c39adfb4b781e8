use std::collections::HashMap;

/// Food names are compared trimmed and lowercased everywhere.
pub fn normalize_food_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ratcliff/Obershelp similarity on a 0..=1 scale: twice the characters
/// covered by the matching blocks over the combined length of both names.
///
/// Matching blocks are found by taking the longest common substring and
/// recursing on both sides of it, so the score depends on argument order
/// when several longest substrings exist.
pub fn similarity_ratio(candidate: &str, query: &str) -> f64 {
    let a: Vec<char> = candidate.chars().collect();
    let b: Vec<char> = query.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        positions.entry(*c).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &positions, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }

        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest block shared by `a[alo..ahi]` and `b[blo..bhi]`, earliest in `a`
/// then earliest in `b` among blocks of the same size.
fn longest_match(
    a: &[char],
    positions: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run_lengths[j] = length of the block ending at a[i - 1] and b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_lengths = HashMap::new();

        for &j in positions.get(c).map(Vec::as_slice).unwrap_or_default() {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }

            let size = j
                .checked_sub(1)
                .and_then(|previous| run_lengths.get(&previous))
                .copied()
                .unwrap_or(0)
                + 1;
            next_lengths.insert(j, size);

            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }

        run_lengths = next_lengths;
    }

    (best_i, best_j, best_size)
}
