/// Approximate match score of a query against an indexed token.
/// Lower is closer, `None` means no match at all.
pub trait FuzzyRanker: Send + Sync {
    fn rank(&self, query: &str, candidate: &str) -> Option<u32>;
}

/// The query must appear in the candidate as an in-order subsequence of
/// characters. The score counts candidate characters left unmatched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsequenceRanker;

impl FuzzyRanker for SubsequenceRanker {
    fn rank(&self, query: &str, candidate: &str) -> Option<u32> {
        if candidate.len() < query.len() {
            return None;
        }
        if query == candidate {
            return Some(0);
        }

        let mut remaining = candidate.chars();
        let mut skipped = 0u32;

        'query: for wanted in query.chars() {
            for c in remaining.by_ref() {
                if c == wanted {
                    continue 'query;
                }
                skipped += 1;
            }
            return None;
        }

        Some(skipped + remaining.count() as u32)
    }
}

/// Levenshtein distance between query and candidate, optionally counting an
/// adjacent transposition (teh -> the) as one edit
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceRanker {
    pub transpositions: bool,
}

impl Default for EditDistanceRanker {
    fn default() -> Self {
        EditDistanceRanker { transpositions: true }
    }
}

impl EditDistanceRanker {
    pub fn new(transpositions: bool) -> Self {
        EditDistanceRanker { transpositions }
    }

    pub fn edit_distance(&self, a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let len_a = a.len();
        let len_b = b.len();

        if len_a == 0 {
            return len_b;
        }
        if len_b == 0 {
            return len_a;
        }

        // three rows: the transposition case looks two rows back
        let mut before_prev: Vec<usize> = vec![0; len_b + 1];
        let mut prev_row: Vec<usize> = (0..=len_b).collect();
        let mut curr_row = vec![0; len_b + 1];

        for i in 1..=len_a {
            curr_row[0] = i;

            for j in 1..=len_b {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };

                curr_row[j] = std::cmp::min(
                    std::cmp::min(
                        prev_row[j] + 1,     // deletion
                        curr_row[j - 1] + 1, // insertion
                    ),
                    prev_row[j - 1] + cost,  // substitution
                );

                if self.transpositions && i > 1 && j > 1
                    && a[i - 1] == b[j - 2]
                    && a[i - 2] == b[j - 1]
                {
                    curr_row[j] = std::cmp::min(curr_row[j], before_prev[j - 2] + 1);
                }
            }

            std::mem::swap(&mut before_prev, &mut prev_row);
            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[len_b]
    }
}

impl FuzzyRanker for EditDistanceRanker {
    fn rank(&self, query: &str, candidate: &str) -> Option<u32> {
        Some(self.edit_distance(query, candidate) as u32)
    }
}
