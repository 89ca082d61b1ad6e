//! Bookkeeping for comparing strategies against each other.

use std::fmt;

/// Counters collected over a single search invocation.
///
/// One instance is produced per search and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    solution_length: usize,
    max_depth: usize,
    generated: usize,
}

impl Stats {
    pub(crate) fn new(solution_length: usize, max_depth: usize, generated: usize) -> Self {
        Stats {
            solution_length,
            max_depth,
            generated,
        }
    }

    /// Number of actions in the returned path, or 0 when no solution was
    /// found.
    pub fn solution_length(&self) -> usize {
        self.solution_length
    }

    /// Deepest level the search reached, counting the origin as level 1.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of states the search expanded, i.e. added to its visited
    /// set.
    pub fn generated(&self) -> usize {
        self.generated
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {}, depth {}, generated {}",
            self.solution_length, self.max_depth, self.generated
        )
    }
}

/// Render per-strategy statistics as an aligned comparison table.
///
/// Rows appear in iteration order, so callers control how strategies are
/// ranked against each other.
pub fn comparison<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Stats)>,
{
    let mut table = format!(
        "{:<32} {:>8} {:>8} {:>10}\n",
        "Strategy", "Length", "Depth", "Generated"
    );
    for (name, stats) in rows {
        table.push_str(&format!(
            "{:<32} {:>8} {:>8} {:>10}\n",
            name, stats.solution_length, stats.max_depth, stats.generated
        ));
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let stats = Stats::new(7, 8, 31);
        assert_eq!(format!("{}", stats), "length 7, depth 8, generated 31");
    }

    #[test]
    fn comparison_table() {
        let first = Stats::new(2, 3, 4);
        let second = Stats::new(0, 5, 17);
        let table = comparison(vec![("Breadth-first search", &first), ("Depth-first search", &second)]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Strategy"));
        assert!(lines[1].starts_with("Breadth-first search"));
        assert!(lines[1].ends_with("4"));
        assert!(lines[2].starts_with("Depth-first search"));
    }
}
