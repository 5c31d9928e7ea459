//! Algorithm enum for selecting the neighbor-counting strategy.
//!
//! Every strategy produces exactly the same toroidal counts; they only
//! trade off speed against simplicity.

/// Available neighbor-counting strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Sum every kernel offset for every cell, serial
    Direct,
    /// Direct summation with rows processed in parallel (rayon)
    DirectParallel,
    /// Separable running window sums, independent of kernel size
    #[default]
    SlidingWindow,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::Direct,
            Algorithm::DirectParallel,
            Algorithm::SlidingWindow,
        ]
    }

    /// Short display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Direct => "Direct",
            Algorithm::DirectParallel => "Direct+Par",
            Algorithm::SlidingWindow => "Sliding",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Direct => "k² lookups per cell, serial",
            Algorithm::DirectParallel => "k² lookups per cell, parallel rows",
            Algorithm::SlidingWindow => "row then column running sums, O(W·H)",
        }
    }

    /// Whether the transition step should also fan out across threads
    pub fn is_parallel(&self) -> bool {
        matches!(self, Algorithm::DirectParallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_algorithms_returns_three() {
        assert_eq!(Algorithm::all().len(), 3);
    }

    #[test]
    fn test_default_is_sliding_window() {
        assert_eq!(Algorithm::default(), Algorithm::SlidingWindow);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
