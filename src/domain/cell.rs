use super::RuleSet;

/// Cell is the fundamental unit of a life-like automaton.
/// Each cell is either Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_bool(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Binary state as used by the statistics and rendering consumers
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Pure function computing the next state under a birth/survival rule:
    /// a dead cell is born when its count is in `birth`,
    /// a live cell survives when its count is in `survive`.
    pub fn evolve(self, neighbors: u32, rule: &RuleSet) -> Self {
        let next = match self {
            Cell::Dead => rule.births_on(neighbors),
            Cell::Alive => rule.survives_on(neighbors),
        };
        Cell::from_bool(next)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_bool(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        let rule = RuleSet::conway();
        assert_eq!(Cell::Alive.evolve(0, &rule), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1, &rule), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        let rule = RuleSet::conway();
        assert_eq!(Cell::Alive.evolve(2, &rule), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3, &rule), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        let rule = RuleSet::conway();
        assert_eq!(Cell::Alive.evolve(4, &rule), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(8, &rule), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        let rule = RuleSet::conway();
        assert_eq!(Cell::Dead.evolve(3, &rule), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2, &rule), Cell::Dead);
    }

    #[test]
    fn test_binary_encoding() {
        assert_eq!(Cell::Alive.as_u8(), 1);
        assert_eq!(Cell::Dead.as_u8(), 0);
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::default(), Cell::Dead);
    }
}
