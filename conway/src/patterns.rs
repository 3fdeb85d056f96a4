// patterns.rs - Named seed patterns and deterministic random soups

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{LifeError, Result};

/// A named arrangement of live cells, stored as (x, y) offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Field size and glider origin of the reference run.
pub const CANONICAL_SIZE: (usize, usize) = (25, 25);
pub const CANONICAL_ORIGIN: (usize, usize) = (11, 11);

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Lowercase with `-`, `_` and spaces dropped, so "r_pentomino" matches "R-pentomino".
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Pattern {
    /// Looks up a catalog pattern by name.
    pub fn find(name: &str) -> Result<&'static Pattern> {
        let wanted = normalize(name);
        PATTERNS
            .iter()
            .find(|p| normalize(p.name) == wanted)
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Bounding box (width, height).
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Absolute cell coordinates with the top-left corner at `(x, y)`.
    pub fn placed_at(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().map(move |&(dx, dy)| (x + dx, y + dy))
    }

    /// Origin that centers the pattern in a `width` x `height` field.
    ///
    /// Patterns larger than the field are pinned to the origin; seeding them
    /// then fails on the first out-of-range cell.
    pub fn centered_in(&self, width: usize, height: usize) -> (usize, usize) {
        let (pw, ph) = self.size();
        (width.saturating_sub(pw) / 2, height.saturating_sub(ph) / 2)
    }
}

/// Deterministic pseudo-random seed with roughly one cell in three alive.
pub fn random_soup(width: usize, height: usize, seed_value: u64) -> Vec<(usize, usize)> {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    let mut cells = Vec::new();
    for y in 0..height {
        for x in 0..width {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if (seed >> 16) % 3 == 0 {
                cells.push((x, y));
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_ignores_case_and_separators() {
        assert_eq!(Pattern::find("glider").unwrap().name, "Glider");
        assert_eq!(Pattern::find("r_pentomino").unwrap().name, "R-pentomino");
        assert_eq!(Pattern::find("gosper-glider-gun").unwrap().name, "Gosper Glider Gun");
        assert_eq!(
            Pattern::find("spaceship").err(),
            Some(LifeError::UnknownPattern("spaceship".into()))
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(GLIDER.size(), (3, 3));
        assert_eq!(Pattern::find("pulsar").unwrap().size(), (13, 13));
        assert_eq!(Pattern::find("pulsar").unwrap().cells.len(), 48);

        let gun = Pattern::find("Gosper Glider Gun").unwrap();
        assert_eq!(gun.size(), (36, 9));
        assert_eq!(gun.cells.len(), 36);
    }

    #[test]
    fn cells_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn canonical_glider_placement() {
        let (x, y) = CANONICAL_ORIGIN;
        let cells: Vec<_> = GLIDER.placed_at(x, y).collect();
        assert_eq!(cells, vec![(12, 11), (13, 12), (11, 13), (12, 13), (13, 13)]);
    }

    #[test]
    fn centering() {
        assert_eq!(GLIDER.centered_in(25, 25), (11, 11));
        assert_eq!(GLIDER.centered_in(2, 2), (0, 0));
    }

    #[test]
    fn random_soup_is_deterministic() {
        let a = random_soup(20, 20, 7);
        assert_eq!(a, random_soup(20, 20, 7));
        assert_ne!(a, random_soup(20, 20, 8));
        assert!(a.iter().all(|&(x, y)| x < 20 && y < 20));
        // ~1/3 density
        assert!(a.len() > 80 && a.len() < 190, "{}", a.len());
    }
}
