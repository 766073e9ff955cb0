//! Randomized taxi grid: corridors, walls and named locations.
//!
//! A map with `rows x cols` cells is kept as text lines of width `2 * cols + 1`:
//!
//! ```text
//! +---------+
//! |0: | : :1|
//! | : : : : |
//! | | : |2: |
//! +---------+
//! ```
//!
//! The glyph of cell `(r, c)` sits at `desc[r + 1][2 * c + 1]`. The glyph at `desc[r + 1][2 * c + 2]`
//! separates it from its eastern neighbour: `:` is a corridor, `|` a wall. North-south movement is
//! never blocked.

use crate::config::TaxiConfig;
use crate::error::{Result, TaxiError};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::fmt;
use std::iter;
use tracing::{debug, info};

pub const CORRIDOR: char = ':';
pub const WALL: char = '|';
const EMPTY: char = ' ';

pub type Cell = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxiMap {
    rows: usize,
    cols: usize,
    desc: Vec<Vec<char>>,
    locs: Vec<Cell>,
}

impl TaxiMap {
    /// Draws one map. Placement is best-effort: fewer than `config.locs` locations may come out.
    ///
    /// Each cell draws from `{0, ..., locs - 1, empty}`, every location weighted
    /// `locs_prob / (rows * cols)`. A location index is claimed by the first cell that draws it;
    /// later draws of the same index leave the cell empty. Locations are numbered in scan order.
    pub fn generate<R: Rng + ?Sized>(config: &TaxiConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let (rows, cols) = (config.rows, config.cols);
        let p = config.loc_weight();
        let weights = iter::repeat(p)
            .take(config.locs)
            .chain(iter::once((1. - p * config.locs as f64).max(0.)));
        let dist = WeightedIndex::new(weights)?;

        let border = border_line(cols);
        let mut desc = Vec::with_capacity(rows + 2);
        desc.push(border.clone());

        let mut claimed = vec![false; config.locs];
        let mut locs = Vec::new();
        for r in 0..rows {
            let mut line = Vec::with_capacity(2 * cols + 1);
            line.push(WALL);
            for c in 0..cols {
                let a = dist.sample(rng);
                if a < config.locs && !claimed[a] {
                    claimed[a] = true;
                    line.push(loc_glyph(locs.len()));
                    locs.push((r, c));
                } else {
                    line.push(EMPTY);
                }

                if c < cols - 1 {
                    line.push(if rng.gen_bool(config.cramped) {
                        WALL
                    } else {
                        CORRIDOR
                    });
                }
            }
            line.push(WALL);
            desc.push(line);
        }
        desc.push(border);

        let mut map = Self {
            rows,
            cols,
            desc,
            locs,
        };

        if config.no_walls {
            for c in map.blocked_boundaries() {
                let r = rng.gen_range(0..rows);
                debug!(boundary = c, row = r, "opening fully walled column");
                map.desc[r + 1][2 * c + 2] = CORRIDOR;
            }
        }

        Ok(map)
    }

    /// Draws maps until one holds all `config.locs` locations.
    pub fn sample<R: Rng + ?Sized>(config: &TaxiConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut placed = 0;
        for attempt in 1..=config.max_map_attempts {
            let map = Self::generate(config, rng)?;
            if map.locs.len() == config.locs {
                info!(
                    rows = map.rows,
                    cols = map.cols,
                    locs = map.locs.len(),
                    attempt,
                    "generated taxi map"
                );
                return Ok(map);
            }

            debug!(
                attempt,
                placed = map.locs.len(),
                requested = config.locs,
                "map is short of locations, redrawing"
            );
            placed = placed.max(map.locs.len());
        }

        Err(TaxiError::LocationUndercount {
            requested: config.locs,
            placed,
            attempts: config.max_map_attempts,
        })
    }

    /// Parses a hand-drawn map. Location glyphs must number `0..L` without gaps.
    pub fn from_desc<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let desc = lines
            .iter()
            .map(|l| l.as_ref().chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        if desc.len() < 3 {
            return Err(malformed("needs a top border, a bottom border and a row"));
        }

        let width = desc[0].len();
        if width < 3 || width % 2 == 0 {
            return Err(malformed(format!("odd width of at least 3 expected, got {width}")));
        }
        if desc.iter().any(|l| l.len() != width) {
            return Err(malformed("all lines must have the same width"));
        }

        let rows = desc.len() - 2;
        let cols = (width - 1) / 2;
        for border in [&desc[0], &desc[rows + 1]] {
            if *border != border_line(cols) {
                return Err(malformed("borders must look like +---+"));
            }
        }

        let mut numbered = Vec::new();
        for (r, line) in desc[1..=rows].iter().enumerate() {
            if line[0] != WALL || line[width - 1] != WALL {
                return Err(malformed(format!("row {r} must be enclosed by {WALL}")));
            }

            for c in 0..cols {
                let g = line[2 * c + 1];
                if g != EMPTY {
                    let i = glyph_index(g)
                        .ok_or_else(|| malformed(format!("unknown glyph {g:?} at ({r}, {c})")))?;
                    numbered.push((i, (r, c)));
                }

                if c < cols - 1 && ![CORRIDOR, WALL].contains(&line[2 * c + 2]) {
                    return Err(malformed(format!("bad boundary east of ({r}, {c})")));
                }
            }
        }

        numbered.sort_unstable_by_key(|&(i, _)| i);
        if numbered.iter().enumerate().any(|(k, &(i, _))| k != i) {
            return Err(malformed("location glyphs must be numbered 0..L without gaps"));
        }

        Ok(Self {
            rows,
            cols,
            desc,
            locs: numbered.into_iter().map(|(_, cell)| cell).collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Named locations; the position in the slice is the location's identity.
    pub fn locs(&self) -> &[Cell] {
        &self.locs
    }

    pub fn desc(&self) -> &[Vec<char>] {
        &self.desc
    }

    pub fn location_at(&self, cell: Cell) -> Option<usize> {
        self.locs.iter().position(|&l| l == cell)
    }

    pub fn can_move_east(&self, (r, c): Cell) -> bool {
        self.desc[r + 1][2 * c + 2] == CORRIDOR
    }

    pub fn can_move_west(&self, (r, c): Cell) -> bool {
        self.desc[r + 1][2 * c] == CORRIDOR
    }

    /// Interior boundaries (boundary `c` lies between columns `c` and `c + 1`) walled in every row.
    pub fn blocked_boundaries(&self) -> Vec<usize> {
        (0..self.cols.saturating_sub(1))
            .filter(|&c| (0..self.rows).all(|r| self.desc[r + 1][2 * c + 2] == WALL))
            .collect()
    }
}

impl fmt::Display for TaxiMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.desc.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line.iter().collect::<String>())?;
        }

        Ok(())
    }
}

/// `0`-`9`, then `A` for 10, `B` for 11 and onwards through the character table.
pub fn loc_glyph(i: usize) -> char {
    match i {
        0..=9 => char::from(b'0' + i as u8),
        _ => char::from_u32(i as u32 + 55).unwrap_or('?'),
    }
}

/// Inverse of [`loc_glyph`] for hand-drawn maps, which number at most 36 locations.
pub fn glyph_index(g: char) -> Option<usize> {
    match g {
        '0'..='9' => Some(g as usize - '0' as usize),
        'A'..='Z' => Some(g as usize - 55),
        _ => None,
    }
}

fn border_line(cols: usize) -> Vec<char> {
    iter::once('+')
        .chain(iter::repeat('-').take(2 * cols - 1))
        .chain(iter::once('+'))
        .collect()
}

fn malformed(msg: impl Into<String>) -> TaxiError {
    TaxiError::InvalidConfig(format!("malformed map: {}", msg.into()))
}
