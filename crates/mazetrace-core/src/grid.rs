//! The [`Grid`] type — a rectangular matrix of [`CellKind`]s.
//!
//! Unlike a shared view, a `Grid` owns its cells: cloning yields an
//! independent copy. Search procedures clone the caller's grid into a private
//! working copy and the playback engine keeps a pristine clone for rebuilds.

use std::fmt;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::event::Event;
use crate::geom::Coord;

/// A `rows × cols` matrix of cell kinds, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Grid {
    cells: Vec<CellKind>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a grid of the given dimensions filled with `Empty`.
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![CellKind::Empty; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Build a grid from text, one line per row, without checking anchors.
    ///
    /// Glyphs are those of [`CellKind::glyph`]; a space reads as `Empty`.
    /// A trailing newline is ignored.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(glyph).ok_or(GridError::InvalidGlyph {
                    glyph,
                    coord: Coord::new(row as i32, col as i32),
                })?;
                cells.push(kind);
            }
        }

        Ok(Self {
            cells,
            rows: lines.len() as i32,
            cols: cols as i32,
        })
    }

    /// Build a maze from text and require exactly one `Start` and one `End`.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let grid = Self::from_text(text)?;
        grid.anchors()?;
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Flat row-major index of `c`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Kind of the cell at `c`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellKind> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at `c`. No-op outside the grid.
    #[inline]
    pub fn set(&mut self, c: Coord, kind: CellKind) {
        if let Some(i) = self.index(c) {
            self.cells[i] = kind;
        }
    }

    /// Set the cell at `c`, returning the previous kind, or `None` (and no
    /// change) outside the grid.
    #[inline]
    pub fn replace(&mut self, c: Coord, kind: CellKind) -> Option<CellKind> {
        let i = self.index(c)?;
        Some(std::mem::replace(&mut self.cells[i], kind))
    }

    /// Apply a single event.
    #[inline]
    pub fn apply(&mut self, event: &Event) {
        self.set(event.coord, event.kind);
    }

    /// Fill every cell with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Row-major iterator over `(Coord, CellKind)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (self.coord(i), kind))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// First cell of the given kind in row-major order.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&k| k == kind)
            .map(|i| self.coord(i))
    }

    /// Locate the `(start, end)` anchors, requiring exactly one of each.
    pub fn anchors(&self) -> Result<(Coord, Coord), GridError> {
        let start = self.unique(CellKind::Start)?.ok_or(GridError::MissingStart)?;
        let end = self.unique(CellKind::End)?.ok_or(GridError::MissingEnd)?;
        Ok((start, end))
    }

    fn unique(&self, kind: CellKind) -> Result<Option<Coord>, GridError> {
        let mut found = None;
        for (c, k) in self.iter() {
            if k != kind {
                continue;
            }
            if let Some(first) = found {
                return Err(match kind {
                    CellKind::Start => GridError::DuplicateStart(first, c),
                    _ => GridError::DuplicateEnd(first, c),
                });
            }
            found = Some(c);
        }
        Ok(found)
    }

    /// Whether the grid is a valid search input: exactly one `Start`, one
    /// `End`, and only `Wall`/`Empty` elsewhere.
    pub fn is_pristine(&self) -> bool {
        self.anchors().is_ok() && self.cells.iter().all(|k| k.is_static())
    }

    /// Cells of `other` that differ from `self`, in row-major order, each
    /// carrying the kind found in `other`. Both grids should share the same
    /// dimensions; cells missing from `other` are skipped.
    pub fn diff(&self, other: &Grid) -> Vec<Event> {
        self.iter()
            .filter_map(|(c, kind)| match other.at(c) {
                Some(k) if k != kind => Some(Event::new(c, k)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols <= 0 {
            return Ok(());
        }
        for (row, line) in self.cells.chunks(self.cols as usize).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for kind in line {
                write!(f, "{}", kind.glyph())?;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_text(&lines.join("\n"))
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_string().lines().map(str::to_owned).collect()
    }
}
