//! The [`CellKind`] vocabulary.

use std::fmt;

/// The state of one grid cell.
///
/// `Start` and `End` are anchors: searches read them but never assign them a
/// new kind. `Visited` and `PathMarker` only ever appear through search
/// events; a maze handed to a search contains `Wall`, `Empty` and the two
/// anchors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    #[default]
    Empty,
    Start,
    End,
    Visited,
    PathMarker,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 6] = [
        CellKind::Wall,
        CellKind::Empty,
        CellKind::Start,
        CellKind::End,
        CellKind::Visited,
        CellKind::PathMarker,
    ];

    /// Text glyph used by [`Grid::parse`](crate::Grid::parse) and the grid's
    /// `Display` impl.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Empty => '.',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Visited => 'v',
            CellKind::PathMarker => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). A space also reads as `Empty`.
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<CellKind> {
        match ch {
            '#' => Some(CellKind::Wall),
            '.' | ' ' => Some(CellKind::Empty),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            'v' => Some(CellKind::Visited),
            '*' => Some(CellKind::PathMarker),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// `Start` or `End`.
    #[inline]
    pub const fn is_anchor(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }

    /// Kinds that belong to a maze before any search ran.
    #[inline]
    pub const fn is_static(self) -> bool {
        match self {
            CellKind::Wall | CellKind::Empty | CellKind::Start | CellKind::End => true,
            CellKind::Visited | CellKind::PathMarker => false,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Wall => "wall",
            CellKind::Empty => "empty",
            CellKind::Start => "start",
            CellKind::End => "end",
            CellKind::Visited => "visited",
            CellKind::PathMarker => "path",
        };
        f.write_str(name)
    }
}
