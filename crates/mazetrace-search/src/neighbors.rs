use mazetrace_core::Coord;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a cell in the fixed exploration
/// order (up, down, left, right), filtered by a predicate, reusing one
/// buffer across calls.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the neighbors of `c` for which `keep` returns `true`, in
    /// up, down, left, right order.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
