//! Arrow-key navigation between project cards while the modal is open.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Index of the card to show after moving `dir` from `current`, wrapping at
/// both ends. `None` when there are no cards.
///
/// With no current card, `Next` lands on the first card and `Previous` on
/// the last.
pub fn step(current: Option<usize>, len: usize, dir: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, dir) {
        (None, Direction::Next) => 0,
        (None, Direction::Previous) => len - 1,
        (Some(i), Direction::Next) => (i + 1) % len,
        (Some(i), Direction::Previous) => (i % len + len - 1) % len,
    };
    Some(next)
}
