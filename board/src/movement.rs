use crate::{Cell, Coordinate, Direction};

/// A proposed move, holding copies of both cells as they were when it was proposed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Cell,
    pub destination: Cell,
}
impl Move {
    pub const fn new(origin: Cell, destination: Cell) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub const fn source(&self) -> Coordinate {
        self.origin.coordinate()
    }

    pub const fn target(&self) -> Coordinate {
        self.destination.coordinate()
    }

    /// The straight-line direction of the move
    ///
    /// `None` for diagonal moves and for moves that go nowhere; neither is ever legal.
    pub const fn direction(&self) -> Option<Direction> {
        self.source().direction_to(self.target())
    }

    /// How many cells the move travels, if it travels in a straight line
    pub const fn distance(&self) -> Option<u8> {
        match self.direction() {
            Some(_) => Some(self.source().distance(self.target())),
            None => None,
        }
    }

    /// The coordinates strictly between the origin and the destination
    ///
    /// Empty for moves without a direction.
    pub fn between(&self) -> impl Iterator<Item = Coordinate> {
        let steps = self.distance().unwrap_or(0).saturating_sub(1);
        let from = self.source();
        let direction = self.direction();
        (0..steps).scan(from, move |current, _| {
            *current = current.offset(direction?);
            Some(*current)
        })
    }
}
