//! Custodian captures
//!
//! A piece is captured when it ends up between two cells hostile to it along a row or column.
//! Hostile cells are those holding an enemy piece, the provinces, and the throne while it is
//! empty. The king is harder to take while it stands on or next to the throne: on the throne all
//! four of its neighbors must be attackers, and next to it the three neighbors other than the
//! throne must be.

use board::{Axis, Board, Cell, CellKind, Color, Coordinate, Direction, PieceKind, Result};

/// Whether the cell flanks a piece of the given color
pub(crate) fn hostile_to(cell: &Cell, victim: Color) -> bool {
    match cell.kind() {
        CellKind::Province => true,
        CellKind::Throne if cell.is_empty() => true,
        _ => cell.color() == Some(victim.opposite()),
    }
}

fn holds_attacker(cell: &Cell) -> bool {
    cell.piece()
        .is_some_and(|piece| piece.kind() == PieceKind::Attacker)
}

fn next_to_throne(board: &Board, coordinate: Coordinate) -> bool {
    let throne = board.throne();
    coordinate.direction_to(throne).is_some() && coordinate.distance(throne) == 1
}

/// Whether the king standing at `at` is surrounded according to where it stands
///
/// Only for a king on or next to the throne; elsewhere the king is taken like any other piece.
fn king_enclosed(board: &Board, at: Coordinate) -> Result<bool> {
    let throne = board.throne();
    let neighbors = board.neighbors(at)?;
    Ok(neighbors
        .iter()
        .filter(|cell| cell.coordinate() != throne)
        .all(holds_attacker))
}

/// Whether the piece at `victim` is taken by an enemy having just arrived on the far side of it,
/// coming from `direction`
///
/// `direction` points from the arriving piece towards the victim.
fn taken_from(board: &Board, victim: Coordinate, direction: Direction) -> Result<bool> {
    let Some(piece) = board.piece_at(victim)? else {
        return Ok(false);
    };
    if piece.is_king() && (victim == board.throne() || next_to_throne(board, victim)) {
        return king_enclosed(board, victim);
    }
    Ok(board
        .neighbor(victim, direction)
        .is_some_and(|far| hostile_to(&far, piece.color())))
}

/// The enemy pieces captured by the piece that just arrived at `at`
pub(crate) fn captured_by(board: &Board, at: Coordinate) -> Result<Vec<Coordinate>> {
    let Some(mover) = board.piece_at(at)? else {
        return Ok(Vec::new());
    };
    let mut captured = Vec::new();
    for direction in Direction::ALL {
        let Some(neighbor) = board.neighbor(at, direction) else {
            continue;
        };
        let Some(piece) = neighbor.piece() else {
            continue;
        };
        if piece.color() == mover.color() {
            continue;
        }
        // Only attackers take the king
        if piece.is_king() && mover.kind() != PieceKind::Attacker {
            continue;
        }
        if taken_from(board, neighbor.coordinate(), direction)? {
            captured.push(neighbor.coordinate());
        }
    }
    Ok(captured)
}

/// Whether the piece at `at` stands where it would be captured, regardless of who moved last
pub(crate) fn enclosed(board: &Board, at: Coordinate) -> Result<bool> {
    let Some(piece) = board.piece_at(at)? else {
        return Ok(false);
    };
    if piece.is_king() && (at == board.throne() || next_to_throne(board, at)) {
        return king_enclosed(board, at);
    }
    for axis in Axis::AXES {
        let flanks = board.neighbors_along_axis(at, axis)?;
        if flanks.len() == 2 && flanks.iter().all(|cell| hostile_to(cell, piece.color())) {
            return Ok(true);
        }
    }
    Ok(false)
}
