use board::{Board, Move};

/// What the board looked like just before a move was made
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub board: Board,
    pub mv: Move,
}
impl Record {
    pub const fn new(board: Board, mv: Move) -> Self {
        Self { board, mv }
    }
}

/// The moves made so far, most recent last
///
/// Every record owns a full copy of the board, so going back is exact, at the cost of memory
/// growing with the length of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<Record>,
}
impl History {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Take the most recent record off the history
    pub fn pop(&mut self) -> Option<Record> {
        self.records.pop()
    }

    /// The most recent record, if any
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
