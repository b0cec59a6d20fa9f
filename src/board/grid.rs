//! The board grid.
//!
//! A flat cell array covering the playable centre plus a one-cell border
//! ring. Border cells hold prey waiting to be placed. Reads outside the
//! full grid yield [`Piece::Invalid`] rather than failing.

use tracing::trace;

use super::listener::{BoardListener, NoListener};
use super::piece::{piece_allows, BoardQuery, Cell, Piece};
use super::position::{Move, Position};

/// Centre size of the traditional board.
pub const DEFAULT_CENTER_SIZE: usize = 5;

/// Largest centre width or height a board accepts.
pub const MAX_CENTER_SIZE: usize = 64;

/// Game board with its lifecycle listener.
///
/// Cells are stored column-major: index `x * y_size + y`.
#[derive(Debug, Clone)]
pub struct Board<L: BoardListener = NoListener> {
    center_width: i32,
    center_height: i32,
    top_left: Position,
    bottom_right: Position,
    cells: Vec<Cell>,
    listener: L,
}

impl Board<NoListener> {
    /// Creates a traditional 5x5 board with no listener.
    pub fn detached() -> Self {
        Board::new(NoListener)
    }
}

impl<L: BoardListener> Board<L> {
    /// Creates an empty 5x5 board.
    pub fn new(listener: L) -> Self {
        Board::with_size(DEFAULT_CENTER_SIZE, DEFAULT_CENTER_SIZE, listener)
    }

    /// Creates an empty board with the given centre size, clamped to
    /// `1..=MAX_CENTER_SIZE` on each axis.
    pub fn with_size(center_width: usize, center_height: usize, listener: L) -> Self {
        let mut board = Board {
            center_width: 0,
            center_height: 0,
            top_left: Position::new(1, 1),
            bottom_right: Position::new(0, 0),
            cells: Vec::new(),
            listener,
        };
        board.resize(center_width, center_height);
        board
    }

    /// Replaces the grid with an empty one of the given centre size,
    /// clamped like [`with_size`](Self::with_size). Fires no events.
    pub fn resize(&mut self, center_width: usize, center_height: usize) {
        let (w, h) = (clamp_extent(center_width), clamp_extent(center_height));
        self.center_width = w;
        self.center_height = h;
        self.bottom_right = Position::new(w, h);
        self.cells.clear();
        self.cells.resize(((w + 2) * (h + 2)) as usize, None);
    }

    /// Width of the full grid including the border ring.
    pub fn x_size(&self) -> i32 {
        self.center_width + 2
    }

    /// Height of the full grid including the border ring.
    pub fn y_size(&self) -> i32 {
        self.center_height + 2
    }

    pub fn center_width(&self) -> i32 {
        self.center_width
    }

    pub fn center_height(&self) -> i32 {
        self.center_height
    }

    /// Top-left corner of the centre.
    pub fn top_left(&self) -> Position {
        self.top_left
    }

    /// Bottom-right corner of the centre.
    pub fn bottom_right(&self) -> Position {
        self.bottom_right
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Raw cell storage, column-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.x_size() || y >= self.y_size() {
            return None;
        }
        Some((x * self.y_size() + y) as usize)
    }

    /// Returns the occupant at `p`, or `Some(Piece::Invalid)` outside the grid.
    pub fn get(&self, p: Position) -> Cell {
        self.get_xy(p.x, p.y)
    }

    pub fn get_xy(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => Some(Piece::Invalid),
        }
    }

    /// Writes a cell. Writes outside the grid are dropped.
    pub fn set_cell(&mut self, p: Position, cell: Cell) {
        if let Some(i) = self.index(p.x, p.y) {
            self.cells[i] = cell;
        }
    }

    pub fn set(&mut self, p: Position, piece: Piece) {
        self.set_cell(p, Some(piece));
    }

    pub fn clear(&mut self, p: Position) {
        self.set_cell(p, None);
    }

    /// True for an in-grid cell with no occupant.
    pub fn is_empty(&self, p: Position) -> bool {
        self.get(p).is_none()
    }

    /// Moves whatever occupies `mv.from` to `mv.to`, returning it.
    ///
    /// No legality check: the destination is overwritten.
    pub fn move_piece(&mut self, mv: &Move) -> Cell {
        let piece = self.get(mv.from);
        self.clear(mv.from);
        self.set_cell(mv.to, piece);
        piece
    }

    /// Applies a move, removing the captured piece for jumps, and notifies.
    pub fn do_move(&mut self, mv: &Move) {
        let piece = self.move_piece(mv);
        let jump = mv.is_jump();
        if jump {
            self.clear(mv.middle());
        }
        trace!(%mv, ?piece, jump, "move applied");
        if let Some(piece) = piece {
            if jump {
                self.listener.after_jump(piece);
            } else {
                self.listener.after_step(piece);
            }
        }
    }

    /// Lifts `piece` off `p` if that is exactly what occupies it.
    pub fn pick(&mut self, p: Position, piece: Piece) -> Option<Position> {
        if self.get(p) != Some(piece) {
            return None;
        }
        self.clear(p);
        trace!(%p, ?piece, "picked");
        self.listener.after_picked(piece);
        Some(p)
    }

    /// Commits `mv`: a placement lifts the piece off the ring with
    /// [`pick`](Self::pick) and drops it on the target, anything else goes
    /// through [`do_move`](Self::do_move). Returns false if nothing was
    /// there to pick.
    pub fn commit(&mut self, mv: &Move) -> bool {
        if !self.is_border_position(mv.from) {
            self.do_move(mv);
            return true;
        }
        let Some(piece) = self.get(mv.from) else {
            return false;
        };
        if self.pick(mv.from, piece).is_none() {
            return false;
        }
        self.set(mv.to, piece);
        true
    }

    /// Replaces dimensions and cells with those of `other`, keeping the
    /// listener. Fires no events.
    pub fn load_layout<M: BoardListener>(&mut self, other: &Board<M>) {
        self.center_width = other.center_width;
        self.center_height = other.center_height;
        self.top_left = other.top_left;
        self.bottom_right = other.bottom_right;
        self.cells.clone_from(&other.cells);
    }

    /// Clears every cell, border ring included.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        trace!("board reset");
        self.listener.after_reset();
    }

    /// Detached structural copy that never notifies.
    pub fn copy_board(&self) -> Board<NoListener> {
        Board {
            center_width: self.center_width,
            center_height: self.center_height,
            top_left: self.top_left,
            bottom_right: self.bottom_right,
            cells: self.cells.clone(),
            listener: NoListener,
        }
    }

    /// Inside the centre, bounds inclusive.
    pub fn is_valid_position(&self, p: Position) -> bool {
        p.is_greater_or_equal_to(self.top_left) && p.is_less_or_equal_to(self.bottom_right)
    }

    /// On the border ring around the centre.
    pub fn is_border_position(&self, p: Position) -> bool {
        p.x == 0 || p.x == self.center_width + 1 || p.y == 0 || p.y == self.center_height + 1
    }

    /// Generic validity, independent of the moving piece.
    pub fn is_valid(&self, mv: &Move) -> bool {
        mv.is_not_stationary()
            && self.is_empty(mv.to)
            && (self.is_border_to_board(mv) || self.is_on_board(mv))
    }

    fn is_on_board(&self, mv: &Move) -> bool {
        self.is_border_empty() && self.is_step_along_line(mv)
    }

    /// Validity of `mv` for a `piece` of the given kind.
    pub fn is_valid_for(&self, piece: Piece, mv: &Move) -> bool {
        mv.is_not_stationary() && self.is_empty(mv.to) && piece_allows(piece, mv, self)
    }

    /// Validity of `mv` for whatever occupies its source cell.
    pub fn is_legal(&self, mv: &Move) -> bool {
        match self.get(mv.from) {
            Some(piece) => self.is_valid_for(piece, mv),
            None => false,
        }
    }

    /// Centre positions in scan order: x outer, y inner, both 1-indexed.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (w, h) = (self.center_width, self.center_height);
        (1..=w).flat_map(move |x| (1..=h).map(move |y| Position::new(x, y)))
    }

    /// Border ring positions: top and bottom rows left to right, then the
    /// left and right columns top to bottom.
    pub fn border_positions(&self) -> impl Iterator<Item = Position> {
        let (xs, ys) = (self.x_size(), self.y_size());
        let rows = (0..xs).flat_map(move |x| [Position::new(x, 0), Position::new(x, ys - 1)]);
        let cols = (1..ys - 1).flat_map(move |y| [Position::new(0, y), Position::new(xs - 1, y)]);
        rows.chain(cols)
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|c| **c == Some(piece)).count()
    }

    /// Resets and lays out the opening: a predator on each centre corner
    /// and up to `prey_count` prey waiting on the border ring.
    pub fn setup_standard(&mut self, prey_count: usize) {
        self.reset();
        let (tl, br) = (self.top_left, self.bottom_right);
        for corner in [tl, Position::new(br.x, tl.y), Position::new(tl.x, br.y), br] {
            self.set(corner, Piece::Predator);
        }
        let ring: Vec<Position> = self.border_positions().take(prey_count).collect();
        for p in ring {
            self.set(p, Piece::Prey);
        }
    }
}

fn clamp_extent(n: usize) -> i32 {
    i32::try_from(n.clamp(1, MAX_CENTER_SIZE)).unwrap_or(1)
}

impl<L: BoardListener> BoardQuery for Board<L> {
    fn get(&self, p: Position) -> Cell {
        Board::get(self, p)
    }

    fn is_border_to_board(&self, mv: &Move) -> bool {
        self.is_border_position(mv.from) && !self.is_border_position(mv.to)
    }

    fn is_border_empty(&self) -> bool {
        self.border_positions().all(|p| self.get(p).is_none())
    }

    fn is_step_along_line(&self, mv: &Move) -> bool {
        self.is_valid_position(mv.from)
            && self.is_valid_position(mv.to)
            && mv.is_step()
            && (mv.from.has_even_coord_sum() || mv.is_one_dimensional())
    }
}
