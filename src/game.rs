//! Player state, movement legality and the win condition.

use crate::maze::{Cell, Grid, Pos};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// Row/column step for one move in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Dir::Up => 0,
            Dir::Down => 1,
            Dir::Left => 2,
            Dir::Right => 3,
        }
    }
}

/// Outcome of a single movement attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveResult {
    Moved,
    Blocked,
}

/// The generated maze plus everything that changes during play.
pub struct GameState {
    grid: Grid,
    player: Pos,
    moves: u64,
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self {
            player: grid.entry(),
            grid,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Step one cell in `dir` if the destination is an open cell inside
    /// the grid. A blocked attempt leaves the player where they are.
    pub fn try_move(&mut self, dir: Dir) -> MoveResult {
        let (dr, dc) = dir.delta();
        let row = self.player.row as isize + dr;
        let col = self.player.col as isize + dc;
        match self.grid.get(row, col) {
            Some(Cell::Open) => {
                self.player = Pos::new(row as usize, col as usize);
                self.moves += 1;
                MoveResult::Moved
            }
            _ => MoveResult::Blocked,
        }
    }

    /// Apply every held direction once, in the order given. Each attempt
    /// is validated against the position left by the previous one, so two
    /// held keys can both land in the same tick but the player never ends
    /// up inside a wall. Returns whether anything moved.
    pub fn apply_held(&mut self, dirs: &[Dir]) -> bool {
        let mut moved = false;
        for &dir in dirs {
            if self.try_move(dir) == MoveResult::Moved {
                moved = true;
            }
        }
        moved
    }

    pub fn has_won(&self) -> bool {
        self.player == self.grid.goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::grid_from_rows;

    #[test]
    fn moves_onto_open_cells() {
        let mut game = GameState::new(grid_from_rows(&["..", "#."]));
        assert_eq!(game.try_move(Dir::Right), MoveResult::Moved);
        assert_eq!(game.player(), Pos::new(0, 1));
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn walls_block_without_moving() {
        let mut game = GameState::new(grid_from_rows(&[".#", ".."]));
        assert_eq!(game.try_move(Dir::Right), MoveResult::Blocked);
        assert_eq!(game.player(), Pos::new(0, 0));
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn grid_edges_block() {
        let mut game = GameState::new(grid_from_rows(&["..", ".."]));
        assert_eq!(game.try_move(Dir::Up), MoveResult::Blocked);
        assert_eq!(game.try_move(Dir::Left), MoveResult::Blocked);
        assert_eq!(game.player(), Pos::new(0, 0));
    }

    #[test]
    fn two_held_directions_apply_in_one_tick() {
        let mut game = GameState::new(grid_from_rows(&["..", ".."]));
        assert!(game.apply_held(&[Dir::Down, Dir::Right]));
        assert_eq!(game.player(), Pos::new(1, 1));
        assert_eq!(game.moves(), 2);
        assert!(game.has_won());
    }

    #[test]
    fn held_directions_validate_after_each_step() {
        // Down is legal from the start, Right only becomes legal once the
        // player has dropped a row.
        let mut game = GameState::new(grid_from_rows(&[".#", ".."]));
        assert!(game.apply_held(&[Dir::Down, Dir::Right]));
        assert_eq!(game.player(), Pos::new(1, 1));
    }

    #[test]
    fn win_only_at_the_goal() {
        let mut game = GameState::new(grid_from_rows(&["...", "###"]));
        assert!(!game.has_won());
        game.try_move(Dir::Right);
        assert!(!game.has_won());
        game.try_move(Dir::Right);
        assert!(!game.has_won());
        assert_eq!(game.player(), Pos::new(0, 2));
    }

    #[test]
    fn reaching_the_goal_wins() {
        let mut game = GameState::new(grid_from_rows(&["..", "#."]));
        game.try_move(Dir::Right);
        game.try_move(Dir::Down);
        assert!(game.has_won());
    }
}
