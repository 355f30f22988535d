use std::{collections::VecDeque, error::Error, fmt};

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    cell::{Cell, CellArena, CellHandle, CellKind},
    change_set::ChangeSets,
    direction::Direction,
    occupancy::OccupancyIndex,
};

/// Smallest width or height a board can have.
pub const MIN_BOARD_SIDE: usize = 2;

type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnakeError {
    /// The board would be smaller than 2x2 or too large to address.
    InvalidBoardSize { width: usize, height: usize },
    /// The snake was asked to move without a heading.
    UnreadableCommand,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::InvalidBoardSize { width, height } => write!(
                f,
                "board of {width}x{height} is invalid, {MIN_BOARD_SIDE}x{MIN_BOARD_SIDE} at least"
            ),
            SnakeError::UnreadableCommand => write!(f, "command not readable"),
        }
    }
}

impl Error for SnakeError {}

/// Outcome of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Win,
    Lose,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Normal)
    }
}

/// Model of the Snake Game.
///
/// The snake is stored tail first, head last. Every snake cell is in the occupancy index
/// exactly once, and the food cell is a single slot that is moved around, never replaced.
/// After each [`SnakeGame::update`] the renderer pulls the removed, changed and added cells.
#[derive(Debug)]
pub struct SnakeGame<R = StdRng> {
    width: i32,
    height: i32,
    board_size: usize,
    food_eaten: usize,
    cells: CellArena,
    snake: VecDeque<CellHandle>,
    food: CellHandle,
    occupied: OccupancyIndex,
    direction: Direction,
    changes: ChangeSets,
    last_status: Option<GameStatus>,
    rng: R,
}

impl SnakeGame<StdRng> {
    /// Creates a game on a `width` x `height` board with an entropy seeded food generator.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either side is below [`MIN_BOARD_SIDE`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Same as [`SnakeGame::new`] but food placement is reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either side is below [`MIN_BOARD_SIDE`].
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Creates a game that places food with `rng`.
    ///
    /// The snake starts as a head with one body cell to its left, in the middle of the
    /// board, heading right.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either side is below [`MIN_BOARD_SIDE`]
    /// or the board does not fit in the coordinate space.
    pub fn with_rng(width: usize, height: usize, rng: R) -> Result<Self> {
        let invalid = SnakeError::InvalidBoardSize { width, height };
        if width < MIN_BOARD_SIDE || height < MIN_BOARD_SIDE {
            return Err(invalid);
        }
        let (Ok(board_width), Ok(board_height)) = (i32::try_from(width), i32::try_from(height))
        else {
            return Err(invalid);
        };
        let Some(board_size) = width.checked_mul(height) else {
            return Err(invalid);
        };

        let mut cells = CellArena::with_key();
        // off the board until the snake is in place
        let food = cells.insert(Cell::new(-1, -1, CellKind::Uninitialized));

        let mut game = Self {
            width: board_width,
            height: board_height,
            board_size,
            food_eaten: 0,
            cells,
            snake: VecDeque::new(),
            food,
            occupied: OccupancyIndex::default(),
            direction: Direction::Right,
            changes: ChangeSets::new(),
            last_status: None,
            rng,
        };

        let (center_x, center_y) = (board_width / 2, board_height / 2);
        // computed positions, they cannot collide
        game.push_cell(Cell::new(center_x - 1, center_y, CellKind::Body));
        game.push_cell(Cell::new(center_x, center_y, CellKind::Head));
        game.cells[food].kind = CellKind::Food;
        game.update_food();

        debug!(
            "New {width}x{height} snake game, head at {}",
            game.cells[game.head()]
        );
        Ok(game)
    }

    /// Advances the snake one cell.
    ///
    /// `command` becomes the new heading unless it is [`Direction::Undefined`] or the
    /// reverse of the current heading. Once a step returned [`GameStatus::Win`] or
    /// [`GameStatus::Lose`], later calls report the same status and move nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::UnreadableCommand`] if the snake has no heading to move along.
    pub fn update(&mut self, command: Direction) -> Result<GameStatus> {
        self.changes.reset(&mut self.cells, self.food);
        if let Some(status) = self.last_status.filter(|status| status.is_terminal()) {
            debug!("Tried to update a finished game ({status:?})");
            return Ok(status);
        }

        self.update_direction(command);
        let (x, y) = self.next_head_position()?;
        self.change_snake_head_to_body();

        let status = self.advance(x, y);
        match status {
            GameStatus::Win => info!("Snake fills the board, game won"),
            GameStatus::Lose => info!("Game over after eating {}", self.food_eaten),
            GameStatus::Normal => (),
        }
        self.last_status = Some(status);
        Ok(status)
    }

    fn update_direction(&mut self, command: Direction) {
        if command == Direction::Undefined {
            return;
        }
        if self.direction.is_opposite(command) {
            debug!("Ignoring {command}, snake is heading {}", self.direction);
            return;
        }
        self.direction = command;
    }

    fn next_head_position(&self) -> Result<(i32, i32)> {
        let (dx, dy) = self
            .direction
            .delta()
            .ok_or(SnakeError::UnreadableCommand)?;
        let head = &self.cells[self.head()];
        Ok((head.x + dx, head.y + dy))
    }

    fn change_snake_head_to_body(&mut self) {
        let head = self.head();
        self.cells[head].kind = CellKind::Body;
        self.changes.changed.push(head);
    }

    fn advance(&mut self, x: i32, y: i32) -> GameStatus {
        if !self.is_in_board(x, y) {
            debug!("Snake left the board at ({x}, {y})");
            return GameStatus::Lose;
        }

        let new_head = Cell::new(x, y, CellKind::Head);
        if new_head == self.cells[self.food] {
            // grows by one, the tail stays
            if !self.push_cell(new_head) {
                return GameStatus::Lose;
            }
            self.food_eaten += 1;
            if self.snake.len() == self.board_size {
                return GameStatus::Win;
            }
            self.update_food();
        } else {
            // tail leaves before the head arrives so the head may take the vacated cell
            self.pop_cell();
            if !self.push_cell(new_head) {
                return GameStatus::Lose;
            }
        }
        GameStatus::Normal
    }

    /// Appends `cell` as the new head. On self-collision the occupied cell is marked as
    /// the head, `cell` is dropped and `false` is returned.
    fn push_cell(&mut self, cell: Cell) -> bool {
        let position = cell.position();
        let on_food = cell == self.cells[self.food];
        let handle = self.cells.insert(cell);
        match self.occupied.try_insert(position, handle) {
            Ok(()) => {
                self.snake.push_back(handle);
                if on_food {
                    self.changes.changed.push(handle);
                } else {
                    self.changes.added.push(handle);
                }
                true
            }
            Err(occupant) => {
                self.cells.remove(handle);
                self.cells[occupant].kind = CellKind::Head;
                self.changes.changed.push(occupant);
                debug!("Snake ran into itself at {}", self.cells[occupant]);
                false
            }
        }
    }

    /// Takes the tail off the board. The cell lives on in the removed set until the
    /// next step.
    fn pop_cell(&mut self) {
        if let Some(tail) = self.snake.pop_front() {
            self.occupied.remove(self.cells[tail].position());
            self.changes.removed.push(tail);
        }
    }

    /// Moves food to a random free cell. There must be at least one free cell.
    fn update_food(&mut self) {
        debug_assert!(self.snake.len() < self.board_size);
        let position = loop {
            let candidate = (
                self.rng.gen_range(0..self.width),
                self.rng.gen_range(0..self.height),
            );
            if !self.occupied.contains(candidate) {
                break candidate;
            }
        };
        let food = &mut self.cells[self.food];
        (food.x, food.y) = position;
        debug!("Put food at {food}");
        self.changes.added.push(self.food);
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, x: i32, y: i32) {
        assert!(self.is_in_board(x, y) && !self.occupied.contains((x, y)));
        let food = &mut self.cells[self.food];
        (food.x, food.y) = (x, y);
    }
}

impl<R> SnakeGame<R> {
    fn head(&self) -> CellHandle {
        // never fewer than two cells
        self.snake[self.snake.len() - 1]
    }

    #[must_use]
    pub fn is_in_board(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Cells that appeared during the last step.
    #[must_use]
    pub fn get_nodes_added(&self) -> Vec<Cell> {
        ChangeSets::snapshot(&self.cells, &self.changes.added)
    }

    /// Cells that left the board during the last step.
    #[must_use]
    pub fn get_nodes_removed(&self) -> Vec<Cell> {
        ChangeSets::snapshot(&self.cells, &self.changes.removed)
    }

    /// Cells that stayed in place but changed kind during the last step.
    #[must_use]
    pub fn get_nodes_changed(&self) -> Vec<Cell> {
        ChangeSets::snapshot(&self.cells, &self.changes.changed)
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_food_eaten(&self) -> usize {
        self.food_eaten
    }

    /// Status of the last step, `None` before the first one.
    #[must_use]
    pub fn get_last_status(&self) -> Option<GameStatus> {
        self.last_status
    }

    /// Copies of the snake cells, tail first.
    #[must_use]
    pub fn get_snake(&self) -> Vec<Cell> {
        self.snake
            .iter()
            .map(|handle| self.cells[*handle])
            .collect()
    }

    #[must_use]
    pub fn get_snake_len(&self) -> usize {
        self.snake.len()
    }

    #[must_use]
    pub fn get_food(&self) -> Cell {
        self.cells[self.food]
    }

    #[must_use]
    pub fn get_width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn get_height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn get_board_size(&self) -> usize {
        self.board_size
    }
}
