//! Maze generation and movement for Maze Runner.
//!
//! Mazes are perfect: exactly one path between any two cells, carved with a
//! randomized depth-first backtracker.

use crate::app::Difficulty;
use rand::Rng;
use std::time::Duration;

const WALL_UP: u8 = 0b0001;
const WALL_RIGHT: u8 = 0b0010;
const WALL_DOWN: u8 = 0b0100;
const WALL_LEFT: u8 = 0b1000;
const ALL_WALLS: u8 = WALL_UP | WALL_RIGHT | WALL_DOWN | WALL_LEFT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    fn wall(self) -> u8 {
        match self {
            Direction::Up => WALL_UP,
            Direction::Right => WALL_RIGHT,
            Direction::Down => WALL_DOWN,
            Direction::Left => WALL_LEFT,
        }
    }

    fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Cell coordinates as (column, row)
pub type Position = (usize, usize);

#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<u8>,
}

impl Maze {
    pub fn generate<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut maze = Self {
            width,
            height,
            walls: vec![ALL_WALLS; width * height],
        };

        let mut visited = vec![false; width * height];
        let mut stack = vec![(0usize, 0usize)];
        visited[0] = true;

        while let Some(&current) = stack.last() {
            let unvisited: Vec<(Direction, Position)> = Direction::ALL
                .iter()
                .filter_map(|&dir| maze.neighbor(current, dir).map(|next| (dir, next)))
                .filter(|&(_, (x, y))| !visited[y * width + x])
                .collect();

            if unvisited.is_empty() {
                stack.pop();
                continue;
            }

            let (dir, next) = unvisited[rng.random_range(0..unvisited.len())];
            maze.carve(current, dir);
            visited[next.1 * width + next.0] = true;
            stack.push(next);
        }

        maze
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn exit(&self) -> Position {
        (self.width - 1, self.height - 1)
    }

    pub fn has_wall(&self, (x, y): Position, dir: Direction) -> bool {
        self.walls[y * self.width + x] & dir.wall() != 0
    }

    /// Neighbouring cell inside the grid, ignoring walls
    pub fn neighbor(&self, (x, y): Position, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if y > 0 => Some((x, y - 1)),
            Direction::Down if y + 1 < self.height => Some((x, y + 1)),
            Direction::Left if x > 0 => Some((x - 1, y)),
            Direction::Right if x + 1 < self.width => Some((x + 1, y)),
            _ => None,
        }
    }

    pub fn can_move(&self, pos: Position, dir: Direction) -> bool {
        !self.has_wall(pos, dir) && self.neighbor(pos, dir).is_some()
    }

    /// Tile grid of `(2w+1) x (2h+1)` where `true` marks a wall tile.
    /// Cell `(x, y)` sits at tile `(2x+1, 2y+1)`.
    pub fn tiles(&self) -> Vec<Vec<bool>> {
        let mut tiles = vec![vec![true; self.width * 2 + 1]; self.height * 2 + 1];
        for y in 0..self.height {
            for x in 0..self.width {
                let (tx, ty) = (x * 2 + 1, y * 2 + 1);
                tiles[ty][tx] = false;
                if !self.has_wall((x, y), Direction::Right) {
                    tiles[ty][tx + 1] = false;
                }
                if !self.has_wall((x, y), Direction::Down) {
                    tiles[ty + 1][tx] = false;
                }
            }
        }
        tiles
    }

    fn carve(&mut self, pos: Position, dir: Direction) {
        if let Some(next) = self.neighbor(pos, dir) {
            self.walls[pos.1 * self.width + pos.0] &= !dir.wall();
            self.walls[next.1 * self.width + next.0] &= !dir.opposite().wall();
        }
    }
}

/// Per-difficulty maze size and clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeRules {
    pub width: usize,
    pub height: usize,
    pub time_limit: Duration,
}

impl MazeRules {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self { width: 8, height: 5, time_limit: Duration::from_secs(120) },
            Difficulty::Medium => Self { width: 12, height: 7, time_limit: Duration::from_secs(90) },
            Difficulty::Hard => Self { width: 16, height: 9, time_limit: Duration::from_secs(60) },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Blocked,
    Escaped,
}

/// A player walking through one maze
#[derive(Debug, Clone)]
pub struct MazeRun {
    maze: Maze,
    player: Position,
    moves: u32,
    bumps: u32,
    escaped: bool,
}

impl MazeRun {
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            player: (0, 0),
            moves: 0,
            bumps: 0,
            escaped: false,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn bumps(&self) -> u32 {
        self.bumps
    }

    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    pub fn step(&mut self, dir: Direction) -> StepOutcome {
        if self.escaped {
            return StepOutcome::Escaped;
        }
        if !self.maze.can_move(self.player, dir) {
            self.bumps += 1;
            return StepOutcome::Blocked;
        }
        if let Some(next) = self.maze.neighbor(self.player, dir) {
            self.player = next;
            self.moves += 1;
        }
        if self.player == self.maze.exit() {
            self.escaped = true;
            StepOutcome::Escaped
        } else {
            StepOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::VecDeque;

    fn maze(width: usize, height: usize, seed: u64) -> Maze {
        Maze::generate(width, height, &mut Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    /// Shortest path of moves from the start to the exit
    fn solve(maze: &Maze) -> Vec<Direction> {
        let mut came_from: Vec<Option<(Position, Direction)>> = vec![None; maze.width() * maze.height()];
        let mut seen = vec![false; maze.width() * maze.height()];
        let mut queue = VecDeque::from([(0usize, 0usize)]);
        seen[0] = true;
        while let Some(pos) = queue.pop_front() {
            for dir in Direction::ALL {
                if !maze.can_move(pos, dir) {
                    continue;
                }
                let next = maze.neighbor(pos, dir).unwrap();
                let idx = next.1 * maze.width() + next.0;
                if !seen[idx] {
                    seen[idx] = true;
                    came_from[idx] = Some((pos, dir));
                    queue.push_back(next);
                }
            }
        }
        let mut path = Vec::new();
        let mut pos = maze.exit();
        while let Some((prev, dir)) = came_from[pos.1 * maze.width() + pos.0] {
            path.push(dir);
            pos = prev;
        }
        path.reverse();
        path
    }

    #[test]
    fn test_generated_maze_is_perfect() {
        for seed in 0..20 {
            let maze = maze(12, 7, seed);
            let tiles = maze.tiles();
            let open_passages = (0..maze.height())
                .flat_map(|y| (0..maze.width()).map(move |x| (x, y)))
                .map(|(x, y)| {
                    usize::from(!tiles[y * 2 + 1][x * 2 + 2]) + usize::from(!tiles[y * 2 + 2][x * 2 + 1])
                })
                .sum::<usize>();
            // a spanning tree over all cells has exactly cells - 1 edges
            assert_eq!(open_passages, maze.width() * maze.height() - 1);
            assert!(!solve(&maze).is_empty());
        }
    }

    #[test]
    fn test_outer_border_is_solid() {
        let tiles = maze(8, 5, 3).tiles();
        assert_eq!(tiles.len(), 11);
        assert!(tiles[0].iter().all(|&wall| wall));
        assert!(tiles[10].iter().all(|&wall| wall));
        assert!(tiles.iter().all(|row| row[0] && row[16]));
    }

    #[test]
    fn test_walls_block_movement() {
        let mut run = MazeRun::new(maze(8, 5, 1));
        assert_eq!(run.step(Direction::Up), StepOutcome::Blocked);
        assert_eq!(run.step(Direction::Left), StepOutcome::Blocked);
        assert_eq!(run.player(), (0, 0));
        assert_eq!(run.bumps(), 2);
        assert_eq!(run.moves(), 0);
    }

    #[test]
    fn test_following_solution_escapes() {
        let maze = maze(16, 9, 11);
        let path = solve(&maze);
        let mut run = MazeRun::new(maze);
        let last = path.len() - 1;
        for (i, dir) in path.into_iter().enumerate() {
            let outcome = run.step(dir);
            if i == last {
                assert_eq!(outcome, StepOutcome::Escaped);
            } else {
                assert_eq!(outcome, StepOutcome::Moved);
            }
        }
        assert!(run.is_escaped());
        assert_eq!(run.bumps(), 0);
    }

    #[test]
    fn test_rules_scale_with_difficulty() {
        let easy = MazeRules::for_difficulty(Difficulty::Easy);
        let hard = MazeRules::for_difficulty(Difficulty::Hard);
        assert!(hard.width * hard.height > easy.width * easy.height);
        assert!(hard.time_limit < easy.time_limit);
    }
}
