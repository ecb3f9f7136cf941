//! In-memory game state for tests and the probe binary

use std::error::Error;
use std::fmt;

use crate::infra::{GhostPos, Position};
use crate::state::{GameStateView, GhostState, Grid};

const WALL: char = '%';
const FOOD: char = '.';
const PACMAN: char = 'P';
const GHOST: char = 'G';
const OPEN: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    MissingPacman,
    UnknownTile { tile: char, x: i32, y: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout has no rows"),
            LayoutError::MissingPacman => write!(f, "layout has no 'P' tile"),
            LayoutError::UnknownTile { tile, x, y } => {
                write!(f, "unknown tile '{tile}' at ({x}, {y})")
            }
        }
    }
}

impl Error for LayoutError {}

/// A plain, owned game state.
///
/// Implements [`GameStateView`] so extractors can run against it; tests
/// build one from an ASCII maze, the probe binary from a layout file.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    walls: Grid,
    food: Grid,
    pacman: Position,
    ghosts: Vec<GhostState>,
}

impl GameSnapshot {
    pub fn new(walls: Grid, food: Grid, pacman: Position, ghosts: Vec<GhostState>) -> Self {
        Self {
            walls,
            food,
            pacman,
            ghosts,
        }
    }

    /// Parses an ASCII maze: `%` wall, `.` food, `P` the agent, `G` a
    /// ghost, space open floor. The first text row is the top of the maze;
    /// ghosts are numbered 1.. in reading order. Blank lines are skipped.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i32;
        let height = rows.len() as i32;

        let mut walls = Grid::new(width, height);
        let mut food = Grid::new(width, height);
        let mut pacman = None;
        let mut ghosts = Vec::new();

        for (row_index, row) in rows.iter().enumerate() {
            let y = height - 1 - row_index as i32;
            for (col_index, tile) in row.chars().enumerate() {
                let pos = Position::new(col_index as i32, y);
                match tile {
                    WALL => walls.set(pos, true),
                    FOOD => food.set(pos, true),
                    PACMAN => pacman = Some(pos),
                    GHOST => ghosts.push(GhostState::new(GhostPos::at_cell(pos))),
                    OPEN => {}
                    other => {
                        return Err(LayoutError::UnknownTile {
                            tile: other,
                            x: pos.x,
                            y: pos.y,
                        });
                    }
                }
            }
        }

        let pacman = pacman.ok_or(LayoutError::MissingPacman)?;
        Ok(Self::new(walls, food, pacman, ghosts))
    }

    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    pub fn set_scared_timer(&mut self, id: usize, timer: i32) {
        self.ghosts[id - 1].scared_timer = timer;
    }

    pub fn set_ghost_position(&mut self, id: usize, position: GhostPos) {
        self.ghosts[id - 1].position = position;
    }

    pub fn set_food(&mut self, pos: Position, value: bool) {
        self.food.set(pos, value);
    }
}

impl GameStateView for GameSnapshot {
    fn walls(&self) -> &Grid {
        &self.walls
    }

    fn food(&self) -> &Grid {
        &self.food
    }

    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn ghost_positions(&self) -> Vec<GhostPos> {
        self.ghosts.iter().map(|ghost| ghost.position).collect()
    }

    fn ghost_state(&self, id: usize) -> GhostState {
        self.ghosts[id - 1]
    }
}
