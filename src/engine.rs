use crate::cell::Cell;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::observer::{create_observer, GenerationObserver};
use crossterm::{
    cursor::Hide,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::{debug, info};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

/// The automaton engine.
/// Main entry point for running the simulation.
///
/// The engine owns one live grid and one snapshot, the reset target. The
/// snapshot is replaced whenever the host commits an edit while the
/// simulation is idle, so `reset` always restores the last hand-edited
/// configuration.
pub struct Engine {
    grid: Grid,
    snapshot: Grid,
    previous: Grid,
    run_state: RunState,
    generation: usize,
    speed: Duration,
    next_step_at: Option<Instant>,
    observer: Box<dyn GenerationObserver>,
}

/// Whether automatic stepping is active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Idle,
    Running,
}

/// The result of one generation transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// At least one cell changed state.
    Changed,
    /// No cell changed state; the simulation has stabilized.
    Stable,
}

impl Engine {
    /// Creates an idle engine with an empty grid.
    ///
    /// # Arguments
    /// * `size` - The side length of the grid. Must be greater than zero.
    /// * `observer` - Receives every computed generation. Pass `None` for no notifications.
    pub fn new(
        size: usize,
        observer: Option<Box<dyn GenerationObserver>>,
    ) -> Result<Engine, EngineError> {
        Ok(Engine::from_grid(Grid::new(size)?, observer))
    }

    /// Creates an idle engine whose starting grid is parsed from a pattern.
    ///
    /// # Arguments
    /// * `contents` - The text representation of the starting grid.
    /// * `observer` - Receives every computed generation. Pass `None` for no notifications.
    pub fn from_pattern(
        contents: &str,
        observer: Option<Box<dyn GenerationObserver>>,
    ) -> Result<Engine, EngineError> {
        Ok(Engine::from_grid(Grid::parse(contents)?, observer))
    }

    /// Creates an idle engine around an existing grid.
    ///
    /// The grid becomes both the live matrix and the reset target.
    pub fn from_grid(grid: Grid, observer: Option<Box<dyn GenerationObserver>>) -> Engine {
        let snapshot = grid.clone();
        let previous = grid.clone();

        Engine {
            grid,
            snapshot,
            previous,
            run_state: RunState::Idle,
            generation: 0,
            speed: Duration::from_millis(200),
            next_step_at: None,
            observer: create_observer(observer),
        }
    }

    /// Flips a cell and commits the edit as the new reset target.
    ///
    /// Only allowed while idle; edits during playback are rejected without
    /// touching the grid.
    ///
    /// # Arguments
    /// * `row` - The row of the cell to flip.
    /// * `col` - The column of the cell to flip.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        if self.run_state == RunState::Running {
            return Err(EngineError::IllegalStateTransition {
                operation: "toggle_cell",
            });
        }

        if row >= self.grid.size() || col >= self.grid.size() {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                size: self.grid.size(),
            });
        }

        self.grid.toggle(row, col);
        // Hand edits while idle become the configuration `reset` restores
        self.snapshot = self.grid.clone();

        Ok(())
    }

    /// Computes one generation transition and applies it.
    ///
    /// Every cell is evaluated against the same pre-step grid and all cells
    /// update simultaneously. Returns `Stable` if no cell changed state.
    /// Never alters the run state.
    pub fn step(&mut self) -> StepOutcome {
        let previous = self.grid.clone();
        self.grid = Engine::next_generation(&previous);
        self.generation += 1;

        let outcome = if self.grid == previous {
            StepOutcome::Stable
        } else {
            StepOutcome::Changed
        };

        self.observer
            .on_generation(self.generation, &previous, &self.grid, outcome);
        self.previous = previous;

        outcome
    }

    /// Starts automatic stepping.
    ///
    /// Arms the first scheduled step `speed_ms` milliseconds out; the host
    /// drives the schedule by pumping `tick`. No-op while already running.
    ///
    /// # Arguments
    /// * `speed_ms` - Milliseconds between generations.
    pub fn play(&mut self, speed_ms: u64) {
        if self.run_state == RunState::Running {
            return;
        }

        self.speed = Duration::from_millis(speed_ms);
        self.run_state = RunState::Running;
        self.next_step_at = Some(Instant::now() + self.speed);
        info!("playing at {} ms per generation", speed_ms);
    }

    /// Runs the scheduled step if its deadline has passed.
    ///
    /// Returns `None` while idle or before the deadline. Otherwise computes
    /// exactly one generation, re-arms the schedule, and stops the engine
    /// automatically when the grid has stabilized.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        let deadline = self.next_step_at?;
        if Instant::now() < deadline {
            return None;
        }

        let outcome = self.step();
        match outcome {
            StepOutcome::Stable => {
                info!("grid stabilized after {} generations", self.generation);
                self.stop();
            }
            StepOutcome::Changed => {
                self.next_step_at = Some(deadline + self.speed);
            }
        }

        Some(outcome)
    }

    /// Stops automatic stepping and cancels any pending scheduled step.
    /// Idempotent.
    pub fn stop(&mut self) {
        if self.run_state == RunState::Running {
            debug!("stopped at generation {}", self.generation);
        }

        self.run_state = RunState::Idle;
        self.next_step_at = None;
    }

    /// Stops the engine and restores the grid to the last committed
    /// configuration.
    pub fn reset(&mut self) {
        self.stop();
        self.grid = self.snapshot.clone();
        self.previous = self.snapshot.clone();
        self.generation = 0;
        debug!("reset to the saved configuration");
    }

    /// Stops the engine and replaces the grid and its snapshot with a fresh
    /// empty grid, optionally at a new size.
    ///
    /// # Arguments
    /// * `new_size` - The new side length, or `None` to keep the current one.
    pub fn clear(&mut self, new_size: Option<usize>) -> Result<(), EngineError> {
        let size = new_size.unwrap_or_else(|| self.grid.size());
        // Validate the size before touching any state
        let grid = Grid::new(size)?;

        self.stop();
        self.snapshot = grid.clone();
        self.previous = grid.clone();
        self.grid = grid;
        self.generation = 0;
        debug!("cleared to an empty {}x{} grid", size, size);

        Ok(())
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The pre-step grid of the last computed generation, for hosts that
    /// render per-cell differences.
    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Draws the simulation to the console.
    pub fn draw(&self) {
        let mut stdout = stdout();

        execute!(
            stdout,
            Clear(ClearType::All),
            Hide,
            Print("Generation: "),
            Print(self.generation.to_string()),
            Print("\nState: "),
            Print(format!("{:?}", self.run_state)),
            Print("\nAlive: "),
            Print(self.grid.alive_count().to_string()),
            Print("\n\n")
        )
        .unwrap();

        self.grid.draw(Some(&self.previous));
        stdout.flush().unwrap();
    }

    fn next_generation(grid: &Grid) -> Grid {
        let mut next = grid.clone();

        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let neighbors = grid.alive_neighbors(row, col);
                let cell = match (grid.get(row, col).unwrap(), neighbors) {
                    // A live cell survives with 2 or 3 live neighbors
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    // A dead cell becomes alive with exactly 3 live neighbors
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
                next.set(row, col, cell);
            }
        }

        next
    }
}
