use crate::config::BoardConfig;
use crate::domain::Grid;

/// How the next generation is computed. Both produce identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Evolution {
    #[default]
    Serial,
    /// Cells computed on the rayon pool
    Parallel,
}

/// Engine owns the board, the generation counter and the reset snapshot.
/// Callers get read-only views; every mutation goes through a method here.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    generation: u64,
    snapshot: Option<Grid>,
    alive_probability: f64,
    evolution: Evolution,
}

impl Engine {
    /// Create an engine with an empty board
    pub fn new(rows: usize, cols: usize, alive_probability: f64) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            generation: 0,
            snapshot: None,
            alive_probability,
            evolution: Evolution::default(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        let evolution = if config.parallel_step {
            Evolution::Parallel
        } else {
            Evolution::Serial
        };
        Self::new(config.rows, config.cols, config.alive_probability).with_evolution(evolution)
    }

    /// Start from a prepared board instead of an empty one
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_evolution(mut self, evolution: Evolution) -> Self {
        self.evolution = evolution;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> Option<&Grid> {
        self.snapshot.as_ref()
    }

    pub fn evolution(&self) -> Evolution {
        self.evolution
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.grid = match self.evolution {
            Evolution::Serial => self.grid.step(),
            Evolution::Parallel => self.grid.step_parallel(),
        };
        self.generation += 1;
    }

    /// Paint a cell alive; returns whether anything changed
    pub fn paint(&mut self, row: i32, col: i32) -> bool {
        self.grid.paint(row, col)
    }

    /// Empty the board, drop the snapshot and restart counting
    pub fn clear(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::new(rows, cols);
        self.snapshot = None;
        self.generation = 0;
    }

    /// Fill the board randomly and keep the result as the new snapshot
    pub fn randomize(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        self.install_random(Grid::random(rows, cols, self.alive_probability));
    }

    /// Randomize from an explicit randomness source
    pub fn randomize_with<R: rand::Rng>(&mut self, rng: &mut R) {
        let (rows, cols) = self.grid.dimensions();
        self.install_random(Grid::random_with(rows, cols, self.alive_probability, rng));
    }

    fn install_random(&mut self, grid: Grid) {
        self.snapshot = Some(grid.clone());
        self.grid = grid;
        self.generation = 0;
    }

    /// Remember the current board as the reset target
    pub fn capture_snapshot(&mut self) {
        self.snapshot = Some(self.grid.clone());
    }

    /// Put the snapshot back on the board. Returns false when there is none.
    pub fn restore_snapshot(&mut self) -> bool {
        match &self.snapshot {
            Some(snapshot) => {
                self.grid = snapshot.clone();
                self.generation = 0;
                true
            }
            None => false,
        }
    }

    pub fn is_all_dead(&self) -> bool {
        self.grid.is_all_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_engine() -> Engine {
        let grid = Grid::from_rows(&["...", "###", "..."]).unwrap();
        Engine::new(3, 3, 0.3).with_grid(grid)
    }

    #[test]
    fn test_step_counts_generations() {
        let mut engine = blinker_engine();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.grid(), blinker_engine().grid());
    }

    #[test]
    fn test_parallel_evolution_matches_serial() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut serial = Engine::new(20, 30, 0.4);
        serial.randomize_with(&mut rng);
        let mut parallel = serial.clone().with_evolution(Evolution::Parallel);
        for _ in 0..5 {
            serial.step();
            parallel.step();
        }
        assert_eq!(serial.grid(), parallel.grid());
    }

    #[test]
    fn test_randomize_sets_snapshot_and_resets_generation() {
        let mut engine = blinker_engine();
        engine.step();
        engine.randomize_with(&mut StdRng::seed_from_u64(3));
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.snapshot(), Some(engine.grid()));
    }

    #[test]
    fn test_clear_drops_snapshot() {
        let mut engine = blinker_engine();
        engine.capture_snapshot();
        engine.clear();
        assert!(engine.is_all_dead());
        assert!(engine.snapshot().is_none());
        assert!(!engine.restore_snapshot());
        assert_eq!(engine.grid().dimensions(), (3, 3));
    }

    #[test]
    fn test_restore_snapshot_round_trip() {
        let mut engine = blinker_engine();
        engine.capture_snapshot();
        let captured = engine.grid().clone();
        engine.step();
        engine.paint(0, 0);
        assert!(engine.restore_snapshot());
        assert_eq!(engine.grid(), &captured);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = BoardConfig {
            rows: 4,
            cols: 7,
            alive_probability: 0.5,
            parallel_step: true,
        };
        let engine = Engine::from_config(&config);
        assert_eq!(engine.grid().dimensions(), (4, 7));
        assert_eq!(engine.evolution(), Evolution::Parallel);
    }
}
