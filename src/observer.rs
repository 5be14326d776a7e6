use crate::engine::StepOutcome;
use crate::grid::Grid;

pub fn create_observer(
    observer: Option<Box<dyn GenerationObserver>>,
) -> Box<dyn GenerationObserver> {
    match observer {
        None => Box::new(NoOpObserver {}),
        Some(observer) => observer,
    }
}

/// Receives every computed generation, manual or automatic.
///
/// The previous and current grids are both supplied so a host can derive
/// per-cell display distinctions (cells that just became alive, cells about
/// to die) by diffing them, without the engine recomputing anything for
/// display.
pub trait GenerationObserver: Send + Sync {
    #[allow(unused_variables)]
    fn on_generation(
        &mut self,
        generation: usize,
        previous: &Grid,
        current: &Grid,
        outcome: StepOutcome,
    ) {
    }
}

struct NoOpObserver;
impl GenerationObserver for NoOpObserver {}
