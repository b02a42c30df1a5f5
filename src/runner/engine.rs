// Run orchestrator and session context for the sorting workbench

use crate::algorithms::Number;
use crate::fileio;
use crate::registry::{Algorithm, Registry, SortOrder};
use crate::runner::errors::SortError;
use crate::stats::Statistics;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a single sorting run.
///
/// Holds everything the presentation boundary needs: the selections, the
/// sorted sequence with order applied, the timing window, and summary
/// statistics.  `stats` is `None` exactly when the input was empty; callers
/// decide whether that becomes a warning or a sentinel.  Every run produces a
/// fresh `SortResult`; results are superseded, never merged.
#[derive(Debug, Clone)]
pub struct SortResult {
    /// Algorithm that produced this result
    pub algorithm: Algorithm,

    /// Order applied to the sorted sequence
    pub order: SortOrder,

    /// The sorted sequence, order applied
    pub numbers: Vec<Number>,

    /// Wall-clock time of the sort call plus order application
    pub elapsed: Duration,

    /// Summary statistics, `None` for an empty input
    pub stats: Option<Statistics>,
}

/// Sort `numbers` with `algorithm` and apply `order`.
///
/// The timing window covers the sort invocation and the order application
/// only; statistics are computed outside it.  The caller's slice is copied,
/// never mutated.  Empty input is valid and produces an empty result with
/// `stats == None` (see [`Statistics::compute`] for the strict variant).
pub fn run(numbers: &[Number], algorithm: Algorithm, order: SortOrder) -> SortResult {
    let sort = algorithm.sort_fn();

    let started = Instant::now();
    let mut sorted = sort(numbers);
    if order == SortOrder::Descending {
        sorted.reverse();
    }
    let elapsed = started.elapsed();

    // Empty input: leave stats out and let the caller surface it.
    let stats = Statistics::compute(&sorted).ok();

    debug!(
        "{} sorted {} values ({}) in {:?}",
        algorithm.name(),
        sorted.len(),
        order.name(),
        elapsed
    );

    SortResult {
        algorithm,
        order,
        numbers: sorted,
        elapsed,
        stats,
    }
}

/// Explicit session state for one user's load → select → run → save flow.
///
/// The loaded numbers and the current selections live in one context object
/// rather than in ambient presentation state, so the whole workflow can be
/// driven (and tested) without any front end attached.
pub struct Session {
    registry: Registry,
    file_path: Option<PathBuf>,
    numbers: Vec<Number>,
    algorithm: Algorithm,
    order: SortOrder,
    last_result: Option<SortResult>,
}

impl Session {
    /// New session with the default selections: Timsort, ascending.
    pub fn new() -> Self {
        Session {
            registry: Registry::new(),
            file_path: None,
            numbers: Vec::new(),
            algorithm: Algorithm::Timsort,
            order: SortOrder::Ascending,
            last_result: None,
        }
    }

    /// Load a numbers file, replacing any previously loaded list.
    ///
    /// On failure the session keeps its previous state: a load that never
    /// succeeded leaves [`Session::run`] failing with
    /// [`SortError::NoFileLoaded`].
    pub fn load(&mut self, path: &Path) -> Result<usize, SortError> {
        let numbers = fileio::load_numbers(path)?;
        info!("loaded {} integers from {}", numbers.len(), path.display());
        self.file_path = Some(path.to_path_buf());
        self.numbers = numbers;
        Ok(self.numbers.len())
    }

    /// Select the algorithm by user-supplied name.
    ///
    /// An unrecognized name is rejected and the current selection stays in
    /// place.
    pub fn select_algorithm(&mut self, name: &str) -> Result<Algorithm, SortError> {
        self.algorithm = self.registry.resolve(name)?;
        Ok(self.algorithm)
    }

    /// Select the sort order.
    pub fn select_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Run the selected algorithm over the loaded numbers.
    ///
    /// Fails with [`SortError::NoFileLoaded`] before the first successful
    /// [`Session::load`].  The previous result, if any, is discarded.
    pub fn run(&mut self) -> Result<&SortResult, SortError> {
        if self.file_path.is_none() {
            return Err(SortError::NoFileLoaded);
        }

        let result = run(&self.numbers, self.algorithm, self.order);
        info!(
            "{} run over {} values took {:?}",
            result.algorithm.name(),
            result.numbers.len(),
            result.elapsed
        );
        Ok(self.last_result.insert(result))
    }

    /// Save the last result, one integer per line.
    ///
    /// Fails with [`SortError::NoSortedData`] before the first successful
    /// [`Session::run`].
    pub fn save(&self, path: &Path) -> Result<(), SortError> {
        let result = self.last_result.as_ref().ok_or(SortError::NoSortedData)?;
        fileio::save_numbers(path, &result.numbers)?;
        info!(
            "saved {} integers to {}",
            result.numbers.len(),
            path.display()
        );
        Ok(())
    }

    /// Currently loaded numbers (empty before the first load)
    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    /// Currently selected algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Currently selected order
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Result of the most recent run, if any
    #[allow(dead_code)] // library surface; the binary consumes run() results directly
    pub fn last_result(&self) -> Option<&SortResult> {
        self.last_result.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
