//! RunAggregator: evaluate every configured dimension across many runs.
//!
//! Each run loads its own `VectorSpace`, folds composite terms, builds and
//! validates each dimension, compares dimension pairs and lists neighbors.
//! Runs are independent and mapped in parallel; results are reduced in run
//! order so the report does not depend on scheduling.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use semdim_core::constants::VERSION;
use semdim_core::errors::{AggregateError, SemdimError, SemdimResult};
use semdim_core::models::{ComparisonSpec, DimensionSpec, RunId, TermFoldSpec};
use semdim_core::SemdimConfig;
use semdim_dimensions::{
    DimensionBuilder, DimensionComparator, DimensionMethod, DimensionValidator,
};
use semdim_space::{IEmbeddingStore, TermFolder, VectorSpace};
use tracing::{debug, error, info, warn};

use crate::metrics::MetricRegistry;
use crate::record::{ComparisonResult, DimensionFailure, RunRecord};
use crate::report::AggregateReport;
use crate::word_counts::{count_words, WordCountEntry};

/// A run that contributed nothing to the aggregate.
#[derive(Debug)]
pub struct RunFailure {
    pub run: RunId,
    pub error: SemdimError,
}

/// Successful records, failed runs, and the report built from the successes.
#[derive(Debug)]
pub struct AggregateOutcome {
    /// Records in run order.
    pub records: Vec<RunRecord>,
    pub failures: Vec<RunFailure>,
    pub report: AggregateReport,
}

impl AggregateOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_runs(&self) -> Vec<RunId> {
        self.failures.iter().map(|f| f.run).collect()
    }
}

pub struct RunAggregator {
    dimensions: Vec<DimensionSpec>,
    comparisons: Vec<ComparisonSpec>,
    folds: Vec<TermFoldSpec>,
    word_counts: Vec<WordCountEntry>,
    registry: MetricRegistry,
    runs: Vec<RunId>,
    method: DimensionMethod,
    k: usize,
    neighbor_count: usize,
    fail_fast: bool,
    threads: usize,
}

impl RunAggregator {
    /// Set up a study over `dimensions` with the runs, folds and
    /// validation settings from `config`.
    ///
    /// # Errors
    /// Invalid configuration, a comparison naming an unknown dimension, or
    /// two dimensions sharing a name.
    pub fn new(
        config: &SemdimConfig,
        dimensions: Vec<DimensionSpec>,
        comparisons: Vec<ComparisonSpec>,
    ) -> SemdimResult<Self> {
        config.validate()?;
        for cmp in &comparisons {
            for name in [&cmp.first, &cmp.second] {
                if !dimensions.iter().any(|d| &d.name == name) {
                    return Err(AggregateError::UnknownDimension {
                        label: cmp.label.clone(),
                        dimension: name.clone(),
                    }
                    .into());
                }
            }
        }
        let registry = MetricRegistry::for_study(&dimensions, &comparisons)?;
        Ok(Self {
            dimensions,
            comparisons,
            folds: config.folding.terms.clone(),
            word_counts: Vec::new(),
            registry,
            runs: RunId::grid(&config.study.windows, &config.study.resamples),
            method: DimensionMethod::default(),
            k: config.validation.folds,
            neighbor_count: config.validation.neighbor_count,
            fail_fast: config.aggregation.fail_fast,
            threads: config.aggregation.threads,
        })
    }

    /// Also record the frequency of each entry in every run.
    pub fn with_word_counts(mut self, entries: Vec<WordCountEntry>) -> Self {
        self.word_counts = entries;
        self
    }

    pub fn with_method(mut self, method: DimensionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    /// The configured window × resample grid.
    pub fn runs(&self) -> &[RunId] {
        &self.runs
    }

    /// Evaluate the configured run grid.
    pub fn aggregate_study(
        &self,
        store: &dyn IEmbeddingStore,
    ) -> Result<AggregateOutcome, AggregateError> {
        self.aggregate(store, &self.runs)
    }

    /// Evaluate `runs` from `store` and summarize.
    ///
    /// A failed run is recorded and the rest continue. With `fail_fast`, no
    /// new runs start after a failure and the earliest failed run (in the
    /// order given) is returned as `RunFailed`.
    pub fn aggregate(
        &self,
        store: &dyn IEmbeddingStore,
        runs: &[RunId],
    ) -> Result<AggregateOutcome, AggregateError> {
        let start = Instant::now();
        info!(
            version = VERSION,
            store = store.name(),
            runs = runs.len(),
            "aggregation started"
        );

        let stop = AtomicBool::new(false);
        let evaluate = || {
            runs.par_iter()
                .map(|&run| {
                    if self.fail_fast && stop.load(Ordering::Relaxed) {
                        return None;
                    }
                    let result = store
                        .load(run)
                        .map_err(SemdimError::from)
                        .and_then(|space| self.evaluate_run(space, run));
                    if result.is_err() && self.fail_fast {
                        stop.store(true, Ordering::Relaxed);
                    }
                    Some((run, result))
                })
                .collect::<Vec<_>>()
        };
        let results = match self.pool() {
            Some(pool) => pool.install(evaluate),
            None => evaluate(),
        };

        let mut records = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (run, result) in results.into_iter().flatten() {
            match result {
                Ok(record) => records.push(record),
                Err(err) => {
                    if self.fail_fast {
                        error!(%run, error = %err, "run failed, aborting aggregation");
                        return Err(AggregateError::RunFailed {
                            run: run.to_string(),
                            source: Box::new(err),
                        });
                    }
                    warn!(%run, error = %err, "run failed, continuing");
                    failures.push(RunFailure { run, error: err });
                }
            }
        }

        let report = AggregateReport::build(&self.registry, &records)?;
        info!(
            succeeded = records.len(),
            failed = failures.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "aggregation finished"
        );
        Ok(AggregateOutcome {
            records,
            failures,
            report,
        })
    }

    /// Fold composites into `space`, then build, validate, compare and list
    /// neighbors for every dimension.
    ///
    /// # Errors
    /// A fold failure or a neighbor search failure fails the whole run.
    /// Dimension-level failures are recorded in the returned record instead.
    pub fn evaluate_run(&self, mut space: VectorSpace, run: RunId) -> SemdimResult<RunRecord> {
        info!(
            window = run.window,
            resample = run.resample,
            vocabulary = space.len(),
            "run started"
        );
        TermFolder::fold_all(&mut space, &self.folds)?;

        let mut record = RunRecord::new(run);
        record.word_counts = count_words(&space, run, &self.word_counts);

        for spec in &self.dimensions {
            let dimension = match DimensionBuilder::build(&space, spec, self.method) {
                Ok(d) => d,
                Err(err) => {
                    warn!(%run, dimension = %spec.name, error = %err, "dimension skipped");
                    record.dimension_failures.push(DimensionFailure {
                        dimension: spec.name.clone(),
                        error: err,
                    });
                    continue;
                }
            };
            match DimensionValidator::validate(&space, &dimension, self.k) {
                Ok(cv) => record.validations.push(cv),
                Err(err) => {
                    warn!(%run, dimension = %spec.name, error = %err, "validation skipped");
                    record.dimension_failures.push(DimensionFailure {
                        dimension: spec.name.clone(),
                        error: err,
                    });
                }
            }
            record
                .neighbors
                .push(DimensionComparator::neighbors(&space, &dimension, self.neighbor_count)?);
            record.dimensions.push(dimension);
        }

        for cmp in &self.comparisons {
            match (record.dimension(&cmp.first), record.dimension(&cmp.second)) {
                (Some(a), Some(b)) => {
                    let cosine = DimensionComparator::cosine(a, b);
                    record.comparisons.push(ComparisonResult {
                        label: cmp.label.clone(),
                        first: cmp.first.clone(),
                        second: cmp.second.clone(),
                        cosine,
                    });
                }
                _ => debug!(%run, comparison = %cmp.label, "comparison skipped"),
            }
        }

        info!(
            window = run.window,
            resample = run.resample,
            dimensions = record.dimensions.len(),
            failures = record.dimension_failures.len(),
            "run finished"
        );
        Ok(record)
    }

    fn pool(&self) -> Option<rayon::ThreadPool> {
        if self.threads == 0 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!(threads = self.threads, error = %err, "falling back to the global pool");
                None
            }
        }
    }
}
