//! Aggregated results of a conversion run

use super::entry::RenameOutcome;

/// Statistics about a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of directories whose children were converted
    pub directories_visited: usize,
    /// Number of entries whose converted name equals the current one
    pub unchanged: usize,
    /// Number of entries renamed
    pub renamed: usize,
    /// Number of entries that could not be converted
    pub failed: usize,
}

/// Every outcome of a run, in the order the entries were handled
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<RenameOutcome>,
    stats: RunStats,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one outcome and updates the statistics
    pub fn record(&mut self, outcome: RenameOutcome) {
        match &outcome {
            RenameOutcome::Unchanged(_) => self.stats.unchanged += 1,
            RenameOutcome::Renamed { .. } => self.stats.renamed += 1,
            RenameOutcome::Failed { .. } => self.stats.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Increments the number of directories visited
    pub fn increment_directories_visited(&mut self) {
        self.stats.directories_visited += 1;
    }

    pub fn outcomes(&self) -> &[RenameOutcome] {
        &self.outcomes
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Whether any entry failed to convert
    pub fn has_failures(&self) -> bool {
        self.stats.failed > 0
    }

    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &RenameOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::path_operation_error;
    use std::path::PathBuf;

    #[test]
    fn test_record_updates_stats() {
        let mut report = RunReport::new();
        report.increment_directories_visited();
        report.record(RenameOutcome::Unchanged(PathBuf::from("a")));
        report.record(RenameOutcome::Renamed {
            from: PathBuf::from("B"),
            to: PathBuf::from("b"),
        });
        report.record(RenameOutcome::Failed {
            path: PathBuf::from("C"),
            reason: path_operation_error(PathBuf::from("C"), "rename"),
        });

        assert_eq!(
            report.stats(),
            &RunStats {
                directories_visited: 1,
                unchanged: 1,
                renamed: 1,
                failed: 1,
            }
        );
        assert_eq!(report.outcomes().len(), 3);
        assert!(report.has_failures());
        assert_eq!(report.failures().count(), 1);
    }
}
