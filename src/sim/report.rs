//! Result summaries for display and export.

use serde::{Deserialize, Serialize};

use super::config::SimulationStats;
use super::tally::TallyTable;
use crate::eval::{theoretical_percentage, HandType};

/// One category's simulated frequency next to its theoretical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Category reported on.
    pub hand_type: HandType,
    /// Display name of the category.
    pub name: String,
    /// Hands classified into the category.
    pub count: u64,
    /// Simulated percentage (0-100).
    pub percentage: f64,
    /// Theoretical percentage (0-100).
    pub theoretical: f64,
    /// Absolute difference in percentage points.
    pub error: f64,
}

impl ReportRow {
    /// Build a row from a category's count out of `total` hands.
    pub fn new(hand_type: HandType, count: u64, total: u64) -> Self {
        let percentage = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let theoretical = theoretical_percentage(hand_type);
        Self {
            hand_type,
            name: hand_type.name().to_string(),
            count,
            percentage,
            theoretical,
            error: (percentage - theoretical).abs(),
        }
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Hands sampled.
    pub total: u64,
    /// One row per reported category, rarest first.
    pub rows: Vec<ReportRow>,
    /// Timing of the run.
    pub stats: SimulationStats,
}

impl Report {
    /// Report on every category of a table.
    pub fn new(table: &TallyTable, stats: &SimulationStats) -> Self {
        let total = table.total();
        Self {
            total,
            rows: table
                .iter()
                .map(|(t, count)| ReportRow::new(t, count, total))
                .collect(),
            stats: stats.clone(),
        }
    }

    /// Report on a single category found `count` times in `total` hands.
    pub fn single(hand_type: HandType, count: u64, total: u64, stats: &SimulationStats) -> Self {
        Self {
            total,
            rows: vec![ReportRow::new(hand_type, count, total)],
            stats: stats.clone(),
        }
    }

    /// Largest deviation from theory across reported categories.
    pub fn max_error(&self) -> f64 {
        self.rows.iter().map(|r| r.error).fold(0.0, f64::max)
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_table() {
        let mut table = TallyTable::new();
        table.add_count(HandType::OnePair, 40);
        table.add_count(HandType::HighCard, 60);
        let report = Report::new(&table, &SimulationStats::new());

        assert_eq!(report.total, 100);
        assert_eq!(report.rows.len(), HandType::COUNT);
        let pair = &report.rows[HandType::OnePair.index()];
        assert_eq!(pair.count, 40);
        assert_eq!(pair.percentage, 40.0);
        assert!((pair.error - (42.2569 - 40.0)).abs() < 1e-9);
        assert!(report.max_error() >= pair.error);
    }

    #[test]
    fn test_single_and_json() {
        let report = Report::single(HandType::Flush, 0, 0, &SimulationStats::new());
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].percentage, 0.0);

        let json = report.to_json().unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows[0].hand_type, HandType::Flush);
        assert!(json.contains("\"Flush\""));
    }
}
