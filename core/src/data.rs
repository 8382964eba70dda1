//! Literal sample data shown on the dashboard
//!
//! Every constructor returns a fresh value; nothing here is cached or shared.

use crate::error::TableError;
use chrono::{Duration, NaiveDate};
use std::fmt;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Int(n)
    }
}

/// A rectangular table: every row has one cell per column
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(TableError::RaggedRow {
                row,
                expected: columns.len(),
                found: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Build a two-column label/count table
    pub fn from_pairs(
        label_column: &str,
        value_column: &str,
        pairs: &[(&str, i64)],
    ) -> Result<Self, TableError> {
        Self::new(
            vec![label_column.to_string(), value_column.to_string()],
            pairs
                .iter()
                .map(|(label, value)| vec![Cell::from(*label), Cell::from(*value)])
                .collect(),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every cell of the given column as text
    pub fn text_column(&self, column: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).map(Cell::to_string))
            .collect()
    }

    /// Integer values of the given column, skipping text cells
    pub fn int_column(&self, column: usize) -> Vec<i64> {
        self.rows
            .iter()
            .filter_map(|row| match row.get(column) {
                Some(Cell::Int(n)) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

const UNITS: [(&str, i64); 3] = [("ICU", 12), ("Surgical", 30), ("Medical", 25)];

/// Beds occupied per hospital unit (Home page preview)
pub fn unit_occupancy() -> Result<Table, TableError> {
    Table::from_pairs("Unit", "Beds Occupied", &UNITS)
}

/// Beds per hospital unit (Capacity Planning bar chart)
pub fn unit_beds() -> Result<Table, TableError> {
    Table::from_pairs("Unit", "Beds", &UNITS)
}

pub const ADMISSIONS: [i64; 7] = [10, 15, 18, 12, 20, 22, 19];

/// First day of the admissions series
pub fn admissions_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Daily admissions over seven consecutive days
pub fn admissions_trend() -> Vec<(NaiveDate, i64)> {
    let start = admissions_start();
    ADMISSIONS
        .iter()
        .enumerate()
        .map(|(offset, count)| (start + Duration::days(offset as i64), *count))
        .collect()
}

/// Infection rate samples for the distribution histogram
pub fn infection_rates() -> Vec<i64> {
    vec![2, 3, 5, 4, 6, 7, 3, 4, 5, 6]
}

/// Monthly patient satisfaction scores
pub fn satisfaction_trend() -> Vec<(&'static str, i64)> {
    vec![("Jan", 70), ("Feb", 75), ("Mar", 80), ("Apr", 78), ("May", 85)]
}

/// Readmission rate by gender
pub fn readmission_by_gender() -> Result<Table, TableError> {
    Table::from_pairs("Gender", "Readmission Rate", &[("Male", 12), ("Female", 15)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_occupancy_rows() {
        let table = unit_occupancy().unwrap();
        assert_eq!(table.columns(), ["Unit", "Beds Occupied"]);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows()[0],
            vec![Cell::Text("ICU".into()), Cell::Int(12)]
        );
        assert_eq!(table.int_column(1), vec![12, 30, 25]);
        assert_eq!(table.text_column(0), ["ICU", "Surgical", "Medical"]);
    }

    #[test]
    fn test_pairs_go_through_validation() {
        let built = Table::from_pairs("Gender", "Readmission Rate", &[("Male", 12)]).unwrap();
        let checked = Table::new(
            vec!["Gender".into(), "Readmission Rate".into()],
            vec![vec!["Male".into(), 12.into()]],
        )
        .unwrap();
        assert_eq!(built, checked);
        assert_eq!(readmission_by_gender().unwrap().int_column(1), vec![12, 15]);
    }

    #[test]
    fn test_admissions_are_consecutive_days() {
        let series = admissions_trend();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].0, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        for pair in series.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, Duration::days(1));
        }
        let counts: Vec<i64> = series.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![10, 15, 18, 12, 20, 22, 19]);
    }

    #[test]
    fn test_ragged_table_rejected() {
        let err = Table::new(
            vec!["Unit".into(), "Beds".into()],
            vec![vec!["ICU".into(), 12.into()], vec!["Surgical".into()]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(Table::new(vec![], vec![]), Err(TableError::NoColumns));
    }

    #[test]
    fn test_samples_are_fresh() {
        let mut first = infection_rates();
        first.clear();
        assert_eq!(infection_rates().len(), 10);
    }
}
