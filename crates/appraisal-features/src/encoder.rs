//! Feature Encoder
//!
//! Projects a [`PropertyRecord`] onto the column layout a trained model
//! expects. Encoding runs in two phases:
//!
//! 1. [`one_hot_row`] flattens the record into named scalar columns and
//!    expands each categorical field into a `field_level` column for the one
//!    level present in this record.
//! 2. [`reindex`] projects that row onto a [`FeatureContract`]: contract
//!    columns missing from the row are zero, row columns missing from the
//!    contract are dropped, and the output follows contract order.
//!
//! Without a contract the row is returned as produced, flagged
//! [`Alignment::Unaligned`].

use crate::category::{Categorical, District, HeatingType, OccupancyStatus, one_hot_column};
use crate::record::PropertyRecord;
use crate::registry::list_columns;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Ordered column names a trained model was fit on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureContract {
    columns: Vec<String>,
}

impl FeatureContract {
    /// Create a contract from column names, in model input order.
    pub const fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in model input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the contract has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column, if present.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// First column name that appears more than once.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        self.columns
            .iter()
            .find(|c| !seen.insert(c.as_str()))
            .map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureContract {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Whether an encoded vector follows a model's feature contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    /// Columns equal the contract, in contract order
    Aligned,
    /// No contract was available; columns are the raw one-hot row
    Unaligned,
}

/// Flattened, one-hot expanded record before alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotRow {
    entries: Vec<(String, f64)>,
}

impl OneHotRow {
    /// Column names in production order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Value of a column, if produced.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| *v)
    }

    /// Number of produced columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no columns were produced.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Numeric model input row.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedVector {
    columns: Vec<String>,
    values: Array1<f64>,
    alignment: Alignment,
    dropped: usize,
    zero_filled: usize,
}

impl EncodedVector {
    /// Column names, one per value.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in column order.
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Value of a column, if present.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the vector was aligned to a contract.
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Produced columns the contract did not know.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Contract columns the record did not produce.
    pub const fn zero_filled(&self) -> usize {
        self.zero_filled
    }
}

/// Flatten a record and one-hot expand its categorical fields.
///
/// Scalar columns come first in registry order, followed by one column per
/// categorical field for the level this record carries. Levels are not
/// validated.
pub fn one_hot_row(record: &PropertyRecord) -> OneHotRow {
    let mut entries: Vec<(String, f64)> = record
        .scalar_fields()
        .into_iter()
        .map(|(column, value)| (column.to_string(), value))
        .collect();

    for (field, level) in record.categorical_fields() {
        entries.push((one_hot_column(field, level), 1.0));
    }

    OneHotRow { entries }
}

/// Project a one-hot row onto a contract's columns.
pub fn reindex(row: &OneHotRow, contract: &FeatureContract) -> EncodedVector {
    let produced: HashMap<&str, f64> = row
        .entries
        .iter()
        .map(|(c, v)| (c.as_str(), *v))
        .collect();

    let mut zero_filled = 0;
    let values: Array1<f64> = contract
        .columns()
        .iter()
        .map(|column| {
            produced.get(column.as_str()).copied().unwrap_or_else(|| {
                zero_filled += 1;
                0.0
            })
        })
        .collect();

    let wanted: HashSet<&str> = contract.columns().iter().map(String::as_str).collect();
    let dropped = produced.keys().filter(|c| !wanted.contains(*c)).count();

    EncodedVector {
        columns: contract.columns().to_vec(),
        values,
        alignment: Alignment::Aligned,
        dropped,
        zero_filled,
    }
}

/// Encode a record for a model.
///
/// With a non-empty contract the result has exactly the contract's columns
/// in the contract's order. With no contract, or an empty one, the raw
/// one-hot row is returned and a warning is logged.
pub fn encode(record: &PropertyRecord, contract: Option<&FeatureContract>) -> EncodedVector {
    let row = one_hot_row(record);

    match contract {
        Some(contract) if !contract.is_empty() => {
            let vector = reindex(&row, contract);
            debug!(
                columns = vector.len(),
                dropped = vector.dropped,
                zero_filled = vector.zero_filled,
                "encoded record against feature contract"
            );
            vector
        }
        _ => {
            warn!(
                columns = row.len(),
                "feature contract unavailable, encoding without alignment; estimates may be unreliable"
            );
            let (columns, values): (Vec<String>, Vec<f64>) = row.entries.into_iter().unzip();
            EncodedVector {
                columns,
                values: Array1::from_vec(values),
                alignment: Alignment::Unaligned,
                dropped: 0,
                zero_filled: 0,
            }
        }
    }
}

/// Every column a valid record can produce.
///
/// Scalar columns in registry order, then each categorical field's levels in
/// canonical order. Useful as a reference layout when no trained contract is
/// at hand.
pub fn column_universe() -> Vec<String> {
    let mut columns: Vec<String> = list_columns().into_iter().map(str::to_string).collect();
    columns.extend(District::all().iter().map(District::column));
    columns.extend(OccupancyStatus::all().iter().map(OccupancyStatus::column));
    columns.extend(HeatingType::all().iter().map(HeatingType::column));
    columns
}
