//! Export of reports and projections.

use crate::error::Result;
use crate::report::ValuationReport;
use appraisal_invest::InvestmentProjection;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Format implied by a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::PrettyJson),
            _ => None,
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// One CSV row of a flattened report.
#[derive(Debug, Serialize)]
struct MetricRow<'a> {
    metric: &'a str,
    value: f64,
}

fn csv_string<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

impl Exporter for InvestmentProjection {
    /// CSV output has one `year,value` row per projected year.
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => csv_string(&self.points),
            ExportFormat::Json => json_string(self, false),
            ExportFormat::PrettyJson => json_string(self, true),
        }
    }
}

impl ValuationReport {
    fn to_metric_rows(&self) -> Vec<MetricRow<'static>> {
        let mut rows = vec![
            MetricRow {
                metric: "estimate",
                value: self.valuation.estimate,
            },
            MetricRow {
                metric: "band_lower",
                value: self.valuation.lower(),
            },
            MetricRow {
                metric: "band_upper",
                value: self.valuation.upper(),
            },
        ];
        if let (Some(asking), Some(cmp)) = (self.asking_price, &self.comparison) {
            rows.push(MetricRow {
                metric: "asking_price",
                value: asking,
            });
            rows.push(MetricRow {
                metric: "asking_difference",
                value: cmp.difference,
            });
        }
        rows.push(MetricRow {
            metric: "monthly_rent",
            value: self.projection.monthly_rent,
        });
        rows.push(MetricRow {
            metric: "annual_yield_pct",
            value: self.projection.annual_yield_pct,
        });
        rows
    }
}

impl Exporter for ValuationReport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Csv => csv_string(self.to_metric_rows()),
            ExportFormat::Json => json_string(self, false),
            ExportFormat::PrettyJson => json_string(self, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_invest::project;

    #[test]
    fn test_projection_csv() {
        let projection = project(2_400_000.0, 20, 40.0).unwrap();
        let csv = projection.export_to_string(ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "year,value");
        assert_eq!(lines.len(), 11);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[10].starts_with("10,"));
    }

    #[test]
    fn test_projection_json() {
        let projection = project(1_000_000.0, 20, 10.0).unwrap();
        let json = projection.export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"monthly_rent\""));
        assert!(!json.contains('\n'));

        let pretty = projection.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(pretty.contains("  "));
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_path(Path::new("a.json")), Some(ExportFormat::PrettyJson));
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }
}
