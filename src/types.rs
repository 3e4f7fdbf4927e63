use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Coordinates sheet column holding the anchor position.
pub const POSITION_COLUMN: &str = "position";
pub const REFERENCE_COLUMN: &str = "reference_nucleotide";
pub const ALTERNATIVE_COLUMN: &str = "alternative_nucleotide";
pub const VARIANT_COLUMN: &str = "variant";

pub const DRUG_COLUMN: &str = "drug";
pub const GENE_COLUMN: &str = "gene";
pub const TIER_COLUMN: &str = "tier";
pub const EFFECT_COLUMN: &str = "effect";
pub const GRADING_COLUMN: &str = "FINAL CONFIDENCE GRADING";
pub const COMMENT_COLUMN: &str = "Comment";

/// Columns kept from the master sheet, in export order.
pub const MASTER_COLUMNS: [&str; 7] = [
    DRUG_COLUMN,
    VARIANT_COLUMN,
    GENE_COLUMN,
    TIER_COLUMN,
    EFFECT_COLUMN,
    GRADING_COLUMN,
    COMMENT_COLUMN,
];

/// A loaded sheet: header row plus data rows, all as text.
///
/// Rows may be ragged; a missing trailing cell reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    fn required_column(&self, column: &str) -> Result<usize> {
        self.column_index(column).ok_or_else(|| Error::MissingColumn {
            sheet: self.name.clone(),
            column: column.to_string(),
        })
    }

    /// Keep only the listed columns that exist, in the listed order.
    pub fn project(&self, columns: &[&str]) -> Table {
        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();

        Table {
            name: self.name.clone(),
            headers: indices.iter().map(|&i| self.headers[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| cell(row, Some(i))).collect())
                .collect(),
        }
    }
}

fn cell(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .cloned()
        .unwrap_or_default()
}

/// One row of the genomic coordinates sheet.
///
/// `position` is kept exactly as loaded; normalization happens downstream
/// and differs between the interval and the resistance paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicCoordinateRecord {
    pub position: String,
    pub reference_allele: String,
    pub alternative_allele: String,
    pub variant: String,
    /// The full original row, keyed by header.
    pub fields: IndexMap<String, String>,
}

impl GenomicCoordinateRecord {
    pub fn from_table(table: &Table) -> Result<Vec<Self>> {
        let position = table.required_column(POSITION_COLUMN)?;
        let reference = table.required_column(REFERENCE_COLUMN)?;
        let alternative = table.required_column(ALTERNATIVE_COLUMN)?;
        let variant = table.required_column(VARIANT_COLUMN)?;

        Ok(table
            .rows
            .iter()
            .map(|row| Self {
                position: cell(row, Some(position)),
                reference_allele: cell(row, Some(reference)),
                alternative_allele: cell(row, Some(alternative)),
                variant: cell(row, Some(variant)),
                fields: table
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.clone(), cell(row, Some(i))))
                    .collect(),
            })
            .collect())
    }

    /// Join key against the master sheet.
    pub fn variant_key(&self) -> &str {
        self.variant.trim()
    }
}

/// One row of the master sheet, projected onto [`MASTER_COLUMNS`].
///
/// Absent columns read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterRecord {
    pub drug: String,
    pub variant: String,
    pub gene: String,
    pub tier: String,
    pub effect: String,
    pub confidence_grading: String,
    pub comment: String,
}

impl MasterRecord {
    pub fn from_table(table: &Table) -> Vec<Self> {
        let drug = table.column_index(DRUG_COLUMN);
        let variant = table.column_index(VARIANT_COLUMN);
        let gene = table.column_index(GENE_COLUMN);
        let tier = table.column_index(TIER_COLUMN);
        let effect = table.column_index(EFFECT_COLUMN);
        let grading = table.column_index(GRADING_COLUMN);
        let comment = table.column_index(COMMENT_COLUMN);

        table
            .rows
            .iter()
            .map(|row| Self {
                drug: cell(row, drug),
                variant: cell(row, variant),
                gene: cell(row, gene),
                tier: cell(row, tier),
                effect: cell(row, effect),
                confidence_grading: cell(row, grading),
                comment: cell(row, comment),
            })
            .collect()
    }
}

/// Half-open `[start, end)` range on a single reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub chrom: String,
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Same interval with the start moved one base left, for consumers that
    /// read the catalogue positions as 1-based. `None` at `i64::MIN`.
    pub fn to_zero_based(&self) -> Option<Interval> {
        Some(Interval {
            chrom: self.chrom.clone(),
            start: self.start.checked_sub(1)?,
            end: self.end,
        })
    }
}

/// One row of the resistance export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionAnnotation {
    #[serde(rename = "POS")]
    pub position: i64,
    pub resistance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn coordinates_table() -> Table {
        Table::new(
            "Genomic_coordinates",
            strings(&["variant", "position", "reference_nucleotide", "alternative_nucleotide", "gene"]),
            vec![
                strings(&[" rpoB_p.Ser450Leu ", "761155", "C", "T", "rpoB"]),
                strings(&["katG_p.Ser315Thr", "2155168"]),
            ],
        )
    }

    #[test]
    fn test_coordinate_records_keep_raw_fields() {
        let records = GenomicCoordinateRecord::from_table(&coordinates_table()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].variant_key(), "rpoB_p.Ser450Leu");
        assert_eq!(records[0].variant, " rpoB_p.Ser450Leu ");
        assert_eq!(records[0].fields["gene"], "rpoB");
        assert_eq!(
            records[0].fields.keys().collect::<Vec<_>>(),
            vec!["variant", "position", "reference_nucleotide", "alternative_nucleotide", "gene"]
        );
        // ragged row
        assert_eq!(records[1].reference_allele, "");
        assert_eq!(records[1].fields["gene"], "");
    }

    #[test]
    fn test_coordinate_records_require_columns() {
        let table = Table::new("Genomic_coordinates", strings(&["variant", "position"]), vec![]);
        let err = GenomicCoordinateRecord::from_table(&table).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingColumn { ref column, .. } if column == "reference_nucleotide"
        ));
    }

    #[test]
    fn test_project_skips_absent_columns() {
        let table = Table::new(
            "Catalogue_master_file",
            strings(&["gene", "extra", "drug", "variant"]),
            vec![strings(&["katG", "x", "Isoniazid", "katG_p.Ser315Thr"])],
        );
        let projected = table.project(&MASTER_COLUMNS);
        assert_eq!(projected.headers, strings(&["drug", "variant", "gene"]));
        assert_eq!(
            projected.rows,
            vec![strings(&["Isoniazid", "katG_p.Ser315Thr", "katG"])]
        );
    }

    #[test]
    fn test_master_records_tolerate_missing_columns() {
        let table = Table::new(
            "Catalogue_master_file",
            strings(&["drug", "variant"]),
            vec![strings(&["Rifampicin", "rpoB_p.Ser450Leu"])],
        );
        let records = MasterRecord::from_table(&table);
        assert_eq!(records[0].drug, "Rifampicin");
        assert_eq!(records[0].confidence_grading, "");
    }

    #[test]
    fn test_interval_to_zero_based() {
        let interval = Interval {
            chrom: "NC_000962.3".to_string(),
            start: 100,
            end: 103,
        };
        let shifted = interval.to_zero_based().unwrap();
        assert_eq!((shifted.start, shifted.end), (99, 103));

        let lowest = Interval {
            start: i64::MIN,
            ..interval
        };
        assert_eq!(lowest.to_zero_based(), None);
    }
}
