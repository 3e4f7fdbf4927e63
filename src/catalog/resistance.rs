use super::position::parse_digit_position;
use crate::types::{GenomicCoordinateRecord, MasterRecord, PositionAnnotation};
use indexmap::IndexSet;
use std::collections::{BTreeMap, BTreeSet};

/// Grading text marking a confirmed resistance association.
pub const CONFIRMED_MARKER: &str = "1) Assoc w R";
/// Grading text marking an interim resistance association.
pub const INTERIM_MARKER: &str = "2) Assoc w R - Interim";

/// Plain substring test against both resistance markers.
pub fn is_resistance_grading(grading: &str) -> bool {
    grading.contains(CONFIRMED_MARKER) || grading.contains(INTERIM_MARKER)
}

/// Trimmed variant name to its sorted, deduplicated drug names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDrugMap(BTreeMap<String, Vec<String>>);

impl VariantDrugMap {
    /// Build from master rows already filtered to resistance gradings.
    pub fn from_graded<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a MasterRecord>,
    {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for record in records {
            let variant = record.variant.trim();
            if variant.is_empty() {
                continue;
            }
            let drugs = grouped.entry(variant.to_string()).or_default();
            let drug = record.drug.trim();
            if !drug.is_empty() {
                drugs.insert(drug.to_string());
            }
        }

        Self(
            grouped
                .into_iter()
                .map(|(variant, drugs)| (variant, drugs.into_iter().collect()))
                .collect(),
        )
    }

    pub fn drugs(&self, variant: &str) -> Option<&[String]> {
        self.0.get(variant).map(Vec::as_slice)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.0.contains_key(variant)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `variant_drug1_drug2...`, or the bare variant when it has no drugs.
pub fn render_entry(variant: &str, drugs: &[String]) -> String {
    if drugs.is_empty() {
        variant.to_string()
    } else {
        format!("{}_{}", variant, drugs.join("_"))
    }
}

/// Result of the resistance path over one catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resistance {
    /// No master row carries a resistance grading.
    NoGradedVariants,
    /// Graded variants exist but none appear in the coordinates sheet.
    NoMappedPositions,
    /// Annotations ascending by position. May be empty when every mapped
    /// row had a non-digit position.
    Annotated(Vec<PositionAnnotation>),
}

/// Map each resistance-relevant position to the variants and drugs there.
pub fn aggregate(coordinates: &[GenomicCoordinateRecord], master: &[MasterRecord]) -> Resistance {
    let graded = master
        .iter()
        .filter(|r| is_resistance_grading(&r.confidence_grading));
    let drug_map = VariantDrugMap::from_graded(graded);
    if drug_map.is_empty() {
        return Resistance::NoGradedVariants;
    }
    tracing::debug!("{} resistance-graded variants", drug_map.len());

    let mapped: Vec<&GenomicCoordinateRecord> = coordinates
        .iter()
        .filter(|r| drug_map.contains(r.variant_key()))
        .collect();
    if mapped.is_empty() {
        return Resistance::NoMappedPositions;
    }

    Resistance::Annotated(annotate_positions(&mapped, &drug_map))
}

/// Group `records` by digit-only position and render one annotation each.
///
/// Variants within a position keep the order they first appear in
/// `records`; rows whose position is not a plain digit run are dropped.
pub fn annotate_positions(
    records: &[&GenomicCoordinateRecord],
    drug_map: &VariantDrugMap,
) -> Vec<PositionAnnotation> {
    let mut by_position: BTreeMap<i64, IndexSet<&str>> = BTreeMap::new();

    for record in records {
        let Some(position) = parse_digit_position(&record.position).value() else {
            continue;
        };
        by_position
            .entry(position)
            .or_default()
            .insert(record.variant_key());
    }

    by_position
        .into_iter()
        .map(|(position, variants)| PositionAnnotation {
            position,
            resistance: variants
                .iter()
                .map(|v| render_entry(v, drug_map.drugs(v).unwrap_or_default()))
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn master(drug: &str, variant: &str, grading: &str) -> MasterRecord {
        MasterRecord {
            drug: drug.to_string(),
            variant: variant.to_string(),
            confidence_grading: grading.to_string(),
            ..MasterRecord::default()
        }
    }

    fn coord(variant: &str, position: &str) -> GenomicCoordinateRecord {
        GenomicCoordinateRecord {
            position: position.to_string(),
            reference_allele: "A".to_string(),
            alternative_allele: "G".to_string(),
            variant: variant.to_string(),
            fields: IndexMap::new(),
        }
    }

    fn annotated(resistance: Resistance) -> Vec<(i64, String)> {
        match resistance {
            Resistance::Annotated(rows) => rows.into_iter().map(|r| (r.position, r.resistance)).collect(),
            other => panic!("expected annotations, got {:?}", other),
        }
    }

    #[test]
    fn test_grading_markers() {
        assert!(is_resistance_grading("1) Assoc w R"));
        assert!(is_resistance_grading("2) Assoc w R - Interim"));
        assert!(is_resistance_grading("grade 1) Assoc w R (WHO)"));
        assert!(!is_resistance_grading("3) Uncertain significance"));
        assert!(!is_resistance_grading("4) Not assoc w R - Interim"));
        assert!(!is_resistance_grading("5) Not assoc w R"));
        assert!(!is_resistance_grading("1) assoc w r"));
    }

    #[test]
    fn test_drug_map_sorted_and_deduplicated() {
        let records = vec![
            master("RIF ", " X", CONFIRMED_MARKER),
            master("INH", "X", INTERIM_MARKER),
            master("RIF", "X", INTERIM_MARKER),
        ];
        let map = VariantDrugMap::from_graded(&records);
        assert_eq!(map.drugs("X").unwrap(), ["INH".to_string(), "RIF".to_string()]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_render_entry() {
        assert_eq!(render_entry("X", &["INH".to_string(), "RIF".to_string()]), "X_INH_RIF");
        assert_eq!(render_entry("X", &[]), "X");
    }

    #[test]
    fn test_aggregate_shared_drugs_across_positions() {
        let rows = vec![
            master("RIF", "X", CONFIRMED_MARKER),
            master("INH", "X", INTERIM_MARKER),
            master("EMB", "Z", "3) Uncertain significance"),
        ];
        let coords = vec![coord("X", "51"), coord(" X ", "50"), coord("Z", "50")];

        assert_eq!(
            annotated(aggregate(&coords, &rows)),
            vec![(50, "X_INH_RIF".to_string()), (51, "X_INH_RIF".to_string())]
        );
    }

    #[test]
    fn test_aggregate_first_appearance_order() {
        let rows = vec![
            master("RIF", "Y", CONFIRMED_MARKER),
            master("INH", "X", CONFIRMED_MARKER),
        ];
        let coords = vec![coord("Y", "50"), coord("X", "50"), coord("Y", "50")];

        assert_eq!(
            annotated(aggregate(&coords, &rows)),
            vec![(50, "Y_RIF; X_INH".to_string())]
        );
    }

    #[test]
    fn test_aggregate_drops_non_digit_positions() {
        let rows = vec![master("RIF", "X", CONFIRMED_MARKER)];
        let coords = vec![coord("X", "+50"), coord("X", "-1"), coord("X", " 52 "), coord("X", "abc")];

        assert_eq!(
            annotated(aggregate(&coords, &rows)),
            vec![(52, "X_RIF".to_string())]
        );
    }

    #[test]
    fn test_aggregate_all_positions_rejected() {
        let rows = vec![master("RIF", "X", CONFIRMED_MARKER)];
        let coords = vec![coord("X", "n/a")];
        assert_eq!(aggregate(&coords, &rows), Resistance::Annotated(vec![]));
    }

    #[test]
    fn test_aggregate_without_graded_variants() {
        let rows = vec![master("RIF", "X", "5) Not assoc w R")];
        let coords = vec![coord("X", "50")];
        assert_eq!(aggregate(&coords, &rows), Resistance::NoGradedVariants);
    }

    #[test]
    fn test_aggregate_without_mapped_positions() {
        let rows = vec![master("RIF", "X", CONFIRMED_MARKER)];
        let coords = vec![coord("Y", "50")];
        assert_eq!(aggregate(&coords, &rows), Resistance::NoMappedPositions);
    }

    #[test]
    fn test_variant_without_drugs_renders_bare() {
        let rows = vec![master("", "X", CONFIRMED_MARKER)];
        let coords = vec![coord("X", "50")];
        assert_eq!(annotated(aggregate(&coords, &rows)), vec![(50, "X".to_string())]);
    }
}
