use std::sync::LazyLock;

use super::model::{Modality, ReferenceEntry, ShiftValue};
use crate::error::{AnalysisError, Result};

/// Version tag of the compiled-in reference dataset.
pub const REFERENCE_VERSION: &str = "2024.1";

static BUILTIN: LazyLock<ReferenceTable> = LazyLock::new(ReferenceTable::compiled);

// ---------------------------------------------------------------------------
// ReferenceTable – modality → ordered entries
// ---------------------------------------------------------------------------

/// Immutable reference dataset, grouped by modality.
///
/// Entry order inside a group is declaration order and is what
/// [`ReferenceTable::matching_labels`] reports back.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    version: String,
    groups: Vec<(Modality, Vec<ReferenceEntry>)>,
}

impl ReferenceTable {
    /// Build a table from explicit groups. Modalities left out are unknown to it.
    pub fn new(version: impl Into<String>, groups: Vec<(Modality, Vec<ReferenceEntry>)>) -> Self {
        Self {
            version: version.into(),
            groups,
        }
    }

    /// The process-wide compiled dataset.
    pub fn builtin() -> &'static ReferenceTable {
        &BUILTIN
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Modalities present in this table, in table order.
    pub fn modalities(&self) -> impl Iterator<Item = Modality> + '_ {
        self.groups.iter().map(|(m, _)| *m)
    }

    pub fn lookup(&self, modality: Modality) -> Result<&[ReferenceEntry]> {
        self.groups
            .iter()
            .find(|(m, _)| *m == modality)
            .map(|(_, entries)| entries.as_slice())
            .ok_or_else(|| AnalysisError::UnknownModality(modality.name().to_string()))
    }

    /// Every label under `modality` whose rule accepts `shift`, in declaration order.
    pub fn matching_labels(&self, shift: ShiftValue, modality: Modality) -> Result<Vec<String>> {
        let entries = self.lookup(modality)?;
        Ok(labels_matching(entries, shift))
    }

    fn compiled() -> Self {
        let mut proton = vec![
            ReferenceEntry::point("TMS", 0.0),
            ReferenceEntry::range("Alkyl (R-CH3)", 0.7, 1.3),
            ReferenceEntry::range("Alkyl (R-CH2-R)", 1.2, 1.4),
            ReferenceEntry::range("Alkyl (R3CH)", 1.4, 1.7),
            ReferenceEntry::range("Allylic (R-CH2-C=C)", 1.6, 2.2),
            ReferenceEntry::range("Alkyne (RC≡C-H)", 2.0, 3.0),
            ReferenceEntry::range("Ketone (R-CO-CH3)", 2.1, 2.6),
            ReferenceEntry::range("Aldehyde (R-CHO)", 9.5, 10.1),
            ReferenceEntry::range("Alcohol (R-OH)", 0.5, 5.0),
            ReferenceEntry::range("Alcohol (R-CH2-OH)", 3.4, 4.0),
            ReferenceEntry::range("Ether (R-O-CH2-R)", 3.3, 3.9),
            ReferenceEntry::range("Ether (R-O-CH3)", 3.3, 3.8),
            ReferenceEntry::range("Ester (R-COO-CH3)", 3.6, 3.8),
            ReferenceEntry::range("Ester (R-COO-CH2-R)", 4.1, 4.3),
            ReferenceEntry::range("Alkene (R2C=CH2)", 4.6, 5.0),
            ReferenceEntry::range("Alkene (R2C=CH-R)", 5.2, 5.7),
            ReferenceEntry::range("Alkene (RHC=CH2)", 5.0, 5.5),
            ReferenceEntry::range("Aromatic (Ar-H)", 6.5, 8.5),
            ReferenceEntry::range("Benzyl (Ar-CH2-R)", 2.3, 2.8),
            ReferenceEntry::range("Phenol (Ar-OH)", 4.5, 7.7),
            ReferenceEntry::range("Carboxylic Acid (R-COOH)", 10.5, 12.0),
            ReferenceEntry::range("Amine (R-NH2)", 1.0, 3.0),
            ReferenceEntry::range("Amine (R2NH)", 1.2, 2.0),
            ReferenceEntry::range("Amide (R-CO-NH-R)", 5.0, 6.5),
            ReferenceEntry::range("Amide (R-CO-NH2)", 5.5, 7.5),
            ReferenceEntry::range("Thiol (R-SH)", 1.0, 1.5),
            ReferenceEntry::range("Phosphine (R3P-H)", 2.5, 4.5),
            ReferenceEntry::range("Silicon (R3Si-H)", 3.5, 5.0),
        ];

        let carbon = vec![
            ReferenceEntry::range("Alkyl (R-CH3)", 0.0, 40.0),
            ReferenceEntry::range("Alkyl (R-CH2-R)", 15.0, 55.0),
            ReferenceEntry::range("Alkyl (R3CH)", 20.0, 60.0),
            ReferenceEntry::range("Allylic (R-CH2-C=C)", 20.0, 40.0),
            ReferenceEntry::range("Alkyne (RC≡C-H)", 60.0, 80.0),
            ReferenceEntry::range("Aromatic (Ar-C)", 100.0, 160.0),
            ReferenceEntry::range("Alkene (R2C=CR2)", 100.0, 150.0),
            ReferenceEntry::range("Ester (R-COO-R)", 160.0, 185.0),
            ReferenceEntry::range("Ketone (R-CO-R)", 190.0, 220.0),
            ReferenceEntry::range("Aldehyde (R-CHO)", 190.0, 200.0),
        ];

        let solvents = solvent_residuals();

        // Residual solvent peaks show up in proton spectra, so the 1H group
        // carries them after the functional groups.
        proton.extend(solvents.iter().cloned());

        Self::new(
            REFERENCE_VERSION,
            vec![
                (Modality::Proton, proton),
                (Modality::Carbon13, carbon),
                (Modality::SolventResidual, solvents),
            ],
        )
    }
}

fn solvent_residuals() -> Vec<ReferenceEntry> {
    vec![
        ReferenceEntry::point("Chloroform-d (CDCl3)", 7.26),
        ReferenceEntry::point("Dimethyl sulfoxide-d6 (DMSO-d6)", 2.50),
        ReferenceEntry::point("Acetone-d6", 2.05),
        ReferenceEntry::point("Methanol-d4", 3.31),
        ReferenceEntry::point("Water-d2 (D2O)", 4.79),
        ReferenceEntry::point("Benzene-d6", 7.16),
        ReferenceEntry::point("Acetonitrile-d3", 1.94),
    ]
}

/// Labels of `entries` whose rule accepts `shift`, order preserved.
pub(crate) fn labels_matching(entries: &[ReferenceEntry], shift: ShiftValue) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.rule.matches(shift))
        .map(|e| e.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MatchRule;

    #[test]
    fn builtin_has_every_modality() {
        let table = ReferenceTable::builtin();
        let modalities: Vec<Modality> = table.modalities().collect();
        assert_eq!(modalities, Modality::ALL.to_vec());
        assert_eq!(table.version(), REFERENCE_VERSION);
    }

    #[test]
    fn ranges_are_well_formed_and_labels_unique() {
        let table = ReferenceTable::builtin();
        for modality in table.modalities() {
            let entries = table.lookup(modality).unwrap();
            for entry in entries {
                if let MatchRule::Range { low, high } = entry.rule {
                    assert!(low <= high, "{modality}: {}", entry.label);
                }
            }
            let mut labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), entries.len(), "duplicate label in {modality}");
        }
    }

    #[test]
    fn lookup_fails_for_missing_group() {
        let table = ReferenceTable::new(
            "test",
            vec![(Modality::Carbon13, vec![ReferenceEntry::range("Ketone", 190.0, 220.0)])],
        );
        assert!(table.lookup(Modality::Carbon13).is_ok());
        assert_eq!(
            table.lookup(Modality::Proton).unwrap_err(),
            AnalysisError::UnknownModality("1H NMR".to_string())
        );
        assert!(table.matching_labels(1.0, Modality::Proton).is_err());
    }

    #[test]
    fn labels_keep_declaration_order() {
        let table = ReferenceTable::builtin();
        let labels = table.matching_labels(1.25, Modality::Proton).unwrap();
        assert_eq!(
            labels,
            vec![
                "Alkyl (R-CH3)",
                "Alkyl (R-CH2-R)",
                "Alcohol (R-OH)",
                "Amine (R-NH2)",
                "Amine (R2NH)",
                "Thiol (R-SH)",
            ]
        );
    }

    #[test]
    fn range_bounds_match_exactly() {
        let table = ReferenceTable::builtin();
        let low = table.matching_labels(9.5, Modality::Proton).unwrap();
        let high = table.matching_labels(10.1, Modality::Proton).unwrap();
        assert_eq!(low, vec!["Aldehyde (R-CHO)"]);
        assert_eq!(high, vec!["Aldehyde (R-CHO)"]);
    }

    #[test]
    fn no_match_is_an_empty_list() {
        let table = ReferenceTable::builtin();
        assert!(table.matching_labels(50.0, Modality::Proton).unwrap().is_empty());
        assert!(table.matching_labels(90.0, Modality::Carbon13).unwrap().is_empty());
    }

    #[test]
    fn solvent_points_use_strict_tolerance() {
        let table = ReferenceTable::builtin();
        assert_eq!(
            table.matching_labels(7.26, Modality::SolventResidual).unwrap()[0],
            "Chloroform-d (CDCl3)"
        );
        assert!(table
            .matching_labels(0.1, Modality::SolventResidual)
            .unwrap()
            .is_empty());
        assert_eq!(
            table.matching_labels(0.05, Modality::Proton).unwrap(),
            vec!["TMS"]
        );
        assert!(table.matching_labels(0.1, Modality::Proton).unwrap().is_empty());
    }

    #[test]
    fn carbon_overlaps_are_all_reported() {
        let table = ReferenceTable::builtin();
        let labels = table.matching_labels(195.0, Modality::Carbon13).unwrap();
        assert_eq!(labels, vec!["Ketone (R-CO-R)", "Aldehyde (R-CHO)"]);
    }
}
