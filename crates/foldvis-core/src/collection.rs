use crate::error::Result;
use crate::featurize::{DerivedResidue, FeatureDeriver};
use crate::residue::{IndicatorPolicy, ResidueRecord};
use crate::selection::{ResidueSelector, ResidueView, Selection};
use itertools::Itertools;

/// The ordered, immutable set of residues of one analysis run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueCollection {
    records: Vec<ResidueRecord>,
}

impl ResidueCollection {
    pub fn new(records: Vec<ResidueRecord>) -> Self {
        ResidueCollection { records }
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn records(&self) -> &[ResidueRecord] {
        &self.records
    }
    pub fn get(&self, idx: usize) -> Option<&ResidueRecord> {
        self.records.get(idx)
    }
    pub fn iter(&self) -> impl Iterator<Item = &ResidueRecord> {
        self.records.iter()
    }
    /// Distinct accessions in order of first appearance.
    pub fn accessions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.protein_id.as_str())
            .unique()
            .collect()
    }
    pub fn select(&self) -> ResidueSelector<'_> {
        ResidueSelector::new(self)
    }
    pub fn view(&self, selection: Selection) -> ResidueView<'_> {
        ResidueView::new(self, selection)
    }
    pub fn select_by_accession(&self, protein_id: &str) -> Selection {
        self.select_where(|record| record.protein_id == protein_id)
    }
    pub fn select_by_residue(&self, res_name: &str) -> Selection {
        self.select_where(|record| record.residue_type.eq_ignore_ascii_case(res_name))
    }
    pub fn derive(&self, policy: IndicatorPolicy) -> Result<Vec<DerivedResidue>> {
        FeatureDeriver::builder()
            .policy(policy)
            .build()
            .derive(&self.records)
    }

    fn select_where<F>(&self, predicate: F) -> Selection
    where
        F: Fn(&ResidueRecord) -> bool,
    {
        let indices = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| predicate(*record))
            .map(|(i, _)| i)
            .collect();
        Selection::new(indices)
    }
}

impl From<Vec<ResidueRecord>> for ResidueCollection {
    fn from(records: Vec<ResidueRecord>) -> Self {
        ResidueCollection::new(records)
    }
}

impl<'a> IntoIterator for &'a ResidueCollection {
    type Item = &'a ResidueRecord;
    type IntoIter = std::slice::Iter<'a, ResidueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
