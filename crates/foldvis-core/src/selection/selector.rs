use super::selection::Selection;
use super::view::ResidueView;
use crate::residue::{distance, BackboneAtom, Coord, ResidueRecord, SecondaryStructure};
use crate::ResidueCollection;
use std::ops::RangeInclusive;

pub struct ResidueSelector<'a> {
    collection: &'a ResidueCollection,
    current_selection: Selection,
}

impl<'a> ResidueSelector<'a> {
    pub(crate) fn new(collection: &'a ResidueCollection) -> ResidueSelector<'a> {
        let size = collection.len();
        ResidueSelector {
            collection,
            current_selection: Selection::new((0..size).collect()),
        }
    }
    pub fn accession(mut self, protein_id: &str) -> Self {
        let acc_selection = self.collection.select_by_accession(protein_id);
        self.current_selection = &self.current_selection & &acc_selection;
        self
    }
    pub fn residue(mut self, res_name: &str) -> Self {
        let res_selection = self.collection.select_by_residue(res_name);
        self.current_selection = &self.current_selection & &res_selection;
        self
    }
    /// Residues whose flags include `label`; `None` keeps residues with no flag set.
    pub fn secondary(self, label: SecondaryStructure) -> Self {
        self.matching(|record| record.indicators.is_set(label))
    }
    pub fn positions(self, range: RangeInclusive<i64>) -> Self {
        self.matching(|record| range.contains(&record.position))
    }
    /// Residues whose Cα lies within `radius` of `center`.
    pub fn sphere(self, center: Coord, radius: f64) -> Self {
        self.matching(|record| distance(record.coord(BackboneAtom::CA), &center) <= radius)
    }
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(usize) -> bool,
    {
        let filtered = self
            .current_selection
            .indices
            .iter()
            .filter(|&&idx| predicate(idx))
            .copied()
            .collect();
        self.current_selection = Selection::new(filtered);
        self
    }
    pub fn selection(self) -> Selection {
        self.current_selection
    }
    pub fn collect(self) -> ResidueView<'a> {
        ResidueView::new(self.collection, self.current_selection)
    }

    fn matching<F>(self, predicate: F) -> Self
    where
        F: Fn(&ResidueRecord) -> bool,
    {
        let collection = self.collection;
        self.filter(|idx| predicate(&collection.records()[idx]))
    }
}
