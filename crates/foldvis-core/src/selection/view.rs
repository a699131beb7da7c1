use super::selection::Selection;
use crate::residue::{BackboneAtom, Coord, ResidueRecord};
use crate::ResidueCollection;

pub struct ResidueView<'a> {
    collection: &'a ResidueCollection,
    selection: Selection,
}

impl<'a> ResidueView<'a> {
    pub(crate) fn new(collection: &'a ResidueCollection, selection: Selection) -> Self {
        ResidueView {
            collection,
            selection,
        }
    }
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
    pub fn coords(&self, atom: BackboneAtom) -> Vec<Coord> {
        self.records().map(|record| *record.coord(atom)).collect()
    }
    pub fn records(&self) -> impl Iterator<Item = &'a ResidueRecord> + '_ {
        let records = self.collection.records();
        self.selection.indices.iter().map(move |&i| &records[i])
    }
    pub fn size(&self) -> usize {
        self.selection.indices.len()
    }
    /// Copy the selected records into a standalone collection, keeping their order.
    pub fn to_collection(&self) -> ResidueCollection {
        ResidueCollection::new(self.records().cloned().collect())
    }
}
