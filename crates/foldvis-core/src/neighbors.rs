//! Cα neighbourhood tables.
//!
//! For every residue the table lists the residues of the same protein ordered by ascending
//! Cα–Cα distance, starting with the residue itself at distance 0. The extent bounds each
//! neighbourhood either by a ball radius or by a neighbour count.
use crate::residue::ResidueRecord;
use itertools::Itertools;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NeighborExtent {
    /// Keep neighbours with `distance_ca <= radius`.
    Radius(f64),
    /// Keep the `k` nearest neighbours besides the residue itself.
    Count(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeighborPair {
    #[serde(rename = "UniAcc")]
    pub protein_id: String,
    #[serde(rename = "POS_x")]
    pub source: i64,
    #[serde(rename = "POS_y")]
    pub target: i64,
    pub distance_ca: f64,
}

pub fn neighbor_table(records: &[ResidueRecord], extent: NeighborExtent) -> Vec<NeighborPair> {
    let mut pairs = Vec::new();
    let accessions = records.iter().map(|r| r.protein_id.as_str()).unique();
    for protein_id in accessions {
        let chain: Vec<&ResidueRecord> = records
            .iter()
            .filter(|r| r.protein_id == protein_id)
            .collect();
        for (i, source) in chain.iter().enumerate() {
            if !source.distance_ca(source).is_finite() {
                log::debug!("{}:{} has no Cα position", protein_id, source.position);
                continue;
            }
            let others = chain
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, target)| (*target, source.distance_ca(target)))
                .filter(|(_, d)| d.is_finite())
                .sorted_by(|a, b| a.1.total_cmp(&b.1));
            let kept: Vec<(&ResidueRecord, f64)> = match extent {
                NeighborExtent::Radius(radius) => others.filter(|(_, d)| *d <= radius).collect(),
                NeighborExtent::Count(k) => others.take(k).collect(),
            };
            pairs.push(NeighborPair {
                protein_id: protein_id.to_string(),
                source: source.position,
                target: source.position,
                distance_ca: 0.0,
            });
            pairs.extend(kept.into_iter().map(|(target, d)| NeighborPair {
                protein_id: protein_id.to_string(),
                source: source.position,
                target: target.position,
                distance_ca: d,
            }));
        }
    }
    log::debug!("built {} neighbour pairs", pairs.len());
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residue::test_utilities::residue_at;

    fn records() -> Vec<ResidueRecord> {
        vec![
            residue_at("P01137", 1, [0.0, 0.0, 0.0]),
            residue_at("P01137", 2, [4.0, 0.0, 0.0]),
            residue_at("P01137", 3, [1.0, 0.0, 0.0]),
            residue_at("P09651", 1, [0.5, 0.0, 0.0]),
        ]
    }

    fn targets(pairs: &[NeighborPair], protein_id: &str, source: i64) -> Vec<i64> {
        pairs
            .iter()
            .filter(|p| p.protein_id == protein_id && p.source == source)
            .map(|p| p.target)
            .collect()
    }

    #[test]
    fn test_count_extent() {
        let pairs = neighbor_table(&records(), NeighborExtent::Count(1));
        assert_eq!(targets(&pairs, "P01137", 1), vec![1, 3]);
        assert_eq!(targets(&pairs, "P01137", 2), vec![2, 3]);
        // never crosses proteins
        assert_eq!(targets(&pairs, "P09651", 1), vec![1]);
        assert_eq!(pairs.len(), 7);
    }

    #[test]
    fn test_radius_extent() {
        let pairs = neighbor_table(&records(), NeighborExtent::Radius(3.5));
        assert_eq!(targets(&pairs, "P01137", 1), vec![1, 3]);
        assert_eq!(targets(&pairs, "P01137", 3), vec![3, 1, 2]);
        let first = &pairs[0];
        assert_eq!((first.source, first.target, first.distance_ca), (1, 1, 0.0));
        let p3_to_2 = pairs
            .iter()
            .find(|p| p.source == 3 && p.target == 2)
            .unwrap();
        assert!((p3_to_2.distance_ca - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_coordinates_skipped() {
        let mut records = records();
        records[1].coords[1] = [f64::NAN, 0.0, 0.0];
        let pairs = neighbor_table(&records, NeighborExtent::Radius(100.0));
        assert!(targets(&pairs, "P01137", 2).is_empty());
        assert_eq!(targets(&pairs, "P01137", 1), vec![1, 3]);
    }

    #[test]
    fn test_serialized_names() {
        let pair = NeighborPair {
            protein_id: "P01137".to_string(),
            source: 1,
            target: 2,
            distance_ca: 3.5,
        };
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(
            json,
            r#"{"UniAcc":"P01137","POS_x":1,"POS_y":2,"distance_ca":3.5}"#
        );
    }
}
