//! Parent/child linking over a flat record set.

use crate::record::FlatRecord;
use std::collections::HashMap;

/// Records of one import together with their resolved child links.
///
/// Records stay in input order and are addressed by index. A record is
/// attached under every other record whose `(kind, name)` equals its
/// `(parent_type, parent_name)`, so duplicate identities turn the forest
/// into a DAG. Cycles in the input are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    records: Vec<FlatRecord>,
    children: Vec<Vec<usize>>,
}

/// A child attached under more than one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousLink {
    pub child: usize,
    pub parents: Vec<usize>,
}

impl Hierarchy {
    /// Run the linking pass.
    pub fn link(records: Vec<FlatRecord>) -> Self {
        let children = {
            let mut by_key: HashMap<(&str, &str), Vec<usize>> = HashMap::new();
            for (i, record) in records.iter().enumerate() {
                by_key.entry(record.key()).or_default().push(i);
            }

            let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];

            // Visiting children in input order keeps each parent's list ordered.
            for (child, record) in records.iter().enumerate() {
                if let Some(parents) = by_key.get(&record.parent_key()) {
                    for &parent in parents {
                        if parent != child {
                            children[parent].push(child);
                        }
                    }
                }
            }

            children
        };

        Self { records, children }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlatRecord> {
        self.records.get(index)
    }

    /// Indices of the direct children of `index`, in input order.
    pub fn child_indices(&self, index: usize) -> &[usize] {
        self.children.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct children of `index`, in input order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = (usize, &FlatRecord)> + '_ {
        self.child_indices(index)
            .iter()
            .map(|&i| (i, &self.records[i]))
    }

    /// Root-kind records, in input order.
    pub fn roots(&self) -> impl Iterator<Item = (usize, &FlatRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_root_kind())
    }

    /// Number of records that list `index` among their children.
    pub fn parent_count(&self, index: usize) -> usize {
        self.parent_indices().get(index).map_or(0, Vec::len)
    }

    /// Children that ended up under more than one parent.
    pub fn ambiguous_links(&self) -> Vec<AmbiguousLink> {
        self.parent_indices()
            .into_iter()
            .enumerate()
            .filter(|(_, p)| p.len() > 1)
            .map(|(child, parents)| AmbiguousLink { child, parents })
            .collect()
    }

    /// Reverse of the child links: parents of every record, in input order.
    fn parent_indices(&self) -> Vec<Vec<usize>> {
        let mut parents: Vec<Vec<usize>> = vec![Vec::new(); self.records.len()];
        for (parent, kids) in self.children.iter().enumerate() {
            for &child in kids {
                parents[child].push(parent);
            }
        }
        parents
    }
}
