use crate::error::{NscError, Result};

/// Cluster membership as index sets: `clusters()[c]` holds, in ascending
/// order, every point index labelled `c`. Built from a label-per-point
/// assignment, so each index belongs to exactly one cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterPartition {
    clusters: Vec<Vec<usize>>,
    n_points: usize,
}

impl ClusterPartition {
    /// Group point indices by label. Labels must be `< k`; clusters with no
    /// members are kept as empty sets.
    pub fn from_labels(labels: &[usize], k: usize) -> Result<Self> {
        let mut clusters = vec![Vec::new(); k];
        for (i, &label) in labels.iter().enumerate() {
            let cluster = clusters
                .get_mut(label)
                .ok_or(NscError::LabelOutOfRange { label, k })?;
            cluster.push(i);
        }
        Ok(Self {
            clusters,
            n_points: labels.len(),
        })
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }

    pub fn non_empty(&self) -> usize {
        self.clusters.iter().filter(|c| !c.is_empty()).count()
    }

    /// Back to label-per-point form.
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![0; self.n_points];
        for (c, members) in self.clusters.iter().enumerate() {
            for &i in members {
                labels[i] = c;
            }
        }
        labels
    }
}
