//! Artifact files of a run.
//!
//! `data.txt`: one line per point, the coordinates with six decimals then the
//! ground-truth label, comma separated.
//!
//! `clusters.txt`: the k used on the first line, then one line per spectral
//! cluster, then one line per K-means cluster, each a comma-separated list of
//! point indices (empty clusters give empty lines).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use nsc_core::{ClusterPartition, NscError, PointSet};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::{Array, Array2};

use crate::error::PipelineResult;

pub const DATA_FILE: &str = "data.txt";
pub const CLUSTERS_FILE: &str = "clusters.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub data: PathBuf,
    pub clusters: PathBuf,
}

/// One line per point. `labels` must hold exactly one label per row.
pub fn write_data<W: Write>(out: &mut W, points: &PointSet, labels: &[usize]) -> PipelineResult<()> {
    let (n, _) = points.shape();
    if labels.len() != n {
        return Err(NscError::DimensionMismatch {
            expected: n,
            got: labels.len(),
        }
        .into());
    }

    for (i, label) in labels.iter().enumerate() {
        for v in points.get_row(i).iterator(0) {
            write!(out, "{:.6},", v)?;
        }
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

fn write_partition<W: Write>(out: &mut W, partition: &ClusterPartition) -> PipelineResult<()> {
    for cluster in partition.clusters() {
        let line: Vec<String> = cluster.iter().map(usize::to_string).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

pub fn write_clusters<W: Write>(
    out: &mut W,
    k: usize,
    spectral: &ClusterPartition,
    kmeans: &ClusterPartition,
) -> PipelineResult<()> {
    writeln!(out, "{}", k)?;
    write_partition(out, spectral)?;
    write_partition(out, kmeans)?;
    Ok(())
}

/// Write both artifacts into `dir`, creating it if needed.
pub fn persist(
    dir: &Path,
    points: &PointSet,
    labels: &[usize],
    k: usize,
    spectral: &ClusterPartition,
    kmeans: &ClusterPartition,
) -> PipelineResult<Artifacts> {
    fs::create_dir_all(dir)?;
    let artifacts = Artifacts {
        data: dir.join(DATA_FILE),
        clusters: dir.join(CLUSTERS_FILE),
    };

    let mut data = BufWriter::new(File::create(&artifacts.data)?);
    write_data(&mut data, points, labels)?;
    data.flush()?;

    let mut clusters = BufWriter::new(File::create(&artifacts.clusters)?);
    write_clusters(&mut clusters, k, spectral, kmeans)?;
    clusters.flush()?;

    info!(
        "Artifacts written: {} and {}",
        artifacts.data.display(),
        artifacts.clusters.display()
    );
    Ok(artifacts)
}
