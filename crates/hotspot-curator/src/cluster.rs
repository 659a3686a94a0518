//! Density-based cluster detection
//!
//! Classic DBSCAN over raw coordinates: points with at least
//! `min_samples` neighbors within `eps` degrees seed a cluster, density
//! reachability expands it, and everything else is noise.

use crate::{AccidentRecord, Cluster, ClusterParams, CRITICAL_FATAL_RATIO, HIGH_COUNT_THRESHOLD};
use hazard_catalog::SeverityTag;
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unvisited,
    Noise,
    Cluster(usize),
}

/// Indices within `eps` of `records[idx]`, the point itself included.
fn neighbors_of(records: &[AccidentRecord], idx: usize, eps: f64) -> Vec<usize> {
    let p = &records[idx];
    records
        .iter()
        .enumerate()
        .filter(|(_, q)| {
            let dlat = p.latitude - q.latitude;
            let dlon = p.longitude - q.longitude;
            (dlat * dlat + dlon * dlon).sqrt() <= eps
        })
        .map(|(j, _)| j)
        .collect()
}

fn derive_severity(fatal_count: usize, count: usize) -> SeverityTag {
    if fatal_count as f64 > count as f64 * CRITICAL_FATAL_RATIO {
        SeverityTag::Critical
    } else if count > HIGH_COUNT_THRESHOLD {
        SeverityTag::High
    } else {
        SeverityTag::Medium
    }
}

/// Group accident records into dense clusters, largest first.
///
/// Noise points are excluded from the output entirely. Each cluster
/// carries its centroid, size, fatal-outcome count, and a derived
/// severity tag.
pub fn detect_clusters(records: &[AccidentRecord], params: &ClusterParams) -> Vec<Cluster> {
    let mut labels = vec![Label::Unvisited; records.len()];
    let mut cluster_count = 0usize;

    for i in 0..records.len() {
        if labels[i] != Label::Unvisited {
            continue;
        }

        let seeds = neighbors_of(records, i, params.eps);
        if seeds.len() < params.min_samples {
            labels[i] = Label::Noise;
            continue;
        }

        let cid = cluster_count;
        cluster_count += 1;
        labels[i] = Label::Cluster(cid);

        let mut queue: VecDeque<usize> = seeds.into();
        while let Some(j) = queue.pop_front() {
            if labels[j] == Label::Noise {
                // border point reachable from a core point
                labels[j] = Label::Cluster(cid);
            }
            if labels[j] != Label::Unvisited {
                continue;
            }
            labels[j] = Label::Cluster(cid);

            let reach = neighbors_of(records, j, params.eps);
            if reach.len() >= params.min_samples {
                queue.extend(reach);
            }
        }

        debug!("Cluster {} seeded from record {}", cid, i);
    }

    let mut clusters: Vec<Cluster> = (0..cluster_count)
        .map(|cid| {
            let members: Vec<&AccidentRecord> = records
                .iter()
                .zip(&labels)
                .filter(|(_, label)| **label == Label::Cluster(cid))
                .map(|(r, _)| r)
                .collect();

            let count = members.len();
            let center_lat = members.iter().map(|r| r.latitude).sum::<f64>() / count as f64;
            let center_lon = members.iter().map(|r| r.longitude).sum::<f64>() / count as f64;
            let fatal_count = members
                .iter()
                .filter(|r| r.severity.as_deref() == Some("Fatal"))
                .count();

            Cluster {
                cluster_id: cid,
                center_lat,
                center_lon,
                count,
                fatal_count,
                severity: derive_severity(fatal_count, count),
            }
        })
        .collect();

    clusters.sort_by(|a, b| b.count.cmp(&a.count));

    let clustered: usize = clusters.iter().map(|c| c.count).sum();
    info!(
        "Detected {} clusters covering {} of {} records",
        clusters.len(),
        clustered,
        records.len()
    );

    clusters
}
