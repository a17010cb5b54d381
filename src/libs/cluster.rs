use anyhow::Result;
use indexmap::IndexMap;

use crate::libs::identity::identity;

/// One cluster of assigned sequences.
///
/// `members` holds (id, sequence) pairs in assignment order. The first
/// member is the cluster's permanent representative: every later member
/// met the threshold against it at insertion time.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub members: Vec<(String, String)>,
}

impl Cluster {
    fn seed(id: &str, seq: &str) -> Self {
        Self {
            members: vec![(id.to_string(), seq.to_string())],
        }
    }

    /// The member all membership decisions compare against.
    pub fn representative(&self) -> &(String, String) {
        &self.members[0]
    }
}

/// Greedy first-fit clustering of `seqs` in insertion order.
///
/// Each sequence joins the first existing cluster, scanning in cluster
/// creation order, whose representative scores at or above `threshold`
/// against it; otherwise it seeds a new cluster. Membership is final:
/// clusters are never merged, split, or reordered, so the result is
/// deterministic for a given input order.
///
/// `threshold` outside `[0.0, 1.0]` is rejected.
pub fn cluster(seqs: &IndexMap<String, String>, threshold: f64) -> Result<Vec<Cluster>> {
    cluster_with(seqs, threshold, |_, _| {})
}

/// Like [`cluster`], invoking `on_assign(assigned, clusters)` after each
/// sequence is placed. `assigned` counts sequences placed so far,
/// `clusters` the clusters existing so far. Callers drive progress
/// reporting through this hook; the scan itself stays sequential.
pub fn cluster_with<F>(
    seqs: &IndexMap<String, String>,
    threshold: f64,
    mut on_assign: F,
) -> Result<Vec<Cluster>>
where
    F: FnMut(usize, usize),
{
    if !(0.0..=1.0).contains(&threshold) {
        anyhow::bail!("Invalid identity threshold: {}", threshold);
    }

    let mut clusters: Vec<Cluster> = Vec::new();

    for (assigned, (id, seq)) in seqs.iter().enumerate() {
        let found = clusters
            .iter_mut()
            .find(|c| identity(seq, &c.representative().1) >= threshold);

        match found {
            Some(c) => c.members.push((id.to_string(), seq.to_string())),
            None => clusters.push(Cluster::seed(id, seq)),
        }

        on_assign(assigned + 1, clusters.len());
    }

    Ok(clusters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(id, seq)| (id.to_string(), seq.to_string()))
            .collect()
    }

    fn ids(c: &Cluster) -> Vec<&str> {
        c.members.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn test_cluster_strict_threshold_singletons() {
        // A and B match at 7/8 = 0.875, below 0.9
        let seqs = collection(&[("A", "ACGTACGT"), ("B", "ACGTACGA"), ("C", "TTTTTTTT")]);
        let clusters = cluster(&seqs, 0.9).unwrap();

        assert_eq!(clusters.len(), 3);
        assert_eq!(ids(&clusters[0]), vec!["A"]);
        assert_eq!(ids(&clusters[1]), vec!["B"]);
        assert_eq!(ids(&clusters[2]), vec!["C"]);
    }

    #[test]
    fn test_cluster_loose_threshold_groups() {
        let seqs = collection(&[("A", "ACGTACGT"), ("B", "ACGTACGA"), ("C", "TTTTTTTT")]);
        let clusters = cluster(&seqs, 0.8).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), vec!["A", "B"]);
        assert_eq!(ids(&clusters[1]), vec!["C"]);
        assert_eq!(clusters[0].representative().0, "A");
    }

    #[test]
    fn test_cluster_threshold_is_inclusive() {
        let seqs = collection(&[("A", "ACGTACGT"), ("B", "ACGTACGA")]);
        let clusters = cluster(&seqs, 0.875).unwrap();

        assert_eq!(clusters.len(), 1);
        assert_eq!(ids(&clusters[0]), vec!["A", "B"]);
    }

    #[test]
    fn test_cluster_first_fit_wins_ties() {
        // s3 scores 0.5 against both representatives; the
        // earliest-created cluster takes it
        let seqs = collection(&[("s1", "AAAA"), ("s2", "TTTT"), ("s3", "AATT")]);
        let clusters = cluster(&seqs, 0.5).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), vec!["s1", "s3"]);
        assert_eq!(ids(&clusters[1]), vec!["s2"]);
    }

    #[test]
    fn test_cluster_members_compare_to_representative_only() {
        // s3 is close to s2 but not to the representative s1, so it
        // cannot ride along in s1's cluster
        let seqs = collection(&[("s1", "AAAAAAAA"), ("s2", "AAAAATTT"), ("s3", "AATTTTTT")]);
        let clusters = cluster(&seqs, 0.6).unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(ids(&clusters[0]), vec!["s1", "s2"]);
        assert_eq!(ids(&clusters[1]), vec!["s3"]);
    }

    #[test]
    fn test_cluster_partitions_input() {
        let seqs = collection(&[
            ("a", "ACGTACGT"),
            ("b", "ACGTACGA"),
            ("c", "TTTTTTTT"),
            ("d", "ACGT"),
            ("e", "GGGGCCCC"),
        ]);

        for threshold in [0.0, 0.25, 0.5, 0.875, 1.0] {
            let clusters = cluster(&seqs, threshold).unwrap();
            let mut seen: Vec<&str> = clusters.iter().flat_map(ids).collect();
            seen.sort_unstable();
            assert_eq!(seen, vec!["a", "b", "c", "d", "e"], "threshold {}", threshold);
        }
    }

    #[test]
    fn test_cluster_count_monotone_in_threshold() {
        let seqs = collection(&[
            ("a", "ACGTACGT"),
            ("b", "ACGTACGA"),
            ("c", "TTTTTTTT"),
            ("d", "ACGT"),
            ("e", "GGGGCCCC"),
        ]);

        let mut prev = 0;
        for threshold in [0.0, 0.25, 0.5, 0.75, 0.875, 0.9, 1.0] {
            let count = cluster(&seqs, threshold).unwrap().len();
            assert!(count >= prev, "threshold {}: {} < {}", threshold, count, prev);
            prev = count;
        }
    }

    #[test]
    fn test_cluster_empty_collection() {
        let clusters = cluster(&IndexMap::new(), 0.9).unwrap();
        assert!(clusters.is_empty());
    }

    #[test]
    fn test_cluster_rejects_out_of_range_threshold() {
        let seqs = collection(&[("a", "ACGT")]);

        assert!(cluster(&seqs, -0.1).is_err());
        assert!(cluster(&seqs, 1.1).is_err());
        assert!(cluster(&seqs, 0.0).is_ok());
        assert!(cluster(&seqs, 1.0).is_ok());
    }

    #[test]
    fn test_cluster_with_reports_progress() {
        let seqs = collection(&[("A", "ACGTACGT"), ("B", "ACGTACGA"), ("C", "TTTTTTTT")]);

        let mut ticks = Vec::new();
        let clusters = cluster_with(&seqs, 0.8, |assigned, clusters| {
            ticks.push((assigned, clusters));
        })
        .unwrap();

        assert_eq!(clusters.len(), 2);
        assert_eq!(ticks, vec![(1, 1), (2, 1), (3, 2)]);
    }
}
