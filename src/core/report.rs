// report.rs - Validation summary and ORF length distribution

use serde::Serialize;
use std::collections::HashSet;

/// Validated vs. unvalidated ORF counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub validated: usize,
    pub false_positives: usize,
    pub false_positive_rate: f64,
}

/// Compute the false-positive rate over all observed ORFs.
///
/// Only validated ids that were actually observed are counted, so the rate
/// stays within `0.0..=1.0`.
pub fn assess_false_positives(validated_ids: &HashSet<String>, observed_ids: &HashSet<String>) -> ValidationReport {
    let total = observed_ids.len();
    let validated = observed_ids
        .iter()
        .filter(|id| validated_ids.contains(*id))
        .count();
    let false_positives = total - validated;
    let false_positive_rate = if total == 0 {
        0.0
    } else {
        false_positives as f64 / total as f64
    };

    ValidationReport {
        total,
        validated,
        false_positives,
        false_positive_rate,
    }
}

impl ValidationReport {
    pub fn print_summary(&self) {
        println!("\n📋 === ORF VALIDATION SUMMARY ===");
        println!("  • Total ORFs          : {}", self.total);
        println!("  • Validated (CDS)     : {}", self.validated);
        println!("  • False positives     : {}", self.false_positives);
        println!("  • False positive rate : {:.2}%", self.false_positive_rate * 100.0);
    }
}

/// Bin width used for length histograms, in nucleotides
pub const LENGTH_BIN_WIDTH: usize = 60;

/// One histogram bin `[lower, upper)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthBin {
    pub lower: usize,
    pub upper: usize,
    pub validated: usize,
    pub false_positives: usize,
}

/// ORF lengths split by whether the ORF had any similarity hit
#[derive(Debug, Clone, Default)]
pub struct LengthDistribution {
    pub validated: Vec<usize>,
    pub false_positives: Vec<usize>,
}

impl LengthDistribution {
    /// Partition `(id, length)` pairs by membership in `validated_ids`
    pub fn partition<I>(orfs: I, validated_ids: &HashSet<String>) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut dist = Self::default();
        for (id, length) in orfs {
            if validated_ids.contains(&id) {
                dist.validated.push(length);
            } else {
                dist.false_positives.push(length);
            }
        }
        dist
    }

    pub fn total(&self) -> usize {
        self.validated.len() + self.false_positives.len()
    }

    /// Histogram with edges `0, width, 2*width, ...` below `max_length + 100`
    pub fn bins(&self, width: usize) -> Vec<LengthBin> {
        let Some(max_length) = self.validated.iter().chain(&self.false_positives).copied().max() else {
            return Vec::new();
        };
        let width = width.max(1);

        let edges: Vec<usize> = (0..max_length + 100).step_by(width).collect();
        let mut bins: Vec<LengthBin> = edges
            .windows(2)
            .map(|w| LengthBin {
                lower: w[0],
                upper: w[1],
                validated: 0,
                false_positives: 0,
            })
            .collect();
        if bins.is_empty() {
            return bins;
        }

        let last = bins.len() - 1;
        for &length in &self.validated {
            bins[(length / width).min(last)].validated += 1;
        }
        for &length in &self.false_positives {
            bins[(length / width).min(last)].false_positives += 1;
        }
        bins
    }
}

/// Expected ORF length in a random sequence, where each codon is a stop
/// with probability `stops / 64`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricExpectation {
    pub stop_probability: f64,
    pub expected_codons: f64,
    pub expected_nucleotides: f64,
}

impl GeometricExpectation {
    pub fn for_stop_count(stops: usize) -> Self {
        let stop_probability = stops as f64 / 64.0;
        let expected_codons = 1.0 / stop_probability;
        Self {
            stop_probability,
            expected_codons,
            expected_nucleotides: expected_codons * 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rate_for_empty_catalog_is_zero() {
        let report = assess_false_positives(&ids(&["ORF_1"]), &HashSet::new());
        assert_eq!(report.total, 0);
        assert_eq!(report.false_positive_rate, 0.0);
    }

    #[test]
    fn test_rate_ten_total_three_validated() {
        let observed: HashSet<String> = (1..=10).map(|i| format!("ORF_{}", i)).collect();
        let report = assess_false_positives(&ids(&["ORF_2", "ORF_5", "ORF_9"]), &observed);

        assert_eq!(report.total, 10);
        assert_eq!(report.validated, 3);
        assert_eq!(report.false_positives, 7);
        assert!((report.false_positive_rate - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_unobserved_validated_ids_are_ignored() {
        let report = assess_false_positives(&ids(&["ORF_1", "ORF_99"]), &ids(&["ORF_1", "ORF_2"]));
        assert_eq!(report.validated, 1);
        assert_eq!(report.false_positives, 1);
        assert_eq!(report.false_positive_rate, 0.5);
    }

    #[test]
    fn test_length_partition_and_bins() {
        let orfs = vec![
            ("ORF_1".to_string(), 9),
            ("ORF_2".to_string(), 60),
            ("ORF_3".to_string(), 150),
            ("ORF_4".to_string(), 59),
        ];
        let dist = LengthDistribution::partition(orfs, &ids(&["ORF_2", "ORF_3"]));
        assert_eq!(dist.validated, vec![60, 150]);
        assert_eq!(dist.false_positives, vec![9, 59]);
        assert_eq!(dist.total(), 4);

        // edges 0, 60, 120, 180, 240 (< 250)
        let bins = dist.bins(LENGTH_BIN_WIDTH);
        assert_eq!(bins.len(), 4);
        assert_eq!((bins[0].lower, bins[0].upper), (0, 60));
        assert_eq!(bins[0].false_positives, 2);
        assert_eq!(bins[1].validated, 1);
        assert_eq!(bins[2].validated, 1);
        assert_eq!(bins[3].validated + bins[3].false_positives, 0);
    }

    #[test]
    fn test_bins_of_empty_distribution() {
        assert!(LengthDistribution::default().bins(LENGTH_BIN_WIDTH).is_empty());
    }

    #[test]
    fn test_geometric_expectation_standard_code() {
        let expectation = GeometricExpectation::for_stop_count(3);
        assert!((expectation.stop_probability - 0.046875).abs() < 1e-12);
        assert!((expectation.expected_codons - 64.0 / 3.0).abs() < 1e-9);
        assert!((expectation.expected_nucleotides - 64.0).abs() < 1e-9);
    }
}
