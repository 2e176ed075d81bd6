//! Property-based tests for apk-metrics using proptest
//!
//! Random label sequences check the metric identities; random tables drive
//! the binary end to end.

use apk_metrics::metrics::{LabelColumns, LabelSet, evaluate, f1_score};
use apk_metrics::MetricsError;
use assert_cmd::prelude::*;
use proptest::prelude::*;
use std::process::Command;

const NAME: &str = "apk-metrics";

const COLUMNS: LabelColumns<'static> = LabelColumns {
    ground_truth: "GROUND_TRUTH_LABEL",
    predicted: "PREDICTED_LABEL",
};

fn labels() -> LabelSet {
    LabelSet::new("SAFE", "MALWARE")
}

/// One of the two declared labels
fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("SAFE"), Just("MALWARE")]
}

/// Paired ground truth and predicted labels of equal, non-zero length
fn label_pairs_strategy() -> impl Strategy<Value = Vec<(&'static str, &'static str)>> {
    prop::collection::vec((label_strategy(), label_strategy()), 1..200)
}

/// Values that are neither declared label
fn foreign_label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z]{1,10}".prop_filter("declared label", |s| s != "SAFE" && s != "MALWARE"),
        Just("malware".to_string()),
        Just(" SAFE".to_string()),
        Just(String::new()),
    ]
}

fn split(pairs: &[(&'static str, &'static str)]) -> (Vec<&'static str>, Vec<&'static str>) {
    pairs.iter().copied().unzip()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_accuracy_is_share_of_matches(pairs in label_pairs_strategy()) {
        let (truth, predicted) = split(&pairs);
        let evaluation = evaluate(&truth, &predicted, &labels(), COLUMNS).unwrap();

        let matches = pairs.iter().filter(|(t, p)| t == p).count();
        let expected = matches as f64 / pairs.len() as f64;
        prop_assert!((evaluation.scores.accuracy - expected).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_cells_sum_to_row_count(pairs in label_pairs_strategy()) {
        let (truth, predicted) = split(&pairs);
        let evaluation = evaluate(&truth, &predicted, &labels(), COLUMNS).unwrap();

        let cells: usize = evaluation.matrix.rows().iter().flatten().sum();
        prop_assert_eq!(cells, pairs.len());
        prop_assert_eq!(evaluation.total(), pairs.len());
    }

    #[test]
    fn test_misclassified_plus_correct_is_total(pairs in label_pairs_strategy()) {
        let (truth, predicted) = split(&pairs);
        let evaluation = evaluate(&truth, &predicted, &labels(), COLUMNS).unwrap();

        prop_assert_eq!(
            evaluation.misclassified() + evaluation.matrix.correct(),
            pairs.len()
        );
    }

    #[test]
    fn test_f1_is_harmonic_mean(pairs in label_pairs_strategy()) {
        let (truth, predicted) = split(&pairs);
        let scores = evaluate(&truth, &predicted, &labels(), COLUMNS).unwrap().scores;

        let (p, r) = (scores.precision, scores.recall);
        if p + r > 0.0 {
            prop_assert!((scores.f1 - 2.0 * p * r / (p + r)).abs() < 1e-12);
        } else {
            prop_assert_eq!(scores.f1, 0.0);
        }
        prop_assert!((0.0..=1.0).contains(&scores.f1));
    }

    #[test]
    fn test_f1_score_bounds(p in 0.0f64..=1.0, r in 0.0f64..=1.0) {
        let f1 = f1_score(p, r);
        prop_assert!(f1 >= 0.0);
        prop_assert!(f1 <= p.max(r) + 1e-12);
        prop_assert!(f1 >= p.min(r) - 1e-12 || p + r == 0.0);
    }

    #[test]
    fn test_foreign_label_is_rejected(
        pairs in label_pairs_strategy(),
        foreign in foreign_label_strategy(),
        position in any::<prop::sample::Index>(),
    ) {
        let (mut truth, predicted): (Vec<&str>, Vec<&str>) = split(&pairs);
        let row = position.index(truth.len());
        truth[row] = foreign.as_str();

        match evaluate(&truth, &predicted, &labels(), COLUMNS) {
            Err(MetricsError::UnexpectedLabel { row: reported, column, value }) => {
                prop_assert_eq!(reported, row + 1);
                prop_assert_eq!(column.as_str(), "GROUND_TRUTH_LABEL");
                prop_assert_eq!(value.as_str(), foreign.as_str());
            }
            other => prop_assert!(false, "expected UnexpectedLabel, got {:?}", other),
        }
    }
}

// Tests that launch the binary run fewer cases
proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))] // Default is 256...

    #[test]
    fn test_binary_reports_every_misclassification(pairs in label_pairs_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let mut results = String::from("FILENAME,GROUND_TRUTH_LABEL,PREDICTED_LABEL\n");
        for (i, (truth, predicted)) in pairs.iter().enumerate() {
            results.push_str(&format!("app{i}.apk,{truth},{predicted}\n"));
        }
        std::fs::write(dir.path().join("analysis_results_prop.csv"), &results).unwrap();
        std::fs::write(
            dir.path().join("dataset_info_prop.csv"),
            "FILENAME,GROUND_TRUTH_LABEL\n",
        )
        .unwrap();

        let mut cmd = Command::cargo_bin(NAME).unwrap();
        cmd.current_dir(dir.path()).args(["--no-config", "--quiet"]);
        cmd.assert().success();

        let expected = pairs.iter().filter(|(t, p)| t != p).count();
        let exported = std::fs::read_to_string(dir.path().join("misclassified_apks.csv")).unwrap();
        prop_assert_eq!(exported.lines().count(), expected + 1);
    }
}
