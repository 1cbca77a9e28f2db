//! End-to-end tests of the appraisal pipeline against artifacts on disk.

use appraisal::features::{District, FeatureContract, PropertyRecord};
use appraisal::invest::{InvestmentAssumptions, Tier};
use appraisal::model::{LinearRegressor, ModelArtifact, ModelError, RegressorSpec};
use appraisal::{AppraisalConfig, AppraisalError, Appraiser, ValuationWarning};
use approx::assert_relative_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 2,000,000 base, 10,000 per net m², 300,000 for Kadıköy.
fn write_model(dir: &Path, with_names: bool) -> PathBuf {
    let path = dir.join("house_price_model.json");
    let (feature_names, coefficients): (Option<FeatureContract>, Vec<f64>) = if with_names {
        (
            Some(["m2_net", "ilce_Kadıköy", "ilce_Fatih"].into_iter().collect()),
            vec![10_000.0, 300_000.0, 0.0],
        )
    } else {
        // Raw one-hot order: 12 scalars, then one column per categorical
        let mut coefficients = vec![0.0; 15];
        coefficients[1] = 10_000.0;
        (None, coefficients)
    };
    ModelArtifact {
        feature_names,
        target: Some("fiyat".to_string()),
        model: RegressorSpec::Linear(LinearRegressor {
            intercept: 2_000_000.0,
            coefficients,
        }),
    }
    .write(&path)
    .unwrap();
    path
}

fn appraiser(dir: &TempDir, with_names: bool) -> Appraiser {
    let config = AppraisalConfig {
        model_path: Some(write_model(dir.path(), with_names)),
        model_candidates: vec![dir.path().join("missing.json")],
        ..Default::default()
    };
    Appraiser::from_config(&config)
}

fn kadikoy() -> PropertyRecord {
    PropertyRecord::default().with_district(District::Kadikoy)
}

#[test]
fn test_aligned_appraisal() {
    let dir = TempDir::new().unwrap();
    let appraiser = appraiser(&dir, true);

    let appraisal = appraiser
        .appraise(&kadikoy(), None, &InvestmentAssumptions::default())
        .unwrap();

    // 2,000,000 + 85 * 10,000 + 300,000
    assert_relative_eq!(appraisal.valuation.estimate, 3_150_000.0);
    assert_eq!(appraisal.valuation.deviation, 205_000.0);
    assert!(appraisal.warnings.is_empty());
    assert!(appraisal.comparison.is_none());
    assert_eq!(appraisal.vector.columns(), ["m2_net", "ilce_Kadıköy", "ilce_Fatih"]);
    assert_eq!(appraisal.projection.points.len(), 10);
}

#[rstest]
#[case(2_800_000.0, Tier::GreatDeal)]
#[case(3_000_000.0, Tier::Deal)]
#[case(3_150_000.0, Tier::Fair)]
#[case(3_400_000.0, Tier::Overpriced)]
fn test_asking_price_tiers(#[case] asking: f64, #[case] tier: Tier) {
    let dir = TempDir::new().unwrap();
    let appraisal = appraiser(&dir, true)
        .appraise(&kadikoy(), Some(asking), &InvestmentAssumptions::default())
        .unwrap();
    assert_eq!(appraisal.comparison.unwrap().tier, tier);
}

#[test]
fn test_zero_asking_price_skips_comparison() {
    let dir = TempDir::new().unwrap();
    let appraisal = appraiser(&dir, true)
        .appraise(&kadikoy(), Some(0.0), &InvestmentAssumptions::default())
        .unwrap();
    assert!(appraisal.comparison.is_none());
}

#[test]
fn test_unknown_district_is_zero_filled() {
    let dir = TempDir::new().unwrap();
    let record = PropertyRecord {
        district: "Atlantis".to_string(),
        ..Default::default()
    };
    let valuation = appraiser(&dir, true).estimate(&record).unwrap();
    assert_relative_eq!(valuation.estimate, 2_850_000.0);
}

#[test]
fn test_missing_contract_degrades_with_warning() {
    let dir = TempDir::new().unwrap();
    let appraiser = appraiser(&dir, false);
    let record = kadikoy();

    let appraisal = appraiser
        .appraise(&record, Some(2_000_000.0), &InvestmentAssumptions::default())
        .unwrap();
    assert_eq!(appraisal.warnings, vec![ValuationWarning::MissingFeatureContract]);
    assert_relative_eq!(appraisal.valuation.estimate, 2_850_000.0);

    let report = appraisal.report(&record, Some(2_000_000.0));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.to_ascii_table().contains("no feature names"));
}

#[test]
fn test_missing_model_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = AppraisalConfig {
        model_candidates: vec![dir.path().join("a.json"), dir.path().join("b.json")],
        ..Default::default()
    };
    let appraiser = Appraiser::from_config(&config);

    match appraiser.estimate(&kadikoy()) {
        Err(AppraisalError::Model(ModelError::NotFound { searched })) => {
            assert_eq!(searched.len(), 2);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_model_loaded_once_across_requests() {
    let dir = TempDir::new().unwrap();
    let appraiser = appraiser(&dir, true);
    let first = appraiser.engine().unwrap();
    let _ = appraiser.estimate(&kadikoy()).unwrap();
    let second = appraiser.engine().unwrap();
    assert!(std::ptr::eq(first.model(), second.model()));
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("appraisal.json");
    std::fs::write(&path, r#"{"deviation": 100000, "default_horizon_years": 25}"#).unwrap();

    let config = AppraisalConfig::load(&path).unwrap();
    assert_eq!(config.deviation, 100_000.0);
    assert_eq!(config.default_assumptions().unwrap().horizon_years, 25);

    std::fs::write(&path, r#"{"deviation": "wide"}"#).unwrap();
    assert!(matches!(
        AppraisalConfig::load(&path),
        Err(AppraisalError::Config(_))
    ));
}
