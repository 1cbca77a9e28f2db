//! Latency benchmarks for encoding and prediction.
//!
//! ```bash
//! cargo bench -p appraisal
//! ```

use appraisal::features::{District, FeatureContract, PropertyRecord, column_universe, encode};
use appraisal::invest::project;
use appraisal::model::{
    Aggregation, LinearRegressor, Model, ModelArtifact, RegressorSpec, Tree, TreeEnsemble,
    TreeNode, ValuationEngine,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::path::Path;
use std::sync::Arc;

fn contract() -> FeatureContract {
    column_universe().into_iter().collect()
}

fn linear_engine(contract: &FeatureContract) -> ValuationEngine {
    let artifact = ModelArtifact {
        feature_names: Some(contract.clone()),
        target: None,
        model: RegressorSpec::Linear(LinearRegressor {
            intercept: 1_000_000.0,
            coefficients: (0..contract.len()).map(|i| i as f64 * 1_000.0).collect(),
        }),
    };
    ValuationEngine::new(Arc::new(
        Model::from_artifact(artifact, Path::new("bench")).expect("valid artifact"),
    ))
}

/// 100 depth-3 trees splitting on net area and district columns.
fn ensemble_engine(contract: &FeatureContract) -> ValuationEngine {
    let area = contract.position("m2_net").expect("m2_net column");
    let trees = (0..100)
        .map(|i| {
            let district = 12 + i % 39;
            Tree {
                nodes: vec![
                    TreeNode::Split { feature: area, threshold: 80.0 + i as f64, left: 1, right: 2 },
                    TreeNode::Split { feature: district, threshold: 0.5, left: 3, right: 4 },
                    TreeNode::Split { feature: district, threshold: 0.5, left: 5, right: 6 },
                    TreeNode::Leaf { value: 10_000.0 },
                    TreeNode::Leaf { value: 20_000.0 },
                    TreeNode::Leaf { value: 30_000.0 },
                    TreeNode::Leaf { value: 40_000.0 },
                ],
            }
        })
        .collect();
    let artifact = ModelArtifact {
        feature_names: Some(contract.clone()),
        target: None,
        model: RegressorSpec::TreeEnsemble(TreeEnsemble {
            n_features: contract.len(),
            base_score: 2_000_000.0,
            learning_rate: 0.1,
            aggregation: Aggregation::Sum,
            trees,
        }),
    };
    ValuationEngine::new(Arc::new(
        Model::from_artifact(artifact, Path::new("bench")).expect("valid artifact"),
    ))
}

fn benchmark_encode(c: &mut Criterion) {
    let contract = contract();
    let record = PropertyRecord::default().with_district(District::Sisli);

    c.bench_function("encode_aligned", |b| {
        b.iter(|| encode(black_box(&record), Some(black_box(&contract))));
    });

    c.bench_function("encode_unaligned", |b| {
        b.iter(|| encode(black_box(&record), None));
    });
}

fn benchmark_predict(c: &mut Criterion) {
    let contract = contract();
    let record = PropertyRecord::default().with_district(District::Sisli);
    let vector = encode(&record, Some(&contract));

    let linear = linear_engine(&contract);
    c.bench_function("predict_linear", |b| {
        b.iter(|| linear.predict(black_box(&vector)));
    });

    let ensemble = ensemble_engine(&contract);
    c.bench_function("predict_tree_ensemble", |b| {
        b.iter(|| ensemble.predict(black_box(&vector)));
    });
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let contract = contract();
    let engine = ensemble_engine(&contract);
    let record = PropertyRecord::default().with_district(District::Sisli);

    c.bench_function("encode_predict_project", |b| {
        b.iter(|| {
            let vector = encode(black_box(&record), Some(&contract));
            let valuation = engine.valuate(&vector, 205_000.0).expect("prediction");
            project(valuation.estimate, 20, 40.0).expect("projection")
        });
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_predict,
    benchmark_end_to_end
);
criterion_main!(benches);
