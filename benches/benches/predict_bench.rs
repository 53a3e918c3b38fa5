//! # Predictor Benchmarks
//!
//! Measures the per-decision cost of feature building, the three analytic
//! estimators and top-k aggregation over growing candidate sets.
//!
//! Run: `cargo bench --bench predict_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use triad_core::prelude::*;
use triad_predict::aggregator::{AggregationConfig, PredictionAggregator};
use triad_predict::energy::EnergyPredictor;
use triad_predict::features::FeatureBuilder;
use triad_predict::latency::LatencyPredictor;
use triad_predict::risk::SlaRiskPredictor;

fn state_with_nodes(n: usize) -> StateSnapshot {
    let mut pool = ResourcePool::new();
    let mut net = NetworkModel::new();
    for i in 0..n {
        let id = format!("edge{i}");
        pool.add_node(Node::new(&id, NodeKind::Edge, 800.0, 1200.0, 4.0, 12.0))
            .unwrap();
        net.set_link(constants::IOT_SOURCE, &id, Link::new(80.0, 12.0, 0.01));
    }
    EdgeCloudEnv::new(pool, net, SlaConfig::default(), 1.0)
        .observe_state()
        .unwrap()
}

fn bench_predict_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_pipeline");
    let task = Task::new("t", 500.0, 1.0, 1.0, 0);
    let builder = FeatureBuilder::new();
    let lp = LatencyPredictor::default();
    let ep = EnergyPredictor::default();
    let rp = SlaRiskPredictor::default();
    let agg = PredictionAggregator::new(AggregationConfig::default());

    for n in [4usize, 16, 64] {
        let state = state_with_nodes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, state| {
            b.iter(|| {
                let cands = builder.build_candidates(state, &task);
                let l = lp.predict(&cands);
                let e = ep.predict(&cands);
                let r = rp.predict_from_latency(&cands, &l);
                black_box(agg.aggregate(&l, &e, &r, 0.4, 0.35, 0.25))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predict_pipeline);
criterion_main!(benches);
