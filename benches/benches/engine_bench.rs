//! # EdgeCloudEnv Benchmarks
//!
//! Measures performance of the simulation engine hot path: state observation
//! and task commit. Both are O(n) in the number of nodes.
//!
//! Run: `cargo bench --bench engine_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use triad_core::prelude::*;

fn env_with_nodes(n: usize) -> EdgeCloudEnv {
    let mut pool = ResourcePool::new();
    let mut net = NetworkModel::new();
    for i in 0..n {
        let id = format!("edge{i}");
        pool.add_node(Node::new(&id, NodeKind::Edge, 800.0, 1200.0, 4.0, 12.0))
            .unwrap();
        net.set_link(constants::IOT_SOURCE, &id, Link::new(80.0, 12.0, 0.01));
    }
    EdgeCloudEnv::new(pool, net, SlaConfig::default(), 1.0)
}

fn bench_observe_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("observe_state");
    for n in [4usize, 16, 64] {
        let env = env_with_nodes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &env, |b, env| {
            b.iter(|| black_box(env.observe_state().unwrap()))
        });
    }
    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for n in [4usize, 16, 64] {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            let mut env = env_with_nodes(n);
            let task = Task::new("t", 500.0, 1.0, 1.0, 0);
            b.iter(|| black_box(env.step(&task, "edge0").unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_observe_state, bench_step);
criterion_main!(benches);
