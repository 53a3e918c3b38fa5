//! # Dispatch Benchmarks
//!
//! End-to-end cost of one decision and of a full episode through the
//! dispatcher, including guard and meta-controller updates.
//!
//! Run: `cargo bench --bench dispatch_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use triad_core::prelude::*;
use triad_orchestration::{DispatcherConfig, EftPolicy, OffloadDispatcher};
use triad_workload::generators::{WorkloadConfig, WorkloadGenerator};

fn demo_env() -> EdgeCloudEnv {
    let mut pool = ResourcePool::new();
    pool.add_node(Node::new("edge1", NodeKind::Edge, 800.0, 1200.0, 4.0, 12.0))
        .unwrap();
    pool.add_node(Node::new("edge2", NodeKind::Edge, 600.0, 900.0, 4.0, 10.0))
        .unwrap();
    pool.add_node(Node::new("cloud1", NodeKind::Cloud, 2500.0, 6000.0, 20.0, 60.0))
        .unwrap();

    let mut net = NetworkModel::new();
    net.set_link("iot", "edge1", Link::new(80.0, 12.0, 0.01));
    net.set_link("iot", "edge2", Link::new(60.0, 15.0, 0.01));
    net.set_link("iot", "cloud1", Link::new(30.0, 60.0, 0.01));
    EdgeCloudEnv::new(pool, net, SlaConfig::default(), 1.0)
}

fn bench_single_dispatch(c: &mut Criterion) {
    c.bench_function("dispatch_one", |b| {
        let mut d = OffloadDispatcher::new(demo_env(), DispatcherConfig::default());
        d.reset().unwrap();
        let task = Task::new("t", 500.0, 2.0, 1.0, 0);
        b.iter(|| black_box(d.dispatch(&task, &mut EftPolicy).unwrap()))
    });
}

fn bench_full_episode(c: &mut Criterion) {
    let mut r#gen = WorkloadGenerator::new(WorkloadConfig {
        horizon_s: 30.0,
        ..Default::default()
    });
    let arrivals = r#gen.generate();

    c.bench_function("episode_30s_poisson", |b| {
        let mut d = OffloadDispatcher::new(demo_env(), DispatcherConfig::default());
        b.iter(|| black_box(d.run_episode(&arrivals, &mut EftPolicy).unwrap()))
    });
}

criterion_group!(benches, bench_single_dispatch, bench_full_episode);
criterion_main!(benches);
