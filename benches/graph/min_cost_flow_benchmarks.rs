use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flownet::graph::{max_flow, min_cost_max_flow, FlowNetwork, NodeId, NodeLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random bipartite assignment network: source -> left -> right -> sink.
fn assignment_network(size: usize, degree: usize, seed: u64) -> (FlowNetwork, NodeId, NodeId) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layout = NodeLayout::new();
    let source = layout.single("source");
    let sink = layout.single("sink");
    let left = layout.block("left", size);
    let right = layout.block("right", size);
    let mut net = FlowNetwork::new(layout.node_count());

    for i in 0..size {
        net.add_edge(source, left.at(i), 1, 0);
        net.add_edge(right.at(i), sink, 1, 0);
        for _ in 0..degree {
            let j = rng.gen_range(0..size);
            net.add_edge(left.at(i), right.at(j), 1, rng.gen_range(0..100));
        }
    }
    (net, source, sink)
}

fn bench_min_cost_max_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_cost_max_flow");
    for size in [50, 200, 500] {
        let (net, source, sink) = assignment_network(size, 8, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &net, |b, net| {
            b.iter(|| {
                let mut net = net.clone();
                black_box(min_cost_max_flow(&mut net, source, sink).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_dinic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dinic_max_flow");
    for size in [50, 200, 500] {
        let (net, source, sink) = assignment_network(size, 8, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &net, |b, net| {
            b.iter(|| {
                let mut net = net.clone();
                black_box(max_flow(&mut net, source, sink).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_min_cost_max_flow, bench_dinic);
criterion_main!(benches);
