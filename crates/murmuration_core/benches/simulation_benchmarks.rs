use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use murmuration_core::config::SimulationConfig;
use murmuration_core::Simulation;

fn config(population: usize, predators: bool) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.world.seed = Some(7);
    config.flock.population = population;
    config.predator.enabled = predators;
    config
}

fn bench_simulation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");
    for population in [50, 500, 2000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                let Ok(mut sim) = Simulation::new(config(population, false)) else {
                    return;
                };
                b.iter(|| black_box(sim.step().map(|r| r.visited).unwrap_or(0)))
            },
        );
    }
    group.finish();
}

fn bench_simulation_with_predators(c: &mut Criterion) {
    c.bench_function("simulation_step_predators_500", |b| {
        b.iter_batched(
            || Simulation::new(config(500, true)).ok(),
            |sim| {
                if let Some(mut sim) = sim {
                    for _ in 0..10 {
                        if sim.step().is_err() {
                            break;
                        }
                    }
                    black_box(sim.len());
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_simulation_step,
    bench_simulation_with_predators
);
criterion_main!(benches);
