use criterion::{criterion_group, criterion_main, Criterion};
use roadwatch::api::evaluate_all;
use roadwatch::catalog::SurfaceType;
use roadwatch::config::EvalParams;
use roadwatch::session::EvaluationSession;
use roadwatch::vci::{compute_vci, SurveyRecord};
use std::hint::black_box;

fn setup_surveys(n: usize) -> Vec<SurveyRecord> {
    (0..n)
        .map(|i| {
            let surface = if i % 2 == 0 {
                SurfaceType::Asphalt
            } else {
                SurfaceType::Concrete
            };
            surface
                .catalog()
                .iter()
                .enumerate()
                .fold(
                    SurveyRecord::new(format!("road-{}", i), surface),
                    |rec, (j, t)| rec.observe(t.name, format!("{}.{}", (i + j) % 7, j)),
                )
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let values: Vec<String> = (0..13).map(|i| format!("{}.25", i)).collect();
    let session = EvaluationSession::with_values(SurfaceType::Asphalt, values.as_slice())
        .expect("Failed to build session");

    c.bench_function("compute_vci (asphalt, 13 rows)", |b| {
        b.iter(|| compute_vci(black_box(session.rows())))
    });

    let surveys = setup_surveys(10_000);
    let params = EvalParams::default();
    c.bench_function("evaluate_all (10k surveys)", |b| {
        b.iter(|| evaluate_all(black_box(&surveys), black_box(&params)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
