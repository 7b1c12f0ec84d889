//! Benchmarks for curve fitting and figure rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use econsketch::{Axis, Line, Marker, Parabola, Point2, RationalCostCurve};

fn bench_parabola_fit(c: &mut Criterion) {
    c.bench_function("parabola_fit", |b| {
        b.iter(|| {
            Parabola::from_vertex(
                black_box(Point2::new(2.0, 2.0)),
                black_box(Point2::new(6.0, 6.0)),
            )
            .unwrap()
        })
    });
}

fn bench_cost_inverse(c: &mut Criterion) {
    let atc = RationalCostCurve::from_marginal(&Line::new(2.0, 0.25), Point2::new(4.0, 10.0));
    c.bench_function("rational_cost_inv_eval", |b| {
        b.iter(|| atc.inv_eval(black_box(6.0)).unwrap())
    });
}

fn bench_axis_render(c: &mut Criterion) {
    let supply = Line::from_two_points(Point2::new(0.0, 2.0), Point2::new(8.0, 10.0)).unwrap();
    let demand = Line::new(10.0, -1.0);
    let equilibrium = supply.intersect(&demand).unwrap();

    let mut axis = Axis::new(11.0, 11.0).with_title("Market");
    axis.add(supply);
    axis.add(demand);
    axis.add_solution_only(Marker::new(equilibrium).with_label("E"));

    c.bench_function("axis_render_solved", |b| {
        b.iter(|| axis.render(black_box(true)))
    });
}

criterion_group!(
    benches,
    bench_parabola_fit,
    bench_cost_inverse,
    bench_axis_render
);
criterion_main!(benches);
