//! Benchmarks of stroke synthesis and rasterization.

#![feature(test)]
extern crate test;
use test::Bencher;

use quill::{curve_discs, CubicBez, PadConfig, Pixmap, Sample, SignaturePad, StrokeState};

fn wave(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Sample::new(10.0 + 4.0 * t, 120.0 + 60.0 * (t / 9.0).sin(), 8.0 * t)
        })
        .collect()
}

#[bench]
fn bench_curve_discs(b: &mut Bencher) {
    let c = CubicBez::new((10.0, 10.0), (60.0, 80.0), (120.0, -20.0), (180.0, 40.0));
    b.iter(|| test::black_box(curve_discs(test::black_box(&c), 2.5, 0.5)));
}

#[bench]
fn bench_stroke_state(b: &mut Bencher) {
    let samples = wave(200);
    let config = PadConfig::default();
    b.iter(|| {
        let (mut state, _) = StrokeState::new().begin(samples[0], &config);
        for &s in &samples[1..] {
            let (next, step) = state.update(s, &config);
            test::black_box(step);
            state = next;
        }
        test::black_box(state.end(samples[199], &config))
    });
}

#[bench]
fn bench_pad_pixmap(b: &mut Bencher) {
    let samples = wave(200);
    let mut pad = SignaturePad::new(Pixmap::new(820, 240), PadConfig::default()).unwrap();
    b.iter(|| {
        pad.clear();
        pad.begin(samples[0]);
        for &s in &samples[1..] {
            pad.update(s);
        }
        pad.end(samples[199]);
        test::black_box(pad.is_empty())
    });
}
