// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for sheet layout passes.
//!
//! Measures the performance of:
//! - A full layout pass over a 50-image library (collapsed and enlarged)
//! - Toggling selection, which recomputes layout for the emitted effects

use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::Size;
use picker_sheet::domain::{Action, ActionStyle, Asset, AssetId};
use picker_sheet::infrastructure::MemoryAssetSource;
use picker_sheet::{SheetConfig, SheetController};
use std::hint::black_box;

fn library() -> Vec<Asset> {
    let shapes = [(4032, 3024), (3024, 4032), (1920, 1080), (2048, 2048)];
    (0..50u64)
        .zip(shapes.iter().cycle())
        .map(|(id, &(width, height))| Asset::new(AssetId::new(id), width, height, false))
        .collect()
}

fn sheet() -> SheetController<MemoryAssetSource> {
    let mut sheet = SheetController::new(MemoryAssetSource::new(library()), SheetConfig::default())
        .unwrap();
    sheet.set_viewport(Size::new(414.0, 736.0));
    sheet.load_assets();
    sheet.add_action(Action::new("Take Photo", ActionStyle::Default, |_| {}));
    sheet.add_action(Action::new("Photo Library", ActionStyle::Default, |_| {}));
    sheet.add_action(Action::new("Cancel", ActionStyle::Cancel, |_| {}));
    sheet
}

/// Benchmark a full layout pass in both preview states.
fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_layout");

    let collapsed = sheet();
    group.bench_function("layout_pass_collapsed", |b| {
        b.iter(|| black_box(collapsed.layout_pass()));
    });

    let mut enlarged = sheet();
    enlarged.select_asset(0).unwrap();
    enlarged.finish_enlarge_animation();
    group.bench_function("layout_pass_enlarged", |b| {
        b.iter(|| black_box(enlarged.layout_pass()));
    });

    group.finish();
}

/// Benchmark selection toggling on an enlarged sheet.
fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_layout");

    let mut sheet = sheet();
    sheet.select_asset(0).unwrap();
    sheet.finish_enlarge_animation();

    group.bench_function("toggle_selection", |b| {
        b.iter(|| black_box(sheet.toggle_asset(black_box(25)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_layout_pass, bench_toggle);
criterion_main!(benches);
