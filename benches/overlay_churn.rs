// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for overlay lifecycle churn.
//!
//! Measures the performance of:
//! - Creating and expiring many toasts on the headless document
//! - Sweeping a crowded manager with `dismiss_all`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ephemera::surface::Document;
use ephemera::ui::ephemeral::{ConfirmOptions, Manager, ProgressOptions, ToastOptions};
use std::hint::black_box;
use std::time::Duration;

const BATCH: usize = 200;

fn crowded_manager() -> Manager<Document> {
    let mut manager = Manager::new(Document::new());
    for i in 0..BATCH {
        manager.toast(ToastOptions::new(format!("toast {i}")));
        if i % 10 == 0 {
            manager.progress(ProgressOptions::new());
        }
    }
    let _pending = manager.confirm(ConfirmOptions::new("Keep going?"));
    manager.loading(true, "busy");
    manager
}

/// Benchmark creating a batch of toasts and letting them expire.
fn bench_toast_expiry(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_churn");

    group.bench_function("toast_create_and_expire", |b| {
        b.iter(|| {
            let mut manager = Manager::new(Document::new());
            for i in 0..BATCH {
                manager.toast(ToastOptions::new(format!("toast {i}")));
            }
            manager.advance(Duration::from_secs(10));
            black_box(manager.registry().len());
        });
    });

    group.finish();
}

/// Benchmark sweeping a manager full of overlays.
fn bench_dismiss_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_churn");

    group.bench_function("dismiss_all", |b| {
        b.iter_batched(
            crowded_manager,
            |mut manager| {
                manager.dismiss_all();
                black_box(manager);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_toast_expiry, bench_dismiss_all);
criterion_main!(benches);
