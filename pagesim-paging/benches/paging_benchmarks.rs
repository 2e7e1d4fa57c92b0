//! Paging engine benchmarks

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pagesim_paging::{JobId, LogicalAddr, PagingEngine, Policy};

const PAGE_SIZE: usize = 256;

fn bench_hit_path(c: &mut Criterion) {
    for policy in [Policy::Fifo, Policy::Lru] {
        let mut engine = PagingEngine::new(8, PAGE_SIZE, policy).unwrap();
        engine.register_job(JobId::new(1), 8 * PAGE_SIZE).unwrap();
        for page in 0..8 {
            engine.resolve_page(JobId::new(1), page, 0).unwrap();
        }

        c.bench_function(&format!("resolve_hit_{policy}"), |b| {
            b.iter(|| {
                engine
                    .resolve_page(black_box(JobId::new(1)), black_box(3), black_box(17))
                    .unwrap()
            })
        });
    }
}

fn bench_fault_with_eviction(c: &mut Criterion) {
    for policy in [Policy::Fifo, Policy::Lru] {
        let mut engine = PagingEngine::new(4, PAGE_SIZE, policy).unwrap();
        engine.register_job(JobId::new(1), 8 * PAGE_SIZE).unwrap();

        // Cycling through twice the frame count misses on every touch.
        let mut page = 0;
        c.bench_function(&format!("resolve_fault_evict_{policy}"), |b| {
            b.iter(|| {
                let addr = LogicalAddr::new(page * PAGE_SIZE);
                page = (page + 1) % 8;
                engine.resolve(JobId::new(1), black_box(addr)).unwrap()
            })
        });
    }
}

criterion_group!(benches, bench_hit_path, bench_fault_with_eviction);
criterion_main!(benches);
