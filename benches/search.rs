//! Criterion benchmarks for the recipe filter.
//!
//! Run with:
//!   cargo bench
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kitchen::recipe::Recipe;
use kitchen::search::filter_indices;

fn make_catalog(n: usize) -> Vec<Recipe> {
    (0..n)
        .map(|i| Recipe {
            id: format!("recipe-{i}"),
            title: format!("Grandpa's Dish No. {i}"),
            subtitle: None,
            description: "Slow-cooked, loudly explained, never written down until now.".to_string(),
            image: None,
            tags: vec!["Dinner".to_string(), if i % 7 == 0 { "Family Favorite" } else { "Weekday" }.to_string()],
            ingredients: vec![
                "2 onions".to_string(),
                "1 kg potatoes".to_string(),
                if i % 13 == 0 { "1 lemon" } else { "1 tsp salt" }.to_string(),
            ],
            instructions: vec!["Chop.".to_string(), "Simmer.".to_string()],
            tips: None,
        })
        .collect()
}

/// Benchmark filtering with varying catalog sizes.
fn bench_filter_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_size");

    for size in [50, 500, 5000].iter() {
        let catalog = make_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("lemon", size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter_indices(catalog, black_box("Lemon"))));
        });

        group.bench_with_input(BenchmarkId::new("blank", size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter_indices(catalog, black_box("   "))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_sizes);

criterion_main!(benches);
