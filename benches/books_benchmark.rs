use book_service::models::book::Book;
use book_service::services::books::{available_only, next_id};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_books(count: u64) -> Vec<Book> {
    (1..=count)
        .map(|id| Book {
            id,
            title: format!("Title {}", id),
            author: format!("Author {}", id % 97),
            available: id % 3 != 0,
        })
        .collect()
}

fn benchmark_next_id(c: &mut Criterion) {
    let books = sample_books(10_000);

    c.bench_function("next_id_10k", |b| b.iter(|| next_id(black_box(&books))));
}

fn benchmark_available_only(c: &mut Criterion) {
    let books = sample_books(10_000);

    c.bench_function("available_only_10k", |b| {
        b.iter(|| available_only(black_box(books.clone())))
    });
}

fn benchmark_json_round_trip(c: &mut Criterion) {
    let books = sample_books(1_000);
    let json = serde_json::to_string_pretty(&books).unwrap();

    c.bench_function("serialize_pretty_1k", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&books)).unwrap())
    });

    c.bench_function("parse_1k", |b| {
        b.iter(|| serde_json::from_str::<Vec<Book>>(black_box(&json)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_next_id,
    benchmark_available_only,
    benchmark_json_round_trip
);
criterion_main!(benches);
