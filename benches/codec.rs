//! Benchmark suite for the money codec
//!
//! Measures formatting and parsing throughput with the divan benchmarking
//! framework, for default options and for a fully configured field
//! (unit, separator, delimiter, credit pattern).
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use divan::black_box;
use easy_money::{cents_to_money, format_value, money_to_cents, MoneyOptions, MoneyOverrides};

fn main() {
    divan::main();
}

const VALUES: [i64; 6] = [0, 1, -1, 123456, -987654321, 12345678900];

const STRINGS: [&str; 6] = [
    "0.00",
    "$1.23",
    "4.56 CR",
    "$-2.34 CR",
    "1,234,567.89",
    "   not a number",
];

fn configured() -> MoneyOptions {
    MoneyOptions::from_overrides(
        &MoneyOverrides::new()
            .unit("EUR ")
            .separator(",")
            .delimiter(".")
            .negative("%.2f CR"),
    )
    .expect("valid benchmark options")
}

#[divan::bench]
fn format_default(bencher: divan::Bencher) {
    let opts = MoneyOptions::default();
    bencher.bench_local(|| {
        for value in VALUES {
            black_box(cents_to_money(black_box(Some(value)), &opts));
        }
    });
}

#[divan::bench]
fn format_configured(bencher: divan::Bencher) {
    let opts = configured();
    bencher.bench_local(|| {
        for value in VALUES {
            black_box(cents_to_money(black_box(Some(value)), &opts));
        }
    });
}

#[divan::bench]
fn parse_default(bencher: divan::Bencher) {
    let opts = MoneyOptions::default();
    bencher.bench_local(|| {
        for text in STRINGS {
            black_box(money_to_cents(black_box(text), &opts));
        }
    });
}

#[divan::bench]
fn parse_configured(bencher: divan::Bencher) {
    let opts = configured();
    bencher.bench_local(|| {
        for text in STRINGS {
            black_box(money_to_cents(black_box(text), &opts));
        }
    });
}

#[divan::bench(args = ["%.2f", "%07.2m", "%m", "free"])]
fn pattern(bencher: divan::Bencher, pattern: &str) {
    let opts = MoneyOptions::default();
    bencher.bench_local(|| black_box(format_value(black_box(-12345), pattern, &opts)));
}
