extern crate listmap;
use divan::{black_box, Bencher};
use listmap::conv;

fn main() { divan::main(); }

fn pairs(n:u64)->Vec<(Option<u64>, u64)> {
  (0..n).map(|i| (if i % 10 == 0 { None } else { Some(i % 97) }, i)).collect() }

#[divan::bench(args = [100, 10_000])]
fn group_by_key(bencher:Bencher, n:u64) {
  let xs = pairs(n);
  bencher.bench(|| conv::group_by_key(black_box(&xs), |p| p.0)); }

#[divan::bench(args = [100, 10_000])]
fn to_key_value_map(bencher:Bencher, n:u64) {
  let xs = pairs(n);
  bencher.bench(|| conv::to_key_value_map(black_box(&xs), |p| p.0, |p| p.1)); }

#[divan::bench(args = [100, 10_000])]
fn filter_greater_than(bencher:Bencher, n:u64) {
  let xs = pairs(n);
  bencher.bench(|| conv::filter_greater_than(black_box(&xs), |p| p.0, 48)); }
