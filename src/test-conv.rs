// test suite for conv.rs (included at the bottom of that file)

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row { id: Option<u32>, dept: &'static str, name: &'static str }

#[cfg(test)]
fn row(id:Option<u32>, dept:&'static str, name:&'static str)->Row { Row{ id, dept, name } }

#[cfg(test)]
fn rows()->Vec<Row> {
  vec![ row(Some(1), "ops", "ann"),
        row(Some(5), "dev", "bob"),
        row(Some(3), "ops", "cat"),
        row(None,    "dev", "dan"),
        row(Some(8), "qa",  "eve") ]}

#[cfg(test)]
fn init_log() {
  use simplelog::*;
  let _ = SimpleLogger::init(LevelFilter::Debug, Config::default()); }

#[test] fn test_empty_input() {
  init_log();
  let none:Vec<Row> = vec![];
  assert!(extract_keys(&none, |r| r.id).is_empty());
  assert!(key_list(&none, |r| r.id).is_empty());
  assert!(group_by_key(&none, |r| r.dept).is_empty());
  assert!(to_map_by_key(&none, |r| r.dept).is_empty());
  assert!(to_key_set(&none, |r| r.dept).is_empty());
  assert!(filter_greater_than(&none, |r| r.id, 0).is_empty());
  assert!(to_key_value_map(&none, |r| r.id, |r| r.name).is_empty()); }

#[test] fn test_absent_input() {
  let absent:Option<Vec<Row>> = None;
  assert!(extract_keys(or_empty(absent.clone()), |r| r.id).is_empty());
  assert!(group_by_key(or_empty(absent.clone()), |r| r.dept).is_empty());
  assert!(to_map_by_key(or_empty(absent.clone()), |r| r.dept).is_empty());
  assert!(to_key_set(or_empty(absent.clone()), |r| r.dept).is_empty());
  assert!(filter_greater_than(or_empty(absent.clone()), |r| r.id, 0).is_empty());
  assert!(to_key_value_map(or_empty(absent), |r| r.id, |r| r.name).is_empty());
  // present input passes straight through
  assert_eq!(extract_keys(or_empty(Some(rows())), |r| r.name), ["ann","bob","cat","dan","eve"]); }

#[test] fn test_extract_keys() {
  init_log();
  let xs = rows();
  let ids = extract_keys(&xs, |r| r.id);
  assert_eq!(ids.len(), xs.len(), "one key per item");
  assert_eq!(ids, vec![Some(1), Some(5), Some(3), None, Some(8)], "missing keys are kept");
  for (i, r) in xs.iter().enumerate() { assert_eq!(ids[i], r.id) }
  assert_eq!(key_list(&xs, |r| r.id), ids, "key_list is extract_keys"); }

#[test] fn test_group_by_key() {
  init_log();
  let g = group_by_key(rows(), |r| r.dept);
  assert_eq!(g.len(), 3);
  let names = |d:&str| g[d].iter().map(|r| r.name).collect::<Vec<_>>();
  assert_eq!(names("ops"), ["ann", "cat"], "groups keep input order");
  assert_eq!(names("dev"), ["bob", "dan"]);
  assert_eq!(names("qa"), ["eve"]);
  let total:usize = g.values().map(|v| v.len()).sum();
  assert_eq!(total, 5, "every item lands in exactly one group");
  for (k, v) in g.iter() { assert!(v.iter().all(|r| r.dept == *k)) }}

#[test] fn test_group_by_missing_key() {
  let g = group_by_key(rows(), |r| r.id.map(|i| i % 2));
  assert_eq!(g[&None].len(), 1, "a missing key is its own group");
  assert_eq!(g[&Some(1)].len(), 3);
  assert_eq!(g[&Some(0)].len(), 1); }

#[test] fn test_group_by_borrowed() {
  let xs = rows();
  let g = group_by_key(&xs, |r| r.dept);
  assert!(std::ptr::eq(g["qa"][0], &xs[4]), "borrowed input groups references"); }

#[test] fn test_to_map_by_key() {
  init_log();
  let m = to_map_by_key(rows(), |r| r.dept);
  assert_eq!(m.len(), 3);
  assert_eq!(m["ops"].name, "cat", "later items overwrite earlier ones");
  assert_eq!(m["dev"].name, "dan");
  assert_eq!(m["qa"].name, "eve"); }

#[test] fn test_to_key_set() {
  init_log();
  let s = to_key_set(rows(), |r| r.dept);
  let expect:KeySet<&str> = ["ops", "dev", "qa"].into_iter().collect();
  assert_eq!(s, expect);
  let ids = to_key_set(rows(), |r| r.id);
  assert_eq!(ids.len(), 5);
  assert!(ids.contains(&None), "missing keys are ordinary keys here"); }

#[test] fn test_filter_greater_than() {
  init_log();
  assert_eq!(filter_greater_than(rows(), |r| r.id, 3), vec![5, 8]);
  assert_eq!(filter_greater_than(rows(), |r| r.id, 0), vec![1, 5, 3, 8], "input order, not sorted");
  assert!(filter_greater_than(rows(), |r| r.id, 8).is_empty(), "threshold itself is excluded"); }

#[test] fn test_filter_greater_than_strings() {
  let xs = ["pear", "apple", "plum", "fig"];
  assert_eq!(filter_greater_than(xs, |x| Some(*x), "fig"), vec!["pear", "plum"]); }

#[test] fn test_to_key_value_map() {
  init_log();
  let kv = [(Some(1), "a"), (None, "b"), (Some(1), "c")];
  let m = to_key_value_map(kv, |p| p.0, |p| p.1);
  assert_eq!(m.len(), 1, "items with a missing key are skipped");
  assert_eq!(m[&1], "c", "last write wins");
  let m = to_key_value_map(rows(), |r| r.id, |r| r.name);
  assert_eq!(m.len(), 4);
  assert_eq!(m[&5], "bob"); }

#[test] fn test_value_skipped_for_missing_key() {
  let mut calls = 0;
  let m = to_key_value_map(rows(), |r| r.id, |r| { calls += 1; r.name });
  assert_eq!(calls, 4, "value extractor never sees items without a key");
  assert_eq!(m.len(), 4); }

#[test] fn test_value_moves_out_of_owned_items() {
  let xs = vec![(Some(1u8), String::from("one")), (Some(2), String::from("two"))];
  let m = to_key_value_map(xs, |p| p.0, |p| p.1);
  assert_eq!(m[&2], "two"); }

#[cfg(feature="slowtests")]
#[test] fn test_large_input() {
  let n = 1_000_000u64;
  let g = group_by_key(0..n, |x| x % 1000);
  assert_eq!(g.len(), 1000);
  assert!(g.values().all(|v| v.len() == 1000 && v.windows(2).all(|w| w[0] < w[1])));
  assert_eq!(filter_greater_than(0..n, |x| Some(*x), n-3), vec![n-2, n-1]);
  assert_eq!(to_key_set(0..n, |x| x / 10).len(), 100_000); }
