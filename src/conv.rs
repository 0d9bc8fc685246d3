//! Conversions from sequences to key lists, key sets, maps and groups.
//!
//! Every function here makes one pass over its input, calling the
//! caller-supplied extractor(s) once per item, and returns a freshly
//! built container. Empty input gives an empty container. Use
//! [`or_empty`] to feed in an input that may be absent.
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Hash map type returned by the map-building conversions.
pub type KeyMap<K,V> = HashMap<K,V,fxhash::FxBuildHasher>;

/// Hash set type returned by [`to_key_set`].
pub type KeySet<K> = HashSet<K,fxhash::FxBuildHasher>;

/// Treat an absent input (`None`) as an empty one.
///
/// ```
/// use listmap::conv::{or_empty, extract_keys};
/// let missing:Option<Vec<u32>> = None;
/// assert!(extract_keys(or_empty(missing), |x| *x).is_empty());
/// ```
pub fn or_empty<I:IntoIterator>(xs:Option<I>)->impl Iterator<Item=I::Item> {
  xs.into_iter().flatten() }

/// Return the key of every item, in input order.
/// Nothing is skipped: if `key` returns an `Option`, the `None`s are kept too.
///
/// ```
/// use listmap::conv::extract_keys;
/// let words = ["apple", "fig", "kiwi"];
/// assert_eq!(extract_keys(&words, |w| w.len()), vec![5, 3, 4]);
/// ```
pub fn extract_keys<I,K,F>(xs:I, mut key:F)->Vec<K>
where I:IntoIterator, F:FnMut(&I::Item)->K {
  let res:Vec<K> = xs.into_iter().map(|x| key(&x)).collect();
  debug!("extract_keys: {} keys", res.len());
  res }

/// Same as [`extract_keys`].
pub fn key_list<I,K,F>(xs:I, key:F)->Vec<K>
where I:IntoIterator, F:FnMut(&I::Item)->K {
  extract_keys(xs, key) }

/// Partition the items into groups that share a key.
/// Items keep their input order inside each group.
/// The order of the groups themselves is unspecified.
///
/// ```
/// use listmap::conv::group_by_key;
/// let xs = [1, 2, 3, 4, 5];
/// let g = group_by_key(xs, |x| *x % 2);
/// assert_eq!(g[&1], vec![1, 3, 5]);
/// assert_eq!(g[&0], vec![2, 4]);
/// ```
pub fn group_by_key<I,K,F>(xs:I, mut key:F)->KeyMap<K,Vec<I::Item>>
where I:IntoIterator, K:Eq+Hash, F:FnMut(&I::Item)->K {
  let mut map:KeyMap<K,Vec<I::Item>> = KeyMap::default();
  let mut n = 0;
  for x in xs {
    n += 1;
    map.entry(key(&x)).or_default().push(x) }
  debug!("group_by_key: {} items -> {} groups", n, map.len());
  map }

/// Map each key to the item it came from.
/// When several items share a key, the last one wins.
///
/// ```
/// use listmap::conv::to_map_by_key;
/// let pairs = [(1,'a'), (2,'b'), (1,'c')];
/// let m = to_map_by_key(pairs, |p| p.0);
/// assert_eq!(m[&1], (1,'c'));
/// assert_eq!(m.len(), 2);
/// ```
pub fn to_map_by_key<I,K,F>(xs:I, mut key:F)->KeyMap<K,I::Item>
where I:IntoIterator, K:Eq+Hash, F:FnMut(&I::Item)->K {
  let mut map:KeyMap<K,I::Item> = KeyMap::default();
  let mut n = 0;
  for x in xs { n += 1; map.insert(key(&x), x); }
  debug!("to_map_by_key: {} items -> {} keys", n, map.len());
  map }

/// Collect the distinct keys.
pub fn to_key_set<I,K,F>(xs:I, mut key:F)->KeySet<K>
where I:IntoIterator, K:Eq+Hash, F:FnMut(&I::Item)->K {
  let mut set:KeySet<K> = KeySet::default();
  let mut n = 0;
  for x in xs { n += 1; set.insert(key(&x)); }
  debug!("to_key_set: {} items -> {} keys", n, set.len());
  set }

/// Return, in input order, the keys that are present and strictly greater
/// than `threshold`. Items whose key is `None` are skipped.
///
/// ```
/// use listmap::conv::filter_greater_than;
/// let ks = [Some(1), Some(5), Some(3), None, Some(8)];
/// assert_eq!(filter_greater_than(ks, |k| *k, 3), vec![5, 8]);
/// ```
pub fn filter_greater_than<I,K,F>(xs:I, mut key:F, threshold:K)->Vec<K>
where I:IntoIterator, K:Ord, F:FnMut(&I::Item)->Option<K> {
  let mut res = vec![];
  let mut skipped = 0;
  for x in xs {
    match key(&x) {
      Some(k) if k > threshold => res.push(k),
      _ => skipped += 1 }}
  debug!("filter_greater_than: kept {} keys, skipped {} items", res.len(), skipped);
  res }

/// Build a map from key to value, both drawn from each item.
/// Items whose key is `None` are skipped and `value` is never called for them.
/// When several items share a key, the last one wins.
///
/// ```
/// use listmap::conv::to_key_value_map;
/// let rows = [(Some(1),"a"), (None,"b"), (Some(1),"c")];
/// let m = to_key_value_map(rows, |r| r.0, |r| r.1);
/// assert_eq!(m.len(), 1);
/// assert_eq!(m[&1], "c");
/// ```
pub fn to_key_value_map<I,K,V,F,G>(xs:I, mut key:F, mut value:G)->KeyMap<K,V>
where I:IntoIterator, K:Eq+Hash, F:FnMut(&I::Item)->Option<K>, G:FnMut(I::Item)->V {
  let mut map:KeyMap<K,V> = KeyMap::default();
  let mut skipped = 0;
  for x in xs {
    if let Some(k) = key(&x) { let v = value(x); map.insert(k, v); }
    else { skipped += 1 }}
  debug!("to_key_value_map: {} keys, skipped {} items", map.len(), skipped);
  map }

include!("test-conv.rs");
