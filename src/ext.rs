//! Method syntax for the conversions in [`crate::conv`].
//!
//! ```
//! use listmap::ListMapExt;
//! let words = vec!["ant", "bee", "cat", "asp"];
//! let by_letter = words.iter().group_by_key(|w| w.as_bytes()[0]);
//! assert_eq!(by_letter[&b'a'], vec![&"ant", &"asp"]);
//! ```
use std::hash::Hash;
use crate::conv::{self, KeyMap, KeySet};

/// Conversions available on anything that can be iterated.
/// Each method forwards to the `conv` function of the same meaning.
pub trait ListMapExt : IntoIterator + Sized {

  /// See [`conv::extract_keys`].
  fn key_list<K,F>(self, key:F)->Vec<K>
  where F:FnMut(&Self::Item)->K {
    conv::extract_keys(self, key) }

  /// See [`conv::group_by_key`].
  fn group_by_key<K,F>(self, key:F)->KeyMap<K,Vec<Self::Item>>
  where K:Eq+Hash, F:FnMut(&Self::Item)->K {
    conv::group_by_key(self, key) }

  /// See [`conv::to_map_by_key`].
  fn map_by_key<K,F>(self, key:F)->KeyMap<K,Self::Item>
  where K:Eq+Hash, F:FnMut(&Self::Item)->K {
    conv::to_map_by_key(self, key) }

  /// See [`conv::to_key_set`].
  fn key_set<K,F>(self, key:F)->KeySet<K>
  where K:Eq+Hash, F:FnMut(&Self::Item)->K {
    conv::to_key_set(self, key) }

  /// See [`conv::filter_greater_than`].
  fn keys_greater_than<K,F>(self, key:F, threshold:K)->Vec<K>
  where K:Ord, F:FnMut(&Self::Item)->Option<K> {
    conv::filter_greater_than(self, key, threshold) }

  /// See [`conv::to_key_value_map`].
  fn key_value_map<K,V,F,G>(self, key:F, value:G)->KeyMap<K,V>
  where K:Eq+Hash, F:FnMut(&Self::Item)->Option<K>, G:FnMut(Self::Item)->V {
    conv::to_key_value_map(self, key, value) }}

impl<I:IntoIterator> ListMapExt for I {}


#[test] fn test_ext_matches_conv() {
  let xs:Vec<(Option<i32>, char)> = vec![(Some(2),'a'), (None,'b'), (Some(7),'c'), (Some(2),'d')];
  assert_eq!(xs.iter().key_list(|p| p.0), conv::extract_keys(&xs, |p| p.0));
  assert_eq!(xs.iter().key_set(|p| p.0), conv::to_key_set(&xs, |p| p.0));
  assert_eq!(xs.iter().keys_greater_than(|p| p.0, 2), vec![7]);
  let kv = xs.iter().key_value_map(|p| p.0, |p| p.1);
  assert_eq!(kv.len(), 2);
  assert_eq!(kv[&2], 'd'); }

#[test] fn test_ext_on_owned_vec() {
  let xs = vec![String::from("aa"), String::from("b"), String::from("cc")];
  let g = xs.clone().group_by_key(|s| s.len());
  assert_eq!(g[&2], vec!["aa", "cc"]);
  let m = xs.map_by_key(|s| s.len());
  assert_eq!(m[&1], "b");
  assert_eq!(m[&2], "cc"); }

#[test] fn test_ext_on_range() {
  assert_eq!((0i32..6).keys_greater_than(|x| if *x % 2 == 0 { Some(*x) } else { None }, 1), vec![2, 4]);
  assert!((0u8..0).key_list(|x| *x).is_empty()); }
