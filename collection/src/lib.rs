//! An ordered, zero-indexed list container with validated positional access,
//! predicate search, and pluggable ordering.
//!
//! ```
//! use collection::{Collection, NaturalStringComparer, ErrorKind};
//!
//! let mut list = Collection::from(["img12.png", "img2.png", "img10.png", "img1.png"]);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), ["img1.png", "img10.png", "img12.png", "img2.png"]);
//!
//! list.sort_with(&NaturalStringComparer);
//! assert_eq!(list.to_vec(), ["img1.png", "img2.png", "img10.png", "img12.png"]);
//!
//! assert_eq!(list.get("j").unwrap_err().kind(), ErrorKind::InvalidArgument);
//! assert_eq!(list.get(4).unwrap_err().kind(), ErrorKind::ArgumentOutOfRange);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod collections;
pub mod errors;

pub use collections::{
    collection::{Collection, Iter},
    comparer::{Comparer, DefaultComparer, FloatComparer, NaturalStringComparer},
    index::IndexArgument,
};
pub use errors::{CollectionError, ErrorKind};
