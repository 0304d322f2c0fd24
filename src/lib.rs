//! # neartwo
//!
//! `neartwo` is a Rust library for exact 2D nearest-neighbor search, designed to be used in Rust
//! as well as compiled to WebAssembly (WASM). It indexes a static set of points with a balanced
//! k-d tree so that "which indexed point is closest to this one?" is answered without scanning
//! the whole set.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript and TypeScript.
//! - **Space Partitioning**: Recursive median splits along alternating axes keep the tree balanced.
//! - **Exact Results**: Branch-and-bound search with backtracking never misses the true nearest point.
//! - **Full Rebuilds**: Updating the point set is an explicit rebuild; a built index is read-only
//!   and safe to query from many threads at once.
//!
//! ## Example
//!
//! ```
//! use neartwo::NearestIndex;
//!
//! let index = NearestIndex::new(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
//! assert_eq!(index.find_nearest([4.0, 4.0]), Some([3.0, 4.0]));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`NearestIndex`] struct, which owns the point set and the
//! tree built over it.

mod bounds;
mod index;
mod kdtree;
mod wasm;

pub use bounds::BoundingBox;
pub use index::NearestIndex;
pub use wasm::BoundingBox2D;
pub use wasm::NearestIndex2D;
