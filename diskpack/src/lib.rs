//! Geometry, spatial indexing and overlap detection for packing disks into a rectangular sheet.
//!
//! The crate does not decide *where* disks go. It answers the question every placement
//! heuristic keeps asking: "does this candidate disk fit here?", and keeps track of the disks
//! that have been accepted so far.

/// Everything related to detecting overlap between disks
pub mod collision_detection;

/// Entities modelling a packing: the sheet, the accepted disks and their statistics
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Exporting packings out of the library as flat tables
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::InvalidParameter;
