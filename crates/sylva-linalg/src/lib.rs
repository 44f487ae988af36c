#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `sylva-linalg` provides an immutable dense [`Matrix`] of `f64` values and a
//! companion [`Vector`], together with the classical factorizations built on
//! them:
//!
//! - **Row reduction**: [`Matrix::to_right_triangular`], [`Matrix::determinant`],
//!   [`Matrix::rank`] and [`Matrix::inverse`]
//! - **LU** with partial pivoting: [`Matrix::lu`]
//! - **QR** by Householder reflections: [`Matrix::qr`]
//! - **SVD** by repeated QR sweeps: [`Matrix::svd`]
//! - **Linear systems**: [`Matrix::solve`], [`Matrix::forward_substitute`],
//!   [`Matrix::back_substitute`]
//!
//! Every operation takes its operands by reference and returns a freshly
//! allocated result, so matrices can be shared freely between threads.
//!
//! # Quick Start
//!
//! ```rust
//! use sylva_linalg::{Matrix, Vector};
//!
//! let a = Matrix::from_rows([[2.0, 3.0], [4.0, 4.0]]);
//! assert_eq!(a.determinant().unwrap(), -4.0);
//!
//! let x = a.solve(&Vector::from([2.0, 1.0])).unwrap();
//! assert!(x.eql(&Vector::from([-1.25, 1.5]), 1e-12));
//!
//! let lu = a.lu();
//! let pa = lu.p.multiply(&a).unwrap();
//! assert!(pa.eql(&lu.l.multiply(&lu.u).unwrap(), 1e-12));
//! ```
//!
//! # Indexing
//!
//! Element, row and column accessors are 1-indexed as in mathematical
//! notation; out of range element reads return `None`, out of range row or
//! column reads return [`LinalgError::OutOfRange`].

/// Error types for matrix and vector operations.
///
/// Defines [`LinalgError`] covering shape mismatches, out of range indices and
/// invalid operations.
pub mod error;

/// Numeric tolerances and SVD iteration settings.
pub mod precision;

mod lu;
mod matrix;
mod ops;
mod pca;
mod qr;
mod reduce;
mod solve;
mod structure;
mod svd;
mod transform;
mod vector;

pub use crate::error::LinalgError;
pub use crate::lu::LuDecomposition;
pub use crate::matrix::Matrix;
pub use crate::pca::PcaProjection;
pub use crate::precision::SvdConfig;
pub use crate::qr::QrDecomposition;
pub use crate::svd::SvdDecomposition;
pub use crate::vector::Vector;
