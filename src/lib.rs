//! Bounded in-memory storage for bulk goods.
//!
//! A [`Storage`] keeps one container per good type, each bounded by a fixed
//! per-container capacity, with the total number of active containers bounded
//! by how many container-sized slots fit in the overall storage capacity.

mod error;
mod good;
mod storage;

pub use error::Error;
pub use good::Good;
pub use storage::Storage;
