#[macro_use]
mod error;
mod node;
mod hash;
mod iter;
mod dump;
mod table;

pub use crate::error::{MyResult, Status, StatusCode};
pub use crate::hash::sum_hash;
pub use crate::iter::{ChainIter, Iter, IterMut};
pub use crate::dump::{BucketDump, Dump};
pub use crate::table::ChainTable;
