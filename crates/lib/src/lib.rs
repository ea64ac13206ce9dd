//! Faculty identification numbers.
//!
//! A faculty ID is eight digits: a 3-digit classification code for the holder's [`Role`],
//! a 2-digit code for their [`Building`] and their 3-digit [`OfficeNumber`].

mod compose;
mod error;
mod model;

pub use compose::*;
pub use error::*;
pub use model::*;
