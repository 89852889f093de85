//! Extension traits

mod depot;
mod result;
mod validation;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use validation::ValidationResultExt as _;
