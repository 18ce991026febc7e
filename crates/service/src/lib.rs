//! Service layer: the destination store, the remote fetch adapters and the
//! join engine that combines them into per-request joined views.

pub mod errors;
pub mod destination;
pub mod upstream;
pub mod join;
#[cfg(test)]
pub mod test_support;
