//! Pure publish logic: the aggregation rule and dispatch policy.

mod aggregate;
mod policy;

pub use aggregate::aggregate;
pub use policy::PublishPolicy;
