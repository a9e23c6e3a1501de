//! Application services for connected accounts.

mod registry;

pub use registry::{
    AccountRegistryError, AccountRegistryResult, AccountRegistryService, ConnectAccountRequest,
};
