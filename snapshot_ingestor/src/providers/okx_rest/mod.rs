//! OKX v5 public REST provider.

mod provider;
mod response;

pub use provider::OkxRestProvider;
