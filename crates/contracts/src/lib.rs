//! Wire contracts shared between the query console and its backend.
//!
//! Every type here mirrors a JSON body exchanged over HTTP; field names on the
//! wire are snake_case.

pub mod dashboards;
pub mod system;
pub mod usecases;
