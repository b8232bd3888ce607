//! Library surface of the server binary, split out so integration tests can
//! build the router against mock upstreams.

pub mod cli;
pub mod server;
