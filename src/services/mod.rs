//! Application service layer.
//!
//! Services contain the request-level logic between the MCP handlers and the
//! matching engine: input routing, validation and metrics.

mod lookup_service;

pub use lookup_service::{
    LookupResponse, LookupService, LookupServiceImpl, QueryInput, MAX_QUERY_LENGTH,
};
