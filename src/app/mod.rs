// Request boundary: parameter validation and result mapping around the lookup service.

pub mod lookup;

pub use lookup::{handle, ErrorResponse, LookupRequest, Reply};
