pub mod error;
pub mod query;
pub mod transport;

pub use error::TransportError;
pub use transport::{HttpTransport, Transport};
