pub mod catalog;
pub mod error;
pub mod placeholder;
pub mod types;
pub mod value;

pub use catalog::{EventSignature, SignatureParam, EVENT_CATALOG};
pub use error::{ErrorKind, LslGenError, Missing};
pub use placeholder::*;
pub use types::*;
pub use value::*;
