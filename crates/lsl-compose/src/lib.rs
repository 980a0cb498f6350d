pub mod calls;
mod session;

pub use calls::LslCall;
pub use session::{Session, INDENT};
