pub mod credential;
pub mod device;
pub mod error;
pub mod event;
pub mod registry;
mod time;

pub use credential::*;
pub use device::*;
pub use error::{Error, Result};
pub use event::*;
pub use registry::*;
pub use time::*;
