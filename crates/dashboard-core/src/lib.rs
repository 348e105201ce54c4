pub mod envelope;
pub mod error;
pub mod traits;
pub mod types;

pub use envelope::*;
pub use error::*;
pub use traits::*;
pub use types::*;
