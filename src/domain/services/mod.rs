pub mod actions;
mod events;
mod retrieval;
mod scroll;
mod session;
mod strings;
mod transcript;

pub use events::*;
pub use retrieval::*;
pub use scroll::*;
pub use session::*;
pub use strings::*;
pub use transcript::*;
