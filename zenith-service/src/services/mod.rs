pub mod composer;
pub mod crisis;
pub mod helplines;

pub use composer::{compose_reply, respond};
pub use crisis::is_crisis;
pub use helplines::{HelplineError, HelplineTable};
