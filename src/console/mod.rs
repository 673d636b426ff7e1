//! Console surface and the interactive session built on top of it.

mod io;
mod session;

pub use io::{Console, TerminalConsole};
pub use session::Session;
