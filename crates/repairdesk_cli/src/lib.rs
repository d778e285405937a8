//! Terminal form front end for the repair desk.
//!
//! A [`session::Session`] shows the navigation menu and dispatches each
//! choice to one handler in [`pages`].

pub mod console;
pub mod error;
pub mod page;
pub mod pages;
pub mod session;
pub mod table;

pub use console::Console;
pub use error::{UiError, UiResult};
pub use page::Page;
pub use session::Session;
