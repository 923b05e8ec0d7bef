//! App shell components: Header, Footer
//!
//! These components form the persistent UI framework around the main content area.

mod footer;
mod header;

pub use footer::Footer;
pub use header::Header;
