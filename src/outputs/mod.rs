//! Output generation for the web page.
//!
//! # Submodules
//!
//! - [`html`]: Renders the filtered article list (or a failure notice) as a
//!   standalone HTML document

pub mod html;
