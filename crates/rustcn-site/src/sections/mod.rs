//! Built-in documentation sections.
//!
//! One provider per section. Page links are relative to the section's
//! route prefix; `""` is the section index page.

mod community;
mod crates;
mod office;

pub use community::{BookExp, Www};
pub use crates::{Actix, ActixWeb, Diesel, Riker, Serde, Tokio, TokioBlog};
pub use office::{AdvRust, AsyncRust, Book, Cargo, Discovery, Reference};
