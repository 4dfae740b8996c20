#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod errors;
pub mod models;
pub mod search;
pub mod transcript;

pub use crate::errors::*;
pub use crate::models::*;
pub use crate::search::*;
pub use crate::transcript::*;
