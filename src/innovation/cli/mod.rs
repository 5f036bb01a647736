//! Terminal output for the `inno` binary. Not part of the library API.

pub mod print;
