#[macro_use]
extern crate quickcheck_macros;

mod text;
mod tree;
