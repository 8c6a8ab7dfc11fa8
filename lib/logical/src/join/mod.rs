mod algorithms;
mod logical;

pub use logical::*;
