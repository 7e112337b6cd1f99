mod aes_core;

pub use aes_core::*;

#[cfg(test)]
mod tests;
