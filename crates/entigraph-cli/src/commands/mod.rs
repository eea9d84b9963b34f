pub mod check;
pub mod compile;
pub mod run_common;

#[cfg(test)]
mod run_common_tests;
