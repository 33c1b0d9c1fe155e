pub mod runner;

pub use runner::{FilterRunner, RunnerStats};
