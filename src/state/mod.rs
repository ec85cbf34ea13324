pub mod gesture;
pub mod machine;

pub use machine::{Move, PullMachine, Release, Settled};
