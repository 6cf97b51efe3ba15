pub mod candidate;
pub mod cv;
pub mod opportunity;
pub mod profile;
pub mod recommendation;
