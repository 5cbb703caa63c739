/// Randomized depth-first maze generation
pub mod generator;
/// Passage counting, reachability and cycle checks
pub mod topology;

pub use generator::MazeMaker;
