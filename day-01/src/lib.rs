pub mod check;
pub mod error;
pub mod loader;
pub mod locations;
pub mod parser;
pub mod part1;
pub mod part2;
