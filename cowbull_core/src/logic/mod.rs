pub mod corpus;
pub mod game;
pub mod scoring;
