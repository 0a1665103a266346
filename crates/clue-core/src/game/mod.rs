pub mod accuse;
pub mod deduce;
pub mod engine;
pub mod interface;
pub mod prompt;
pub mod refute;
pub mod serialization;
pub mod setup;
pub mod suggest;
