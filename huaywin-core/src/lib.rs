pub mod calendar;
pub mod classify;
pub mod engine;
pub mod generator;
pub mod pool;
pub mod pricing;
pub mod resolver;
