mod runner;
mod sampler;
mod statistics;
