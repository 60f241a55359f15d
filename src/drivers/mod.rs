pub mod simulated_quad;
pub mod vehicle;
