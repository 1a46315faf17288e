//! Domain models returned by the pool-administration API.

pub mod attendance;
pub mod pool;
pub mod quota;
pub mod sale;
pub mod survey;
pub mod trainer;
pub mod types;
