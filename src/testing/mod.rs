pub mod fixtures;
pub mod stubs;
