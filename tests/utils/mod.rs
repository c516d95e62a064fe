// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod in_memory;
pub mod test_db;
