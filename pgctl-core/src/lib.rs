pub mod cli;
pub mod conf;
pub mod logging;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
