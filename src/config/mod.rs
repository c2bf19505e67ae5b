pub mod loader;
pub mod models;

/// Environment variable access, injectable for test isolation.
pub trait Env {
    fn var(&self, key: &str) -> Result<String, std::env::VarError>;
}

/// Reads the real process environment.
pub struct RealEnv;

impl Env for RealEnv {
    fn var(&self, key: &str) -> Result<String, std::env::VarError> {
        std::env::var(key)
    }
}
