//! Host identity lookup.
//!
//! The greeting and status handlers report the name of the machine (or
//! container) serving the request. The lookup goes through [`HostnameSource`]
//! so it can be swapped for a fixed or failing source.

use std::io;

/// Source of the host's network name.
pub trait HostnameSource: Send + Sync {
    /// Look up the current hostname. Called on every request; implementations
    /// must not cache.
    fn hostname(&self) -> io::Result<String>;
}

/// Reads the hostname from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> io::Result<String> {
        let name = hostname::get()?;
        Ok(name.to_string_lossy().into_owned())
    }
}

/// Always reports the same name.
#[derive(Debug, Clone)]
pub struct FixedHostname(pub String);

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_hostname_is_stable() {
        let source = SystemHostname;
        let first = source.hostname().unwrap();
        let second = source.hostname().unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_hostname() {
        let source = FixedHostname("node-7".to_string());
        assert_eq!(source.hostname().unwrap(), "node-7");
    }
}
