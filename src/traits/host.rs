/// Trait for querying the host machine, allowing for mocking in tests
pub trait HostInfo: Send + Sync {
    /// Number of logical CPUs available to this process
    fn available_cpus(&self) -> usize;
}

/// Real host info backed by the standard library
pub struct RealHostInfo;

impl HostInfo for RealHostInfo {
    fn available_cpus(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

/// Host info with a fixed CPU count for testing
#[cfg(test)]
pub struct FixedHostInfo {
    pub cpus: usize,
}

#[cfg(test)]
impl FixedHostInfo {
    pub fn new(cpus: usize) -> Self {
        Self { cpus }
    }
}

#[cfg(test)]
impl HostInfo for FixedHostInfo {
    fn available_cpus(&self) -> usize {
        self.cpus
    }
}
