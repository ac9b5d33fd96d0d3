use crate::traits::{
    FileSystem, HostInfo, LineReader, Output, RealFileSystem, RealHostInfo, StdinLineReader,
    TerminalOutput,
};
#[cfg(test)]
use crate::traits::{FixedHostInfo, MockFileSystem, MockLineReader, MockOutput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub fs: Arc<dyn FileSystem>,
    pub input: Arc<dyn LineReader>,
    pub output: Arc<dyn Output>,
    pub host: Arc<dyn HostInfo>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            fs: Arc::new(RealFileSystem),
            input: Arc::new(StdinLineReader),
            output: Arc::new(TerminalOutput),
            host: Arc::new(RealHostInfo),
        }
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test() -> Self {
        Self {
            fs: Arc::new(MockFileSystem::new()),
            input: Arc::new(MockLineReader::new()),
            output: Arc::new(MockOutput::new()),
            host: Arc::new(FixedHostInfo::new(4)),
        }
    }
}
