pub mod filesystem;
pub mod host;
pub mod output;
pub mod user_input;

pub use filesystem::{FileSystem, RealFileSystem};
pub use host::{HostInfo, RealHostInfo};
pub use output::{Output, TerminalOutput};
pub use user_input::{LineReader, StdinLineReader};

#[cfg(test)]
pub use filesystem::MockFileSystem;
#[cfg(test)]
pub use host::FixedHostInfo;
#[cfg(test)]
pub use output::MockOutput;
#[cfg(test)]
pub use user_input::MockLineReader;
