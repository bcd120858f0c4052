//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, dispatched
//! statically at compile time.

mod init;
mod run;
mod version;

pub use init::InitStrategy;
pub use run::RunStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
