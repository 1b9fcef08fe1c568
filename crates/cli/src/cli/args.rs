pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pact")]
#[command(about = "Derive a shared symmetric key via X25519 key agreement")]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: crate::Command,
}
