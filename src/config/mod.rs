use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "notify-patterns")]
#[command(about = "Sends a fixed set of notifications through adapter, decorator, facade and proxy wrappers")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,
}
