use clap::Args;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Build and print the message body without POSTing it to Pushover.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct BandArgs {
    /// Frequency in kilohertz, as the feed reports it.
    pub khz: String,
}
