use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "salaah", version, author, about = "Masjid prayer timetable in your terminal")]
pub struct Cli {
    /// Print rows as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's start and jamat times
    Today,
    /// Show tomorrow's start and jamat times
    Tomorrow,
    /// Show the timetable for this week (Sunday to Saturday)
    Week,
    /// Countdown to the next prayer
    Next,
    /// Show the config file location and active settings
    Config {
        /// Write the active settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["salaah", "week", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Week)));

        let cli = Cli::try_parse_from(["salaah"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["salaah", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));

        assert!(Cli::try_parse_from(["salaah", "qibla"]).is_err());
    }
}
