use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inno", version)]
#[command(about = "Create, rank and track your ideas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new idea
    #[command(alias = "n")]
    Create {
        /// Title of the idea
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Trait score, e.g. --trait "Time to MVP=8" (others default to 5)
        #[arg(short = 't', long = "trait", value_parser = parse_trait_arg)]
        traits: Vec<(String, u8)>,
    },

    /// List ideas
    #[command(alias = "ls")]
    List,

    /// Show one or more ideas in full
    #[command(alias = "v")]
    View {
        /// Positions or ids of the ideas (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change an idea's title, description or trait scores
    #[command(alias = "e")]
    Edit {
        /// Position or id of the idea
        selector: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Trait score, e.g. --trait "Scalability=3"
        #[arg(short = 't', long = "trait", value_parser = parse_trait_arg)]
        traits: Vec<(String, u8)>,
    },

    /// Raise the rank of one or more ideas by one
    Up {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Lower the rank of one or more ideas by one
    Down {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete one or more ideas
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Totals, average score, top rank and recent ideas
    Stats,

    /// Manage an idea's resources
    #[command(subcommand)]
    Resource(ResourceCommand),

    /// Manage an idea's process steps
    #[command(subcommand)]
    Step(StepCommand),

    /// Print the trait names ideas are scored on
    Traits,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, recent-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Attach a link or file to an idea
    Add {
        selector: String,
        name: String,
        /// URL for links, path for files
        url: String,

        /// link or file
        #[arg(short, long, default_value = "link")]
        kind: String,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Remove a resource by its position in the idea's list
    #[command(alias = "rm")]
    Remove { selector: String, position: usize },
}

#[derive(Subcommand, Debug)]
pub enum StepCommand {
    /// Append a process step
    Add { selector: String, text: String },

    /// Remove a process step by its position
    #[command(alias = "rm")]
    Remove { selector: String, position: usize },
}

fn parse_trait_arg(s: &str) -> Result<(String, u8), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("trait value must be a number from 1 to 10, got '{}'", value))?;
    Ok((name.trim().to_string(), value))
}
