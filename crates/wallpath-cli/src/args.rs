use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    ActionsArgs, DeleteArgs, ExecuteArgs, GenerateArgs, ListArgs, MessagesArgs, ProcessArgs,
    PublishArgs, SaveArgs, ShowArgs,
};

/// Coverage path planning for wall-finishing robots
///
/// Generates boustrophedon trajectories over a rectangular wall, stores them
/// in a local SQLite database, replays them into a robot action log and
/// exchanges status messages over prioritized topics.
#[derive(Parser)]
#[command(version, about, name = "wallpath")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wallpath/wallpath.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a coverage trajectory for a wall
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Import a trajectory document from a JSON file
    Save(SaveArgs),
    /// List stored trajectories, newest first
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a stored trajectory with its points
    Show(ShowArgs),
    /// Delete a stored trajectory
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Replay a stored trajectory into the robot action log
    Execute(ExecuteArgs),
    /// Show the action log of an execution session
    Actions(ActionsArgs),
    /// List the messages of a topic, newest first
    Messages(MessagesArgs),
    /// Deliver pending messages to their subscribers
    Process(ProcessArgs),
    /// Publish a message to a topic
    Publish(PublishArgs),
    /// Show stored trajectory count and recent requests
    Status,
}

impl Commands {
    /// Name recorded in the request log.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "generate",
            Commands::Save(_) => "save",
            Commands::List(_) => "list",
            Commands::Show(_) => "show",
            Commands::Delete(_) => "delete",
            Commands::Execute(_) => "execute",
            Commands::Actions(_) => "actions",
            Commands::Messages(_) => "messages",
            Commands::Process(_) => "process",
            Commands::Publish(_) => "publish",
            Commands::Status => "status",
        }
    }
}
