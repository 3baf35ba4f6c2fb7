//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(about = "Scheduled personal notes with a local account", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new agenda
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create the local account, replacing any existing one
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Check credentials and optionally remember them
    ///
    /// Omitted email or password is taken from the remembered login.
    Login {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        /// Remember email and password for next time
        #[arg(short, long, conflicts_with = "forget")]
        remember: bool,

        /// Stop remembering this login (kept by default once remembered)
        #[arg(long)]
        forget: bool,
    },

    /// Forget remembered credentials
    Logout,

    /// Set a new password for the registered email
    ResetPassword {
        #[arg(long)]
        email: String,

        #[arg(long)]
        new_password: String,
    },

    /// Show the registered account and remembered login
    Status,

    /// Schedule a new note
    Add {
        /// Note text
        text: String,

        /// When (e.g., "tomorrow 09:30", "2025-08-25 14:30", "next friday"); default now
        #[arg(long, value_name = "WHEN")]
        at: Option<String>,
    },

    /// Change a note's text or date
    Edit {
        /// Position in the list or id prefix
        #[arg(value_name = "NOTE")]
        note: String,

        /// New text
        #[arg(long)]
        text: Option<String>,

        /// New date/time
        #[arg(long, value_name = "WHEN")]
        at: Option<String>,
    },

    /// Toggle a note between done and open
    Done {
        /// Position in the list or id prefix
        #[arg(value_name = "NOTE")]
        note: String,
    },

    /// Delete a note
    Rm {
        /// Position in the list or id prefix
        #[arg(value_name = "NOTE")]
        note: String,
    },

    /// List notes in date order
    List,
}
