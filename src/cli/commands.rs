use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickyboard")]
#[command(version, about = "An offline-first sticky-notes board in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the board database
    #[arg(long, global = true, default_value = "board.db")]
    pub board: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a note from the creation form
    Add {
        /// Note title (blank falls back to the placeholder)
        #[arg(long)]
        title: Option<String>,

        /// Proposed x position (non-numeric input is ignored)
        #[arg(long)]
        x: Option<String>,

        /// Proposed y position
        #[arg(long)]
        y: Option<String>,

        /// Proposed width
        #[arg(long)]
        width: Option<String>,

        /// Proposed height
        #[arg(long)]
        height: Option<String>,

        /// Note color (omit to cycle through the palette)
        #[arg(long)]
        color: Option<String>,

        /// Output the created note as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes in z-order, bottom first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drag a note's header, releasing the pointer at the given position
    Drag {
        /// Note id (full UUID or unique prefix)
        id: String,

        /// Pointer release x
        x: f64,

        /// Pointer release y
        y: f64,
    },

    /// Drag a note's corner handle until it reaches the given size
    Resize {
        /// Note id (full UUID or unique prefix)
        id: String,

        /// Target width
        width: f64,

        /// Target height
        height: f64,
    },

    /// Rename a note (a blank title resets to the placeholder)
    Retitle {
        /// Note id (full UUID or unique prefix)
        id: String,

        /// New title
        title: String,
    },

    /// Set a note's color
    Recolor {
        /// Note id (full UUID or unique prefix)
        id: String,

        /// New color
        color: String,
    },

    /// Replace a note's body text
    Edit {
        /// Note id (full UUID or unique prefix)
        id: String,

        /// New body text
        text: String,
    },

    /// Raise a note to the top of the z-order
    Front {
        /// Note id (full UUID or unique prefix)
        id: String,
    },

    /// Drag a note onto the trash zone, deleting it
    Trash {
        /// Note id (full UUID or unique prefix)
        id: String,
    },
}
