use clap::Parser;
use stickyboard::cli::{
    handle_add, handle_drag, handle_edit, handle_front, handle_list, handle_recolor,
    handle_resize, handle_retitle, handle_trash, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let board = cli.board;

    let result = match cli.command {
        Commands::Add {
            title,
            x,
            y,
            width,
            height,
            color,
            json,
        } => handle_add(board, title, x, y, width, height, color, json).await,
        Commands::List { json } => handle_list(board, json).await,
        Commands::Drag { id, x, y } => handle_drag(board, id, x, y).await,
        Commands::Resize { id, width, height } => handle_resize(board, id, width, height).await,
        Commands::Retitle { id, title } => handle_retitle(board, id, title).await,
        Commands::Recolor { id, color } => handle_recolor(board, id, color).await,
        Commands::Edit { id, text } => handle_edit(board, id, text).await,
        Commands::Front { id } => handle_front(board, id).await,
        Commands::Trash { id } => handle_trash(board, id).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
