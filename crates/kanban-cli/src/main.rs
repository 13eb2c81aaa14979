//! Kanban CLI Application
//!
//! Command-line board manager and MCP server for kanban boards.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use kanban_core::KanbanBuilder;
use log::info;
use mcp::{run_stdio_server, KanbanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = KanbanBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let kanban = builder
        .build()
        .await
        .context("Failed to initialize kanban database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Kanban started");

    match command {
        Some(Board { command }) => {
            Cli::new(kanban, renderer)
                .handle_board_command(command)
                .await
        }
        Some(Column { command }) => {
            Cli::new(kanban, renderer)
                .handle_column_command(command)
                .await
        }
        Some(Task { command }) => {
            Cli::new(kanban, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting kanban MCP server");
            run_stdio_server(KanbanMcpServer::new(kanban))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(kanban, renderer).list_boards().await,
    }
}
