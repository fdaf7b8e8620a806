//! CLI module for the User CRUD API
//!
//! Provides the `serve` subcommand, which runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// User CRUD API - In-memory user resource over HTTP
#[derive(Parser)]
#[command(name = "user-crud-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}
