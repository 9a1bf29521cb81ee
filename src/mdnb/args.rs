use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdnb")]
#[command(version)]
#[command(about = "Folder-aware toolkit for Markdown notes and Jupyter notebooks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global configuration scope
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (per-file progress)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert Markdown documents to notebooks
    #[command(alias = "md2nb")]
    ToNotebook {
        /// Files or directories to convert
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Write converted files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Fail on unterminated code fences instead of warning
        #[arg(long)]
        strict: bool,
    },

    /// Convert notebooks back to Markdown documents
    #[command(alias = "nb2md")]
    ToMarkdown {
        /// Files or directories to convert
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,

        /// Write converted files into this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// List convertible documents with their titles
    #[command(alias = "ls")]
    Scan {
        /// Directory to scan (defaults to the current directory)
        dir: Option<PathBuf>,
    },

    /// Write a directory listing file of document links
    Catalog {
        /// Directory to catalog (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Listing file name (defaults to the configured catalog-file)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove byte-for-byte duplicate files
    Dedup {
        /// Directory to deduplicate (defaults to the current directory)
        dir: Option<PathBuf>,

        /// Extensions to consider (defaults to the configured dedup-exts)
        #[arg(long)]
        ext: Vec<String>,

        /// Actually remove files instead of reporting them
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., strict)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the configuration directory
    Init,
}
