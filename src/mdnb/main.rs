use clap::Parser;
use colored::*;
use mdnb::api::{CmdMessage, ConfigAction, DocEntry, MdnbApi, MessageLevel};
use mdnb::config::MdnbConfig;
use mdnb::error::Result;
use mdnb::init::initialize;
use mdnb::model::Scope;
use mdnb::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MdnbApi<FileStore>,
    scope: Scope,
    config: MdnbConfig,
    cwd: PathBuf,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::ToNotebook {
            paths,
            out_dir,
            strict,
        }) => handle_to_notebook(&mut ctx, paths, out_dir, strict),
        Some(Commands::ToMarkdown { paths, out_dir }) => {
            handle_to_markdown(&mut ctx, paths, out_dir)
        }
        Some(Commands::Scan { dir }) => handle_scan(&ctx, dir),
        Some(Commands::Catalog { dir, output }) => handle_catalog(&mut ctx, dir, output),
        Some(Commands::Dedup { dir, ext, yes }) => handle_dedup(&mut ctx, dir, ext, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_scan(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global);

    AppContext {
        api: ctx.api,
        scope: ctx.scope,
        config: ctx.config,
        cwd,
        verbose: cli.verbose,
    }
}

fn handle_to_notebook(
    ctx: &mut AppContext,
    paths: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let strict = strict || ctx.config.strict;
    let extensions = ctx.config.markdown_extensions.clone();
    let result = ctx
        .api
        .to_notebook(&paths, out_dir.as_deref(), &extensions, strict)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_to_markdown(
    ctx: &mut AppContext,
    paths: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
) -> Result<()> {
    let result = ctx.api.to_markdown(&paths, out_dir.as_deref())?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_scan(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.cwd.clone());
    let extensions = ctx.config.markdown_extensions.clone();
    let result = ctx.api.scan(&dir, &extensions)?;
    print_entries(&result.entries);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_catalog(
    ctx: &mut AppContext,
    dir: Option<PathBuf>,
    output: Option<String>,
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.cwd.clone());
    let filename = output.unwrap_or_else(|| ctx.config.catalog_filename.clone());
    let extensions = ctx.config.markdown_extensions.clone();
    let result = ctx.api.catalog(&dir, &extensions, &filename)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_dedup(
    ctx: &mut AppContext,
    dir: Option<PathBuf>,
    ext: Vec<String>,
    yes: bool,
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.cwd.clone());
    let extensions: Vec<String> = if ext.is_empty() {
        ctx.config.dedup_extensions.clone()
    } else {
        ext.into_iter()
            .map(|e| {
                if e.starts_with('.') {
                    e
                } else {
                    format!(".{}", e)
                }
            })
            .collect()
    };
    let result = ctx.api.dedup(&dir, &extensions, yes)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show = value.is_none();
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if show {
        if let Some(config) = &result.config {
            match &key {
                None => {
                    for (k, v) in config.list_all() {
                        println!("{} = {}", k, v);
                    }
                }
                Some(k) => {
                    if let Some(v) = config.get(k) {
                        println!("{} = {}", k, v);
                    }
                }
            }
        }
    }
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info => {
                if verbose {
                    println!("{}", message.content.dimmed());
                }
            }
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_entries(entries: &[DocEntry]) {
    if entries.is_empty() {
        println!("No documents found.");
        return;
    }

    let link_width = entries.iter().map(|e| e.link.width()).max().unwrap_or(0);
    for entry in entries {
        let padding = link_width.saturating_sub(entry.link.width());
        println!(
            "  {}{}  {}",
            entry.link,
            " ".repeat(padding),
            entry.title.dimmed()
        );
    }
}
