use super::render::{render_config, render_messages, render_report, render_steps};
use super::setup::{Cli, Commands, IoArgs};
use clap::Parser;
use cliptidy::api::{CmdMessage, ConfigAction, TidyApi};
use cliptidy::clipboard::{copy_to_clipboard, get_from_clipboard};
use cliptidy::error::{Result, TidyError};
use cliptidy::model::Transform;
use directories::ProjectDirs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

const HOME_ENV: &str = "CLIPTIDY_HOME";

struct AppContext {
    api: TidyApi,
    io: IoArgs,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Dedupe { text }) => handle_transform(&ctx, text, &[Transform::Dedupe]),
        Some(Commands::Cleanup { text }) => handle_transform(&ctx, text, &[Transform::Cleanup]),
        Some(Commands::List { text }) => handle_transform(&ctx, text, &[Transform::List]),
        Some(Commands::Grammar { text }) => handle_transform(&ctx, text, &[Transform::Grammar]),
        Some(Commands::Case { mode, text }) => {
            handle_transform(&ctx, text, &[Transform::Case(mode)])
        }
        Some(Commands::Run { steps, text }) => handle_transform(&ctx, text, &steps),
        Some(Commands::Steps) => handle_steps(),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_transform(&ctx, Vec::new(), &[]),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let api = TidyApi::new(resolve_config_dir()?)?;
    log::debug!("config dir: {}", api.config_dir().display());

    Ok(AppContext {
        api,
        io: cli.io.clone(),
        verbose: cli.verbose,
    })
}

fn resolve_config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "cliptidy", "cliptidy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            TidyError::Config(format!(
                "Could not determine config dir; set {} instead",
                HOME_ENV
            ))
        })
}

fn handle_transform(ctx: &AppContext, text: Vec<String>, steps: &[Transform]) -> Result<()> {
    let input = read_input(&ctx.io, text)?;
    let mut result = ctx.api.apply(&input, steps)?;
    let output = result.output.take().unwrap_or_default();

    println!("{}", output);

    let config = ctx.api.config_values();
    if ctx.io.copy || config.copy_result {
        if let Err(e) = copy_to_clipboard(&output) {
            log::debug!("copy failed: {}", e);
            result.add_message(CmdMessage::warning(format!(
                "Failed to copy to clipboard: {}",
                e
            )));
        }
    }

    let show_report = ctx.io.report || config.show_report;
    if show_report {
        eprint!("{}", render_report(&result.steps));
    }
    eprint!(
        "{}",
        render_messages(&result.messages, show_report || ctx.verbose)
    );

    Ok(())
}

/// Picks the input text: arguments, then `--file`, then `--clipboard`, then piped stdin.
fn read_input(io: &IoArgs, text: Vec<String>) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    if let Some(path) = &io.file {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TidyError::Input(format!("Cannot read {}: {}", path.display(), e))
        })?;
        return Ok(strip_final_newline(content));
    }

    if io.clipboard {
        return get_from_clipboard();
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.lock().read_to_string(&mut buffer)?;
        if !buffer.is_empty() {
            return Ok(strip_final_newline(buffer));
        }
    }

    Err(TidyError::Input(
        "No input: pass text, --file, --clipboard or pipe into stdin".to_string(),
    ))
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn handle_steps() -> Result<()> {
    print!("{}", render_steps(&Transform::catalog()));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(&config.list_all()));
        }
    }
    print!("{}", render_messages(&result.messages, true));
    Ok(())
}
