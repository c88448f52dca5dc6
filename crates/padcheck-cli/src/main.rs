use std::fmt::Display;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::{ColoredString, Colorize};

use padcheck_core::config::Config;
use padcheck_core::{
    classify, next_numbers, scan_dir, try_classify, InconclusivePolicy, NumberFormatter,
    NumberPosition, PadError, Result, Verdict,
};

mod args;
use args::{Cli, Commands, ConfigAction, Inconclusive, Position, Shell};

/// Status-line reporter honouring --verbose / --quiet
#[derive(Clone, Copy)]
struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    fn detail(&self, message: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", "[DEBUG]".dimmed(), message);
        }
    }

    fn warn(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{} {}", "[WARN]".yellow().bold(), message);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let out = Output {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let base_dir = resolve_base_dir(cli.base_dir);
    out.detail(format!("base dir: {}", base_dir.display()));

    let result = match cli.command {
        Some(Commands::Check {
            samples,
            json,
            code,
            strict,
        }) => handle_check(out, samples, json, code, strict),
        Some(Commands::Scan {
            dir,
            pattern,
            recursive,
            position,
            hidden,
            json,
        }) => handle_scan(
            out, &base_dir, &dir, pattern, recursive, position, hidden, json,
        ),
        Some(Commands::Next {
            samples,
            count,
            inconclusive,
        }) => handle_next(out, &base_dir, samples, count, inconclusive),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "padcheck", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("PADCHECK_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".padcheck"))
        .unwrap_or_else(|| PathBuf::from(".padcheck"))
}

/// Samples from the command line, or one per stdin line (blank lines skipped)
fn read_samples(out: Output, samples: Vec<String>) -> Result<Vec<String>> {
    if !samples.is_empty() {
        return Ok(samples);
    }

    out.detail("reading samples from stdin");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

fn paint(verdict: Verdict) -> ColoredString {
    let label = verdict.to_string();
    match verdict {
        Verdict::Consistent { .. } | Verdict::Unpadded => label.green().bold(),
        Verdict::Inconsistent => label.red().bold(),
        Verdict::Inconclusive { .. } => label.yellow().bold(),
        Verdict::Empty => label.dimmed(),
    }
}

fn print_verdict(out: Output, verdict: Verdict, sample_count: usize) {
    if out.quiet {
        println!("{}", verdict);
        return;
    }

    println!();
    println!("Samples: {}", sample_count);
    println!(
        "Verdict: {} {}",
        paint(verdict),
        format!("(code {})", verdict.code()).dimmed()
    );
    if let Some(width) = verdict.pad_width() {
        let example = NumberFormatter::new(Some(width)).format(7);
        println!("Example: {}", example.cyan());
    }
    println!();
}

fn handle_check(
    out: Output,
    samples: Vec<String>,
    json: bool,
    code: bool,
    strict: bool,
) -> Result<()> {
    let samples = read_samples(out, samples)?;
    out.detail(format!("{} samples", samples.len()));

    let verdict = if strict {
        try_classify(&samples)?
    } else {
        classify(&samples)
    };

    if code {
        println!("{}", verdict.code());
    } else if json {
        let value = serde_json::json!({
            "samples": samples.len(),
            "verdict": verdict,
        });
        println!("{:#}", value);
    } else {
        print_verdict(out, verdict, samples.len());
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_scan(
    out: Output,
    base_dir: &Path,
    dir: &Path,
    pattern: Option<String>,
    recursive: bool,
    position: Option<Position>,
    hidden: bool,
    json: bool,
) -> Result<()> {
    // Priority: CLI options > config file > defaults
    let mut options = Config::load(base_dir)?.scan_options();
    if pattern.is_some() {
        options.pattern = pattern;
    }
    options.recursive |= recursive;
    options.include_hidden |= hidden;
    if let Some(position) = position {
        options.position = match position {
            Position::First => NumberPosition::First,
            Position::Last => NumberPosition::Last,
        };
    }
    out.detail(format!("scan options: {:?}", options));

    let result = scan_dir(dir, &options)?;

    for file in &result.samples {
        out.detail(format!("{} -> {}", file.path.display(), file.number));
    }
    if !result.skipped.is_empty() {
        out.warn(format!(
            "{} file(s) without a number skipped",
            result.skipped.len()
        ));
        for path in &result.skipped {
            out.detail(format!("skipped {}", path.display()));
        }
    }

    if json {
        println!("{:#}", serde_json::json!(result));
        return Ok(());
    }

    if !out.quiet {
        println!();
        println!("Directory: {}", dir.display());
    }
    print_verdict(out, result.verdict, result.samples.len());
    Ok(())
}

fn handle_next(
    out: Output,
    base_dir: &Path,
    samples: Vec<String>,
    count: usize,
    inconclusive: Option<Inconclusive>,
) -> Result<()> {
    let samples = read_samples(out, samples)?;

    let policy = match inconclusive {
        Some(Inconclusive::Unpadded) => InconclusivePolicy::Unpadded,
        Some(Inconclusive::MinLength) => InconclusivePolicy::MinLength,
        None => Config::load(base_dir)?.format.inconclusive,
    };

    let verdict = try_classify(&samples)?;
    out.detail(format!("verdict: {} (policy: {})", verdict, policy));
    if !verdict.is_conclusive() && verdict != Verdict::Empty {
        out.warn(format!("padding is {}, using policy '{}'", verdict, policy));
    }

    for number in next_numbers(&samples, count, policy)? {
        println!("{}", number);
    }
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(PadError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
