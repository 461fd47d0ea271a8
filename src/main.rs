use std::io::{self, Stderr, Stdout};
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use termtint::colors::{
    BG_WHITE, BOLD, ColorName, GREEN, RESET, Style, bold, cyan, dim, green, paint,
};
use termtint::config::TintConfig;
use termtint::util::{escape_visible, pad_right, unescape};
use termtint::{Arg, Printer, Stream, Tag, write_safe};

// ── CLI definition ──────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "termtint",
    about = "🎨 Print ANSI-colored status lines and text from the shell",
    long_about = "termtint prints tagged status lines ([SUCCESS], [ERROR], [DEBUG], \
                  [WARNING]) and bold colored text. Templates use printf directives \
                  (%d, %s, %f, %%, ...) filled from the trailing arguments; the `safe` \
                  command prints text exactly as given.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Message {
    /// printf-style template (\n, \t and \e are understood)
    template: String,

    /// Values for the template's directives
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bold-green [SUCCESS] line on stdout
    Success(Message),
    /// Bold-red [ERROR] line on stderr
    Error(Message),
    /// Bold-yellow [DEBUG] line on stderr
    Debug(Message),
    /// Bold-magenta [WARNING] line on stderr
    Warning(Message),
    /// Bold colored text on stdout
    Color {
        /// Foreground color
        #[arg(value_enum)]
        color: ColorName,
        /// Background color
        #[arg(long, value_enum)]
        bg: Option<ColorName>,
        /// Extra text styles (repeatable)
        #[arg(long = "style", value_enum)]
        styles: Vec<Style>,
        #[command(flatten)]
        message: Message,
    },
    /// Print text verbatim, never interpreting % directives
    Safe {
        text: String,
        /// Color to wrap the text in
        #[arg(short, long, value_enum)]
        color: Option<ColorName>,
        /// Write to stderr instead of stdout
        #[arg(long)]
        stderr: bool,
    },
    /// List every escape code
    Codes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run through every kind of output
    Demo,
    /// Manage termtint configuration
    Config {
        /// Show the current config
        #[arg(long)]
        show: bool,
        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        let message = format!("{e:#}");
        termtint::print_error!(" %s\n", message.as_str());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TintConfig::load();
    let mut printer = Printer::stdio().configured(&config);

    match cli.command {
        Commands::Success(message) => cmd_tagged(&mut printer, Tag::Success, &message),
        Commands::Error(message) => cmd_tagged(&mut printer, Tag::Error, &message),
        Commands::Debug(message) => cmd_tagged(&mut printer, Tag::Debug, &message),
        Commands::Warning(message) => cmd_tagged(&mut printer, Tag::Warning, &message),
        Commands::Color {
            color,
            bg,
            styles,
            message,
        } => cmd_color(&mut printer, color, bg, &styles, &message),
        Commands::Safe {
            text,
            color,
            stderr,
        } => cmd_safe(&mut printer, &text, color.or(config.default_color), stderr),
        Commands::Codes { json } => cmd_codes(json),
        Commands::Demo => cmd_demo(&mut printer),
        Commands::Config { show, reset } => cmd_config(show, reset),
    }
}

type StdPrinter = Printer<Stdout, Stderr>;

// ── Commands ────────────────────────────────────────────────────────────────

/// Print a tagged status line.
fn cmd_tagged(printer: &mut StdPrinter, tag: Tag, message: &Message) -> Result<()> {
    let template = unescape(&message.template);
    let args: Vec<Arg> = message.args.iter().map(|a| parse_arg(a)).collect();
    printer.tagged(tag, &template, &args)?;
    Ok(())
}

/// Print bold colored text.
fn cmd_color(
    printer: &mut StdPrinter,
    color: ColorName,
    bg: Option<ColorName>,
    styles: &[Style],
    message: &Message,
) -> Result<()> {
    let template = unescape(&message.template);
    let args: Vec<Arg> = message.args.iter().map(|a| parse_arg(a)).collect();

    if bg.is_none() && styles.is_empty() {
        match color {
            ColorName::Red => printer.red(&template, &args)?,
            ColorName::Green => printer.green(&template, &args)?,
            ColorName::Yellow => printer.yellow(&template, &args)?,
            ColorName::Blue => printer.blue(&template, &args)?,
            ColorName::Magenta => printer.magenta(&template, &args)?,
            ColorName::Cyan => printer.cyan(&template, &args)?,
            ColorName::Black | ColorName::White => {
                printer.colored(&format!("{BOLD}{}", color.fg()), &template, &args)?
            }
        }
        return Ok(());
    }

    let mut prefix = format!("{BOLD}{}", color.fg());
    if let Some(bg) = bg {
        prefix.push_str(bg.bg());
    }
    for style in styles {
        prefix.push_str(style.code());
    }
    printer.colored(&prefix, &template, &args)?;
    Ok(())
}

/// Print untrusted text as is.
fn cmd_safe(
    printer: &mut StdPrinter,
    text: &str,
    color: Option<ColorName>,
    stderr: bool,
) -> Result<()> {
    match (color, stderr) {
        (Some(color), false) => printer.safe_colored(Stream::Stdout, color.fg(), text)?,
        (Some(color), true) => printer.safe_colored(Stream::Stderr, color.fg(), text)?,
        (None, false) => printer.safe(text)?,
        (None, true) => write_safe(Some(&mut io::stderr()), Some(text))?,
    }

    if stderr {
        write_safe(Some(&mut io::stderr()), Some("\n"))?;
    } else {
        printer.safe("\n")?;
    }
    Ok(())
}

/// List every code with a sample.
fn cmd_codes(json: bool) -> Result<()> {
    let mut entries: Vec<(String, &'static str)> = Vec::new();
    for color in ColorName::ALL {
        entries.push((color.name().to_string(), color.fg()));
    }
    for color in ColorName::ALL {
        entries.push((format!("bg_{}", color.name()), color.bg()));
    }
    for style in Style::ALL {
        entries.push((style.name().to_string(), style.code()));
    }
    entries.push(("reset".to_string(), RESET));

    if json {
        let list: Vec<_> = entries
            .iter()
            .map(|(name, code)| {
                serde_json::json!({
                    "name": name,
                    "code": code,
                    "escaped": escape_visible(code),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let name_width = entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    println!("\n  {}\n", bold("ANSI codes"));
    for (name, code) in &entries {
        println!(
            "  {}  {}  {}",
            pad_right(&cyan(name), name_width),
            pad_right(&dim(&escape_visible(code)), 9),
            paint(code, "sample"),
        );
    }
    println!();
    Ok(())
}

/// Exercise every kind of output.
fn cmd_demo(printer: &mut StdPrinter) -> Result<()> {
    // Basic color functions
    printer.red("This is a red message.\n", &[])?;
    printer.green("This is a green message.\n", &[])?;

    // Semantic functions
    printer.success("Operation was successful.\n", &[])?;
    printer.error("An error occurred.\n", &[])?;

    // Formatted string
    let item_count = 10;
    printer.success("Processed %d items.\n", &[Arg::from(item_count)])?;

    // Attributes and colors
    printer.yellow(&format!("{BOLD}This is a bold yellow message.\n"), &[])?;
    printer.red(&format!("{BG_WHITE}Red text on a white background.\n"), &[])?;

    // Untrusted text
    printer.safe_colored(Stream::Stdout, GREEN, "50% off")?;
    printer.safe("\n")?;

    printer.flush()?;
    Ok(())
}

/// Manage configuration.
fn cmd_config(show: bool, reset: bool) -> Result<()> {
    if reset {
        let config = TintConfig::default();
        config.save()?;
        println!("  {} Config reset to defaults.", green("✓"));
        println!("  {} {}", dim("→"), TintConfig::config_path().display());
        return Ok(());
    }

    if show {
        let config = TintConfig::load();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let config_path = TintConfig::config_path();
    println!("\n  {} termtint configuration\n", "⚙");
    println!("  Config file: {}", config_path.display());
    println!(
        "  Exists:      {}",
        if config_path.exists() {
            green("yes")
        } else {
            dim("no (using defaults)")
        }
    );

    let config = TintConfig::load();
    println!("\n{}", serde_json::to_string_pretty(&config)?);
    println!(
        "\n  {} Use {} or {} to manage.\n",
        dim("→"),
        green("--show"),
        green("--reset")
    );

    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Type a shell word by its shape: integer, float, or plain string.
fn parse_arg(s: &str) -> Arg<'_> {
    if let Ok(v) = s.parse::<i64>() {
        return Arg::Int(v);
    }
    if let Ok(v) = s.parse::<u64>() {
        return Arg::UInt(v);
    }
    if s.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(v) = s.parse::<f64>() {
            return Arg::Float(v);
        }
    }
    Arg::Str(s)
}
