//! Preview: generate briefs from the command line or an interactive shell.
//!
//! Usage: preview [--catalog <file.ron>] [--topic <text>] [--scenes <n>] [--addon <name>]... [--json]
//!
//! Without `--topic` an interactive shell starts. Shell commands:
//!   scenes <n>      set the requested scene count
//!   addon <name>    toggle an add-on (voiceover, dialogue, thumbnail, captions, music)
//!   json            toggle JSON output
//!   explain <text>  show which mood and style rules a topic hits
//!   help            list commands
//!   quit            exit
//! Any other line is treated as a topic.

use anyhow::{Context, Result};
use cinematic_brief::core::export::render_copy_text;
use cinematic_brief::core::normalize::NormalizedTopic;
use cinematic_brief::core::scenes::DEFAULT_SCENE_COUNT;
use cinematic_brief::{AddOnConfig, AddOnKind, BriefEngine};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Generate cinematic text-to-video briefs", long_about = None)]
struct Args {
    /// RON catalog overriding the built-in rules and scene templates
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Topic to generate once; omit for the interactive shell
    #[arg(short, long)]
    topic: Option<String>,

    /// Requested scene count (clamped to 3..=10)
    #[arg(short, long, default_value_t = DEFAULT_SCENE_COUNT as i64, allow_negative_numbers = true)]
    scenes: i64,

    /// Add-on block to include; repeatable
    #[arg(short, long = "addon")]
    addons: Vec<AddOnKind>,

    /// Print the brief as JSON instead of the copy format
    #[arg(long)]
    json: bool,
}

struct Session {
    engine: BriefEngine,
    scenes: i64,
    add_ons: AddOnConfig,
    json: bool,
}

impl Session {
    fn render(&self, topic: &str) -> Result<Option<String>> {
        let Some(brief) = self.engine.generate(topic, self.scenes, self.add_ons) else {
            return Ok(None);
        };
        let text = if self.json {
            serde_json::to_string_pretty(&brief).context("failed to serialize brief")?
        } else {
            render_copy_text(&brief)
        };
        Ok(Some(text))
    }

    fn explain(&self, topic: &str) {
        let Some(topic) = NormalizedTopic::new(topic) else {
            println!("Usage: explain <topic>");
            return;
        };
        let catalog = self.engine.catalog();
        for (label, rules) in [("mood", &catalog.moods), ("style", &catalog.styles)] {
            match rules.matching_rule(&topic.lowered) {
                Some(idx) => {
                    let rule = &rules.rules[idx];
                    let hits: Vec<&str> = rule
                        .keywords
                        .iter()
                        .filter(|k| topic.lowered.contains(k.as_str()))
                        .map(String::as_str)
                        .collect();
                    println!(
                        "{}: rule {} -> \"{}\" (matched {:?})",
                        label, idx, rule.descriptor, hits
                    );
                }
                None => println!("{}: no rule -> \"{}\" (fallback)", label, rules.fallback),
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut builder = BriefEngine::builder();
    if let Some(ref path) = args.catalog {
        builder = builder.catalog_path(path);
    }
    let engine = builder.build().with_context(|| match args.catalog {
        Some(ref path) => format!("failed to load catalog '{}'", path.display()),
        None => "failed to build engine".to_string(),
    })?;

    let mut session = Session {
        engine,
        scenes: args.scenes,
        add_ons: args.addons.iter().copied().collect(),
        json: args.json,
    };

    if let Some(ref topic) = args.topic {
        match session.render(topic)? {
            Some(text) => println!("{}", text),
            None => eprintln!("Topic is empty; nothing to generate."),
        }
        return Ok(());
    }

    info!(scenes = session.scenes, "starting interactive preview");
    println!("Type a topic to generate a brief, or 'help' for commands.\n");
    run_shell(&mut session)
}

fn run_shell(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "scenes" => match rest.parse::<i64>() {
                Ok(n) => {
                    session.scenes = n;
                    println!("Scene count set to {}", n);
                }
                Err(_) => println!("Usage: scenes <n>  (current: {})", session.scenes),
            },
            "addon" => match rest.parse::<AddOnKind>() {
                Ok(kind) => {
                    session.add_ons.toggle(kind);
                    let state = if session.add_ons.is_enabled(kind) { "on" } else { "off" };
                    println!("{} {}", kind, state);
                }
                Err(e) => println!("{}", e),
            },
            "addons" => {
                for kind in AddOnKind::ALL {
                    let mark = if session.add_ons.is_enabled(kind) { "x" } else { " " };
                    println!("  [{}] {}", mark, kind);
                }
            }
            "json" => {
                session.json = !session.json;
                println!("JSON output {}", if session.json { "on" } else { "off" });
            }
            "explain" => session.explain(rest),
            _ => match session.render(line)? {
                Some(text) => println!("\n{}\n", text),
                None => println!("Type your idea to generate a cinematic prompt."),
            },
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  scenes <n>      set the requested scene count (clamped to 3..=10)");
    println!("  addon <name>    toggle voiceover, dialogue, thumbnail, captions or music");
    println!("  addons          list add-on flags");
    println!("  json            toggle JSON output");
    println!("  explain <text>  show which mood and style rules a topic hits");
    println!("  help            show this message");
    println!("  quit            exit");
    println!("Anything else is treated as a topic.");
}
