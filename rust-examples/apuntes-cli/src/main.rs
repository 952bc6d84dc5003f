//! `apuntes`: ejecuta las lecciones desde la terminal
//! (runs the lessons from the terminal).
//!
//! ```bash
//! apuntes list
//! apuntes run 2.1 3.2 --instant
//! apuntes all --verbose
//! ```

use anyhow::{Context, Result};
use apuntes_common::{Console, Lesson, LessonError, Settings, lesson, logging};
use clap::{Parser, Subcommand};

/// Ejemplos de TypeScript y Python escritos en Rust
/// (TypeScript and Python examples written in Rust).
#[derive(Parser)]
#[command(name = "apuntes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Show debug logs from the lessons.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Resolve timers immediately instead of waiting.
    #[arg(long, global = true)]
    instant: bool,

    /// Read `input()` answers from stdin instead of the sample answers.
    #[arg(long, global = true)]
    interactive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every lesson.
    List,

    /// Run the given lessons, in order.
    Run {
        /// Lesson ids, e.g. `1.2` or `5.3`.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Run every lesson.
    All,
}

fn catalogue() -> Vec<Lesson> {
    [
        apuntes_chapter1::lessons(),
        apuntes_chapter2::lessons(),
        apuntes_chapter3::lessons(),
        apuntes_chapter4::lessons(),
        apuntes_chapter5::lessons(),
    ]
    .concat()
}

fn settings(cli: &Cli) -> Settings {
    let base = if cli.instant {
        Settings::instant()
    } else {
        Settings::default()
    };
    Settings {
        interactive: cli.interactive,
        ..base
    }
}

fn run_lessons(lessons: &[Lesson], settings: &Settings, banner: bool) -> Result<()> {
    let mut console = Console::stdout();
    for lesson in lessons {
        if banner {
            console.log(format_args!("===== {} {} =====", lesson.id, lesson.title));
        }
        lesson
            .execute(&mut console, settings)
            .with_context(|| format!("la lección {} falló", lesson.id))?;
        if banner {
            console.blank();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = settings(&cli);
    let all = catalogue();
    tracing::debug!(lessons = all.len(), ?settings, "catalogue loaded");

    match &cli.command {
        Commands::List => {
            for lesson in &all {
                println!("{}  {}", lesson.id, lesson.title);
            }
        }
        Commands::Run { ids } => {
            let selected = ids
                .iter()
                .map(|id| {
                    lesson::find(&all, id)
                        .copied()
                        .ok_or_else(|| LessonError::UnknownLesson(id.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            run_lessons(&selected, &settings, false)?;
        }
        Commands::All => run_lessons(&all, &settings, true)?,
    }
    Ok(())
}
