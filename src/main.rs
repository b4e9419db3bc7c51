use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use stepscript_core::TranspileOptions;
use stepscript_rust::config::CONFIG;
use stepscript_rust::errors::AppError;
use stepscript_rust::session::Session;

#[derive(Debug, Parser)]
#[command(name = "stepscript", version, about = "Genera el script que reproduce un historial de steps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transpila un archivo de sesión y escribe el script en stdout.
    Transpile {
        session: PathBuf,
        /// No anteponer comentarios descriptivos.
        #[arg(long)]
        no_comments: bool,
        /// Transpilar como si este step estuviera checked out.
        #[arg(long)]
        checkout: Option<usize>,
        /// Emitir `{imports, code}` en JSON en lugar del script.
        #[arg(long)]
        json: bool,
    },
    /// Lista los tipos de step y preprocesadores soportados.
    ListSteps,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("[stepscript] {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Transpile { session, no_comments, checkout, json } => {
            let mut session = Session::load(&session)?;
            session.checkout(checkout)?;
            let add_comments = CONFIG.transpile.add_comments && !no_comments;
            let transpiler = stepscript_adapters::default_transpiler(TranspileOptions { add_comments });
            let code = session.transpile(&transpiler)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&code)?);
            } else {
                print!("{}", code.to_script());
            }
        }
        Command::ListSteps => {
            let transpiler = stepscript_adapters::default_transpiler(TranspileOptions::default());
            for step_type in transpiler.registry().step_types() {
                if let Some(performer) = transpiler.registry().get(step_type) {
                    println!("{step_type}\t{}", performer.step_display_name());
                }
            }
            for kind in transpiler.preprocess_step_types() {
                println!("{kind}\t(preprocess)");
            }
        }
    }
    Ok(())
}
