use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use unicode_categories_prepare::{generate, EmitterConfig, DEFAULT_INPUT};
use unicode_categories_source::Classifier;

/// таблицы символов по основным категориям Unicode, на основе UnicodeData.txt
#[derive(Parser, Debug)]
#[command(name = "unicode-categories", version)]
struct Args
{
    /// файл UnicodeData.txt из UCD
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> ExitCode
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut sink = stdout.lock();

    match generate(
        &args.input,
        &Classifier::default(),
        &EmitterConfig::default(),
        &mut sink,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
