#[macro_use]
extern crate lazy_static;

use std::io::{BufRead, Write};
use std::path::Path;

use unicode_categories_source::{CharacterRecord, Classifier, Records};

pub mod config;
pub mod error;
pub mod naming;
pub mod output;

pub use config::EmitterConfig;
pub use error::GenerateError;
pub use output::TableStats;

/// файл с данными UCD по умолчанию
pub const DEFAULT_INPUT: &str = "UnicodeData.txt";

/// прочитать UnicodeData.txt и записать таблицы категорий в sink
pub fn generate<P, W>(
    input: P,
    classifier: &Classifier,
    config: &EmitterConfig,
    sink: &mut W,
) -> Result<TableStats, GenerateError>
where
    P: AsRef<Path>,
    W: Write,
{
    let records = Records::open(input)?;

    write_tables(records, classifier, config, sink)
}

/// то же, что generate, но данные берутся из произвольного источника
pub fn generate_from_reader<R, W>(
    reader: R,
    classifier: &Classifier,
    config: &EmitterConfig,
    sink: &mut W,
) -> Result<TableStats, GenerateError>
where
    R: BufRead,
    W: Write,
{
    write_tables(Records::from_reader(reader), classifier, config, sink)
}

fn write_tables<I, W>(
    records: I,
    classifier: &Classifier,
    config: &EmitterConfig,
    sink: &mut W,
) -> Result<TableStats, GenerateError>
where
    I: IntoIterator<Item = unicode_categories_source::Result<CharacterRecord>>,
    W: Write,
{
    // таблицы собираются полностью до начала вывода
    let table = classifier.classify(records)?;
    let stats = output::write(&table, config, sink)?;

    output::stats::print(&stats);

    Ok(stats)
}
