use std::collections::HashMap;
use std::io::Write;

use unicode_categories_source::GroupedTable;

use crate::config::EmitterConfig;
use crate::error::GenerateError;
use crate::naming::constant_name;

use self::format::{char_literal, chunked};
pub use self::stats::TableStats;

pub mod format;
pub mod stats;

/// текст сгенерированного файла: заголовок и по объявлению static на каждую таблицу,
/// таблицы отсортированы по имени; разные таблицы не могут получить одно имя константы
pub fn render(table: &GroupedTable, config: &EmitterConfig) -> Result<(String, TableStats), GenerateError>
{
    let mut output = format!("{}\n\n", config.header);
    let mut stats = TableStats::default();
    let mut owners: HashMap<String, &str> = HashMap::new();

    for (resolved, codes) in table.iter_sorted() {
        let name = constant_name(resolved);

        if let Some(first) = owners.insert(name.clone(), resolved) {
            return Err(GenerateError::DuplicateConstantName {
                name,
                first: first.to_owned(),
                second: resolved.to_owned(),
            });
        }

        let literals: Vec<String> = codes.iter().map(|code| char_literal(code)).collect();

        output.push_str(
            format!(
                "pub static {} : &'static [char] = &[\n{}];\n\n",
                name,
                chunked(literals.as_slice(), config.chunk_size(), config.indent.as_str())
            )
            .as_str(),
        );

        stats.tables.push((name, codes.len()));
    }

    Ok((output, stats))
}

/// пишем таблицы целиком одной операцией, частичный вывод не нужен
pub fn write<W: Write>(
    table: &GroupedTable,
    config: &EmitterConfig,
    sink: &mut W,
) -> Result<TableStats, GenerateError>
{
    let (output, stats) = render(table, config)?;

    sink.write_all(output.as_bytes())?;
    sink.flush()?;

    Ok(stats)
}
