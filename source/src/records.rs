use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{Result, SourceError};

/// запись UnicodeData.txt: код символа и код категории
/// код хранится в том виде, в каком он записан в файле (шестнадцатеричная строка)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord
{
    /// код символа, колонка 0
    pub code: String,
    /// код категории, колонка 2
    pub category: String,
    /// номер строки в файле, начиная с 1
    pub line: usize,
}

/// последовательное чтение записей UnicodeData.txt
/// итератор однопроходный: для повторного чтения источник нужно открыть заново
pub struct Records<R>
{
    lines: Lines<R>,
    line: usize,
}

impl Records<BufReader<File>>
{
    /// открыть файл с данными UCD
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self>
    {
        let path = path.as_ref();

        let unavailable = |source| SourceError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;

        // каталог открывается, но не читается
        if !file.metadata().map_err(unavailable)?.is_file() {
            return Err(unavailable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "не является файлом",
            )));
        }

        log::debug!("читаем {}", path.display());

        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Records<R>
{
    pub fn from_reader(reader: R) -> Self
    {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// количество прочитанных строк
    #[inline]
    pub fn position(&self) -> usize
    {
        self.line
    }
}

impl<R: BufRead> Iterator for Records<R>
{
    type Item = Result<CharacterRecord>;

    fn next(&mut self) -> Option<Self::Item>
    {
        let line = self.lines.next()?;
        self.line += 1;

        Some(match line {
            Ok(content) => parse_record(&content, self.line),
            Err(source) => Err(SourceError::Io {
                line: self.line,
                source,
            }),
        })
    }
}

/// разбор строки UnicodeData.txt
///
/// нужны только колонки 0 (код) и 2 (категория), остальные пропускаем.
/// диапазоны (<..., First> / <..., Last>) не разворачиваются: это обычные записи
pub fn parse_record(content: &str, line: usize) -> Result<CharacterRecord>
{
    let mut fields = content.split(';');

    let code = fields.next();
    let category = fields.nth(1);

    match (code, category) {
        (Some(code), Some(category)) if is_hex_code(code) => Ok(CharacterRecord {
            code: code.to_owned(),
            category: category.to_owned(),
            line,
        }),
        _ => Err(SourceError::MalformedRecord {
            line,
            content: content.to_owned(),
        }),
    }
}

/// код символа - непустая шестнадцатеричная строка; диапазон значений не проверяется
#[inline]
fn is_hex_code(code: &str) -> bool
{
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_hexdigit())
}
