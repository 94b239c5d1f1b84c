use std::io;
use std::path::PathBuf;

/// результат операций разбора UCD
pub type Result<T, E = SourceError> = std::result::Result<T, E>;

/// ошибки чтения и классификации записей UnicodeData.txt
#[derive(Debug, thiserror::Error)]
pub enum SourceError
{
    /// файл с данными отсутствует или не может быть открыт
    #[error("не удалось открыть {}: {source}", .path.display())]
    SourceUnavailable
    {
        path: PathBuf,
        source: io::Error,
    },

    /// ошибка чтения посреди файла
    #[error("ошибка чтения в строке {line}: {source}")]
    Io
    {
        line: usize,
        source: io::Error,
    },

    /// строка не содержит кода символа и категории
    #[error("некорректная запись в строке {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// категория отсутствует в таблице соответствий
    #[error("неизвестная категория {code:?} в строке {line}")]
    UnknownCategory { code: String, line: usize },

    /// две категории дают одно и то же имя таблицы
    #[error("категории {first} и {second} дают одно имя {name}")]
    DuplicateResolvedName
    {
        name: String,
        first: String,
        second: String,
    },

    /// категория указана в таблице соответствий дважды
    #[error("категория {code} указана дважды")]
    DuplicateCategory { code: String },

    /// разбор прерван по флагу отмены
    #[error("разбор прерван после {processed} записей")]
    Cancelled { processed: usize },
}
