use std::io;

use unicode_categories_source::SourceError;

/// ошибки генерации таблиц
#[derive(Debug, thiserror::Error)]
pub enum GenerateError
{
    /// ошибка чтения или классификации UCD
    #[error(transparent)]
    Source(#[from] SourceError),

    /// ошибка записи результата
    #[error("ошибка записи: {0}")]
    Io(#[from] io::Error),

    /// таблицу нельзя разбить на строки нулевой длины
    #[error("количество литералов в строке должно быть больше нуля")]
    InvalidChunkSize,

    /// две таблицы дают одно имя константы
    #[error("таблицы {first} и {second} дают одну константу {name}")]
    DuplicateConstantName
    {
        name: String,
        first: String,
        second: String,
    },
}
