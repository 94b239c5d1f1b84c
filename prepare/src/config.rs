use crate::error::GenerateError;

/// количество литералов в строке таблицы
pub const DEFAULT_CHUNK_SIZE: usize = 8;
/// отступ строк таблицы
pub const DEFAULT_INDENT: &str = "    ";
/// первая строка сгенерированного файла
pub const DEFAULT_HEADER: &str = "// This file is autogenerated by unicode_categories_prepare.";

/// параметры вывода таблиц
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig
{
    /// литералов в строке, больше нуля
    chunk_size: usize,
    pub indent: String,
    /// строка-предупреждение о том, что файл сгенерирован
    pub header: String,
}

impl EmitterConfig
{
    pub fn new(chunk_size: usize) -> Result<Self, GenerateError>
    {
        Self::default().with_chunk_size(chunk_size)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self, GenerateError>
    {
        if chunk_size == 0 {
            return Err(GenerateError::InvalidChunkSize);
        }

        self.chunk_size = chunk_size;

        Ok(self)
    }

    pub fn with_header(mut self, header: &str) -> Self
    {
        self.header = header.to_owned();
        self
    }

    #[inline]
    pub fn chunk_size(&self) -> usize
    {
        self.chunk_size
    }
}

impl Default for EmitterConfig
{
    fn default() -> Self
    {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            indent: DEFAULT_INDENT.to_owned(),
            header: DEFAULT_HEADER.to_owned(),
        }
    }
}
