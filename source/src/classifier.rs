use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, SourceError};
use crate::mapping::CategoryMapping;
use crate::records::CharacterRecord;

/// категории, которые по умолчанию не попадают в таблицы:
/// суррогаты (Cs) нельзя записать как литерал char
pub const DEFAULT_EXCLUDED: [&str; 1] = ["Cs"];

/// символы, сгруппированные по именам таблиц
/// внутри таблицы порядок совпадает с порядком записей во входном файле
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTable
{
    tables: HashMap<String, Vec<String>>,
}

impl GroupedTable
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить код символа в таблицу, создав её при первом обращении
    pub fn push(&mut self, name: &str, code: String)
    {
        match self.tables.get_mut(name) {
            Some(codes) => codes.push(code),
            None => {
                self.tables.insert(name.to_owned(), vec![code]);
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&[String]>
    {
        self.tables.get(name).map(Vec::as_slice)
    }

    /// имена таблиц, отсортированные побайтово
    pub fn names(&self) -> Vec<&str>
    {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();

        names
    }

    /// таблицы в порядке вывода
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &[String])>
    {
        self.names()
            .into_iter()
            .map(move |name| (name, self.tables[name].as_slice()))
    }

    /// количество таблиц
    #[inline]
    pub fn len(&self) -> usize
    {
        self.tables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.tables.is_empty()
    }

    /// общее количество символов во всех таблицах
    pub fn total(&self) -> usize
    {
        self.tables.values().map(Vec::len).sum()
    }
}

/// распределение записей по таблицам
#[derive(Debug, Clone)]
pub struct Classifier
{
    mapping: CategoryMapping,
    excluded: Vec<String>,
}

impl Default for Classifier
{
    /// стандартная таблица категорий, суррогаты исключены
    fn default() -> Self
    {
        DEFAULT_EXCLUDED
            .iter()
            .fold(Self::new(CategoryMapping::default()), |classifier, code| {
                classifier.exclude(code)
            })
    }
}

impl Classifier
{
    /// классификатор без исключений
    pub fn new(mapping: CategoryMapping) -> Self
    {
        Self {
            mapping,
            excluded: vec![],
        }
    }

    /// не включать категорию в таблицы
    pub fn exclude(mut self, code: &str) -> Self
    {
        if !self.is_excluded(code) {
            self.excluded.push(code.to_owned());
        }

        self
    }

    #[inline]
    pub fn mapping(&self) -> &CategoryMapping
    {
        &self.mapping
    }

    #[inline]
    pub fn excluded(&self) -> &[String]
    {
        self.excluded.as_slice()
    }

    #[inline]
    pub fn is_excluded(&self, code: &str) -> bool
    {
        self.excluded.iter().any(|e| e == code)
    }

    /// разобрать все записи; первая же ошибка прерывает разбор
    pub fn classify<I>(&self, records: I) -> Result<GroupedTable>
    where
        I: IntoIterator<Item = Result<CharacterRecord>>,
    {
        self.classify_cancellable(records, &AtomicBool::new(false))
    }

    /// то же, что classify, но флаг отмены проверяется перед каждой записью
    pub fn classify_cancellable<I>(&self, records: I, cancel: &AtomicBool) -> Result<GroupedTable>
    where
        I: IntoIterator<Item = Result<CharacterRecord>>,
    {
        let mut table = GroupedTable::new();
        let mut processed = 0;
        let mut skipped = 0;

        for record in records {
            if cancel.load(Ordering::Relaxed) {
                return Err(SourceError::Cancelled { processed });
            }

            let record = record?;
            processed += 1;

            if self.is_excluded(&record.category) {
                log::trace!("U+{} ({}) пропущен", record.code, record.category);
                skipped += 1;
                continue;
            }

            let name = match self.mapping.resolve(&record.category) {
                Some(name) => name,
                None => {
                    return Err(SourceError::UnknownCategory {
                        code: record.category,
                        line: record.line,
                    })
                }
            };

            table.push(name, record.code);
        }

        log::debug!(
            "записей: {}, пропущено: {}, таблиц: {}",
            processed,
            skipped,
            table.len()
        );

        Ok(table)
    }
}
