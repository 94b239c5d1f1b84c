/// размеры записанных таблиц
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStats
{
    /// (имя константы, количество символов) в порядке вывода
    pub tables: Vec<(String, usize)>,
}

impl TableStats
{
    /// общее количество символов
    pub fn total(&self) -> usize
    {
        self.tables.iter().map(|(_, count)| count).sum()
    }

    /// количество символов в таблице
    pub fn get(&self, name: &str) -> Option<usize>
    {
        self.tables
            .iter()
            .find(|(table, _)| table == name)
            .map(|&(_, count)| count)
    }
}

/// информация о записанных таблицах; пишется в лог, чтобы не смешиваться с выводом
pub fn print(stats: &TableStats)
{
    log::info!(
        "таблиц: {}, символов: {}",
        stats.tables.len(),
        stats.total()
    );

    let mut tables: Vec<&(String, usize)> = stats.tables.iter().collect();
    tables.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    for (name, count) in tables {
        log::info!("  {}: {}", name, count);
    }
}
