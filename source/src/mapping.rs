use std::collections::HashMap;

use crate::error::{Result, SourceError};

/// основные категории символов (General Category, GC) и составные имена их таблиц
/// берется из UCD: третья колонка UnicodeData.txt
///
/// общие категории:
///     L (Lu, Ll, Lt, Lm, Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
///     Z (Zs, Zl, Zp) - разделители
///     C (Cc, Cf, Cs, Co, Cn) - системные символы
///
/// Ls в UnicodeData.txt не встречается, но оставлен в таблице
pub const GENERAL_CATEGORIES: [(&str, &str, &str); 31] = [
    // Cc - управляющий символ, относится к C0 или C1
    ("Cc", "Other", "Control"),
    // Cf - управляющий символ форматирования
    ("Cf", "Other", "Format"),
    // Cn - не назначен
    ("Cn", "Other", "NotAssigned"),
    // Co - символ для приватного использования
    ("Co", "Other", "PrivateUse"),
    // Cs - символ-суррогат
    ("Cs", "Other", "Surrogate"),
    ("Ls", "Letter", "Cased"),
    // Ll - строчная буква
    ("Ll", "Letter", "Lowercased"),
    // Lm - буква-модификатор
    ("Lm", "Letter", "Modifier"),
    // Lo - прочие буквы, включая слоги и иероглифы
    ("Lo", "Letter", "Other"),
    // Lt - диграфический символ, первая часть - заглавная буква
    ("Lt", "Letter", "Titlecase"),
    // Lu - прописная буква
    ("Lu", "Letter", "Uppercase"),
    // Mc - комбинирующий маркер, занимающий пространство
    ("Mc", "Mark", "SpaceCombining"),
    // Me - охватывающий комбинирующий маркер
    ("Me", "Mark", "Enclosing"),
    // Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    ("Mn", "Mark", "Nonspacing"),
    // Nd - десятичная цифра
    ("Nd", "Number", "DecimalDigit"),
    // Nl - буквоподобный числовой символ
    ("Nl", "Number", "Letter"),
    // No - прочие числовые символы
    ("No", "Number", "Other"),
    // Pc - объединяющая пунктуация, например _
    ("Pc", "Punctuation", "Connector"),
    // Pd - тире или дефис как знак препинания
    ("Pd", "Punctuation", "Dash"),
    // Pe - закрывающий знак пунктуации (из пары)
    ("Pe", "Punctuation", "Close"),
    // Pf - конечный знак цитаты
    ("Pf", "Punctuation", "FinalQuote"),
    // Pi - начальный знак цитаты
    ("Pi", "Punctuation", "InitialQuote"),
    // Po - знак препинания другого типа
    ("Po", "Punctuation", "Other"),
    // Ps - открывающий знак пунктуации (из пары)
    ("Ps", "Punctuation", "Open"),
    // Sc - символ валюты
    ("Sc", "Symbol", "Currency"),
    // Sk - символ модификатора, не похожий на букву
    ("Sk", "Symbol", "Modifier"),
    // Sm - математический символ
    ("Sm", "Symbol", "Math"),
    // So - прочие символы
    ("So", "Symbol", "Other"),
    // Zl - разделитель строки
    ("Zl", "Separator", "Line"),
    // Zp - разделитель параграфов
    ("Zp", "Separator", "Paragraph"),
    // Zs - разделитель-пробел
    ("Zs", "Separator", "Space"),
];

/// составное имя категории: группа и подгруппа
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName
{
    /// группа, например Letter
    pub group: String,
    /// подгруппа, например Uppercase
    pub subgroup: String,
    /// имя таблицы - группа и подгруппа без разделителя
    resolved: String,
}

impl CategoryName
{
    pub fn new(group: &str, subgroup: &str) -> Self
    {
        Self {
            group: group.to_owned(),
            subgroup: subgroup.to_owned(),
            resolved: format!("{}{}", group, subgroup),
        }
    }

    /// имя таблицы, например LetterUppercase
    #[inline]
    pub fn resolved(&self) -> &str
    {
        self.resolved.as_str()
    }
}

/// таблица соответствий "код категории -> составное имя"
/// после создания не изменяется; разные коды всегда дают разные имена
#[derive(Debug, Clone)]
pub struct CategoryMapping
{
    names: HashMap<String, CategoryName>,
}

impl CategoryMapping
{
    /// собрать таблицу из троек (код, группа, подгруппа)
    pub fn new<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut names: HashMap<String, CategoryName> = HashMap::new();
        let mut owners: HashMap<String, String> = HashMap::new();

        for (code, group, subgroup) in entries {
            let name = CategoryName::new(group, subgroup);

            if names.contains_key(code) {
                return Err(SourceError::DuplicateCategory {
                    code: code.to_owned(),
                });
            }

            // иначе две категории молча сольются в одну таблицу
            if let Some(first) = owners.get(name.resolved()) {
                return Err(SourceError::DuplicateResolvedName {
                    name: name.resolved().to_owned(),
                    first: first.clone(),
                    second: code.to_owned(),
                });
            }

            owners.insert(name.resolved().to_owned(), code.to_owned());
            names.insert(code.to_owned(), name);
        }

        Ok(Self { names })
    }

    /// составное имя для кода категории
    #[inline]
    pub fn get(&self, code: &str) -> Option<&CategoryName>
    {
        self.names.get(code)
    }

    /// имя таблицы для кода категории
    #[inline]
    pub fn resolve(&self, code: &str) -> Option<&str>
    {
        self.get(code).map(CategoryName::resolved)
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool
    {
        self.names.contains_key(code)
    }

    /// коды категорий в алфавитном порядке
    pub fn codes(&self) -> Vec<&str>
    {
        let mut codes: Vec<&str> = self.names.keys().map(String::as_str).collect();
        codes.sort();

        codes
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.names.is_empty()
    }
}

impl Default for CategoryMapping
{
    /// стандартная таблица категорий UCD
    fn default() -> Self
    {
        let names = GENERAL_CATEGORIES
            .iter()
            .map(|&(code, group, subgroup)| (code.to_owned(), CategoryName::new(group, subgroup)))
            .collect();

        Self { names }
    }
}
