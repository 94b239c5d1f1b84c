use regex::Regex;

lazy_static! {
    /// слово с заглавной буквы, перед которым что-то есть: "LetterUppercase" -> "Letter_Uppercase"
    static ref WORD_START: Regex = Regex::new("(.)([A-Z][a-z]+)").unwrap();
    /// заглавная буква сразу после строчной или цифры: "letterX" -> "letter_X"
    static ref CASE_BOUNDARY: Regex = Regex::new("([a-z0-9])([A-Z])").unwrap();
}

/// CamelCase -> snake_case
pub fn snake_case(name: &str) -> String
{
    let words = WORD_START.replace_all(name, "${1}_${2}");

    CASE_BOUNDARY
        .replace_all(&words, "${1}_${2}")
        .to_lowercase()
}

/// имя константы для таблицы: "LetterUppercase" -> "LETTER_UPPERCASE"
#[inline]
pub fn constant_name(name: &str) -> String
{
    snake_case(name).to_uppercase()
}
