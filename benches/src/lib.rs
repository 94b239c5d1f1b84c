use unicode_categories_source::GENERAL_CATEGORIES;

/// синтетический UnicodeData.txt: count записей подряд, категории идут по кругу, суррогаты пропущены
pub fn synthetic_ucd(count: u32) -> String
{
    let categories: Vec<&str> = GENERAL_CATEGORIES
        .iter()
        .map(|&(code, _, _)| code)
        .filter(|&code| code != "Cs")
        .collect();

    let mut data = String::new();

    for code in 0 .. count {
        let category = categories[code as usize % categories.len()];

        data.push_str(format!("{:04X};CHARACTER {:04X};{};0;L;;;;;N;;;;;\n", code, code, category).as_str());
    }

    data
}

/// реальный фрагмент UnicodeData.txt из тестов генератора
pub fn sample_ucd() -> String
{
    std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../prepare/tests/data/UnicodeData.sample.txt"
    ))
    .unwrap()
}
