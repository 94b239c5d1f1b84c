use unicode_categories_prepare::output::format::{char_literal, chunked};
use unicode_categories_prepare::output::{render, write};
use unicode_categories_prepare::{EmitterConfig, GenerateError};
use unicode_categories_source::GroupedTable;

fn table(entries: &[(&str, &[&str])]) -> GroupedTable
{
    let mut table = GroupedTable::new();

    for (name, codes) in entries {
        for code in codes.iter() {
            table.push(name, code.to_string());
        }
    }

    table
}

#[test]
fn literal()
{
    assert_eq!(char_literal("0041"), r"'\u{0041}'");
    assert_eq!(char_literal("1F600"), r"'\u{1F600}'");
}

#[test]
fn chunks()
{
    let items: Vec<String> = (0 .. 10).map(|i| i.to_string()).collect();

    assert_eq!(
        chunked(&items, 8, "    "),
        "    0, 1, 2, 3, 4, 5, 6, 7,\n    8, 9"
    );
    assert_eq!(chunked(&items[.. 8], 8, "    "), "    0, 1, 2, 3, 4, 5, 6, 7");
    assert_eq!(chunked(&items[.. 3], 2, "\t"), "\t0, 1,\n\t2");
    assert_eq!(chunked::<String>(&[], 8, "    "), "");
}

/// количество строк - ceil(N / 8), в последней N mod 8 элементов (или 8)
#[test]
fn chunk_line_counts()
{
    for n in 1 .. 40usize {
        let items: Vec<String> = (0 .. n).map(|i| format!("{:04X}", i)).collect();
        let text = chunked(&items, 8, "    ");
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), (n + 7) / 8, "n = {}", n);

        let last = lines.last().unwrap().split(", ").count();
        let expected = match n % 8 {
            0 => 8,
            rest => rest,
        };
        assert_eq!(last, expected, "n = {}", n);

        for line in &lines[.. lines.len() - 1] {
            assert!(line.ends_with(','));
            assert_eq!(line.split(", ").count(), 8);
        }
    }
}

#[test]
fn render_layout()
{
    let table = table(&[
        ("LetterUppercase", &["0041", "0042"]),
        ("LetterLowercased", &["0061"]),
    ]);

    let (text, stats) = render(&table, &EmitterConfig::default()).unwrap();

    let expected = "// This file is autogenerated by unicode_categories_prepare.\n\
                    \n\
                    pub static LETTER_LOWERCASED : &'static [char] = &[\n    '\\u{0061}'];\n\
                    \n\
                    pub static LETTER_UPPERCASE : &'static [char] = &[\n    '\\u{0041}', '\\u{0042}'];\n\
                    \n";

    assert_eq!(text, expected);
    assert_eq!(
        stats.tables,
        vec![
            ("LETTER_LOWERCASED".to_owned(), 1),
            ("LETTER_UPPERCASE".to_owned(), 2)
        ]
    );
    assert_eq!(stats.total(), 3);
    assert_eq!(stats.get("LETTER_UPPERCASE"), Some(2));
    assert_eq!(stats.get("OTHER"), None);
}

#[test]
fn render_long_table()
{
    let codes: Vec<String> = (0x30 .. 0x3A).map(|c| format!("{:04X}", c)).collect();
    let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
    let table = table(&[("NumberDecimalDigit", codes.as_slice())]);

    let (text, _) = render(&table, &EmitterConfig::default()).unwrap();

    assert!(text.contains(
        "pub static NUMBER_DECIMAL_DIGIT : &'static [char] = &[\n    \
         '\\u{0030}', '\\u{0031}', '\\u{0032}', '\\u{0033}', '\\u{0034}', '\\u{0035}', '\\u{0036}', '\\u{0037}',\n    \
         '\\u{0038}', '\\u{0039}'];\n"
    ));
}

#[test]
fn empty_table_has_header_only()
{
    let (text, stats) = render(&GroupedTable::new(), &EmitterConfig::default()).unwrap();

    assert_eq!(
        text,
        "// This file is autogenerated by unicode_categories_prepare.\n\n"
    );
    assert!(stats.tables.is_empty());
}

#[test]
fn custom_config()
{
    let config = EmitterConfig::new(3).unwrap().with_header("// generated");
    let table = table(&[("Other", &["0001", "0002", "0003", "0004"])]);

    let (text, _) = render(&table, &config).unwrap();

    assert_eq!(
        text,
        "// generated\n\npub static OTHER : &'static [char] = &[\n    \
         '\\u{0001}', '\\u{0002}', '\\u{0003}',\n    '\\u{0004}'];\n\n"
    );
}

#[test]
fn zero_chunk_size()
{
    assert!(matches!(
        EmitterConfig::new(0),
        Err(GenerateError::InvalidChunkSize)
    ));
    assert_eq!(EmitterConfig::default().chunk_size(), 8);
}

#[test]
fn write_to_sink()
{
    let table = table(&[("LetterUppercase", &["0041"])]);
    let config = EmitterConfig::default();

    let mut sink = Vec::new();
    let stats = write(&table, &config, &mut sink).unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), render(&table, &config).unwrap().0);
    assert_eq!(stats.total(), 1);
}

/// имена таблиц разные, а константы совпадают
#[test]
fn colliding_constant_names()
{
    let table = table(&[("LetterUPPER", &["0041"]), ("LetterUpper", &["0042"])]);

    match render(&table, &EmitterConfig::default()) {
        Err(GenerateError::DuplicateConstantName {
            name,
            first,
            second,
        }) => {
            assert_eq!(name, "LETTER_UPPER");
            assert_eq!(first, "LetterUPPER");
            assert_eq!(second, "LetterUpper");
        }
        other => panic!("{:?}", other),
    }

    let mut sink = Vec::new();
    assert!(write(&table, &EmitterConfig::default(), &mut sink).is_err());
    assert!(sink.is_empty());
}
