/// литерал char для кода символа в том виде, в каком он записан в UCD: 0041 -> '\u{0041}'
#[inline]
pub fn char_literal(code: &str) -> String
{
    format!("'\\u{{{}}}'", code)
}

/// представить список литералов в текстовом виде, по chunk_size элементов в строке
///
/// элементы строки разделяются ", ", строки - ",\n", каждая строка начинается с indent.
/// после последнего элемента запятая не ставится
pub fn chunked<S: AsRef<str>>(items: &[S], chunk_size: usize, indent: &str) -> String
{
    let mut output = String::new();

    for (i, chunk) in items.chunks(chunk_size).enumerate() {
        if i > 0 {
            output.push_str(",\n");
        }

        output.push_str(indent);

        for (j, item) in chunk.iter().enumerate() {
            if j > 0 {
                output.push_str(", ");
            }

            output.push_str(item.as_ref());
        }
    }

    output
}
