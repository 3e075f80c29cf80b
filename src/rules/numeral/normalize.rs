use super::helpers::is_integral;
use super::tables::Lexicon;

/// Lowercase, strip `- ? ! . ,`, collapse whitespace and replace small
/// cardinal words (integral values below 21) with digits.
pub fn normalize(text: &str) -> String {
    let lex = Lexicon::get();
    let stripped = regex!(r"[-?!.,]").replace_all(text, "");
    stripped
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let folded = word.replace('ё', "е");
            match lex.cardinal(&folded) {
                Some(value) if value < 21.0 && is_integral(value) => format!("{}", value as i64),
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_small_cardinals() {
        assert_eq!(normalize("это тест"), "это тест");
        assert_eq!(normalize("это  тест  один"), "это тест 1");
        assert_eq!(normalize("это тест, два!"), "это тест 2");
        assert_eq!(normalize("Это тест Три?"), "это тест 3");
        assert_eq!(normalize("двадцать  один"), "20 1");
        assert_eq!(normalize("пятьсот тысяч"), "пятьсот тысяч");
        assert_eq!(normalize("полтора часа"), "полтора часа");
        assert_eq!(normalize("кое-что"), "коечто");
    }
}
