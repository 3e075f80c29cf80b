//! Russian numeral vocabulary.
//!
//! Everything here is fixed lookup data. Surface forms are listed per value
//! and reverted into word -> value maps once, when the [`Lexicon`] is first
//! touched; after that the tables are read-only and shared by every caller.
//!
//! All surface forms are lowercase and spelled with `е` instead of `ё`
//! (input is folded the same way before lookup).

use std::collections::HashMap;

use once_cell::sync::Lazy;

static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::build);

/// Masculine/feminine rendering of a number that has its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CardinalName {
    pub value: u32,
    pub masculine: &'static str,
    pub feminine: &'static str,
}

const fn name(value: u32, masculine: &'static str) -> CardinalName {
    CardinalName { value, masculine, feminine: masculine }
}

/// Names used when rendering: 0..=19, the tens and the hundreds.
const CARDINAL_NAMES: &[CardinalName] = &[
    name(0, "ноль"),
    CardinalName { value: 1, masculine: "один", feminine: "одна" },
    CardinalName { value: 2, masculine: "два", feminine: "две" },
    name(3, "три"),
    name(4, "четыре"),
    name(5, "пять"),
    name(6, "шесть"),
    name(7, "семь"),
    name(8, "восемь"),
    name(9, "девять"),
    name(10, "десять"),
    name(11, "одиннадцать"),
    name(12, "двенадцать"),
    name(13, "тринадцать"),
    name(14, "четырнадцать"),
    name(15, "пятнадцать"),
    name(16, "шестнадцать"),
    name(17, "семнадцать"),
    name(18, "восемнадцать"),
    name(19, "девятнадцать"),
    name(20, "двадцать"),
    name(30, "тридцать"),
    name(40, "сорок"),
    name(50, "пятьдесят"),
    name(60, "шестьдесят"),
    name(70, "семьдесят"),
    name(80, "восемьдесят"),
    name(90, "девяносто"),
    name(100, "сто"),
    name(200, "двести"),
    name(300, "триста"),
    name(400, "четыреста"),
    name(500, "пятьсот"),
    name(600, "шестьсот"),
    name(700, "семьсот"),
    name(800, "восемьсот"),
    name(900, "девятьсот"),
];

/// Cardinal surface forms (all genders and the cases that show up in speech).
const CARDINAL_FORMS: &[(f64, &[&str])] = &[
    (0.0, &["ноль", "нуль", "ноля", "нуля", "нолем", "нулем"]),
    (1.0, &["один", "одна", "одно", "одного", "одной", "одному", "одним", "одну", "одною"]),
    (1.5, &["полтора", "полторы", "полутора"]),
    (2.0, &["два", "две", "двух", "двум", "двумя", "пара", "пару", "пары", "парой"]),
    (3.0, &["три", "трех", "трем", "тремя"]),
    (4.0, &["четыре", "четырех", "четырем", "четырьмя"]),
    (5.0, &["пять", "пяти", "пятью"]),
    (6.0, &["шесть", "шести", "шестью"]),
    (7.0, &["семь", "семи", "семью"]),
    (8.0, &["восемь", "восьми", "восемью", "восьмью"]),
    (9.0, &["девять", "девяти", "девятью"]),
    (10.0, &["десять", "десяти", "десятью"]),
    (11.0, &["одиннадцать", "одиннадцати", "одиннадцатью"]),
    (12.0, &["двенадцать", "двенадцати", "двенадцатью"]),
    (13.0, &["тринадцать", "тринадцати", "тринадцатью"]),
    (14.0, &["четырнадцать", "четырнадцати", "четырнадцатью"]),
    (15.0, &["пятнадцать", "пятнадцати", "пятнадцатью"]),
    (16.0, &["шестнадцать", "шестнадцати", "шестнадцатью"]),
    (17.0, &["семнадцать", "семнадцати", "семнадцатью"]),
    (18.0, &["восемнадцать", "восемнадцати", "восемнадцатью"]),
    (19.0, &["девятнадцать", "девятнадцати", "девятнадцатью"]),
    (20.0, &["двадцать", "двадцати", "двадцатью"]),
    (30.0, &["тридцать", "тридцати", "тридцатью"]),
    (40.0, &["сорок", "сорока"]),
    (50.0, &["пятьдесят", "пятидесяти", "пятьюдесятью"]),
    (60.0, &["шестьдесят", "шестидесяти", "шестьюдесятью"]),
    (70.0, &["семьдесят", "семидесяти", "семьюдесятью"]),
    (80.0, &["восемьдесят", "восьмидесяти", "восемьюдесятью"]),
    (90.0, &["девяносто", "девяноста"]),
    (100.0, &["сто", "ста"]),
    (200.0, &["двести", "двухсот", "двумстам", "двумястами"]),
    (300.0, &["триста", "трехсот", "тремстам", "тремястами"]),
    (400.0, &["четыреста", "четырехсот", "четыремстам", "четырьмястами"]),
    (500.0, &["пятьсот", "пятисот", "пятистам", "пятьюстами"]),
    (600.0, &["шестьсот", "шестисот", "шестистам", "шестьюстами"]),
    (700.0, &["семьсот", "семисот", "семистам", "семьюстами"]),
    (800.0, &["восемьсот", "восьмисот", "восьмистам", "восемьюстами"]),
    (900.0, &["девятьсот", "девятисот", "девятистам", "девятьюстами"]),
];

/// Irregular fractions with their own nouns: half, third, quarter.
const SPECIAL_FRACTION_FORMS: &[(f64, &[&str])] = &[
    (0.5, &["половина", "половины", "половиной", "половину", "половин"]),
    (1.0 / 3.0, &["треть", "трети", "третью", "третей"]),
    (0.25, &["четверть", "четверти", "четвертью", "четвертей"]),
];

/// Adjective declension classes used by ordinal numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paradigm {
    /// перв-ый, пят-ый
    Hard,
    /// втор-ой, шест-ой
    Stressed,
    /// трет-ий
    Soft,
}

impl Paradigm {
    /// Every ordinal ending (all genders, common cases, plural).
    fn ordinal_endings(self) -> &'static [&'static str] {
        match self {
            Paradigm::Hard => &["ый", "ая", "ое", "ого", "ой", "ому", "ым", "ом", "ую", "ые", "ых", "ыми"],
            Paradigm::Stressed => &["ой", "ая", "ое", "ого", "ому", "ым", "ом", "ую", "ые", "ых", "ыми"],
            Paradigm::Soft => &["ий", "ья", "ье", "ьего", "ьей", "ьему", "ьим", "ьем", "ью", "ьи", "ьих", "ьими"],
        }
    }

    /// Endings a fraction denominator takes (it agrees with the feminine
    /// "часть"). The soft accusative "третью" is left to the special
    /// fraction "треть", which shares the form.
    fn fraction_endings(self) -> &'static [&'static str] {
        match self {
            Paradigm::Hard | Paradigm::Stressed => &["ая", "ой", "ую", "ых", "ым", "ыми"],
            Paradigm::Soft => &["ья", "ьей", "ьих", "ьим", "ьими"],
        }
    }

    fn feminine_singular(self) -> &'static str {
        match self {
            Paradigm::Soft => "ья",
            _ => "ая",
        }
    }

    fn genitive_plural(self) -> &'static str {
        match self {
            Paradigm::Soft => "ьих",
            _ => "ых",
        }
    }

    fn masculine_genitive(self) -> &'static str {
        match self {
            Paradigm::Soft => "ьего",
            _ => "ого",
        }
    }
}

/// Ordinal stems below one thousand.
const ORDINAL_STEMS: &[(u32, &str, Paradigm)] = &[
    (1, "перв", Paradigm::Hard),
    (2, "втор", Paradigm::Stressed),
    (3, "трет", Paradigm::Soft),
    (4, "четверт", Paradigm::Hard),
    (5, "пят", Paradigm::Hard),
    (6, "шест", Paradigm::Stressed),
    (7, "седьм", Paradigm::Stressed),
    (8, "восьм", Paradigm::Stressed),
    (9, "девят", Paradigm::Hard),
    (10, "десят", Paradigm::Hard),
    (11, "одиннадцат", Paradigm::Hard),
    (12, "двенадцат", Paradigm::Hard),
    (13, "тринадцат", Paradigm::Hard),
    (14, "четырнадцат", Paradigm::Hard),
    (15, "пятнадцат", Paradigm::Hard),
    (16, "шестнадцат", Paradigm::Hard),
    (17, "семнадцат", Paradigm::Hard),
    (18, "восемнадцат", Paradigm::Hard),
    (19, "девятнадцат", Paradigm::Hard),
    (20, "двадцат", Paradigm::Hard),
    (30, "тридцат", Paradigm::Hard),
    (40, "сороков", Paradigm::Stressed),
    (50, "пятидесят", Paradigm::Hard),
    (60, "шестидесят", Paradigm::Hard),
    (70, "семидесят", Paradigm::Hard),
    (80, "восьмидесят", Paradigm::Hard),
    (90, "девяност", Paradigm::Hard),
    (100, "сот", Paradigm::Hard),
    (200, "двухсот", Paradigm::Hard),
    (300, "трехсот", Paradigm::Hard),
    (400, "четырехсот", Paradigm::Hard),
    (500, "пятисот", Paradigm::Hard),
    (600, "шестисот", Paradigm::Hard),
    (700, "семисот", Paradigm::Hard),
    (800, "восьмисот", Paradigm::Hard),
    (900, "девятисот", Paradigm::Hard),
];

/// Denominator stems above the ordinal table.
const LARGE_DENOMINATOR_STEMS: &[(f64, &str)] = &[(1e3, "тысячн"), (1e6, "миллионн"), (1e9, "миллиардн")];

/// Names of the scale tiers, from 10^3 upwards. The short scale assigns
/// tier `i` the value 10^(3(i+1)); the long scale keeps "тысяча" and
/// "миллион" and then steps by 10^6.
const LARGE_NUMBER_NAMES: &[&str] = &[
    "тысяча",
    "миллион",
    "биллион",
    "триллион",
    "квадриллион",
    "квинтиллион",
    "секстиллион",
    "септиллион",
    "октиллион",
    "нониллион",
    "дециллион",
    "ундециллион",
    "дуодециллион",
    "тредециллион",
    "кватродециллион",
    "квинквадециллион",
    "седециллион",
    "септендециллион",
    "октодециллион",
    "новендециллион",
    "вигинтиллион",
    "унвигинтиллион",
    "уновигинтиллион",
    "трезвигинтиллион",
    "кваттоурвигинтиллион",
    "квинквавигинтиллион",
    "квесвигинтиллион",
    "септемвигинтиллион",
    "октовигинтиллион",
    "новемвигинтиллион",
    "тригинтиллион",
    "унтригинтиллион",
    "дуотригинтиллион",
    "трестригинтиллион",
];

/// The long scale names stop at вигинтиллион (10^120).
const LONG_SCALE_TIERS: usize = 21;

/// Prefixes that multiply a denominator stem by 10^k ("десяти-тысячная").
const DENOMINATOR_PREFIXES: &[&str] = &["", "десяти", "сто", "тысяче", "десятитысяче", "стотысяче"];

/// Grammatical case a counted noun takes after a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Agreement {
    /// один миллион
    Nominative,
    /// два миллиона
    Genitive,
    /// пять миллионов
    GenitivePlural,
}

impl Agreement {
    /// The Slavic numeral agreement rule: 1 -> nominative singular, 2..4 ->
    /// genitive singular, everything else (and 11..14) -> genitive plural.
    pub fn for_count(n: u128) -> Self {
        if (11..=14).contains(&(n % 100)) {
            return Agreement::GenitivePlural;
        }
        match n % 10 {
            1 => Agreement::Nominative,
            2..=4 => Agreement::Genitive,
            _ => Agreement::GenitivePlural,
        }
    }
}

/// A scale tier name in the three forms numeral agreement needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScaleName {
    pub nominative: String,
    pub genitive: String,
    pub genitive_plural: String,
    /// Remaining case forms, only used for lookup.
    oblique: Vec<String>,
}

impl ScaleName {
    fn new(nominative: &str) -> Self {
        if let Some(stem) = nominative.strip_suffix('а') {
            // тысяча
            return ScaleName {
                nominative: nominative.to_string(),
                genitive: format!("{stem}и"),
                genitive_plural: stem.to_string(),
                oblique: ["у", "ей", "е", "ам", "ами", "ах"].iter().map(|e| format!("{stem}{e}")).collect(),
            };
        }
        ScaleName {
            nominative: nominative.to_string(),
            genitive: format!("{nominative}а"),
            genitive_plural: format!("{nominative}ов"),
            oblique: ["у", "ом", "е", "ы", "ам", "ами", "ах"].iter().map(|e| format!("{nominative}{e}")).collect(),
        }
    }

    pub fn form(&self, agreement: Agreement) -> &str {
        match agreement {
            Agreement::Nominative => &self.nominative,
            Agreement::Genitive => &self.genitive,
            Agreement::GenitivePlural => &self.genitive_plural,
        }
    }

    fn forms(&self) -> impl Iterator<Item = &str> {
        [self.nominative.as_str(), self.genitive.as_str(), self.genitive_plural.as_str()]
            .into_iter()
            .chain(self.oblique.iter().map(String::as_str))
    }

    /// Stem of the derived denominator: "тысячн", "миллионн".
    fn denominator_stem(&self) -> String {
        match self.nominative.strip_suffix('а') {
            Some(stem) => format!("{stem}н"),
            None => format!("{}н", self.nominative),
        }
    }
}

/// Singular and plural name of a fraction denominator ("пятая", "пятых").
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FractionName {
    pub singular: String,
    pub plural: String,
}

/// The numeral lexicon: every table used by the extractors and renderers,
/// built once and shared read-only.
#[derive(Debug)]
pub(crate) struct Lexicon {
    cardinals: HashMap<&'static str, f64>,
    ordinals: HashMap<String, f64>,
    short_terms: HashMap<String, f64>,
    long_terms: HashMap<String, f64>,
    fractions: HashMap<String, f64>,
    special_fractions: HashMap<&'static str, f64>,
    names: HashMap<u32, CardinalName>,
    scale_names: Vec<ScaleName>,
    ordinal_stems: HashMap<u32, (&'static str, Paradigm)>,
}

/// Turn a `value -> [forms]` listing into a `form -> value` map.
fn revert<K, I>(entries: impl IntoIterator<Item = (f64, I)>) -> HashMap<K, f64>
where
    K: std::hash::Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut map = HashMap::new();
    for (value, forms) in entries {
        for form in forms {
            map.insert(form, value);
        }
    }
    map
}

impl Lexicon {
    /// The process-wide lexicon.
    pub fn get() -> &'static Lexicon {
        &LEXICON
    }

    fn build() -> Self {
        let cardinals = revert(CARDINAL_FORMS.iter().map(|(v, forms)| (*v, forms.iter().copied())));
        let special_fractions = revert(SPECIAL_FRACTION_FORMS.iter().map(|(v, forms)| (*v, forms.iter().copied())));

        let ordinals = revert(ORDINAL_STEMS.iter().map(|&(value, stem, paradigm)| {
            (value as f64, paradigm.ordinal_endings().iter().map(move |e| format!("{stem}{e}")))
        }));

        let mut fractions: HashMap<String, f64> = revert(
            ORDINAL_STEMS.iter().filter(|(value, _, _)| *value >= 2).map(|&(value, stem, paradigm)| {
                (value as f64, paradigm.fraction_endings().iter().map(move |e| format!("{stem}{e}")))
            }),
        );
        for &(value, stem) in LARGE_DENOMINATOR_STEMS {
            for ending in Paradigm::Hard.fraction_endings() {
                fractions.insert(format!("{stem}{ending}"), value);
            }
        }

        let scale_names: Vec<ScaleName> = LARGE_NUMBER_NAMES.iter().map(|n| ScaleName::new(n)).collect();

        let mut short_terms = HashMap::new();
        let mut long_terms = HashMap::new();
        for (tier, scale) in scale_names.iter().enumerate() {
            for form in scale.forms() {
                short_terms.insert(form.to_string(), 10f64.powi(tier_exponent(tier, true) as i32));
                if tier < LONG_SCALE_TIERS {
                    long_terms.insert(form.to_string(), 10f64.powi(tier_exponent(tier, false) as i32));
                }
            }
        }
        // "миллиард" is 10^9 whatever the scale.
        for form in ScaleName::new("миллиард").forms() {
            short_terms.insert(form.to_string(), 1e9);
            long_terms.insert(form.to_string(), 1e9);
        }

        Lexicon {
            cardinals,
            ordinals,
            short_terms,
            long_terms,
            fractions,
            special_fractions,
            names: CARDINAL_NAMES.iter().map(|n| (n.value, *n)).collect(),
            scale_names,
            ordinal_stems: ORDINAL_STEMS.iter().map(|&(v, stem, p)| (v, (stem, p))).collect(),
        }
    }

    /// Value of a cardinal word.
    pub fn cardinal(&self, word: &str) -> Option<f64> {
        self.cardinals.get(word).copied()
    }

    /// Value of an ordinal word.
    pub fn ordinal(&self, word: &str) -> Option<f64> {
        self.ordinals.get(word).copied()
    }

    /// Cardinal value, or ordinal value too when `ordinals` is set.
    pub fn number(&self, word: &str, ordinals: bool) -> Option<f64> {
        self.cardinal(word).or_else(|| if ordinals { self.ordinal(word) } else { None })
    }

    /// Value of a scale tier word in the given scale.
    pub fn term(&self, word: &str, short_scale: bool) -> Option<f64> {
        let terms = if short_scale { &self.short_terms } else { &self.long_terms };
        terms.get(word).copied()
    }

    /// Denominator named by a fraction word ("пятых" -> 5).
    pub fn fraction(&self, word: &str) -> Option<f64> {
        self.fractions.get(word).copied()
    }

    /// Value of a half/third/quarter word.
    pub fn special_fraction(&self, word: &str) -> Option<f64> {
        self.special_fractions.get(word).copied()
    }

    /// All cardinal surface forms with their values.
    pub fn cardinal_forms(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.cardinals.iter().map(|(w, v)| (*w, *v))
    }

    /// Rendering name of a number that has one (0..=19, tens, hundreds).
    pub fn cardinal_name(&self, value: u32) -> Option<&CardinalName> {
        self.names.get(&value)
    }

    /// Scale tier names available in the given scale, lowest first.
    pub fn scale_names(&self, short_scale: bool) -> &[ScaleName] {
        if short_scale { &self.scale_names } else { &self.scale_names[..LONG_SCALE_TIERS] }
    }

    /// Singular/plural denominator name for small denominators ("третья",
    /// "третьих").
    pub fn fraction_name(&self, denominator: u32) -> Option<FractionName> {
        let (stem, paradigm) = self.ordinal_stems.get(&denominator)?;
        Some(FractionName {
            singular: format!("{stem}{}", paradigm.feminine_singular()),
            plural: format!("{stem}{}", paradigm.genitive_plural()),
        })
    }

    /// Denominator name for 10^`exponent` ("десятых", "десятитысячных").
    pub fn decimal_denominator(&self, exponent: usize, short_scale: bool) -> Option<FractionName> {
        if exponent == 0 {
            return None;
        }
        let mut bases: Vec<(usize, String)> = vec![(1, "десят".to_string()), (2, "сот".to_string())];
        for (tier, scale) in self.scale_names(short_scale).iter().enumerate() {
            bases.push((tier_exponent(tier, short_scale), scale.denominator_stem()));
        }
        let (base, stem) = bases.into_iter().filter(|(e, _)| *e <= exponent).max_by_key(|(e, _)| *e)?;
        let prefix = DENOMINATOR_PREFIXES.get(exponent - base)?;
        Some(FractionName { singular: format!("{prefix}{stem}ая"), plural: format!("{prefix}{stem}ых") })
    }

    /// Masculine genitive ordinal ("первого", "шестого"), as used when
    /// naming the hour in progress.
    pub fn ordinal_genitive(&self, value: u32) -> Option<String> {
        let (stem, paradigm) = self.ordinal_stems.get(&value)?;
        Some(format!("{stem}{}", paradigm.masculine_genitive()))
    }
}

/// Decimal exponent of scale tier `tier` (0 = тысяча).
pub(crate) fn tier_exponent(tier: usize, short_scale: bool) -> usize {
    if short_scale || tier == 0 { 3 * (tier + 1) } else { 6 * tier }
}
