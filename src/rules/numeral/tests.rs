use crate::Options;
use crate::rules::numeral::{extract_first_number, extract_numbers};

const SHORT: Options = Options { short_scale: true, ordinals: false };
const LONG: Options = Options { short_scale: false, ordinals: false };
const ORDINALS: Options = Options { short_scale: true, ordinals: true };

fn assert_cases(cases: Vec<(f64, &str)>, opts: Options) {
    for (expected, input) in cases {
        let found = extract_first_number(input, &opts);
        assert!(
            found.is_some_and(|v| (v - expected).abs() < 1e-9),
            "expected {} for input '{}' ({:?}), got {:?}",
            expected,
            input,
            opts,
            found
        );
    }
}

#[test]
fn numeral_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(f64, &str)> = vec![
        (0.0, "ноль"),
        (0.0, "причал ноль"),
        (0.0, "0"),
        (1.0, "один"),
        (1.0, "одну"),
        (2.0, "две"),
        (2.0, "пара"),
        (2.0, "пару"),
        (1.5, "полтора"),
        (1.5, "полторы"),
        (3.0, "трех"),
        (10.0, "десять"),
        (12.0, "двенадцать"),
        (22.0, "двадцать два"),
        (22.0, "двадцать 2"),
        (40.0, "сорок"),
        (123.0, "сто двадцать три"),
        (999.0, "девятьсот девяносто девять"),
        (1000.0, "тысяча"),
        (1000.0, "тысячу"),
        (2300.0, "две тысячи триста"),
        (5000.0, "пять тысяч"),
        (5000.0, "5 тысяч"),
        (1_200_000.0, "миллион двести тысяч"),
        (2_000_000_000.0, "два миллиарда"),
        (299_792_458.0, "двести девяносто девять миллионов семьсот девяносто две тысячи четыреста пятьдесят восемь"),
        (33.0, "33"),
        (2.5, "2,5"),
        (0.77, "0.77"),
        (-3.0, "минус три"),
        (-2.5, "минус два с половиной"),
        (-0.75, "минус 3/4"),
    ];
    assert_cases(cases, SHORT);
}

#[test]
fn fraction_examples_matching() {
    let cases: Vec<(f64, &str)> = vec![
        (0.5, "половина"),
        (1.0 / 3.0, "треть"),
        (2.0 / 3.0, "две трети"),
        (0.25, "четверть"),
        (0.75, "три четверти"),
        (0.4, "две пятых"),
        (0.2, "пятая"),
        (0.01, "одна сотая"),
        (0.75, "3/4"),
        (2.5, "два с половиной"),
        (2.75, "два и три четверти"),
        (1.2, "одна целая две десятых"),
        (3.25, "три целых двадцать пять сотых"),
        (3.5, "три целых пять"),
        (2.5, "два запятая пять"),
        (0.5, "ноль целых пять десятых"),
    ];
    assert_cases(cases, SHORT);
}

#[test]
fn clipped_half_is_not_a_number_alone() {
    assert_eq!(extract_first_number("упал на пол", &SHORT), None);
    assert_eq!(extract_first_number("пол", &SHORT), None);
    assert_eq!(extract_numbers("помыл пол два дня", &SHORT), vec![2.0]);
}

#[test]
fn ordinal_examples_matching() {
    let cases: Vec<(f64, &str)> = vec![
        (3.0, "третий"),
        (5.0, "пятая"),
        (25.0, "двадцать пятое"),
        (40.0, "сороковой"),
        (100.0, "сотый"),
        (3.0, "на третьем месте"),
    ];
    assert_cases(cases, ORDINALS);
    assert_eq!(extract_first_number("третий", &SHORT), None);
}

#[test]
fn scales_disagree_on_the_same_word() {
    assert_cases(vec![(1e12, "триллион"), (1e9, "биллион"), (1e9, "миллиард"), (2e6, "два миллиона")], SHORT);
    assert_cases(vec![(1e18, "триллион"), (1e12, "биллион"), (1e9, "миллиард"), (2e6, "два миллиона")], LONG);
    assert_cases(vec![(3e12, "три триллиона")], SHORT);
    assert_cases(vec![(3e18, "три триллиона")], LONG);
}

#[test]
fn absent_numbers_are_not_zero() {
    for input in ["парусник", "", "   ", "минус", "целых", "и с"] {
        assert_eq!(extract_first_number(input, &SHORT), None, "input '{input}'");
    }
}

#[test]
fn extract_numbers_keeps_order() {
    let found = extract_numbers("у меня двадцать два кота и три собаки", &SHORT);
    assert_eq!(found, vec![22.0, 3.0]);

    let found = extract_numbers("двадцать двадцать два", &SHORT);
    assert_eq!(found, vec![20.0, 22.0]);

    let found = extract_numbers("один, два, три", &SHORT);
    assert_eq!(found, vec![1.0, 2.0, 3.0]);

    assert!(extract_numbers("парусник", &SHORT).is_empty());
}

#[test]
fn pronounced_numbers_read_back() {
    for n in 0..=999i128 {
        let spoken = crate::pronounce_number(n);
        assert_eq!(extract_first_number(&spoken, &SHORT), Some(n as f64), "'{spoken}'");
    }
    for n in [1000i128, 2022, 21_000, 100_000, 1_000_001, 299_792_458] {
        let spoken = crate::pronounce_number(n);
        assert_eq!(extract_first_number(&spoken, &SHORT), Some(n as f64), "'{spoken}'");
    }
}
