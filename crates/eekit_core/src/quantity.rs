use unscanny::Scanner;

use crate::error::QuantityError;

/// Parses a raw form value the way the calculators read their inputs:
/// a plain floating-point literal, surrounding whitespace ignored.
/// Unparseable and non-finite values are absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// SPICE scale suffixes. `m`/`M` is milli and mega is spelled `Meg`,
/// except that `M` directly before `Ω` or `ohm` is mega.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleSuffix {
    Tera,
    Giga,
    Mega,
    Kilo,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
}

impl ScaleSuffix {
    /// Matches a suffix at the start of `s`, returning it with its length in bytes.
    pub fn match_prefix(s: &str) -> Option<(ScaleSuffix, usize)> {
        for meg in ["Meg", "MEG", "meg"] {
            if s.starts_with(meg) {
                return Some((ScaleSuffix::Mega, meg.len()));
            }
        }
        let c = s.chars().next()?;
        let rest = &s[c.len_utf8()..];
        // `MΩ` and `Mohm` are what the formatter prints for megaohms
        if c == 'M' && names_ohms(rest) {
            return Some((ScaleSuffix::Mega, 1));
        }
        let suffix = match c {
            'T' => ScaleSuffix::Tera,
            'G' => ScaleSuffix::Giga,
            'K' | 'k' => ScaleSuffix::Kilo,
            'm' | 'M' => ScaleSuffix::Milli,
            'u' | 'U' | 'µ' | 'μ' => ScaleSuffix::Micro,
            'n' => ScaleSuffix::Nano,
            'p' => ScaleSuffix::Pico,
            'f' => ScaleSuffix::Femto,
            'a' => ScaleSuffix::Atto,
            _ => return None,
        };
        Some((suffix, c.len_utf8()))
    }

    pub fn scale(&self) -> f64 {
        match self {
            ScaleSuffix::Tera => 1e12,
            ScaleSuffix::Giga => 1e9,
            ScaleSuffix::Mega => 1e6,
            ScaleSuffix::Kilo => 1e3,
            ScaleSuffix::Milli => 1e-3,
            ScaleSuffix::Micro => 1e-6,
            ScaleSuffix::Nano => 1e-9,
            ScaleSuffix::Pico => 1e-12,
            ScaleSuffix::Femto => 1e-15,
            ScaleSuffix::Atto => 1e-18,
        }
    }
}

fn names_ohms(s: &str) -> bool {
    s.starts_with('Ω')
        || s.get(..3)
            .is_some_and(|unit| unit.eq_ignore_ascii_case("ohm"))
}

/// Parses engineering notation: `[-+]digits[.digits][e[-+]digits][suffix][unit]`,
/// e.g. `4.7k`, `10uF`, `1Meg`, `2.2kΩ`. Trailing unit letters are ignored.
pub fn parse_quantity(input: &str) -> Result<f64, QuantityError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(QuantityError::Empty);
    }
    let mut s = Scanner::new(input);

    let mut number_str = String::new();
    if s.eat_if('-') {
        number_str.push('-');
    } else {
        s.eat_if('+');
    }

    let int_digits = s.eat_while(|c: char| c.is_ascii_digit());
    number_str.push_str(int_digits);

    if s.eat_if('.') {
        let dot = s.cursor() - 1;
        let frac_digits = s.eat_while(|c: char| c.is_ascii_digit());
        if frac_digits.is_empty() && int_digits.is_empty() {
            return Err(QuantityError::ExpectedDigitsAfterDot { offset: dot });
        }
        number_str.push('.');
        number_str.push_str(frac_digits);
    } else if int_digits.is_empty() {
        return Err(QuantityError::InvalidStartNumeric { offset: s.cursor() });
    }

    // exponent: e|E [+-]? digits, no whitespace inside the literal
    if s.eat_if(|c: char| c == 'e' || c == 'E') {
        let exp_start = s.cursor();
        let mut exp_str = String::from("e");
        if s.eat_if('-') {
            exp_str.push('-');
        } else {
            s.eat_if('+');
        }
        let exp_digits = s.eat_while(|c: char| c.is_ascii_digit());
        if exp_digits.is_empty() {
            return Err(QuantityError::InvalidExponentDigits { offset: exp_start });
        }
        exp_str.push_str(exp_digits);
        number_str.push_str(&exp_str);
    }

    let mut value: f64 = number_str
        .parse()
        .map_err(|_| QuantityError::InvalidNumericLiteral {
            lexeme: number_str.clone(),
        })?;

    s.eat_whitespace();
    if let Some((suffix, len)) = ScaleSuffix::match_prefix(s.after()) {
        s.jump(s.cursor() + len);
        value *= suffix.scale();
    }

    // unit letters such as F, V, s, ohm or Ω
    s.eat_while(|c: char| c.is_alphabetic());
    if let Some(ch) = s.peek() {
        return Err(QuantityError::UnexpectedCharacter {
            ch,
            offset: s.cursor(),
        });
    }

    if !value.is_finite() {
        return Err(QuantityError::InvalidNumericLiteral { lexeme: number_str });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::format_resistance;
    use rstest::rstest;

    #[rstest]
    #[case("100", Some(100.0))]
    #[case("  2.5 ", Some(2.5))]
    #[case("-5", Some(-5.0))]
    #[case("1e3", Some(1000.0))]
    #[case(".5", Some(0.5))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("4.7k", None)]
    fn test_parse_number(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_number(raw), expected);
    }

    #[rstest]
    #[case("100", 100.0)]
    #[case("4.7k", 4700.0)]
    #[case("4.7K", 4700.0)]
    #[case("1Meg", 1e6)]
    #[case("2.2kΩ", 2200.0)]
    #[case("10uF", 10e-6)]
    #[case("10µF", 10e-6)]
    #[case("100n", 100e-9)]
    #[case("22p", 22e-12)]
    #[case("3.3 V", 3.3)]
    #[case("5m", 5e-3)]
    #[case("1e-6", 1e-6)]
    #[case("+1.5E2", 150.0)]
    #[case("-2", -2.0)]
    #[case("5.", 5.0)]
    #[case("1kohm", 1000.0)]
    fn test_parse_quantity(#[case] input: &str, #[case] expected: f64) {
        let value = parse_quantity(input).expect("valid quantity");
        assert!(
            (value - expected).abs() <= expected.abs() * 1e-12,
            "{input}: {value} != {expected}"
        );
    }

    #[rstest]
    #[case("", QuantityError::Empty)]
    #[case("k", QuantityError::InvalidStartNumeric { offset: 0 })]
    #[case(".", QuantityError::ExpectedDigitsAfterDot { offset: 0 })]
    #[case("1e", QuantityError::InvalidExponentDigits { offset: 2 })]
    #[case("1k!", QuantityError::UnexpectedCharacter { ch: '!', offset: 2 })]
    #[case("1.2.3", QuantityError::UnexpectedCharacter { ch: '.', offset: 3 })]
    #[case("1e400", QuantityError::InvalidNumericLiteral { lexeme: "1e400".to_string() })]
    fn test_parse_quantity_errors(#[case] input: &str, #[case] expected: QuantityError) {
        assert_eq!(parse_quantity(input), Err(expected));
    }

    #[rstest]
    #[case("2.2MΩ", 2.2e6)]
    #[case("1Mohm", 1e6)]
    #[case("1MOhm", 1e6)]
    #[case("5mΩ", 5e-3)]
    #[case("5mohm", 5e-3)]
    #[case("3M", 3e-3)]
    #[case("1MegΩ", 1e6)]
    fn test_ohm_suffixes(#[case] input: &str, #[case] expected: f64) {
        let value = parse_quantity(input).expect("valid quantity");
        assert!((value - expected).abs() <= expected * 1e-12, "{input}: {value}");
    }

    #[rstest]
    #[case(4700.0)]
    #[case(2.2e6)]
    #[case(15e6)]
    fn test_reads_formatted_resistance(#[case] ohms: f64) {
        let shown = format_resistance(ohms);
        let value = parse_quantity(&shown).expect("formatted resistance parses");
        assert!((value - ohms).abs() <= ohms * 1e-12, "{shown}: {value}");
    }

    #[test]
    fn test_error_message() {
        let err = parse_quantity("12x3").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"unexpected character '3' at offset 3");
    }
}
