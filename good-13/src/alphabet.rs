use nom::{character::complete::satisfy, combinator::map, multi::many0, IResult};

use crate::error::GoodError;

/// Digits first, then upper-case letters. An alphabet of base `b` uses the
/// first `b` symbols.
const SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps a symbol to its digit value without checking it belongs to any
/// alphabet. Garbage in, garbage out, but never a panic.
#[inline]
pub fn value_of(symbol: char) -> u32 {
    // '0'..='9' sit at 48..=57, 'A'.. starts at 65
    let code = symbol as u32;
    if code < 58 {
        code.wrapping_sub(48)
    } else {
        code.wrapping_sub(55)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    base: u32,
}

impl Alphabet {
    pub const MAX_BASE: u32 = SYMBOLS.len() as u32;

    /// `0123456789ABC`
    pub const BASE13: Alphabet = Alphabet { base: 13 };

    pub fn new(base: u32) -> Result<Self, GoodError> {
        if base == 0 || base > Self::MAX_BASE {
            return Err(GoodError::InvalidBase(base));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn symbols(&self) -> &'static str {
        &SYMBOLS[..self.base as usize]
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols().contains(symbol)
    }

    /// Validating counterpart of [`value_of`].
    pub fn value(&self, symbol: char) -> Result<u32, GoodError> {
        if !self.contains(symbol) {
            return Err(GoodError::invalid_symbol(
                symbol,
                self.base,
                &symbol.to_string(),
                0,
            ));
        }
        Ok(value_of(symbol))
    }

    pub fn symbol(&self, value: u32) -> Result<char, GoodError> {
        self.symbols()
            .as_bytes()
            .get(value as usize)
            .map(|&byte| char::from(byte))
            .ok_or(GoodError::InvalidDigit {
                value,
                base: self.base,
            })
    }

    /// Digit values of `number`, most significant first.
    pub fn digits(&self, number: &str) -> Result<Vec<u32>, GoodError> {
        let (rest, digits) = parse_digits(*self, number)?;
        let Some(symbol) = rest.chars().next() else {
            return Ok(digits);
        };
        let offset = number.len() - rest.len();
        Err(GoodError::invalid_symbol(symbol, self.base, number, offset))
    }

    /// Positional value of `number`.
    pub fn decode(&self, number: &str) -> Result<u128, GoodError> {
        let base = u128::from(self.base);
        self.digits(number)?
            .into_iter()
            .try_fold(0u128, |acc, digit| {
                acc.checked_mul(base)?.checked_add(u128::from(digit))
            })
            .ok_or(GoodError::Overflow("decoding a number"))
    }

    /// Writes `value` in this alphabet, left-padded with zeros to at least
    /// `padding` symbols.
    pub fn encode(&self, mut value: u128, padding: usize) -> Result<String, GoodError> {
        if self.base == 1 && value > 0 {
            return Err(GoodError::Unrepresentable {
                value,
                base: self.base,
            });
        }

        let base = u128::from(self.base);
        let symbols = self.symbols().as_bytes();
        let mut reversed = Vec::with_capacity(padding.max(1));
        while value > 0 {
            reversed.push(char::from(symbols[(value % base) as usize]));
            value /= base;
        }
        while reversed.len() < padding.max(1) {
            reversed.push('0');
        }

        Ok(reversed.into_iter().rev().collect())
    }

    pub fn min_number(&self, len: usize) -> String {
        "0".repeat(len)
    }

    pub fn max_number(&self, len: usize) -> String {
        let top = &self.symbols()[self.symbols().len() - 1..];
        top.repeat(len)
    }
}

fn parse_digits(alphabet: Alphabet, input: &str) -> IResult<&str, Vec<u32>> {
    many0(map(satisfy(move |c| alphabet.contains(c)), value_of))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('0', 0)]
    #[case('7', 7)]
    #[case('9', 9)]
    #[case('A', 10)]
    #[case('B', 11)]
    #[case('C', 12)]
    fn test_value_of(#[case] symbol: char, #[case] expected: u32) -> Result<(), GoodError> {
        assert_eq!(expected, value_of(symbol));
        assert_eq!(expected, Alphabet::BASE13.value(symbol)?);
        Ok(())
    }

    #[test]
    fn test_mapping_is_a_bijection() -> Result<(), GoodError> {
        let alphabet = Alphabet::BASE13;
        assert_eq!("0123456789ABC", alphabet.symbols());
        for value in 0..alphabet.base() {
            let symbol = alphabet.symbol(value)?;
            assert_eq!(value, alphabet.value(symbol)?);
        }
        Ok(())
    }

    #[rstest]
    #[case('D')]
    #[case('c')]
    #[case('-')]
    #[case(' ')]
    fn test_value_rejects_foreign_symbols(#[case] symbol: char) {
        assert!(matches!(
            Alphabet::BASE13.value(symbol),
            Err(GoodError::InvalidSymbol { symbol: s, base: 13, .. }) if s == symbol
        ));
    }

    #[test]
    fn test_value_of_does_not_panic_on_garbage() {
        for symbol in ['\0', ' ', '/', 'z', 'é'] {
            let _ = value_of(symbol);
        }
    }

    #[test]
    fn test_symbol_out_of_range() {
        assert!(matches!(
            Alphabet::BASE13.symbol(13),
            Err(GoodError::InvalidDigit { value: 13, base: 13 })
        ));
    }

    #[test]
    fn test_digits() -> Result<(), GoodError> {
        assert_eq!(
            vec![1, 2, 10, 0, 12],
            Alphabet::BASE13.digits("12A0C")?
        );
        assert_eq!(Vec::<u32>::new(), Alphabet::BASE13.digits("")?);
        Ok(())
    }

    #[test]
    fn test_digits_points_at_bad_symbol() {
        let Err(GoodError::InvalidSymbol { symbol, span, .. }) =
            Alphabet::BASE13.digits("12D45")
        else {
            panic!("expected an invalid symbol error");
        };
        assert_eq!('D', symbol);
        assert_eq!(2, span.offset());
        assert_eq!(1, span.len());
    }

    #[rstest]
    #[case(0, 13, "0000000000000")]
    #[case(12, 1, "C")]
    #[case(13, 1, "10")]
    #[case(168, 4, "00CC")]
    #[case(0, 0, "0")]
    fn test_encode(
        #[case] value: u128,
        #[case] padding: usize,
        #[case] expected: &str,
    ) -> Result<(), GoodError> {
        assert_eq!(expected, Alphabet::BASE13.encode(value, padding)?);
        Ok(())
    }

    #[test]
    fn test_decode() -> Result<(), GoodError> {
        let alphabet = Alphabet::BASE13;
        assert_eq!(0, alphabet.decode(&alphabet.min_number(13))?);
        assert_eq!(168, alphabet.decode("CC")?);
        assert_eq!(13u128.pow(13) - 1, alphabet.decode(&alphabet.max_number(13))?);
        Ok(())
    }

    #[test]
    fn test_max_number_round_trip() -> Result<(), GoodError> {
        let alphabet = Alphabet::BASE13;
        let max = alphabet.max_number(13);
        assert_eq!("CCCCCCCCCCCCC", max);

        let decoded = alphabet.decode(&max)?;
        let encoded = alphabet.encode(decoded, 13)?;
        assert_eq!(max, encoded);
        assert_eq!(vec![12; 13], alphabet.digits(&encoded)?);
        Ok(())
    }

    #[test]
    fn test_decode_overflow() {
        let alphabet = Alphabet::new(36).unwrap();
        assert!(matches!(
            alphabet.decode(&alphabet.max_number(40)),
            Err(GoodError::Overflow(_))
        ));
    }

    #[test]
    fn test_unary_alphabet() -> Result<(), GoodError> {
        let alphabet = Alphabet::new(1)?;
        assert_eq!("000", alphabet.encode(0, 3)?);
        assert_eq!("000", alphabet.max_number(3));
        assert!(matches!(
            alphabet.encode(1, 3),
            Err(GoodError::Unrepresentable { value: 1, base: 1 })
        ));
        Ok(())
    }
}
