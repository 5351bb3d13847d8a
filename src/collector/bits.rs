use std::ops::RangeInclusive;
use std::str::FromStr;

use super::characteristics::Characteristics;
use super::collector::Collector;
use super::error::CollectError;

/// Highest bit index a token may name (bits are stored in a `u64`)
pub const MAX_BIT_INDEX: u32 = u64::BITS;

/// One token of a bit list: a 1-based index or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitToken {
    Index(u32),
    Range(u32, u32),
}

impl BitToken {
    /// 1-based indices covered by this token
    pub fn indices(&self) -> RangeInclusive<u32> {
        match *self {
            Self::Index(i) => i..=i,
            Self::Range(start, end) => start..=end,
        }
    }

    /// Bit values contributed by this token, `1 << (i - 1)` per index
    pub fn bits(&self) -> impl Iterator<Item = u64> {
        self.indices().map(|i| 1u64 << (i - 1))
    }
}

impl FromStr for BitToken {
    type Err = CollectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.split_once('-') {
            None => parse_index(token, token).map(Self::Index),
            Some((start, end)) => {
                let start = parse_index(start, token)?;
                let end = parse_index(end, token)?;
                if start > end {
                    return Err(CollectError::InvalidRange { start, end });
                }
                Ok(Self::Range(start, end))
            }
        }
    }
}

fn parse_index(part: &str, token: &str) -> Result<u32, CollectError> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CollectError::InvalidToken(token.to_string()));
    }
    let index: u32 = part
        .parse()
        .map_err(|_| CollectError::InvalidToken(token.to_string()))?;
    if index == 0 || index > MAX_BIT_INDEX {
        return Err(CollectError::IndexOutOfRange(index));
    }
    Ok(index)
}

/// Collects bit tokens into a string of `'0'`/`'1'` with index 1 leftmost
///
/// Contributed bits are combined with bitwise OR, so repeated or overlapping
/// tokens set a bit once. The string ends at the highest set bit; no bits set
/// renders as `"0"`.
///
/// `"3"` -> `"001"`, `"1,3,5"` -> `"10101"`, `"7,1-3,5"` -> `"1110101"`
#[derive(Debug, Clone, Copy, Default)]
pub struct BitString;

impl<T: AsRef<str>> Collector<T> for BitString {
    type Acc = Vec<u64>;
    type Output = String;

    fn supply(&self) -> Vec<u64> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<u64>, item: T) -> Result<(), CollectError> {
        let token: BitToken = item.as_ref().parse()?;
        acc.extend(token.bits());
        Ok(())
    }

    fn combine(&self, mut left: Vec<u64>, right: Vec<u64>) -> Vec<u64> {
        left.extend(right);
        left
    }

    fn finish(&self, acc: Vec<u64>) -> Result<String, CollectError> {
        let flags = acc.into_iter().fold(0u64, |flags, bit| flags | bit);
        Ok(format!("{flags:b}").chars().rev().collect())
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::NONE.with_unordered()
    }
}

/// 1-based positions of every `'1'` in a bit string
pub fn indices_of(bit_string: &str) -> Vec<u32> {
    bit_string
        .chars()
        .zip(1u32..)
        .filter(|(c, _)| *c == '1')
        .map(|(_, i)| i)
        .collect()
}
