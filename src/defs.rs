use std::sync::LazyLock;

use crate::die::Die;
use crate::value::DefaultFace;

macro_rules! standard_dice {
    ($($stat:ident => $func:ident($sides:literal)),* $(,)?) => {
        $(
            #[doc = concat!("Fair die with faces `1..=", $sides, "`.")]
            pub static $stat: LazyLock<Die> = LazyLock::new(|| standard($sides));

            pub fn $func() -> Die {
                $stat.clone()
            }
        )*
    };
}

standard_dice! {
    D2 => d2(2),
    D4 => d4(4),
    D6 => d6(6),
    D8 => d8(8),
    D10 => d10(10),
    D12 => d12(12),
    D20 => d20(20),
    D100 => d100(100),
}

pub static COIN: LazyLock<Die<&'static str>> =
    LazyLock::new(|| Die::uniform_unchecked(vec!["H", "T"]));

pub fn coin() -> Die<&'static str> {
    COIN.clone()
}

fn standard(sides: DefaultFace) -> Die {
    Die::uniform_unchecked((1..=sides).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dice() {
        assert_eq!(d6(), Die::numeric(6).unwrap());
        assert_eq!(d2().len(), 2);
        assert_eq!(d100().faces().last(), Some(&100));
        assert_eq!(coin().faces(), &["H", "T"]);
    }
}
