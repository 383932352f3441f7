use crate::variants::{Layout, Variant, VariantName};
use crate::{Color, Coordinate, PieceKind};

const fn at(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

/// Brandubh: a cross of eight attackers against four defenders around the king
///
/// ```text
/// 7 - - - A - - -
/// 6 - - - A - - -
/// 5 - - - D - - -
/// 4 A A D K D A A
/// 3 - - - D - - -
/// 2 - - - A - - -
/// 1 - - - A - - -
///   a b c d e f g
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Brandubh;
impl Variant for Brandubh {
    const NAME: VariantName = VariantName::Brandubh;
    const SIZE: u8 = 7;
    const FIRST_TURN: Color = Color::Dark;
    const LAYOUT: Layout = &[
        (
            PieceKind::Attacker,
            &[
                at(0, 3),
                at(1, 3),
                at(3, 0),
                at(3, 1),
                at(3, 5),
                at(3, 6),
                at(5, 3),
                at(6, 3),
            ],
        ),
        (
            PieceKind::Defender,
            &[at(2, 3), at(3, 2), at(3, 4), at(4, 3)],
        ),
        (PieceKind::King, &[at(3, 3)]),
    ];
}
