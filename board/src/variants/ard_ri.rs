use crate::variants::{Layout, Variant, VariantName};
use crate::{Color, Coordinate, PieceKind};

const fn at(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

/// Ard Ri: sixteen attackers against a full ring of eight defenders
///
/// Every piece, the king included, moves a single cell at a time.
///
/// ```text
/// 7 - - A A A - -
/// 6 - - - A - - -
/// 5 A - D D D - A
/// 4 A A D K D A A
/// 3 A - D D D - A
/// 2 - - - A - - -
/// 1 - - A A A - -
///   a b c d e f g
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArdRi;
impl Variant for ArdRi {
    const NAME: VariantName = VariantName::ArdRi;
    const SIZE: u8 = 7;
    const FIRST_TURN: Color = Color::Dark;
    const MAX_DISTANCE: Option<u8> = Some(1);
    const LAYOUT: Layout = &[
        (
            PieceKind::Attacker,
            &[
                at(0, 2),
                at(0, 3),
                at(0, 4),
                at(1, 3),
                at(2, 0),
                at(3, 0),
                at(4, 0),
                at(3, 1),
                at(2, 6),
                at(3, 6),
                at(4, 6),
                at(3, 5),
                at(6, 2),
                at(6, 3),
                at(6, 4),
                at(5, 3),
            ],
        ),
        (
            PieceKind::Defender,
            &[
                at(2, 2),
                at(2, 3),
                at(2, 4),
                at(3, 2),
                at(3, 4),
                at(4, 2),
                at(4, 3),
                at(4, 4),
            ],
        ),
        (PieceKind::King, &[at(3, 3)]),
    ];
}
