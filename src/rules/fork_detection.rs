use std::collections::BTreeSet;

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// Strongest fork available to one color.
///
/// `count` is the number of enemy pieces attacked from the chosen origin and
/// `classes` the distinct kinds among them. Both are empty when no origin
/// attacks two or more pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForkReport {
    pub origin: Option<Square>,
    pub count: u32,
    pub classes: BTreeSet<PieceKind>,
}

impl ForkReport {
    #[inline]
    pub fn is_fork(&self) -> bool {
        self.count >= 2
    }
}

/// Group `color`'s pseudo-legal captures by origin and report the origin that
/// hits the most enemy pieces. Kings are not counted as fork targets.
///
/// Ties on count go to the origin whose attacked classes form the larger
/// bitmask (heavier pieces rank higher), then to the lower origin square.
pub fn detect_fork(position: &Position, color: Color) -> ForkReport {
    let as_mover = position.with_side_to_move(color);
    let targets = position.enemy(color) & !position.kings(color.opposite());

    let mut hits_by_origin = [0u64; 64];
    for mv in pseudo_legal_moves(&as_mover) {
        let to_mask = 1u64 << mv.to;
        if targets & to_mask != 0 {
            hits_by_origin[mv.from as usize] |= to_mask;
        }
    }

    let mut best: Option<(u32, u8, Square)> = None;
    for (origin, &hits) in hits_by_origin.iter().enumerate() {
        let count = hits.count_ones();
        if count < 2 {
            continue;
        }
        let class_mask = class_mask(position, color.opposite(), hits);
        let better = match best {
            None => true,
            Some((best_count, best_mask, _)) => {
                (count, class_mask) > (best_count, best_mask)
            }
        };
        if better {
            best = Some((count, class_mask, origin as Square));
        }
    }

    let Some((count, _, origin)) = best else {
        return ForkReport::default();
    };

    let hits = hits_by_origin[origin as usize];
    let classes = PieceKind::NON_KING
        .into_iter()
        .filter(|&kind| position.pieces(color.opposite(), kind) & hits != 0)
        .collect();

    ForkReport {
        origin: Some(origin),
        count,
        classes,
    }
}

fn class_mask(position: &Position, victim: Color, hits: u64) -> u8 {
    PieceKind::NON_KING
        .into_iter()
        .filter(|&kind| position.pieces(victim, kind) & hits != 0)
        .fold(0u8, |acc, kind| acc | (1u8 << kind.index()))
}
