//! Active-card selection.

use crate::helix::CardTransform;

/// Index of the card with the highest depth score; the lowest index wins ties.
///
/// `None` only for an empty set. NaN scores never win.
#[inline]
pub fn resolve_active(cards: &[CardTransform]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, card) in cards.iter().enumerate() {
        let score = card.depth_score;
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Stateful resolver with an optional hysteresis band.
///
/// With a band of 0 it is exactly [`resolve_active`]. With a positive band the
/// previous winner is kept until a challenger's score exceeds the incumbent's
/// by more than the band, which damps flicker between near-tied cards.
#[derive(Clone, Debug, Default)]
pub struct ActiveResolver {
    band: f32,
    current: Option<usize>,
}

impl ActiveResolver {
    pub fn new(band: f32) -> Self {
        Self {
            band: band.max(0.0),
            current: None,
        }
    }

    #[inline]
    pub fn band(&self) -> f32 {
        self.band
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn resolve(&mut self, cards: &[CardTransform]) -> Option<usize> {
        let leader = resolve_active(cards);
        self.current = match (self.current, leader) {
            (Some(prev), Some(lead)) if self.band > 0.0 && prev != lead => {
                match cards.get(prev).map(|c| c.depth_score) {
                    Some(prev_score) if cards[lead].depth_score - prev_score <= self.band => {
                        Some(prev)
                    }
                    _ => Some(lead),
                }
            }
            (_, lead) => lead,
        };
        self.current
    }
}
