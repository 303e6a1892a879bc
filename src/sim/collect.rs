//! Coin pickup

use super::state::Coin;
use crate::Rect;

/// Mark every uncollected coin overlapping `player` as collected and bump
/// `score` once per coin. Returns the indices collected this call.
///
/// Collected coins stay in the slice so render order never changes.
pub fn collect_coins(player: &Rect, coins: &mut [Coin], score: &mut u32) -> Vec<usize> {
    let mut collected = Vec::new();
    for (index, coin) in coins.iter_mut().enumerate() {
        if coin.collected {
            continue;
        }
        if player.overlaps(&coin.bounds()) {
            coin.collected = true;
            *score += 1;
            collected.push(index);
        }
    }
    collected
}
