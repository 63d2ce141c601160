pub mod damage;
pub mod growth;
pub mod stats;
pub mod types;

pub use damage::{
    estimate_damage, pick_best_move, pick_best_ratio, ratio_damage, select_move_list, BestMove,
    DamageEstimate, DamageMode, Move, RatioPick,
};
pub use growth::{stat_at_level, ColorTier, COMPETITIVE_LEVEL};
pub use stats::{
    compute_derived_stats, BaseStats15, BonusAllocation, ColorSet, DerivedStats, StatBundle,
};
pub use types::{multiplier, Element, STRONG_MULTIPLIER, WEAK_MULTIPLIER};
