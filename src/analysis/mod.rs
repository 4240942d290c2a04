pub mod bias;
pub mod fouls;
pub mod head_to_head;
pub mod referee;
pub mod shots;

pub use bias::{referee_bias_comparison, BiasMetric, RefereeBiasComparison};
pub use fouls::{team_fouls_profile, TeamFoulsProfile};
pub use head_to_head::{head_to_head_outcome, HeadToHeadOutcome, BIG_SIX};
pub use referee::{referee_card_summary, RefereeCardRow, RefereeCardSummary, DEFAULT_MIN_MATCHES};
pub use shots::{shot_goal_correlation, PairedSeries, ShotGoalCorrelation};
