// The homepage indicators widget and its collaborators.

pub mod catalog;
pub mod chain_indicators;
pub mod chart;
pub mod indicator_item;
