pub mod side;
pub mod split_after_runs;
