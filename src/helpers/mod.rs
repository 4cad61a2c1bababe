pub mod difference_array;
pub mod percentile;
