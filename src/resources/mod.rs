pub mod filter_set;
