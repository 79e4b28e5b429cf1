pub mod read_distribution;
