pub mod farm_reader;
