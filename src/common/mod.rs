pub mod simple_types;
