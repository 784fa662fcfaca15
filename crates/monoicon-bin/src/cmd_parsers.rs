pub mod global_options;
