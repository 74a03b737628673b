pub mod populate;
