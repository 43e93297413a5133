pub mod daabox;
