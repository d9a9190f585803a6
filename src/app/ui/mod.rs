// src/app/ui/mod.rs
pub mod searchbar;
pub mod table;
