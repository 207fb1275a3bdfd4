//! Affichage dans le terminal

pub mod summary;
