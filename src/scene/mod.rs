pub mod assemble;
pub mod config;
pub mod downsample;
pub mod facet_plane;
pub mod island;
pub mod lattice;
pub mod orientation;
