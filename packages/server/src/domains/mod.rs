// Domain modules

pub mod recipes;
