/*! Supporting types shared across the library that don't belong to any one module: errors chief among them. */

pub mod err;
