//! Recursive-descent productions, split by construct.

mod atoms;
mod bounds;
mod classes;
mod expressions;
