//! Rectangle area demonstration.
//!
//! Computes the area of a rectangular room and describes it in two sentences.
//! Works for any numeric type whose multiplication yields the same type.

#![warn(missing_docs)]

use std::{fmt::Display, ops::Mul};

/// Returns `length * width` using the type's own multiplication.
pub fn area<T: Mul<Output = T>>(length: T, width: T) -> T {
    length * width
}

/// The two report sentences for a room.
pub fn describe<T>(length: T, width: T) -> [String; 2]
where
    T: Mul<Output = T> + Display + Copy,
{
    let total = area(length, width);
    [
        format!("The room is {length}m long and {width}m wide."),
        format!("The total area is {total} square meters."),
    ]
}
