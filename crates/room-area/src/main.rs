//! Prints the area report for the reference room.

use room_area::describe;

/// Room length in meters.
const ROOM_LENGTH: u32 = 5;

/// Room width in meters.
const ROOM_WIDTH: u32 = 8;

fn main() {
    for line in describe(ROOM_LENGTH, ROOM_WIDTH) {
        println!("{line}");
    }
}
