//! Stage one of the Parking Lot exercise: describe a few cars moving around.

use parking_judge::constants::INTRO_EXPECTED_TEXT;

fn main() {
    println!("{}", INTRO_EXPECTED_TEXT);
}
