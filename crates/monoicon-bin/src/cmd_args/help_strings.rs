pub static INPUT_HELP: &str = "Input file to read the icon from

Any format the decoder understands is accepted, width and height must
both be at most 255 pixels.

When omitted, the path is asked for on the terminal. An empty answer
exits without output.";

pub static RAW_HELP: &str = "Write the packed bitmap as binary instead of a C array

The file starts with width, height and two reserved zero bytes,
followed by every row with 8 pixels per byte, most significant bit first.
The last byte of a row is padded with zero bits.";
