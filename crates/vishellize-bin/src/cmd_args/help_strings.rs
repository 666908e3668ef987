pub static USAGE: &str = "vishellize [FILE]...
       vishellize [-v | --verbose] [FILE]...
       vishellize [-h | --help]";

pub static AFTER_HELP: &str = "With no FILE, JPEG data is read from standard input.
File types are chosen by extension, PNG input must be a named file.";

pub static PROBE_HELP: &str = "Print image metadata as JSON instead of rendering

Only image headers are decoded, the output contains the file name,
its size on disk, the format, dimensions and the channel layout
the image would be rendered from.";
