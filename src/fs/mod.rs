mod chunked;
mod file;
mod utils;

pub use chunked::{read_to_size, ChunkRead, ChunkResult, ReadExit, ReadOutcome, Status};
pub use file::File;
pub use utils::{
    create_directories, current_working_directory, read_all_bytes, read_all_text,
    remove_directory, set_current_working_directory, write_all_bytes, write_all_text,
};
