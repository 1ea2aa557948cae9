mod input;

pub use input::{parse_move_list, InputError, MoveInput};
