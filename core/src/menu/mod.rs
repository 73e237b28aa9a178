mod input;
mod operation;
mod outcome;
mod param;
mod session;

pub use input::{decode_line_bytes, read_line};
pub use operation::{Operation, ParamKind};
pub use outcome::Outcome;
pub use param::Param;
pub use session::{parameter_prompt, write_menu, MenuSession, SELECTION_PROMPT};
