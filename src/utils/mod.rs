pub mod flag;
pub mod time;
