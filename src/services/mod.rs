pub mod shift_list;


pub use shift_list::{ShiftGrouping, ShiftListError, get_shift_list};
