pub mod add_form;
pub mod filter_bar;
pub mod header;
pub mod todo_item;
