//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod new_todo_form;
mod todo_board;
mod todo_row;
mod todo_section;

pub use delete_confirm_button::DeleteConfirmButton;
pub use new_todo_form::NewTodoForm;
pub use todo_board::TodoBoard;
pub use todo_row::TodoRow;
pub use todo_section::TodoSection;
