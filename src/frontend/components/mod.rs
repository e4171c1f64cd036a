pub mod add_person_form;
pub mod color_filter;
pub mod people_table;
pub mod toasts;
pub mod ui_components;

pub use add_person_form::AddPersonForm;
pub use color_filter::ColorFilter;
pub use people_table::PeopleTable;
pub use toasts::{ToastNotifier, Toasts};
pub use ui_components::Pagination;
