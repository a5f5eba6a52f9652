pub mod crud_form;
pub mod crud_list;
pub mod loading;
pub mod page_header;
