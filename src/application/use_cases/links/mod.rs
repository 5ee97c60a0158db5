pub mod add_bulk_links;
pub mod create_file;
pub mod delete_file;
pub mod delete_line;
pub mod delete_links;
pub mod get_links;
pub mod list_files;
