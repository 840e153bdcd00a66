mod chat;
mod extract;
mod scrape;

pub use chat::handle_chat_command;
pub use extract::handle_extract_command;
pub use scrape::handle_scrape_command;
