pub mod server;

pub use server::{PhayaoMcpServer, run_server};
