pub mod db_pool;
pub mod logging;
pub mod migrations;
pub mod server;
pub mod shutdown;
pub mod tasks;
