pub mod config;
pub mod db;
pub mod middleware;
pub mod routes {
    pub mod datasets;
    pub mod health;
}
pub mod services {
    pub mod health;
    pub mod initializer;
}

pub mod utils;
