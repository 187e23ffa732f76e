use once_cell::sync::Lazy;
use std::env;

pub static APP_HOST: Lazy<String> =
    Lazy::new(|| env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()));

pub static APP_PORT: Lazy<u16> = Lazy::new(|| {
    env::var("APP_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000)
});
