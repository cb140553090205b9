extern crate dotenv;
extern crate surveys_api;

use dotenv::dotenv;
use std::env;
use surveys_api::serving::serve;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv().ok();
        println!("Initialized .env");
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "surveys=debug,actix_web=info");
    }
    env_logger::init();

    serve().await
}
