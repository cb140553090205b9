pub mod app_state;
pub mod pagination;
mod params;
pub mod response_type;
mod responses;
pub mod serialization;
mod server;
mod show_register;
mod show_survey;
pub mod ua;
pub mod upstream;
mod welcome;

pub(crate) use server::routes;

pub async fn serve() -> std::io::Result<()> {
    server::serve().await
}
