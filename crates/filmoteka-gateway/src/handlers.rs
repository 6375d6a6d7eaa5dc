pub mod health;
pub mod movie;
pub mod openapi;

pub use health::health_handler;
pub use movie::{
    create_movie_handler, delete_movie_handler, get_movie_handler, list_movies_handler,
    update_movie_handler,
};
pub use openapi::{openapi_handler, redoc_handler};
