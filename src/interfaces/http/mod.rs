use crate::application::use_cases::award_intervals::analyze_award_intervals;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::db::movies::MovieRepository;
use actix_cors::Cors;
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub struct AppState {
    pub repository: Arc<MovieRepository>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    movies: i64,
    timestamp: String,
}

#[get("/")]
async fn list_movies(data: web::Data<AppState>) -> Result<HttpResponse> {
    let movies = data.repository.list_movies().await?;
    tracing::debug!("Listing {} movies", movies.len());
    Ok(HttpResponse::Ok().json(movies))
}

#[get("/movie/{movie_id}")]
async fn get_movie(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    // Parse by hand so a non-integer id is a 400, not an unmatched route
    let movie_id = raw_id.parse::<i64>().map_err(|_| {
        AppError::ValidationError(format!("movie_id must be an integer, got {:?}", raw_id))
    })?;

    let movie = data.repository.get_movie(movie_id).await?;
    tracing::debug!("Fetched movie {} (found: {})", movie_id, movie.is_some());
    Ok(HttpResponse::Ok().json(movie))
}

#[get("/movie/analysis/winners")]
async fn analyze_winners(data: web::Data<AppState>) -> Result<HttpResponse> {
    let credits = data.repository.list_winning_credits().await?;
    let analysis = analyze_award_intervals(&credits);
    tracing::debug!(
        "Computed award intervals over {} winning credits",
        credits.len()
    );
    Ok(HttpResponse::Ok().json(analysis))
}

#[get("/health")]
async fn health(data: web::Data<AppState>) -> Result<HttpResponse> {
    let movies = data.repository.count_movies().await?;
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        movies,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Register every route on the given service config. Shared between the
/// real server and in-process test apps.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_movies)
        .service(get_movie)
        .service(analyze_winners)
        .service(health);
}

pub fn start_server(
    repository: Arc<MovieRepository>,
    host: &str,
    port: u16,
) -> std::io::Result<Server> {
    let state = web::Data::new(AppState { repository });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for a local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::Movie;
    use actix_web::test;

    async fn seeded_state() -> web::Data<AppState> {
        let repository = MovieRepository::init("sqlite::memory:").await.unwrap();
        let rows = [
            (2000, "First Film", "John Smith", Some("yes")),
            (2003, "Second Film", "John Smith, Jane Doe", Some("yes")),
            (2010, "Third Film", "Jane Doe", Some("yes")),
            (2011, "Also-Ran", "Nobody", None),
        ];
        for (year, title, producers, winner) in rows {
            let mut movie = Movie::new(
                year,
                title.to_string(),
                "Studio".to_string(),
                producers.to_string(),
                winner.map(str::to_string),
            );
            repository.insert_movie(&mut movie).await.unwrap();
        }
        web::Data::new(AppState {
            repository: Arc::new(repository),
        })
    }

    #[actix_web::test]
    async fn test_root_lists_all_movies() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let movies = body.as_array().unwrap();
        assert_eq!(movies.len(), 4);
        assert_eq!(movies[0]["id"], 1);
        assert_eq!(movies[0]["title"], "First Film");
        assert_eq!(movies[3]["winner"], serde_json::Value::Null);
    }

    #[actix_web::test]
    async fn test_get_movie_by_id() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri("/movie/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Second Film");
        assert_eq!(body["year"], 2003);
    }

    #[actix_web::test]
    async fn test_get_absent_movie_returns_null() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri("/movie/999").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_null());
    }

    #[actix_web::test]
    async fn test_get_movie_rejects_non_integer_id() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri("/movie/not-a-number").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
    }

    #[actix_web::test]
    async fn test_winner_analysis_reports_intervals() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get()
            .uri("/movie/analysis/winners")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["min"][0]["producer"], "John Smith");
        assert_eq!(body["min"][0]["interval"], 3);
        assert_eq!(body["min"][0]["previousWin"], 2000);
        assert_eq!(body["min"][0]["followingWin"], 2003);
        assert_eq!(body["max"][0]["producer"], "Jane Doe");
        assert_eq!(body["max"][0]["interval"], 7);
    }

    #[actix_web::test]
    async fn test_health_reports_movie_count() {
        let state = seeded_state().await;
        let app = test::init_service(App::new().app_data(state).configure(routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["movies"], 4);
    }
}
