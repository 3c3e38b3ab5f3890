/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use core::types::ServerState;
use std::sync::Arc;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = Router::new()
        .route(
            "/exercises",
            get(endpoints::exercises::get).post(endpoints::exercises::post),
        )
        .route(
            "/exercises/{exercise_id}",
            get(endpoints::exercises::get_exercise)
                .put(endpoints::exercises::put_exercise)
                .delete(endpoints::exercises::delete_exercise),
        )
        .route(
            "/workouts",
            get(endpoints::workouts::get).post(endpoints::workouts::post),
        )
        .route(
            "/workouts/{workout_id}",
            get(endpoints::workouts::get_workout)
                .put(endpoints::workouts::put_workout)
                .delete(endpoints::workouts::delete_workout),
        )
        .route(
            "/workouts/{workout_id}/exercises",
            get(endpoints::workout_exercises::get).post(endpoints::workout_exercises::post),
        )
        .route(
            "/workouts/{workout_id}/exercises/{workout_exercise_id}",
            get(endpoints::workout_exercises::get_workout_exercise)
                .put(endpoints::workout_exercises::put_workout_exercise)
                .delete(endpoints::workout_exercises::delete_workout_exercise),
        )
        .route(
            "/workouts/{workout_id}/comments",
            get(endpoints::comments::get).post(endpoints::comments::post),
        )
        .route(
            "/workouts/{workout_id}/comments/{comment_id}",
            get(endpoints::comments::get_comment)
                .put(endpoints::comments::put_comment)
                .delete(endpoints::comments::delete_comment),
        )
        .route("/auth/logout", post(endpoints::auth::post_logout))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/auth/register", post(endpoints::auth::post_register))
        .route("/auth/login", post(endpoints::auth::post_login))
        .route("/auth/csrf", get(endpoints::auth::get_csrf))
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
