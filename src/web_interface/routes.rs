use std::convert::Infallible;
use std::sync::Arc;

use log::{error, info};
use serde::de::DeserializeOwned;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{reply, Filter, Rejection, Reply};

use super::types::*;
use crate::error_handling::types::StoryError;
use crate::story_management::{StoryManager, StoryRecord};

/// Request body larger than the configured limit.
#[derive(Debug)]
pub struct BodyTooLarge;

impl warp::reject::Reject for BodyTooLarge {}

/// Matches GET only; any other method is rejected as not found.
pub fn get_or_not_found() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::method()
        .and_then(|method: Method| async move {
            if method == Method::GET {
                Ok(())
            } else {
                Err(warp::reject::not_found())
            }
        })
        .untuple_one()
}

/// Reads the whole body, with or without a `Content-Length` header, and decodes it leniently.
///
/// A declared length above `limit` is refused before reading; the collected bytes are checked
/// again for chunked bodies.
fn json_body<T>(limit: u64) -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Default + Send + 'static,
{
    warp::header::optional::<u64>("content-length")
        .and_then(move |length: Option<u64>| async move {
            match length {
                Some(length) if length > limit => Err(warp::reject::custom(BodyTooLarge)),
                _ => Ok(()),
            }
        })
        .untuple_one()
        .and(warp::body::bytes())
        .and_then(move |body: Bytes| async move {
            if body.len() as u64 > limit {
                return Err(warp::reject::custom(BodyTooLarge));
            }
            Ok::<_, Rejection>(parse_lenient::<T>(&body))
        })
}

pub fn error_response(message: &str, status: StatusCode) -> Response {
    reply::with_status(
        reply::json(&ApiError {
            error: message.to_string(),
        }),
        status,
    )
    .into_response()
}

fn story_error_response(err: &StoryError) -> Response {
    match err {
        StoryError::NotFound => error_response("Story not found", StatusCode::NOT_FOUND),
        StoryError::StorageError(e) => {
            error!("Story storage failed: {}", e);
            error_response("Story storage failed", StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn started_response(result: Result<StoryRecord, StoryError>) -> Response {
    match result {
        Ok(story) => {
            let content = story.content.into_iter().next().unwrap_or_default();
            reply::with_status(
                reply::json(&StoryStartedResponse {
                    story_id: story.id,
                    content,
                    success: true,
                }),
                StatusCode::OK,
            )
            .into_response()
        }
        Err(e) => story_error_response(&e),
    }
}

fn continuation_response(result: Result<String, StoryError>) -> Response {
    match result {
        Ok(content) => reply::with_status(
            reply::json(&ContinuationResponse {
                content,
                success: true,
            }),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => story_error_response(&e),
    }
}

/// POST /api/story/start
pub fn start_story_route(
    manager: Arc<StoryManager>,
    body_limit: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "story" / "start")
        .and(warp::post())
        .and(json_body::<StartStoryRequest>(body_limit))
        .and_then(move |request: StartStoryRequest| {
            let manager = manager.clone();
            async move {
                info!("Received request with data: {:?}", request);
                let result = manager.start_story(&request.to_prompt());
                Ok::<_, Rejection>(started_response(result))
            }
        })
}

/// POST /api/story/continue
pub fn continue_story_route(
    manager: Arc<StoryManager>,
    body_limit: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "story" / "continue")
        .and(warp::post())
        .and(json_body::<ContinueStoryRequest>(body_limit))
        .and_then(move |request: ContinueStoryRequest| {
            let manager = manager.clone();
            async move {
                let result = manager.continue_story(&request.story_id, &request.user_input);
                Ok::<_, Rejection>(continuation_response(result))
            }
        })
}

/// POST /api/story/mock
pub fn mock_story_route(
    manager: Arc<StoryManager>,
    body_limit: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "story" / "mock")
        .and(warp::post())
        .and(json_body::<StartStoryRequest>(body_limit))
        .and_then(move |request: StartStoryRequest| {
            let manager = manager.clone();
            async move {
                info!("Using mock story endpoint with: {:?}", request);
                let result = manager.start_mock_story(&request.to_prompt());
                Ok::<_, Rejection>(started_response(result))
            }
        })
}

/// POST /api/story/mock/continue
pub fn mock_continue_route(
    manager: Arc<StoryManager>,
    body_limit: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "story" / "mock" / "continue")
        .and(warp::post())
        .and(json_body::<ContinueStoryRequest>(body_limit))
        .and_then(move |request: ContinueStoryRequest| {
            let manager = manager.clone();
            async move {
                let result = manager.continue_mock_story(&request.story_id, &request.user_input);
                Ok::<_, Rejection>(continuation_response(result))
            }
        })
}

/// GET /api/story/:storyId
pub fn get_story_route(
    manager: Arc<StoryManager>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "story" / String)
        .and(get_or_not_found())
        .and_then(move |story_id: String| {
            let manager = manager.clone();
            async move {
                let res = match manager.get_story(&story_id) {
                    Ok(story) => reply::with_status(
                        reply::json(&StoryHistoryResponse {
                            story_id: story.id,
                            content: story.content,
                            success: true,
                        }),
                        StatusCode::OK,
                    )
                    .into_response(),
                    Err(e) => story_error_response(&e),
                };
                Ok::<_, Rejection>(res)
            }
        })
}

/// Turns every rejection into a JSON error body.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (message, status) = if err.is_not_found() {
        ("Not found", StatusCode::NOT_FOUND)
    } else if err.find::<BodyTooLarge>().is_some() {
        ("Request body too large", StatusCode::PAYLOAD_TOO_LARGE)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        error!("Unhandled rejection: {:?}", err);
        ("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    };
    Ok(error_response(message, status))
}
