//! Authenticated download of the fixed cheat-sheet resource.

use crate::error::{PageError, Result as PageResult};
use crate::state::AppState;
use crate::views::extractors::current_user::CurrentUser;

use std::panic::Location;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// The one downloadable resource, relative to the assets root. Constant by
/// design: no part of the path is derived from the request.
pub const DOWNLOAD_FILE: &str = "files/cheat_sheet.pdf";

const DOWNLOAD_NAME: &str = "cheat_sheet.pdf";

/// GET|POST /download
pub async fn download(State(state): State<AppState>, _user: CurrentUser) -> PageResult<Response> {
    let path = state.assets_dir.join(DOWNLOAD_FILE);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PageError::NotFound {
                message: format!("download asset missing: {}", path.display()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => {
            return Err(PageError::Internal {
                message: format!("failed to read {}: {}", path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, String::from("application/pdf")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_NAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
